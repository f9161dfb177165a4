//! Chat panel: one reply, an input form, and suggestion chips.
//!
//! SYSTEM CONTEXT
//! ==============
//! Replies come from the backend and are rendered as Markdown with raw HTML
//! dropped. Only the latest reply is shown; there is no history.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::chat::{CHAT_SUGGESTIONS, ChatState};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let actions = expect_context::<Actions>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = chat.with_untracked(|c| c.draft.clone());
        actions.send_chat_message(text);
    };

    view! {
        <div class="chat">
            <h2>"Chat with Your Digital Twin"</h2>
            <p>"Have a conversation with your AI digital twin about your future possibilities."</p>
            <div class="chat-container">
                <div class="chat-messages">
                    {move || {
                        chat.with(|c| c.visible_reply().map(render_markdown_html))
                            .map(|rendered| {
                                view! {
                                    <div class="message ai-message">
                                        <div class="message-avatar">"🤖"</div>
                                        <div class="message-content">
                                            <div class="message-text" inner_html=rendered></div>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>
                <form class="chat-input-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Ask your digital twin about your future..."
                        prop:value=move || chat.with(|c| c.draft.clone())
                        on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                    />
                    <button type="submit" class="chat-send-btn" disabled=move || chat.with(|c| c.sending)>
                        "Send"
                    </button>
                </form>
            </div>
            <div class="chat-suggestions">
                <h4>"Try asking:"</h4>
                <div class="suggestion-chips">
                    {CHAT_SUGGESTIONS
                        .into_iter()
                        .map(|suggestion| {
                            view! {
                                <button
                                    type="button"
                                    class="suggestion-chip"
                                    on:click=move |_| chat.update(|c| c.draft = suggestion.to_owned())
                                >
                                    {suggestion}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
