//! Login/register modal.
//!
//! The modal stays open on failure and shows the message inline; only a
//! successful attempt closes it.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::auth::{AuthMode, AuthState};

#[component]
pub fn AuthModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = expect_context::<Actions>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match auth.with_untracked(|a| a.mode) {
            AuthMode::Login => actions.login(),
            AuthMode::Register => actions.register(),
        }
    };
    let mode = move || auth.with(|a| a.mode);

    view! {
        <Show when=move || auth.with(|a| a.modal_open)>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-header">
                        <h2>{move || mode().title()}</h2>
                        <button class="modal-close" on:click=move |_| auth.update(AuthState::close_modal)>
                            "×"
                        </button>
                    </div>
                    <form class="auth-form" on:submit=on_submit>
                        <Show when=move || mode() == AuthMode::Register>
                            <div class="form-group">
                                <label>"Full Name"</label>
                                <input
                                    type="text"
                                    placeholder="Enter your name"
                                    required
                                    prop:value=move || auth.with(|a| a.form.name.clone())
                                    on:input=move |ev| auth.update(|a| a.form.name = event_target_value(&ev))
                                />
                            </div>
                        </Show>
                        <div class="form-group">
                            <label>"Email"</label>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                required
                                prop:value=move || auth.with(|a| a.form.email.clone())
                                on:input=move |ev| auth.update(|a| a.form.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Password"</label>
                            <input
                                type="password"
                                placeholder="Enter your password"
                                required
                                prop:value=move || auth.with(|a| a.form.password.clone())
                                on:input=move |ev| auth.update(|a| a.form.password = event_target_value(&ev))
                            />
                        </div>
                        <Show when=move || auth.with(|a| a.error.is_some())>
                            <p class="auth-error">{move || auth.with(|a| a.error.clone().unwrap_or_default())}</p>
                        </Show>
                        <button type="submit" class="auth-submit-btn" disabled=move || auth.with(|a| a.pending)>
                            {move || mode().title()}
                        </button>
                        <p class="auth-switch">
                            {move || mode().switch_prompt()}
                            <button
                                type="button"
                                class="auth-switch-btn"
                                on:click=move |_| auth.update(AuthState::toggle_mode)
                            >
                                {move || mode().toggled().title()}
                            </button>
                        </p>
                    </form>
                </div>
            </div>
        </Show>
    }
}
