//! Top navigation bar: one button per tab plus the login/logout button.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::auth::AuthState;
use crate::state::ui::{Tab, UiState};

/// Navigation bar, hidden on the home tab.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let actions = expect_context::<Actions>();

    let on_auth_click = move |_| {
        if auth.with_untracked(AuthState::is_authenticated) {
            actions.logout();
        } else {
            auth.update(AuthState::open_modal);
        }
    };

    view! {
        <Show when=move || ui.with(UiState::show_nav)>
            <nav class="nav">
                <div class="container">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            let is_active = move || tab != Tab::Home && ui.with(|u| u.active_tab == tab);
                            view! {
                                <button
                                    class="nav-btn"
                                    class:home-btn={tab == Tab::Home}
                                    class:active=is_active
                                    on:click=move |_| actions.select_tab(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="nav-btn auth-btn" on:click=on_auth_click>
                        {move || auth.with(AuthState::nav_label)}
                    </button>
                </div>
            </nav>
        </Show>
    }
}
