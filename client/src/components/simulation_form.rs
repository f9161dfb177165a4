//! Onboarding form for the simulate panel.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::simulation::{EDUCATION_LEVELS, HABITS, MAX_AGE, MIN_AGE, SimulationState};

#[component]
pub fn SimulationForm() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulationState>>();
    let actions = expect_context::<Actions>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.submit_simulation();
    };

    view! {
        <form class="simulation-form" on:submit=on_submit>
            <div class="form-grid">
                <div class="form-group">
                    <label>"Full Name"</label>
                    <input
                        type="text"
                        placeholder="Enter your name"
                        required
                        prop:value=move || sim.with(|s| s.profile.name.clone())
                        on:input=move |ev| sim.update(|s| s.profile.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Age"</label>
                    <input
                        type="number"
                        placeholder="Your current age"
                        min=MIN_AGE
                        max=MAX_AGE
                        required
                        prop:value=move || sim.with(|s| s.profile.age.map(|a| a.to_string()).unwrap_or_default())
                        on:input=move |ev| sim.update(|s| s.profile.set_age_input(&event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label>"Current Career"</label>
                    <input
                        type="text"
                        placeholder="What do you do now?"
                        prop:value=move || sim.with(|s| s.profile.current_career.clone())
                        on:input=move |ev| sim.update(|s| s.profile.current_career = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Dream Career"</label>
                    <input
                        type="text"
                        placeholder="What would you love to do?"
                        required
                        prop:value=move || sim.with(|s| s.profile.dream_career.clone())
                        on:input=move |ev| sim.update(|s| s.profile.dream_career = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Education Level"</label>
                    <select
                        prop:value=move || sim.with(|s| s.profile.education.clone())
                        on:change=move |ev| sim.update(|s| s.profile.education = event_target_value(&ev))
                    >
                        <option value="">"Select education level"</option>
                        {EDUCATION_LEVELS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Location"</label>
                    <input
                        type="text"
                        placeholder="City, Country"
                        prop:value=move || sim.with(|s| s.profile.location.clone())
                        on:input=move |ev| sim.update(|s| s.profile.location = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="habits-section">
                <label>"Life Habits & Activities"</label>
                <div class="habits-grid">
                    {HABITS
                        .into_iter()
                        .map(|habit| {
                            view! {
                                <label class="habit-item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || sim.with(|s| s.profile.has_habit(habit))
                                        on:change=move |_| sim.update(|s| s.profile.toggle_habit(habit))
                                    />
                                    <span>{habit}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || sim.with(|s| s.form_error.is_some())>
                <p class="form-error">
                    {move || sim.with(|s| s.form_error.map(|e| e.to_string()).unwrap_or_default())}
                </p>
            </Show>

            <button type="submit" class="simulate-btn" disabled=move || sim.with(|s| s.loading)>
                {move || sim.with(SimulationState::submit_label)}
            </button>
        </form>
    }
}
