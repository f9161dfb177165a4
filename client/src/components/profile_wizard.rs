//! Three-step profile wizard shown in the header.
//!
//! Purely local: answers never leave the component and never reach the
//! backend.

#[cfg(test)]
#[path = "profile_wizard_test.rs"]
mod profile_wizard_test;

use std::collections::HashMap;

use leptos::prelude::*;

pub const WIZARD_STEPS: [&str; 3] = ["Basic Info", "Custom Questions", "Psychometric Quiz"];

/// `(field key, placeholder)` pairs shown on each step.
const STEP_FIELDS: [&[(&str, &str)]; 3] = [
    &[
        ("name", "Name"),
        ("age", "Age"),
        ("gender", "Gender"),
        ("location", "Location"),
        ("education", "Education"),
        ("job", "Job"),
        ("relationship", "Relationship"),
        ("health", "Health"),
        ("interests", "Interests"),
    ],
    &[
        ("lifeEvents", "Important Life Events"),
        ("values", "Values"),
        ("goals", "Goals"),
        ("regrets", "Regrets"),
    ],
    &[
        ("personality", "Personality (e.g. Big Five)"),
        ("riskTolerance", "Risk Tolerance"),
        ("ambition", "Ambition"),
    ],
];

/// Current wizard step, clamped to the available steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardStep(usize);

impl WizardStep {
    pub fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1).min(WIZARD_STEPS.len() - 1))
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self.0 == 0
    }

    pub fn is_last(self) -> bool {
        self.0 == WIZARD_STEPS.len() - 1
    }

    /// e.g. `Step 1 of 3: Basic Info`.
    pub fn progress_label(self) -> String {
        format!("Step {} of {}: {}", self.0 + 1, WIZARD_STEPS.len(), WIZARD_STEPS[self.0])
    }

    fn fields(self) -> &'static [(&'static str, &'static str)] {
        STEP_FIELDS[self.0]
    }
}

#[component]
pub fn ProfileWizard() -> impl IntoView {
    let step = RwSignal::new(WizardStep::default());
    let answers = RwSignal::new(HashMap::<&'static str, String>::new());

    view! {
        <div class="profile-wizard">
            <h2>"Profile Wizard"</h2>
            <div class="profile-wizard__progress">
                <span>{move || step.get().progress_label()}</span>
            </div>
            {move || {
                view! {
                    <div class="profile-wizard__fields">
                        {step
                            .get()
                            .fields()
                            .iter()
                            .map(|&(key, placeholder)| {
                                view! {
                                    <input
                                        class="input"
                                        name=key
                                        placeholder=placeholder
                                        prop:value=move || {
                                            answers.with(|a| a.get(key).cloned().unwrap_or_default())
                                        }
                                        on:input=move |ev| {
                                            answers.update(|a| {
                                                a.insert(key, event_target_value(&ev));
                                            });
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
            }}
            <div class="profile-wizard__actions">
                <button
                    class="btn"
                    disabled=move || step.get().is_first()
                    on:click=move |_| step.update(|s| *s = s.prev())
                >
                    "Back"
                </button>
                <Show
                    when=move || !step.get().is_last()
                    fallback=|| view! { <button class="btn">"Finish"</button> }
                >
                    <button class="btn" on:click=move |_| step.update(|s| *s = s.next())>
                        "Next"
                    </button>
                </Show>
            </div>
        </div>
    }
}
