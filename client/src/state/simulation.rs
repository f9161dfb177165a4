//! Onboarding form and the last simulation result.
//!
//! SYSTEM CONTEXT
//! ==============
//! The simulate panel edits `profile`; submitting snapshots it into exactly
//! one `/predict` call, and the outcome (real or fallback) lands in `result`.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use crate::net::types::{Profile, SimulationResult};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

/// Habits offered as toggles on the form.
pub const HABITS: [&str; 8] = [
    "Exercise regularly",
    "Read daily",
    "Meditate",
    "Learn new skills",
    "Network actively",
    "Save money",
    "Travel frequently",
    "Volunteer",
];

/// `(value, label)` pairs for the education select.
pub const EDUCATION_LEVELS: [(&str, &str); 6] = [
    ("high-school", "High School"),
    ("associate", "Associate Degree"),
    ("bachelor", "Bachelor's Degree"),
    ("master", "Master's Degree"),
    ("phd", "PhD/Doctorate"),
    ("other", "Other"),
];

/// Why a profile cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter an age between 18 and 100.")]
    AgeOutOfRange,
    #[error("Please enter your dream career.")]
    MissingDreamCareer,
}

impl Profile {
    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProfileError`] found, in form order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }
        match self.age {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
            _ => return Err(ProfileError::AgeOutOfRange),
        }
        if self.dream_career.trim().is_empty() {
            return Err(ProfileError::MissingDreamCareer);
        }
        Ok(())
    }

    /// Add the habit if absent, remove it if present.
    pub fn toggle_habit(&mut self, habit: &str) {
        if let Some(pos) = self.habits.iter().position(|h| h == habit) {
            self.habits.remove(pos);
        } else {
            self.habits.push(habit.to_owned());
        }
    }

    pub fn has_habit(&self, habit: &str) -> bool {
        self.habits.iter().any(|h| h == habit)
    }

    /// Parse the age input; anything that is not a whole number clears it.
    pub fn set_age_input(&mut self, raw: &str) {
        self.age = raw.trim().parse().ok();
    }
}

/// Simulate-panel state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
    pub profile: Profile,
    pub result: Option<SimulationResult>,
    pub loading: bool,
    pub form_error: Option<ProfileError>,
}

impl SimulationState {
    /// Start a submission. Returns the profile to send, or `None` when the
    /// form is invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Profile> {
        if self.loading {
            return None;
        }
        if let Err(err) = self.profile.validate() {
            self.form_error = Some(err);
            return None;
        }
        self.form_error = None;
        self.loading = true;
        Some(self.profile.clone())
    }

    /// Store the outcome of a submission and re-enable the form.
    pub fn finish_submit(&mut self, result: SimulationResult) {
        self.result = Some(result);
        self.loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "🔄 Simulating..." } else { "🚀 Simulate My Future" }
    }

    /// Name used to identify the chat user.
    pub fn chat_user_id(&self) -> String {
        let name = self.profile.name.trim();
        if name.is_empty() { "anonymous".to_owned() } else { name.to_owned() }
    }
}
