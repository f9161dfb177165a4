//! Navigation state: which panel is visible and which scenario is open.
//!
//! DESIGN
//! ======
//! Tabs are a closed enum rather than free-form ids so every panel match is
//! exhaustive; string ids exist only for markup and parsing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level views of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Simulate,
    Dashboard,
    Scenarios,
    Community,
    Chat,
    ArVr,
    Technical,
    About,
}

impl Tab {
    /// Every tab, in navigation-bar order.
    pub const ALL: [Tab; 9] = [
        Tab::Home,
        Tab::Simulate,
        Tab::Dashboard,
        Tab::Scenarios,
        Tab::Community,
        Tab::Chat,
        Tab::ArVr,
        Tab::Technical,
        Tab::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Simulate => "simulate",
            Tab::Dashboard => "dashboard",
            Tab::Scenarios => "scenarios",
            Tab::Community => "community",
            Tab::Chat => "chat",
            Tab::ArVr => "ar-vr",
            Tab::Technical => "technical",
            Tab::About => "about",
        }
    }

    /// Navigation-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "🏠 Home",
            Tab::Simulate => "🎯 Simulate Life",
            Tab::Dashboard => "📊 Digital Twin Dashboard",
            Tab::Scenarios => "🎭 Life Scenarios",
            Tab::Community => "👥 Community",
            Tab::Chat => "🤖 AI Chat",
            Tab::ArVr => "🥽 AR/VR",
            Tab::Technical => "📚 Technical Docs",
            Tab::About => "ℹ️ About",
        }
    }
}

/// Which panel is shown and what is selected inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    /// Id of the catalog scenario whose detail view is open.
    pub selected_scenario: Option<&'static str>,
}

impl UiState {
    /// Switch panels. Always drops the open scenario detail.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected_scenario = None;
    }

    pub fn select_scenario(&mut self, id: &'static str) {
        self.selected_scenario = Some(id);
    }

    /// The navigation bar is hidden on the landing view.
    pub fn show_nav(&self) -> bool {
        self.active_tab != Tab::Home
    }
}
