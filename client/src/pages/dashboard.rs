//! Digital-twin dashboard with fixed showcase metrics.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

/// One dashboard card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

/// Hard-coded; the dashboard never reads backend data.
pub const METRICS: [Metric; 4] = [
    Metric { title: "Life Satisfaction", value: "87%", trend: "↗ +12% this month" },
    Metric { title: "Career Growth", value: "High", trend: "↗ Accelerating" },
    Metric { title: "Health Score", value: "92%", trend: "↗ +5% this month" },
    Metric { title: "Financial Health", value: "Good", trend: "↗ Improving" },
];

#[component]
pub fn DashboardPanel() -> impl IntoView {
    view! {
        <div class="dashboard">
            <h2>"Digital Twin Dashboard"</h2>
            <div class="dashboard-grid">
                {METRICS
                    .into_iter()
                    .map(|m| {
                        view! {
                            <div class="metric-card">
                                <h3>{m.title}</h3>
                                <div class="metric-value">{m.value}</div>
                                <div class="metric-trend">{m.trend}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
