//! Community statistics panel.

use leptos::prelude::*;

use crate::state::community::CommunityState;
use crate::util::format::{avg_score_label, career_name, education_label};

#[component]
pub fn CommunityPanel() -> impl IntoView {
    let community = expect_context::<RwSignal<CommunityState>>();

    let stats = move || {
        community.with(|c| {
            let insights = c.insights.as_ref()?;
            Some((insights.total_simulations, c.top_careers().to_vec(), insights.education_impact.clone()))
        })
    };

    view! {
        <div class="community">
            <h2>"Community Insights"</h2>
            <p>"See what others are exploring and discover popular career paths."</p>
            {move || {
                stats()
                    .map(|(total, careers, impact)| {
                        view! {
                            <div class="community-stats">
                                <div class="stat-card">
                                    <h3>"Total Simulations"</h3>
                                    <div class="stat-number">{total}</div>
                                </div>
                                {(!careers.is_empty())
                                    .then(|| {
                                        view! {
                                            <div class="popular-careers">
                                                <h3>"Popular Career Choices"</h3>
                                                <div class="careers-list">
                                                    {careers
                                                        .iter()
                                                        .map(|career| {
                                                            view! {
                                                                <div class="career-item">
                                                                    <span class="career-name">
                                                                        {career_name(career).to_owned()}
                                                                    </span>
                                                                    <span class="career-count">
                                                                        {format!("{} simulations", career.count)}
                                                                    </span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })}
                                {(!impact.is_empty())
                                    .then(|| {
                                        view! {
                                            <div class="education-impact">
                                                <h3>"Education Impact on Success"</h3>
                                                <div class="education-stats">
                                                    {impact
                                                        .iter()
                                                        .map(|(level, score)| {
                                                            view! {
                                                                <div class="education-item">
                                                                    <span class="education-level">
                                                                        {education_label(level)}
                                                                    </span>
                                                                    <span class="education-score">
                                                                        {avg_score_label(*score)}
                                                                    </span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
