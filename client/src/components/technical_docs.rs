//! Technical documentation panel with a local section selector.

use leptos::prelude::*;

use crate::content::technical::{DEFAULT_SECTION, DocCard, DocSection, SECTIONS, section};

#[component]
pub fn TechnicalDocs() -> impl IntoView {
    let active = RwSignal::new(DEFAULT_SECTION);

    view! {
        <div class="technical-documentation">
            <div class="docs-header">
                <h2>"Technical Documentation & Research Foundation"</h2>
                <p>"Comprehensive technical implementation based on industry standards and academic research"</p>
            </div>
            <div class="docs-layout">
                <div class="docs-sidebar">
                    <nav class="docs-nav">
                        {SECTIONS
                            .iter()
                            .map(|s| {
                                view! {
                                    <button
                                        class="nav-item"
                                        class:active=move || active.get() == s.id
                                        on:click=move |_| active.set(s.id)
                                    >
                                        <span class="nav-icon">{s.icon}</span>
                                        <span class="nav-title">{s.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div class="docs-content">
                    {move || section_view(section(active.get()))}
                </div>
            </div>
        </div>
    }
}

fn section_view(s: &'static DocSection) -> impl IntoView {
    view! {
        <div class="section-content">
            <h3>{s.heading}</h3>
            {s.subtitle.map(|sub| view! { <p class="section-subtitle">{sub}</p> })}
            <p class="section-description">{s.description}</p>
            {s.cards_heading.map(|h| view! { <h4>{h}</h4> })}
            <div class="doc-cards">{s.cards.iter().map(card_view).collect_view()}</div>
            {s.list_heading
                .map(|h| {
                    view! {
                        <div class="doc-list">
                            <h4>{h}</h4>
                            <ul>{s.list.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
                        </div>
                    }
                })}
        </div>
    }
}

fn card_view(card: &'static DocCard) -> impl IntoView {
    view! {
        <div class="doc-card">
            <h4>{card.title}</h4>
            {(!card.caption.is_empty()).then(|| view! { <p>{card.caption}</p> })}
            {card.note.map(|note| view! { <div class="doc-card__note">{note}</div> })}
            <div class="doc-card__tags">
                {card.tags.iter().map(|tag| view! { <span class="tech-tag">{*tag}</span> }).collect_view()}
            </div>
        </div>
    }
}
