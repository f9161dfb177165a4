//! Static "About" copy.

use leptos::prelude::*;

const MATURITY_LEVELS: [(&str, &str); 5] = [
    ("Status", "Real-time data capture and visualization"),
    ("Informative", "Historical data integration with benchmarking"),
    ("Predictive", "ML/physics-based models for future prediction"),
    ("Optimization", "Scenario testing and \"what-if\" analysis"),
    ("Autonomous", "Self-optimizing systems with automated decisions"),
];

const TECH_STACK: [(&str, [&str; 4]); 3] = [
    (
        "AI & Machine Learning",
        [
            "Advanced prediction models for career and life outcomes",
            "Natural language processing for narrative generation",
            "Multi-objective optimization algorithms",
            "Real-time scenario analysis and recommendations",
        ],
    ),
    (
        "Cloud Infrastructure",
        [
            "AWS Lambda for serverless processing",
            "Amazon SageMaker for ML model hosting",
            "DynamoDB for scalable data storage",
            "CloudFront for global content delivery",
        ],
    ),
    (
        "Frontend & Visualization",
        [
            "Rust and Leptos compiled to WebAssembly",
            "Server-side rendering with client hydration",
            "Interactive charts and timeline rendering",
            "AR/VR integration capabilities",
        ],
    ),
];

const VISION_STATS: [(&str, &str); 4] = [
    ("2024", "Project Launch"),
    ("10+", "Life Scenarios"),
    ("AI-Powered", "Predictions"),
    ("Privacy-First", "Design"),
];

const FUTURE_GOALS: [&str; 5] = [
    "Expand to 50+ interactive life scenarios",
    "Integrate wearable device data for real-time updates",
    "Develop mobile AR/VR applications",
    "Build community features for shared experiences",
    "Launch enterprise version for career counseling",
];

const RESEARCH_AREAS: [(&str, &str); 4] = [
    ("Data Science", "Advanced statistical modeling for life outcome prediction"),
    ("AI Research", "Novel approaches to personal AI and digital twin development"),
    ("UX Innovation", "Intuitive interfaces for complex life simulation"),
    ("Privacy Technology", "Privacy-preserving personal data processing"),
];

#[component]
pub fn AboutPanel() -> impl IntoView {
    view! {
        <div class="about-panel">
            <div class="about-hero">
                <h1>"About Parallel You"</h1>
                <p class="about-subtitle">"Revolutionizing Personal Decision-Making with Digital Twin Technology"</p>
            </div>
            <div class="about-sections">
                <section class="about-section">
                    <h2>"What is Parallel You?"</h2>
                    <p>
                        "Parallel You is an AI-powered platform that creates your personal digital twin, allowing \
                         you to simulate alternate life paths and explore \"what-if\" scenarios. Unlike traditional \
                         digital twins used in industry, we focus on personal life simulation, helping you make \
                         informed decisions about your career, relationships, health, and future."
                    </p>
                    <div class="highlight-box">
                        <h3>"Our Mission"</h3>
                        <p>
                            "To democratize access to life planning tools and empower individuals to make \
                             data-driven decisions about their future through AI-powered personal simulation."
                        </p>
                    </div>
                </section>
                <section class="about-section">
                    <h2>"Understanding Digital Twins"</h2>
                    <p>
                        "A digital twin is a virtual representation of a real-world entity that continuously \
                         receives data to mirror, predict, and optimize its behavior. While traditionally used for \
                         machines, factories, or city infrastructure, Parallel You applies this technology to \
                         personal life simulation."
                    </p>
                    <div class="digital-twin-levels">
                        <h3>"Digital Twin Maturity Levels"</h3>
                        <div class="levels-grid">
                            {MATURITY_LEVELS
                                .into_iter()
                                .enumerate()
                                .map(|(i, (name, text))| {
                                    view! {
                                        <div class="level-card">
                                            <div class="level-number">{i + 1}</div>
                                            <h4>{name}</h4>
                                            <p>{text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>
                <section class="about-section">
                    <h2>"Technology Stack"</h2>
                    <div class="tech-stack">
                        {TECH_STACK
                            .into_iter()
                            .map(|(category, items)| {
                                view! {
                                    <div class="tech-category">
                                        <h3>{category}</h3>
                                        <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
                <section class="about-section">
                    <h2>"Project Vision"</h2>
                    <div class="vision-stats">
                        {VISION_STATS
                            .into_iter()
                            .map(|(number, label)| {
                                view! {
                                    <div class="stat-item">
                                        <div class="stat-number">{number}</div>
                                        <div class="stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="future-goals">
                        <h3>"Future Goals"</h3>
                        <ul>{FUTURE_GOALS.into_iter().map(|goal| view! { <li>{goal}</li> }).collect_view()}</ul>
                    </div>
                </section>
                <section class="about-section">
                    <h2>"Research & Innovation"</h2>
                    <p>
                        "Parallel You is built on research in digital twin technology, personal AI systems, and \
                         life simulation."
                    </p>
                    <div class="research-areas">
                        {RESEARCH_AREAS
                            .into_iter()
                            .map(|(title, text)| {
                                view! {
                                    <div class="research-card">
                                        <h4>{title}</h4>
                                        <p>{text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
