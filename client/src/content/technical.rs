//! Technical documentation text for the docs panel.
//!
//! Every section shares one shape: a heading, a card grid, and an optional
//! closing bullet list. Cards carry a title, a short caption, an optional note
//! line, and a row of tags.

#[cfg(test)]
#[path = "technical_test.rs"]
mod technical_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocCard {
    pub title: &'static str,
    pub caption: &'static str,
    pub note: Option<&'static str>,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocSection {
    pub id: &'static str,
    /// Sidebar label.
    pub title: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub cards_heading: Option<&'static str>,
    pub cards: &'static [DocCard],
    pub list_heading: Option<&'static str>,
    pub list: &'static [&'static str],
}

pub const DEFAULT_SECTION: &str = "overview";

pub static SECTIONS: [DocSection; 6] = [
    DocSection {
        id: "overview",
        title: "Technical Overview",
        icon: "🏗️",
        heading: "Parallel You: AI-Generated Personalized Reality Simulator",
        subtitle: Some("First Comprehensive Personal Digital Twin for Life Simulation"),
        description: "Unlike existing digital twins that model machines or processes, Parallel You creates the first \
                      comprehensive personal digital twin for life scenario simulation with multi-domain life \
                      modeling, branching scenario engine, and hybrid prediction framework.",
        cards_heading: None,
        cards: &[],
        list_heading: Some("Key Features"),
        list: &[
            "Multi-domain life modeling: Career, health, relationships, education, finances",
            "Branching scenario engine: AI-powered alternate timeline generation",
            "Hybrid prediction framework: Statistical models + LLM narrative generation",
            "Interactive visualization: Real-time life path comparison and analysis",
            "Actionable feedback system: Personalized recommendations based on optimal outcomes",
        ],
    },
    DocSection {
        id: "architecture",
        title: "System Architecture",
        icon: "⚙️",
        heading: "Digital Twin Platform Stack Architecture",
        subtitle: None,
        description: "Following the Digital Twin Consortium's Platform Stack Architectural Framework",
        cards_heading: None,
        cards: &[
            DocCard {
                title: "Application Layer",
                caption: "Frontend, Visualization, User Interface",
                note: None,
                tags: &["Rust + Leptos (WASM)", "Server-side rendering with hydration", "Reactive signals", "CSS animations"],
            },
            DocCard {
                title: "Service Layer / APIs",
                caption: "Scenario Engine, ML Models, Authentication",
                note: None,
                tags: &["Flask/FastAPI backend", "RESTful APIs", "WebSocket for real-time features", "JWT authentication"],
            },
            DocCard {
                title: "Virtual Representation",
                caption: "Digital Twin Core, Life Models",
                note: None,
                tags: &["Life simulation engine", "ML prediction models", "Scenario branching logic", "Narrative generation"],
            },
            DocCard {
                title: "IT/OT Infrastructure",
                caption: "Cloud Services, Databases, Security",
                note: None,
                tags: &["AWS Lambda serverless", "MongoDB/DynamoDB", "Amazon SageMaker ML", "CloudFront CDN"],
            },
        ],
        list_heading: None,
        list: &[],
    },
    DocSection {
        id: "research",
        title: "Research Foundation",
        icon: "🔬",
        heading: "Scientific Research & Technical Foundation",
        subtitle: None,
        description: "Based on extensive research from leading institutions and industry standards",
        cards_heading: Some("Key Research Studies"),
        cards: &[
            DocCard {
                title: "MIT Future You Project",
                caption: "Interactive digital twin for self-reflection and life planning",
                note: Some("Impact: Proven reduction in decision anxiety through scenario exploration"),
                tags: &[],
            },
            DocCard {
                title: "Digital Twin Healthcare Applications",
                caption: "Personalized medicine and patient modeling research",
                note: Some("Impact: Foundation for personal health outcome prediction"),
                tags: &[],
            },
            DocCard {
                title: "AI Life Simulation Research",
                caption: "Automated artificial life discovery using foundation models",
                note: Some("Impact: Advanced AI techniques for life path generation"),
                tags: &[],
            },
            DocCard {
                title: "Digital Twin Maturity Models",
                caption: "IEEE and industry frameworks for digital twin implementation",
                note: Some("Impact: Industry-standard architectural guidelines"),
                tags: &[],
            },
        ],
        list_heading: Some("Technical Standards"),
        list: &[
            "IEEE Digital Twin Standards 2025 - Architecture and interoperability guidelines",
            "Digital Twin Consortium Platform Stack - Industry-standard architectural framework",
            "AWS Digital Twin Framework - Cloud implementation best practices",
            "Industrial IoT Consortium Core Models - Standardized digital twin interfaces",
        ],
    },
    DocSection {
        id: "ai_ml",
        title: "AI/ML Implementation",
        icon: "🤖",
        heading: "Artificial Intelligence & Machine Learning Pipeline",
        subtitle: None,
        description: "Advanced ML models for life outcome prediction and narrative generation",
        cards_heading: None,
        cards: &[
            DocCard {
                title: "Career Path Predictor",
                caption: "Predict salary and satisfaction outcomes",
                note: Some("Random Forest Regressor"),
                tags: &["Education level", "Experience", "Skills", "Location", "Industry trends"],
            },
            DocCard {
                title: "Health Outcome Model",
                caption: "Predict health and wellness outcomes",
                note: Some("Neural Network"),
                tags: &["Lifestyle factors", "Genetic predisposition", "Environmental factors", "Medical history"],
            },
            DocCard {
                title: "Financial Planning Engine",
                caption: "Predict financial outcomes and investment returns",
                note: Some("Time Series Analysis"),
                tags: &["Income trajectory", "Spending patterns", "Market conditions", "Life events"],
            },
            DocCard {
                title: "Narrative Generator",
                caption: "Generate personalized life stories and journal entries",
                note: Some("Large Language Model (GPT-3.5/4 or HuggingFace Transformers)"),
                tags: &["Personal context", "Predicted outcomes", "Emotional tone", "Writing style"],
            },
        ],
        list_heading: Some("Data Sources"),
        list: &[
            "Bureau of Labor Statistics (BLS) career data",
            "World Health Organization (WHO) health metrics",
            "Federal Reserve economic indicators",
            "Census Bureau demographic data",
            "Academic research databases",
        ],
    },
    DocSection {
        id: "cloud",
        title: "Cloud Infrastructure",
        icon: "☁️",
        heading: "AWS Cloud Deployment Architecture",
        subtitle: None,
        description: "Scalable, secure, and cost-effective cloud infrastructure",
        cards_heading: None,
        cards: &[
            DocCard {
                title: "AWS Lambda",
                caption: "Serverless scenario processing",
                note: None,
                tags: &["Auto-scaling", "Pay-per-use", "High availability"],
            },
            DocCard {
                title: "Amazon SageMaker",
                caption: "ML model hosting and training",
                note: None,
                tags: &["Model versioning", "A/B testing", "Auto-scaling inference"],
            },
            DocCard {
                title: "Amazon DynamoDB",
                caption: "User profiles and scenario storage",
                note: None,
                tags: &["NoSQL scalability", "Global replication", "Point-in-time recovery"],
            },
            DocCard {
                title: "Amazon S3",
                caption: "File storage (images, exports, 3D models)",
                note: None,
                tags: &["99.999999999% durability", "Global accessibility", "Cost-effective"],
            },
            DocCard {
                title: "AWS API Gateway",
                caption: "RESTful API management",
                note: None,
                tags: &["Rate limiting", "Authentication", "Monitoring"],
            },
            DocCard {
                title: "Amazon CloudFront",
                caption: "Global content delivery",
                note: None,
                tags: &["Low latency", "Global edge locations", "DDoS protection"],
            },
        ],
        list_heading: Some("Security"),
        list: &[
            "AWS IAM for access control",
            "VPC for network isolation",
            "AWS KMS for encryption",
            "AWS WAF for web application firewall",
            "AWS Shield for DDoS protection",
        ],
    },
    DocSection {
        id: "innovation",
        title: "Innovation & Impact",
        icon: "🚀",
        heading: "Scientific Contribution & Societal Impact",
        subtitle: None,
        description: "Pioneering application of digital twin technology for personal empowerment",
        cards_heading: None,
        cards: &[
            DocCard {
                title: "Scientific Contribution",
                caption: "",
                note: None,
                tags: &[
                    "First comprehensive personal digital twin for life simulation",
                    "Novel hybrid prediction framework combining statistical modeling with narrative AI",
                    "Interactive visualization techniques for complex life decision analysis",
                    "Privacy-preserving architecture for sensitive personal data",
                ],
            },
            DocCard {
                title: "Societal Impact",
                caption: "",
                note: None,
                tags: &[
                    "Democratizes access to life planning and decision support tools",
                    "Reduces anxiety through \"what-if\" scenario exploration",
                    "Enables data-driven personal growth and optimization",
                    "Bridges gap between digital twin technology and individual empowerment",
                ],
            },
            DocCard {
                title: "Market Potential",
                caption: "",
                note: None,
                tags: &[
                    "Personal development market: $13.2B (2023)",
                    "Digital twin market: $73.5B by 2030",
                    "AI in personalization: $2.8B by 2025",
                    "Target: 1M+ users in first year",
                ],
            },
        ],
        list_heading: None,
        list: &[],
    },
];

/// Section for a sidebar id, falling back to the overview.
pub fn section(id: &str) -> &'static DocSection {
    SECTIONS.iter().find(|s| s.id == id).unwrap_or(&SECTIONS[0])
}
