use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let config = ApiConfig::new("http://localhost:5000");
    assert_eq!(config.endpoint("/predict"), "http://localhost:5000/predict");
    assert_eq!(config.endpoint("auth/status"), "http://localhost:5000/auth/status");
}

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com//");
    assert_eq!(config.endpoint("/ai/chat"), "https://api.example.com/ai/chat");
}

#[test]
fn blank_origin_falls_back_to_default() {
    let config = ApiConfig::new("   ");
    assert_eq!(config, ApiConfig::new(DEFAULT_API_BASE));
    assert_eq!(config.endpoint("/predict"), format!("{DEFAULT_API_BASE}/predict"));
}
