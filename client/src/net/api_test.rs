use super::*;

#[test]
fn decode_response_reads_success_body() {
    let user: AuthUser = decode_response(200, r#"{"user_id":"u1","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn decode_response_login_body_with_numeric_user_id() {
    let user: AuthUser = decode_response(200, r#"{"user_id":42,"email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.user_id, "42");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn decode_response_maps_error_status_to_rejection_with_message() {
    let err = decode_response::<AuthUser>(401, r#"{"error":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) });
}

#[test]
fn decode_response_rejection_without_json_body_has_no_message() {
    let err = decode_response::<AuthUser>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 502, message: None });
}

#[test]
fn decode_response_non_json_success_body_is_transport_failure() {
    let err = decode_response::<CommunityInsights>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn decode_prediction_ignores_status_and_keeps_backend_failure_body() {
    let result = decode_prediction(r#"{"message":"Error processing your simulation. Please try again.","score":0,"error":"boom"}"#)
        .unwrap();
    assert_eq!(result.score, Some(0.0));
    assert_eq!(result.extra.get("error"), Some(&serde_json::json!("boom")));
}

#[test]
fn decode_prediction_rejects_non_object_body() {
    assert!(matches!(decode_prediction("[1,2,3]"), Err(ApiError::Transport(_))));
    assert!(matches!(decode_prediction(""), Err(ApiError::Transport(_))));
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(302));
    assert!(!is_success(404));
}

#[tokio::test]
async fn http_backend_outside_browser_reports_transport_failure() {
    let backend = HttpBackend::new(ApiConfig::new("http://localhost:5000"));
    let err = backend.predict(&Profile::default()).await.unwrap_err();
    assert_eq!(err, ApiError::Transport("http://localhost:5000/predict: not available on server".to_owned()));
    assert!(backend.logout().await.is_err());
}
