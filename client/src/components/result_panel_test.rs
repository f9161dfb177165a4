use super::*;

#[test]
fn missing_insights_render_no_rows() {
    assert!(insight_rows(None).is_empty());
}

#[test]
fn insight_rows_keep_display_order() {
    let insights = Insights {
        career_growth_potential: Some("High".to_owned()),
        time_to_success: Some("3-5 years".to_owned()),
        risk_level: None,
        confidence_level: Some("85%".to_owned()),
    };
    assert_eq!(
        insight_rows(Some(&insights)),
        vec![
            ("Growth Potential:", "High".to_owned()),
            ("Time to Success:", "3-5 years".to_owned()),
            ("Risk Level:", String::new()),
        ]
    );
}
