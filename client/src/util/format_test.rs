use super::*;

#[test]
fn education_label_replaces_first_dash_and_uppercases() {
    assert_eq!(education_label("high-school"), "HIGH SCHOOL");
    assert_eq!(education_label("bachelor"), "BACHELOR");
    assert_eq!(education_label("post-grad-cert"), "POST GRAD-CERT");
}

#[test]
fn avg_score_label_uses_one_decimal() {
    assert_eq!(avg_score_label(82.456), "82.5% avg score");
    assert_eq!(avg_score_label(70.0), "70.0% avg score");
}

#[test]
fn avg_score_label_rounds_halves_up() {
    assert_eq!(avg_score_label(82.25), "82.3% avg score");
    assert_eq!(avg_score_label(67.75), "67.8% avg score");
}

#[test]
fn score_label_defaults_to_zero() {
    assert_eq!(score_label(Some(81.0)), "81");
    assert_eq!(score_label(Some(72.5)), "72.5");
    assert_eq!(score_label(None), "0");
}

#[test]
fn career_name_falls_back_to_unknown() {
    let named = PopularCareer { name: Some("Engineer".to_owned()), count: 4 };
    assert_eq!(career_name(&named), "Engineer");
    assert_eq!(career_name(&PopularCareer::default()), "Unknown");
    let blank = PopularCareer { name: Some(String::new()), count: 1 };
    assert_eq!(career_name(&blank), "Unknown");
}

#[test]
fn trait_width_is_clamped() {
    assert_eq!(trait_width_style(85.0), "width: 85%");
    assert_eq!(trait_width_style(140.0), "width: 100%");
    assert_eq!(trait_width_style(-3.0), "width: 0%");
    assert_eq!(trait_width_style(f64::NAN), "width: 0%");
}

#[test]
fn scenario_title_falls_back_when_unnamed() {
    let named = RemoteScenario { name: Some("Gap year".to_owned()), ..RemoteScenario::default() };
    assert_eq!(scenario_title(&named), "Gap year");
    assert_eq!(scenario_title(&RemoteScenario::default()), "Untitled scenario");
}
