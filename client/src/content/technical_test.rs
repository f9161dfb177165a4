use super::*;

#[test]
fn six_sections_starting_with_overview() {
    assert_eq!(SECTIONS.len(), 6);
    assert_eq!(SECTIONS[0].id, DEFAULT_SECTION);
    let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids, ["overview", "architecture", "research", "ai_ml", "cloud", "innovation"]);
}

#[test]
fn section_lookup_falls_back_to_overview() {
    assert_eq!(section("cloud").title, "Cloud Infrastructure");
    assert_eq!(section("nope").id, "overview");
}

#[test]
fn every_section_has_content() {
    for s in &SECTIONS {
        assert!(!s.cards.is_empty() || !s.list.is_empty(), "{} is empty", s.id);
        assert_eq!(s.list_heading.is_some(), !s.list.is_empty(), "{} list heading", s.id);
    }
}
