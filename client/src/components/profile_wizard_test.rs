use super::*;

#[test]
fn wizard_starts_on_first_step() {
    let step = WizardStep::default();
    assert!(step.is_first());
    assert_eq!(step.progress_label(), "Step 1 of 3: Basic Info");
}

#[test]
fn next_is_clamped_at_last_step() {
    let last = WizardStep::default().next().next();
    assert!(last.is_last());
    assert_eq!(last.next(), last);
    assert_eq!(last.progress_label(), "Step 3 of 3: Psychometric Quiz");
}

#[test]
fn prev_is_clamped_at_first_step() {
    let first = WizardStep::default();
    assert_eq!(first.prev(), first);
    assert_eq!(first.next().prev().index(), 0);
}

#[test]
fn every_step_has_fields() {
    let mut step = WizardStep::default();
    for _ in 0..WIZARD_STEPS.len() {
        assert!(!step.fields().is_empty());
        step = step.next();
    }
}
