use super::*;

#[test]
fn chat_state_default_has_no_reply() {
    let state = ChatState::default();
    assert!(state.draft.is_empty());
    assert_eq!(state.reply, None);
    assert!(!state.sending);
}

#[test]
fn apply_reply_replaces_previous_reply() {
    let mut state = ChatState { reply: Some("old".to_owned()), sending: true, ..ChatState::default() };
    state.apply_reply("new".to_owned());
    assert_eq!(state.reply.as_deref(), Some("new"));
    assert!(!state.sending);
}

#[test]
fn empty_reply_is_stored_but_not_visible() {
    let mut state = ChatState { reply: Some("old".to_owned()), ..ChatState::default() };
    state.apply_reply(String::new());
    assert_eq!(state.reply.as_deref(), Some(""));
    assert_eq!(state.visible_reply(), None);
}
