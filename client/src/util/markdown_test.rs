use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("**Focus** on *skills*");
    assert!(html.contains("<strong>Focus</strong>"));
    assert!(html.contains("<em>skills</em>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
