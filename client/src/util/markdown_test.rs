use super::*;

#[test]
fn renders_emphasis_and_links() {
    let html = render_markdown_html("We're open **late**. See the [menu](/menu).");
    assert!(html.contains("<strong>late</strong>"));
    assert!(html.contains(r#"<a href="/menu">menu</a>"#));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn splits_paragraphs() {
    let html = render_markdown_html("one\n\ntwo");
    assert_eq!(html.matches("<p>").count(), 2);
}
