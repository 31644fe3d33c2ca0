use mdhtml::{
    render, span_to_html_node, text_to_spans_default, HtmlError, HtmlNode, InlineOptions,
    MarkdownError, ParentNode, TextSpan, TextStyle,
};

#[test]
fn paragraph_from_inline_spans() {
    let spans = text_to_spans_default("Hello **world**, see [docs](/docs)").unwrap();
    let children: Vec<HtmlNode> = spans
        .iter()
        .map(|span| span_to_html_node(span).into())
        .collect();

    let paragraph = HtmlNode::parent("p", children);
    assert_eq!(
        render(&paragraph).unwrap(),
        "<p>Hello <b>world</b>, see <a href=\"/docs\">docs</a></p>"
    );
}

#[test]
fn nested_block_tree() {
    let item = |text: &str| -> HtmlNode {
        let children = mdhtml::text_to_html_nodes(text, &InlineOptions::default()).unwrap();
        HtmlNode::parent("li", children)
    };

    let list =
        ParentNode::new("ul", vec![item("`one`"), item("_two_")]).with_attr("class", "steps");
    assert_eq!(
        list.to_html().unwrap(),
        "<ul class=\"steps\"><li><code>one</code></li><li><i>two</i></li></ul>"
    );
}

#[test]
fn images_are_split_before_links() {
    let spans = text_to_spans_default("![logo](/logo.png) [home](/)").unwrap();
    assert_eq!(
        spans,
        vec![
            TextSpan::image("logo", "/logo.png"),
            TextSpan::plain(" "),
            TextSpan::link("home", "/"),
        ]
    );
}

#[test]
fn delimiter_only_input_produces_single_styled_span() {
    let spans = text_to_spans_default("**all bold**").unwrap();
    assert_eq!(spans, vec![TextSpan::new("all bold", TextStyle::Bold)]);
}

#[test]
fn empty_input_produces_no_spans() {
    assert_eq!(text_to_spans_default("").unwrap(), vec![]);
    assert_eq!(
        render(&HtmlNode::parent("p", Vec::new())),
        Err(HtmlError::MissingChildren)
    );
}

#[test]
fn render_errors_convert_into_markdown_errors() {
    let err: MarkdownError = HtmlError::MissingTag.into();
    assert_eq!(err, MarkdownError::Html(HtmlError::MissingTag));
    assert_eq!(err.to_string(), "parent node has no tag");
}
