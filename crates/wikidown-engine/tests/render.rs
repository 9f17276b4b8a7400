use pretty_assertions::assert_eq;
use rstest::rstest;
use wikidown_engine::{
    PlainHighlighter, Plugin, RenderEnv, Rendered, Renderer, TocEntry, WikilinkStyle,
};

fn renderer() -> Renderer {
    let _ = env_logger::builder().is_test(true).try_init();
    Renderer::builder().highlighter(PlainHighlighter).build()
}

fn render(md: &str) -> Rendered {
    renderer().render(md, &RenderEnv::default(), None)
}

fn html(md: &str) -> String {
    render(md).html
}

#[test]
fn heading_feeds_toc() {
    let out = render("# Hello World");
    assert_eq!(
        out.toc,
        vec![TocEntry {
            index: 0,
            display_html: "Hello World".into(),
            level: 1,
            raw_text: "Hello World".into(),
            anchor: "hello-world".into(),
        }]
    );
    assert_eq!(
        out.html,
        "<h1 id=\"hello-world\">Hello World<a href=\"#hello-world\" class=\"anchor\"><i class=\"fas fa-link\"></i></a></h1>\n"
    );
}

#[test]
fn code_span_is_a_raw_zone() {
    let out = html("`==not-mark==`");
    assert!(out.contains("<code>==not-mark==</code>"));
    assert!(!out.contains("<mark>"));
}

#[test]
fn wikilink_title_first() {
    assert!(html("[[Page A|page-a]]").contains("<a href=\"/page-a\">Page A</a>"));
}

#[test]
fn wikilink_extra_pipes_are_part_of_the_target() {
    let out = html("[[a|b|c]]");
    assert!(out.contains("<a href=\"/b%7Cc\">a</a>"), "{out}");
    assert!(!out.contains("%EE%80%80"));
}

#[test]
fn wikilink_link_first() {
    let env = RenderEnv::default().with_wikilink_style(WikilinkStyle::LinkTitle);
    let out = renderer().render("[[page-a|Page A]]", &env, None);
    assert!(out.html.contains("<a href=\"/page-a\">Page A</a>"));
}

#[rstest]
#[case("Hello <script>alert(1)</script> there")]
#[case("<script>alert(1)</script>")]
fn script_is_escaped(#[case] md: &str) {
    let out = html(md);
    assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{out}");
    assert!(!out.contains("<script>"));
}

#[rstest]
#[case(r#"text <img src="x" alt=">" onerror="alert(1)"> more"#, "<img")]
#[case(r#"<div title=">" onclick="alert(1)">x</div>"#, "<div")]
#[case("<div title='>' onclick='alert(1)'>x</div>", "<div")]
fn quoted_gt_does_not_hide_event_handlers(#[case] md: &str, #[case] tag: &str) {
    let out = html(md);
    assert!(!out.contains(tag), "{out}");
    assert!(out.contains("onclick") || out.contains("onerror"), "{out}");
}

#[test]
fn duplicate_headings_get_suffixes() {
    let anchors: Vec<_> = render("# Intro\n\n# Intro")
        .toc
        .into_iter()
        .map(|e| e.anchor)
        .collect();
    assert_eq!(anchors, vec!["intro", "intro-1"]);
}

#[test]
fn unknown_language_is_literal() {
    let out = html("```unknownlang123\nfn x() {}\n```");
    assert_eq!(out, "<pre class=\"code\">unknownlang123\nfn x() {}</pre>\n");
}

#[test]
fn fence_without_language() {
    assert_eq!(
        html("```\n<b>\n```"),
        "<pre class=\"code copy-to-clipboard\"><code>&lt;b&gt;</code></pre>\n"
    );
}

#[test]
fn mark_and_strikethrough() {
    assert_eq!(html("==hi== ~~bye~~"), "<p><mark>hi</mark> <del>bye</del></p>\n");
}

#[test]
fn emphasis_levels() {
    assert_eq!(
        html("*a* **b** ***c***"),
        "<p><em>a</em> <strong>b</strong> <strong><em>c</em></strong></p>\n"
    );
}

#[rstest]
#[case("**bold *nested* text**", "<p><strong>bold <em>nested</em> text</strong></p>\n")]
#[case("*a **b** c*", "<p><em>a <strong>b</strong> c</em></p>\n")]
#[case("__a _b_ c__", "<p><strong>a <em>b</em> c</strong></p>\n")]
#[case("**a*", "<p>*<em>a</em></p>\n")]
fn nested_emphasis(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(html(md), expected);
}

#[test]
fn table_alignment() {
    let out = html("| a | b |\n|:--|--:|\n| 1 | 2 |");
    assert_eq!(
        out,
        "<table>\n<thead>\n<tr>\n<th style=\"text-align:left\">a</th>\n<th style=\"text-align:right\">b</th>\n</tr>\n</thead>\n<tbody>\n<tr>\n<td style=\"text-align:left\">1</td>\n<td style=\"text-align:right\">2</td>\n</tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn wikilink_pipe_inside_table_cell() {
    let out = html("| a | b |\n|---|---|\n| [[T|L]] | x |");
    assert!(out.contains("<td><a href=\"/L\">T</a></td>"), "{out}");
    assert!(!out.contains('\u{E000}'));
}

#[test]
fn tight_list() {
    assert_eq!(html("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn ordered_list_start() {
    assert_eq!(html("3. c\n4. d"), "<ol start=\"3\">\n<li>c</li>\n<li>d</li>\n</ol>\n");
}

#[test]
fn nested_list() {
    assert_eq!(
        html("1. A\n    - B"),
        "<ol>\n<li>A<ul>\n<li>B</li>\n</ul>\n</li>\n</ol>\n"
    );
}

#[test]
fn task_list_items() {
    assert_eq!(
        html("- [x] done\n- [ ] todo"),
        "<ul>\n<li class=\"task-list-item\"><input class=\"task-list-item-checkbox\" type=\"checkbox\" checked/>done</li>\n<li class=\"task-list-item\"><input class=\"task-list-item-checkbox\" type=\"checkbox\"/>todo</li>\n</ul>\n"
    );
}

#[test]
fn alert_block() {
    assert_eq!(
        html("> [!NOTE]\n> text"),
        "<div class=\"quote-alert quote-alert-note\">\n<div class=\"quote-alert-header\"><i class=\"fas fa-info-circle\"></i> Note</div>\n<p>text</p>\n</div>\n"
    );
}

#[test]
fn unknown_alert_is_a_quote() {
    assert_eq!(
        html("> [!DANGER]\n> text"),
        "<blockquote>\n<p>[!DANGER]\ntext</p>\n</blockquote>\n"
    );
}

#[test]
fn spoiler_block() {
    assert_eq!(
        html(">! secret"),
        "<div class=\"spoiler\">\n<button class=\"spoiler-button\" type=\"button\"><i class=\"far fa-eye\"></i></button>\n<p>secret</p>\n</div>\n"
    );
}

#[test]
fn fold_block_with_summary() {
    assert_eq!(
        html(">| # Title\n>| body"),
        "<details class=\"fold\">\n<summary>Title</summary>\n<p>body</p>\n</details>\n"
    );
}

#[test]
fn fold_block_default_summary() {
    assert!(html(">| body").contains("<summary>Details</summary>"));
}

#[test]
fn fancy_block_with_title() {
    assert_eq!(
        html("::: info\n# Head\ncontent\n:::"),
        "<div class=\"alert alert-primary\" role=\"alert\">\n<h4 class=\"alert-heading\">Head</h4>\n<p>content</p>\n</div>\n"
    );
}

#[test]
fn fancy_blocks_nest() {
    let out = html(":::danger\nouter\n:::success\ninner\n:::\nafter\n:::");
    assert_eq!(
        out,
        "<div class=\"alert alert-danger\" role=\"alert\">\n<p>outer</p>\n<div class=\"alert alert-success\" role=\"alert\">\n<p>inner</p>\n</div>\n<p>after</p>\n</div>\n"
    );
}

#[test]
fn footnote_with_two_references() {
    assert_eq!(
        html("Text[^1] again[^1].\n\n[^1]: The note."),
        concat!(
            "<p>Text<sup class=\"footnote-ref\" id=\"fnref-1\"><a href=\"#fn-1\">1</a></sup>",
            " again<sup class=\"footnote-ref\" id=\"fnref-2\"><a href=\"#fn-1\">1</a></sup>.</p>\n",
            "<hr/><section class=\"footnotes\">\n<ol>\n",
            "<li id=\"fn-1\"><p><i class=\"fas fa-long-arrow-alt-up\"></i> ",
            "<a class=\"footnote\" href=\"#fnref-1\">a</a> ",
            "<a class=\"footnote\" href=\"#fnref-2\">b</a> The note.</p>\n</li>\n",
            "</ol>\n</section>\n",
        )
    );
}

#[test]
fn undefined_footnote_is_text() {
    assert_eq!(html("Missing[^x]"), "<p>Missing[^x]</p>\n");
}

#[test]
fn footnote_defined_after_use_and_cited_from_a_note() {
    let out = html("A[^a]\n\n[^a]: See[^b]\n[^b]: Deep");
    assert!(out.contains("<li id=\"fn-1\">"));
    assert!(out.contains("<li id=\"fn-2\">"));
    assert!(out.contains("href=\"#fnref-2\""));
}

#[test]
fn frontmatter_title_becomes_heading() {
    let out = render("---\ntitle: Page\n---\nBody");
    assert_eq!(
        out.html,
        "<h1 id=\"page\">Page<a href=\"#page\" class=\"anchor\"><i class=\"fas fa-link\"></i></a></h1>\n<p>Body</p>\n"
    );
    assert_eq!(out.toc.len(), 1);
}

#[test]
fn frontmatter_with_more_keys_is_shown() {
    let out = html("---\ntitle: Page\ntags: x\n---\n# Own");
    assert!(out.starts_with(
        "<details id=\"frontmatter\" class=\"frontmatter\">\n<summary>Frontmatter</summary>\n<pre>title: Page\ntags: x</pre>\n</details>\n<h1 id=\"own\">"
    ));
    assert!(!out.contains("id=\"page\""));
}

#[test]
fn malformed_frontmatter_still_consumed() {
    let out = html("---\ntitle: [oops\n---\nBody");
    assert!(out.contains("<pre>title: [oops</pre>"));
    assert!(out.contains("<p>Body</p>"));
}

#[test]
fn inline_math_sets_requirement() {
    let out = render("$x$ and $$E=mc^2$$");
    assert_eq!(out.html, "<p>\\(x\\) and \\[E=mc^2\\]</p>\n");
    assert!(out.requirements.requires_mathjax);
    assert!(!out.requirements.requires_mermaid);
}

#[test]
fn code_span_math() {
    assert_eq!(html("`$a<b$`"), "<p>\\(a&lt;b\\)</p>\n");
}

#[test]
fn prices_are_not_math() {
    let out = render("costs $5 and $6");
    assert_eq!(out.html, "<p>costs $5 and $6</p>\n");
    assert!(!out.requirements.requires_mathjax);
}

#[test]
fn math_fence() {
    let out = render("```math\na+b\n\nc\n```");
    assert_eq!(out.html, "<div class=\"math\">\\[a+b\\]\n\\[c\\]</div>\n");
    assert!(out.requirements.requires_mathjax);
}

#[test]
fn mermaid_fence() {
    let out = render("```mermaid\ngraph TD\nA-->B\n```");
    assert_eq!(out.html, "<pre class=\"mermaid\">graph TD\nA--&gt;B\n</pre>\n");
    assert!(out.requirements.requires_mermaid);
}

#[test]
fn mermaid_literal_newlines() {
    assert!(html("```mermaid\nA[\"one\\ntwo\"]\n```").contains("one<br/>two"));
}

#[rstest]
#[case("[x](javascript:alert(1))")]
#[case("[x](vbscript:msgbox)")]
#[case("[x](data:text/html;base64,PHNjcmlwdD4=)")]
#[case("<javascript:alert(1)>")]
fn harmful_links_are_replaced(#[case] md: &str) {
    assert!(html(md).contains("href=\"#harmful-link\""));
}

#[test]
fn image_with_title() {
    assert_eq!(
        html("![alt](/img.png \"T\")"),
        "<p><img src=\"/img.png\" class=\"img-fluid\" alt=\"alt\" title=\"T\"></p>\n"
    );
}

#[test]
fn relative_link_resolves_under_page() {
    let env = RenderEnv::default().with_page_url("/Docs/Page");
    let out = renderer().render("[c](./Child)", &env, None);
    assert_eq!(out.html, "<p><a href=\"/Docs/Page/Child\">c</a></p>\n");
}

#[test]
fn missing_pages_are_flagged() {
    let r = Renderer::builder()
        .highlighter(PlainHighlighter)
        .page_index(|page: &str| page == "/Exists")
        .build();
    let out = r.render("[[Exists]] [[Missing]]", &RenderEnv::default(), None);
    assert_eq!(
        out.html,
        "<p><a href=\"/Exists\">Exists</a> <a href=\"/Missing\" class=\"notfound\">Missing</a></p>\n"
    );
}

#[test]
fn autolinks() {
    assert_eq!(
        html("<https://example.com> <me@example.com>"),
        "<p><a href=\"https://example.com\">https://example.com</a> <a href=\"mailto:me@example.com\">me@example.com</a></p>\n"
    );
}

#[test]
fn hard_breaks() {
    assert_eq!(html("a  \nb\\\nc"), "<p>a<br />\nb<br />\nc</p>\n");
}

#[test]
fn entities_are_kept() {
    assert_eq!(html("&copy; & co"), "<p>&copy; &amp; co</p>\n");
}

#[test]
fn block_quote_and_break() {
    assert_eq!(
        html("> quoted\nlazy\n\n---"),
        "<blockquote>\n<p>quoted\nlazy</p>\n</blockquote>\n<hr />\n"
    );
}

#[test]
fn setext_heading() {
    let out = render("Title\n=====");
    assert_eq!(out.toc[0].level, 1);
    assert_eq!(out.toc[0].anchor, "title");
}

#[test]
fn plugins_can_be_disabled() {
    let r = Renderer::builder()
        .highlighter(PlainHighlighter)
        .plugins([Plugin::Tables])
        .build();
    let out = r.render("[[Page]] >! x", &RenderEnv::default(), None);
    assert_eq!(out.html, "<p>[[Page]] &gt;! x</p>\n");
}

#[test]
fn heading_toc_strips_markup() {
    let out = render("## head *em* `code`");
    let entry = &out.toc[0];
    assert_eq!(entry.display_html, "head <em>em</em> <code>code</code>");
    assert_eq!(entry.raw_text, "head em code");
    assert_eq!(entry.anchor, "head-em-code");
    assert_eq!(entry.level, 2);
}
