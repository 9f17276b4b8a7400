use wikidown_engine::Grammar;
use wikidown_engine::parsing::{parse_text, snapshot::outline};
use wikidown_engine::state::RenderState;

fn fixture_outline(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let mut state = RenderState::default();
    outline(&parse_text(&md, &Grammar::default(), &mut state))
}

#[test]
fn fixture_containers() {
    insta::assert_snapshot!(fixture_outline("containers"), @r#"
    alert_block TIP
      paragraph "Use tables:"
      table 2x1
    fancy_block "warning" "Careful"
      list bullet tight
        list_item [x]
          paragraph "done"
        list_item [ ]
          paragraph "todo"
    "#);
}

#[test]
fn fixture_raw_zones() {
    insta::assert_snapshot!(fixture_outline("raw_zones"), @r##"
    frontmatter keys=1
    heading h1 "Raw zones" (frontmatter)
    paragraph "Text with `[[not a link]]` inline."
    code_block "python" "# not a heading\n"
    code_block "" "indented code\n"
    "##);
}

#[test]
fn fixture_folds() {
    insta::assert_snapshot!(fixture_outline("folds"), @r#"
    fold_block "More"
      paragraph "hidden *text*"
    spoiler_block
      paragraph "spoiler"
    "#);
}

#[test]
fn base_grammar_leaves_extensions_as_text() {
    let mut state = RenderState::default();
    let blocks = parse_text(">! not a spoiler\n\n::: info\n", &Grammar::base(), &mut state);
    insta::assert_snapshot!(outline(&blocks), @r#"
    block_quote
      paragraph "! not a spoiler"
    paragraph "::: info"
    "#);
}

#[test]
fn footnote_definitions_render_nothing_in_place() {
    let mut state = RenderState::default();
    let blocks = parse_text("Body\n\n[^1]: Note\n    more\n", &Grammar::default(), &mut state);
    insta::assert_snapshot!(outline(&blocks), @r#"paragraph "Body""#);
    assert!(state.footnotes.is_defined("1"));
}

#[test]
fn footnote_definition_ends_at_shallower_line() {
    let mut state = RenderState::default();
    let md = "[^1]: first\n    second\n\n    third\n  shallow\n";
    let blocks = parse_text(md, &Grammar::default(), &mut state);
    assert_eq!(state.footnotes.definition("1"), Some("first\nsecond\n\nthird"));
    assert!(outline(&blocks).contains("shallow"));
}

#[test]
fn nested_containers_stop_at_the_limit() {
    let mut state = RenderState::default();
    let md = "> ".repeat(100) + "deep";
    let blocks = parse_text(&md, &Grammar::default(), &mut state);
    let text = outline(&blocks);
    assert_eq!(text.lines().filter(|l| l.contains("block_quote")).count(), 16);
    assert!(text.contains("deep"));
}
