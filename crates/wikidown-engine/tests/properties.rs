//! Behaviour that must hold for any input, not just hand-picked documents.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rstest::rstest;
use wikidown_engine::preview::MARKER;
use wikidown_engine::{PlainHighlighter, RenderEnv, Renderer, sanitize};

fn renderer() -> Renderer {
    Renderer::builder().highlighter(PlainHighlighter).build()
}

#[rstest]
#[case("[[[[")]
#[case("***")]
#[case("`")]
#[case("<")]
#[case("$")]
#[case("[^")]
#[case("![](")]
#[case("]]")]
#[case("|")]
#[case(":::")]
#[case(">|")]
#[case("---")]
#[case("\t\t- \t")]
#[case("\u{E000}")]
#[case(r#"<img src="x" alt=">" onerror="alert(1)">"#)]
#[case("**bold *nested* text**")]
#[case("*a **b** c*")]
#[case("__a _b_ c__")]
fn fragments_render_without_panicking(#[case] md: &str) {
    let out = renderer().render(md, &RenderEnv::default(), None);
    assert!(!out.html.starts_with("<pre>"), "{md:?} fell back to plain text");
}

#[test]
fn pathological_nesting_is_bounded() {
    let r = renderer();
    let env = RenderEnv::default();
    for md in [
        ">".repeat(1000),
        "[".repeat(5000),
        "*a ".repeat(2000),
        "- ".repeat(500) + "x",
        ":::x\n".repeat(300),
        "`".repeat(3000),
        "*".repeat(10_000),
    ] {
        let out = r.render(&md, &env, None);
        assert!(!out.html.is_empty());
    }
}

#[test]
fn unmatched_openers_scale_linearly() {
    let r = renderer();
    let env = RenderEnv::default();
    let n = 100_000;
    for md in [
        "[".repeat(n),
        "[[".repeat(n / 4) + &"]]".repeat(n / 4),
        "[^".repeat(n / 2),
        "*a ".repeat(n / 3),
        "_a ".repeat(n / 3),
        "$a ".repeat(n / 3),
        "==a ".repeat(n / 4),
        "~~a ".repeat(n / 4),
        format!("a{}b", " ".repeat(n)),
    ] {
        let started = Instant::now();
        let out = r.render(&md, &env, None);
        let elapsed = started.elapsed();
        assert!(!out.html.starts_with("<pre>"), "{} fell back", &md[..8]);
        assert!(out.html.len() >= md.trim_end().len(), "{}", &md[..8]);
        assert!(elapsed < Duration::from_secs(10), "{} took {elapsed:?}", &md[..8]);
    }
}

#[test]
fn anchors_are_unique() {
    let md = "# A\n## A\n# A-1\n### a\n# A 1\n";
    let out = renderer().render(md, &RenderEnv::default(), None);
    let anchors: Vec<_> = out.toc.iter().map(|e| e.anchor.as_str()).collect();
    let unique: HashSet<_> = anchors.iter().collect();
    assert_eq!(unique.len(), anchors.len(), "{anchors:?}");
    assert_eq!(out.toc.len(), 5);
    for (i, entry) in out.toc.iter().enumerate() {
        assert_eq!(entry.index, i);
        assert!(out.html.contains(&format!("id=\"{}\"", entry.anchor)));
    }
}

#[test]
fn every_reference_gets_one_backlink() {
    let md = "x[^n] y[^n] z[^n]\n\n[^n]: note";
    let out = renderer().render(md, &RenderEnv::default(), None);
    for r in 1..=3 {
        assert!(out.html.contains(&format!("id=\"fnref-{r}\"")));
        assert_eq!(out.html.matches(&format!("href=\"#fnref-{r}\"")).count(), 1);
    }
}

#[test]
fn renders_are_independent() {
    let r = renderer();
    let env = RenderEnv::default();
    let first = r.render("# Same\n\nA[^1]\n\n[^1]: n", &env, None);
    let second = r.render("# Same\n\nA[^1]\n\n[^1]: n", &env, None);
    assert_eq!(first, second);
    assert_eq!(second.toc[0].anchor, "same");
}

#[test]
fn output_never_leaks_the_cursor_sentinel() {
    let r = renderer();
    let env = RenderEnv::default();
    let md = "# Title\n\nsome [[Page|Other]] text\n\n```rust\nlet x = 1;\n```\n\n| a |\n|---|\n| b |\n";
    let lines = md.lines().count();
    for line in 0..=lines + 1 {
        let out = r.render(md, &env, Some(line));
        assert_eq!(out.html.matches(MARKER).count(), 1, "cursor line {line}");
        assert!(!out.html.contains(wikidown_engine::preview::SENTINEL));
        for entry in &out.toc {
            assert!(!entry.display_html.contains(wikidown_engine::preview::SENTINEL));
            assert!(!entry.raw_text.contains(wikidown_engine::preview::SENTINEL));
        }
    }
    let plain = r.render(md, &env, None);
    assert!(!plain.html.contains(MARKER));
}

#[test]
fn cursor_lands_after_the_word() {
    let out = renderer().render("first line\nsecond line", &RenderEnv::default(), Some(2));
    assert_eq!(
        out.html,
        "<p>first line\nsecond line<span id=\"cursor\"></span></p>\n"
    );
}

#[test]
fn cursor_does_not_change_anchors() {
    let out = renderer().render("# Title", &RenderEnv::default(), Some(1));
    assert_eq!(out.toc[0].anchor, "title");
    assert!(out.html.contains("Title<span id=\"cursor\"></span>"));
}

#[test]
fn cursor_inside_code_goes_before_the_block() {
    let out = renderer().render("```\ncode here\n```", &RenderEnv::default(), Some(2));
    assert!(out.html.starts_with("<span id=\"cursor\"></span><pre class=\"code copy-to-clipboard\">"));
}

#[rstest]
#[case("<div>ok</div>")]
#[case("<script>x</script>")]
#[case("<img src=x onerror=alert(1)>")]
#[case("plain & text")]
fn sanitizing_twice_changes_nothing(#[case] html: &str) {
    let once = sanitize(html);
    assert_eq!(sanitize(&once), once);
}

#[test]
fn renderer_is_shared_across_threads() {
    let r = std::sync::Arc::new(renderer());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let r = std::sync::Arc::clone(&r);
            std::thread::spawn(move || {
                let out = r.render(&format!("# T{i}\n# T{i}"), &RenderEnv::default(), None);
                out.toc.into_iter().map(|e| e.anchor).collect::<Vec<_>>()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), vec![format!("t{i}"), format!("t{i}-1")]);
    }
}
