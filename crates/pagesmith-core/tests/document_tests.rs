//! Integration tests for the prose document renderer

use pagesmith_core::document::render;
use pagesmith_core::inline;
use pagesmith_core::RenderedSection;

// ============================================================================
// Title Tests
// ============================================================================

#[test]
fn test_no_section_heading_gives_empty_title() {
    let section = render("# Page\n\nJust prose here.");
    assert_eq!(section.title, "");
    assert_eq!(section.body, vec!["<p>Just prose here.</p>"]);
}

#[test]
fn test_single_section_heading_is_trimmed() {
    let section = render("##   Why We Came   \n\nBody.");
    assert_eq!(section.title, "Why We Came");
}

#[test]
fn test_last_section_heading_wins() {
    let input = "## First\n\nOne.\n\n## Second\n\nTwo.\n\n## Third";
    let section = render(input);
    assert_eq!(section.title, "Third");
    assert_eq!(section.body, vec!["<p>One.</p>", "<p>Two.</p>"]);
}

#[test]
fn test_indented_heading_is_recognized() {
    let section = render("   ## Indented\nText");
    assert_eq!(section.title, "Indented");
    assert_eq!(section.body, vec!["<p>Text</p>"]);
}

#[test]
fn test_heading_without_space_is_prose() {
    let section = render("##NoSpace\n\n#hashtag");
    assert_eq!(section.title, "");
    assert_eq!(section.body, vec!["<p>##NoSpace</p>", "<p>#hashtag</p>"]);
}

#[test]
fn test_deeper_heading_is_prose() {
    let section = render("### Small print");
    assert_eq!(section.title, "");
    assert_eq!(section.body, vec!["<p>### Small print</p>"]);
}

// ============================================================================
// Blank Line and Paragraph Tests
// ============================================================================

#[test]
fn test_empty_input_round_trip() {
    assert_eq!(render(""), RenderedSection::default());
    assert_eq!(render("   \n\n  \t\n"), RenderedSection::default());
    assert!(render("").is_empty());
}

#[test]
fn test_heading_only_document() {
    let section = render("# Title\n\n## Section");
    assert_eq!(section.title, "Section");
    assert!(section.body.is_empty());
}

#[test]
fn test_heading_swallows_one_blank_line() {
    let section = render("# Top\n\nFirst paragraph.\n\nSecond paragraph.");
    assert_eq!(
        section.body,
        vec!["<p>First paragraph.</p>", "<p>Second paragraph.</p>"]
    );
}

#[test]
fn test_blank_line_runs_separate_paragraphs() {
    let section = render("One.\n\n\n\nTwo.\n \t \nThree.");
    assert_eq!(
        section.body,
        vec!["<p>One.</p>", "<p>Two.</p>", "<p>Three.</p>"]
    );
}

#[test]
fn test_multiline_paragraph_keeps_line_breaks() {
    let section = render("Line one\nLine two\n  Line three");
    assert_eq!(section.body, vec!["<p>Line one\nLine two\n  Line three</p>"]);
}

#[test]
fn test_paragraph_is_trimmed() {
    let section = render("## T\n\n\n    indented start\n");
    assert_eq!(section.body, vec!["<p>indented start</p>"]);
}

#[test]
fn test_crlf_input() {
    let section = render("## Title\r\n\r\nFirst.\r\n\r\nSecond.\r\n");
    assert_eq!(section.title, "Title");
    assert_eq!(section.body, vec!["<p>First.</p>", "<p>Second.</p>"]);
}

#[test]
fn test_body_html_joins_with_separator() {
    let section = render("A.\n\nB.");
    assert_eq!(section.body_html(), "<p>A.</p>\n                <p>B.</p>");
}

// ============================================================================
// Metadata Paragraph Tests
// ============================================================================

#[test]
fn test_metadata_only_paragraph_is_dropped() {
    let section = render("## Saturdays\n\naddr: 123 Main St\n\nCome by.");
    assert_eq!(section.body, vec!["<p>Come by.</p>"]);
}

#[test]
fn test_multiline_metadata_paragraph_is_dropped() {
    let input = "address: 1 Elm St\nstart_time: noon\n\nSee you there.";
    let section = render(input);
    assert_eq!(section.body, vec!["<p>See you there.</p>"]);
}

#[test]
fn test_mixed_metadata_paragraph_survives_verbatim() {
    let input = "address: 1 Elm St\nBring a friend.";
    let section = render(input);
    assert_eq!(section.body, vec!["<p>address: 1 Elm St\nBring a friend.</p>"]);
}

#[test]
fn test_capitalized_key_is_prose() {
    let section = render("Note: this is prose.");
    assert_eq!(section.body, vec!["<p>Note: this is prose.</p>"]);
}

#[test]
fn test_key_with_space_before_colon_is_prose() {
    let section = render("doors open : 7pm");
    assert_eq!(section.body, vec!["<p>doors open : 7pm</p>"]);
}

// ============================================================================
// Inline Formatting Tests
// ============================================================================

#[test]
fn test_bold() {
    let section = render("**bold**");
    assert_eq!(
        section.body,
        vec![r#"<p><strong class="text-dark-50">bold</strong></p>"#]
    );
}

#[test]
fn test_italic() {
    let section = render("*it*");
    assert_eq!(section.body, vec!["<p><em>it</em></p>"]);
}

#[test]
fn test_bold_and_italic_do_not_overlap() {
    let section = render("**a** and *b*");
    assert_eq!(
        section.body,
        vec![r#"<p><strong class="text-dark-50">a</strong> and <em>b</em></p>"#]
    );
}

#[test]
fn test_italic_inside_bold() {
    let out = inline::format("**very *much* so**");
    assert_eq!(
        out,
        r#"<strong class="text-dark-50">very <em>much</em> so</strong>"#
    );
}

#[test]
fn test_non_greedy_matching() {
    let out = inline::format("*a* b *c*");
    assert_eq!(out, "<em>a</em> b <em>c</em>");
}

#[test]
fn test_unmatched_asterisk_is_literal() {
    assert_eq!(inline::format("5 * 3"), "5 * 3");
    assert_eq!(inline::format("**"), "**");
    assert_eq!(inline::format("****"), "****");
}

#[test]
fn test_span_does_not_cross_newline() {
    let out = inline::format("*start\nend*");
    assert_eq!(out, "*start\nend*");
}

#[test]
fn test_triple_asterisks() {
    let out = inline::format("***a***");
    assert_eq!(
        out,
        r#"<strong class="text-dark-50"><em>a</strong></em>"#
    );
}

#[test]
fn test_multibyte_content() {
    let out = inline::format("*é* and **ü**");
    assert_eq!(
        out,
        r#"<em>é</em> and <strong class="text-dark-50">ü</strong>"#
    );
}

#[test]
fn test_spaced_em_dash() {
    let out = inline::format("Not a party \u{2014} a club.");
    assert_eq!(out, "Not a party &mdash; a club.");
}

#[test]
fn test_leading_em_dash() {
    let out = inline::format("\u{2014} Someone wise");
    assert_eq!(out, "&mdash; Someone wise");
}

#[test]
fn test_em_dash_without_trailing_space_is_kept() {
    let out = inline::format("2019\u{2014}2024");
    assert_eq!(out, "2019\u{2014}2024");
}

#[test]
fn test_formatting_applies_per_paragraph() {
    let section = render("We came to **build**.\n\nNot \u{2014} *talk*.");
    assert_eq!(
        section.body,
        vec![
            r#"<p>We came to <strong class="text-dark-50">build</strong>.</p>"#,
            "<p>Not &mdash; <em>talk</em>.</p>",
        ]
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_render_is_idempotent() {
    let input = "# Doc\n\n## Title\n\nOne **two** *three*.\n\nkey: value\n\nFour \u{2014} five.";
    assert_eq!(render(input), render(input));
}
