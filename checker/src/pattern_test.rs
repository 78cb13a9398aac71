use super::*;

#[test]
fn render_substitutes_name_literally() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    assert_eq!(
        pattern.render("Energy Family"),
        "highlightedCategory === 'Energy Family'"
    );
    assert_eq!(pattern.render("a.*b"), "highlightedCategory === 'a.*b'");
    assert_eq!(pattern.to_string(), DEFAULT_TEMPLATE);
    assert_eq!(pattern.template(), DEFAULT_TEMPLATE);
}

#[test]
fn parse_rejects_missing_slot() {
    let err = BindingPattern::parse("highlightedCategory === 'x'").expect_err("no slot");
    assert!(matches!(err, CheckError::InvalidTemplate(_)));
    assert!(err.is_invalid_input());
}

#[test]
fn parse_rejects_two_slots() {
    let err = BindingPattern::parse("{category} == {category}").expect_err("two slots");
    assert!(err.to_string().contains("more than one"));
}

#[test]
fn parse_rejects_empty_and_bare_slot() {
    assert!(BindingPattern::parse("").is_err());
    assert!(BindingPattern::parse("{category}").is_err());
}

#[test]
fn metacharacters_in_template_are_literal() {
    let pattern = BindingPattern::parse("is(\"{category}\")").expect("parse");
    let artifact = SourceArtifact::new(r#"x is("Life Path") y isX"Nope") z"#);
    let found = pattern.bindings(&artifact).collect::<Vec<_>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, "Life Path");
    assert_eq!(found[0].text, r#"is("Life Path")"#);
    assert_eq!(found[0].offset, 2);
}

#[test]
fn capture_does_not_cross_lines() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new("highlightedCategory === 'broken\n'");
    assert_eq!(pattern.bindings(&artifact).count(), 0);
}

#[test]
fn capture_is_lazy_up_to_first_suffix() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new("highlightedCategory === 'A' || 'B'");
    let found = pattern.bindings(&artifact).collect::<Vec<_>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, "A");
}

#[test]
fn empty_suffix_captures_rest_of_line() {
    let pattern = BindingPattern::parse("category: {category}").expect("parse");
    let artifact = SourceArtifact::new("category: Core Traits\ncategory: Strengths");
    let found = pattern
        .bindings(&artifact)
        .map(|b| b.category)
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["Core Traits", "Strengths"]);
}

#[test]
fn bindings_iterator_is_fused() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new("highlightedCategory === 'A'");
    let mut iter = pattern.bindings(&artifact);
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn crlf_line_endings_stay_out_of_captured_names() {
    let pattern = BindingPattern::parse("category: {category}").expect("parse");
    let artifact = SourceArtifact::new("category: Core Traits\r\ncategory: Strengths\r\n");
    let found = pattern
        .bindings(&artifact)
        .map(|b| b.category)
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["Core Traits", "Strengths"]);

    let known = crate::categories(["Core Traits"]).expect("valid names");
    let unknown = crate::unknown_bindings(&known, &artifact, &pattern);
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].category, "Strengths");
}

#[test]
fn lazy_capture_does_not_cross_crlf() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new("highlightedCategory === 'broken\r'");
    assert_eq!(pattern.bindings(&artifact).count(), 0);
}

#[test]
fn empty_name_does_not_swallow_following_text() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new("highlightedCategory === '' || other === 'Strengths'");
    assert_eq!(pattern.bindings(&artifact).count(), 0);
}

#[test]
fn empty_name_does_not_hide_later_binding() {
    let pattern = BindingPattern::parse(DEFAULT_TEMPLATE).expect("parse");
    let artifact = SourceArtifact::new(
        "highlightedCategory === '' ? a : highlightedCategory === 'Strengths'",
    );
    let found = pattern
        .bindings(&artifact)
        .map(|b| b.category)
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["Strengths"]);
}
