//! Integration tests for bootstrapping templates from plain prompts

use pretty_assertions::assert_eq;

use prompt_stencil::{
    extract_candidates, render, scan_variables, validate_template, Value, ValueMap, VariableSpec,
    VariableType,
};

#[test]
fn test_extract_rewrites_all_marker_families() {
    let out = extract_candidates("Write a [TOPIC] essay about <AUDIENCE> for ALLCAPSWORD");
    assert_eq!(
        out.detected_variables,
        vec!["topic", "audience", "allcapsword"]
    );
    insta::assert_snapshot!(
        out.templated_content,
        @"Write a {{topic}} essay about {{audience}} for {{allcapsword}}"
    );
}

#[test]
fn test_extract_realistic_prompt() {
    let prompt = "You are a [ROLE]. Write a <FORMAT> about TOPIC_AREA \
for an AI conference. Keep it under [WORD_COUNT] words.";
    let out = extract_candidates(prompt);
    assert_eq!(
        out.detected_variables,
        vec!["role", "format", "topic_area", "word_count"]
    );
    insta::assert_snapshot!(
        out.templated_content,
        @"You are a {{role}}. Write a {{format}} about {{topic_area}} for an AI conference. Keep it under {{word_count}} words."
    );
}

#[test]
fn test_extracted_template_is_well_formed() {
    let out = extract_candidates("Explain [CONCEPT] to <AUDIENCE> using ANALOGY_SOURCE");
    let report = validate_template(&out.templated_content);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    assert_eq!(
        scan_variables(&out.templated_content),
        out.detected_variables
    );
}

#[test]
fn test_extract_then_render_bootstrap_flow() {
    // The full bootstrap: plain prompt -> template -> rendered prompt
    let out = extract_candidates("Translate [SOURCE_TEXT] into <LANGUAGE>");

    let specs: Vec<VariableSpec> = out
        .detected_variables
        .iter()
        .map(|name| VariableSpec::new(name.clone(), VariableType::Text).with_required(true))
        .collect();

    let mut values = ValueMap::new();
    values.insert("source_text".to_string(), Value::from("bonjour"));
    values.insert("language".to_string(), Value::from("English"));

    let outcome = render(&out.templated_content, &specs, &values);
    assert!(outcome.validation.is_valid());
    assert_eq!(outcome.text, "Translate bonjour into English");
}

#[test]
fn test_extract_is_idempotent_on_already_templated_text() {
    // `{{name}}` contains no caps markers, so a second pass is a no-op
    let first = extract_candidates("Hello [NAME], welcome to [PLACE]");
    let second = extract_candidates(&first.templated_content);
    assert_eq!(second.templated_content, first.templated_content);
    assert!(second.detected_variables.is_empty());
}

#[test]
fn test_extract_leaves_short_acronyms_alone() {
    let out = extract_candidates("An AI and ML overview of [FIELD]");
    assert_eq!(out.detected_variables, vec!["field"]);
    assert_eq!(out.templated_content, "An AI and ML overview of {{field}}");
}
