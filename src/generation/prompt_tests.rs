//! Tests for the prompt template

use super::*;
use proptest::prelude::*;

#[test]
fn test_prompt_embeds_description() {
    let prompt = build_prompt("organic coffee subscription for remote workers");

    assert!(prompt.contains("organic coffee subscription for remote workers"));
}

#[test]
fn test_prompt_requests_markdown() {
    let prompt = build_prompt("a bakery");

    assert!(prompt.contains("Format the response in markdown"));
}

#[test]
fn test_prompt_carries_fixed_sections() {
    let prompt = build_prompt("a bakery");

    for section in [
        "# Executive Summary",
        "# Target Audience Analysis",
        "# Marketing Objectives",
        "# Strategy",
        "## Digital Marketing Channels",
        "## Content Strategy",
        "# Budget Allocation",
        "# KPIs and Metrics",
        "# Timeline",
        "# Action Items",
    ] {
        assert!(prompt.contains(section), "missing section: {}", section);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The description must appear verbatim, whatever the user typed.
    #[test]
    fn prop_description_embedded_verbatim(description in ".*") {
        let prompt = build_prompt(&description);

        prop_assert!(prompt.contains(&description));
    }

    // The instructional text is identical across descriptions.
    #[test]
    fn prop_template_is_fixed(a in "[a-z ]{1,40}", b in "[a-z ]{1,40}") {
        let prompt_a = build_prompt(&a);
        let prompt_b = build_prompt(&b);

        // Strip the interpolated first line; the remainder must match.
        let outline_a = prompt_a.split_once('\n').map(|(_, rest)| rest.to_string());
        let outline_b = prompt_b.split_once('\n').map(|(_, rest)| rest.to_string());
        prop_assert_eq!(outline_a, outline_b);
    }
}
