//! Prompt template for marketing plan generation
//!
//! The template is fixed: instructional text plus the user's business
//! description embedded verbatim. The model is asked for markdown so the
//! plan pane can render it directly.

/// Section structure the model is instructed to follow
const PLAN_OUTLINE: &str = r#"Format the response in markdown with proper headings, bullet points, and sections.

Include these sections with proper markdown formatting:

# Executive Summary
Brief overview of the marketing plan

# Target Audience Analysis
- Demographics
- Psychographics
- Pain points
- Buying behavior

# Marketing Objectives
Clear, measurable goals

# Strategy
## Digital Marketing Channels
- Social media
- Content marketing
- Email marketing
- SEO
- Paid advertising

## Content Strategy
- Content types
- Publishing schedule
- Key messages

# Budget Allocation
Breakdown of marketing spend

# KPIs and Metrics
- Key performance indicators
- Success metrics
- Monitoring plan

# Timeline
Implementation schedule

# Action Items
Specific next steps"#;

/// Build the full prompt for a business description
pub fn build_prompt(description: &str) -> String {
    format!(
        "Create a comprehensive marketing plan based on this information: {description}.\n{PLAN_OUTLINE}"
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
