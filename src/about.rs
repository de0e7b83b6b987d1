//! Static About screen
//!
//! Marketing content only; no interactive logic beyond scrolling.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

/// The About screen content
pub fn content() -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            "AI Marketing Plan Generator",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Empowering businesses with AI-crafted marketing plans."),
        Line::from(""),
        Line::from(
            "Welcome to the AI Marketing Plan Generator, where technology meets strategy \
             to help businesses create effective marketing plans. The tool leverages \
             generative AI to produce comprehensive, data-driven marketing strategies \
             that deliver results.",
        ),
        Line::from(""),
        heading("Our Mission"),
        Line::from(
            "Helping businesses create effective marketing strategies that drive growth \
             and achieve objectives efficiently.",
        ),
        Line::from(""),
        heading("Our Values"),
        Line::from(
            "We believe in data-driven strategies, effective planning, and making \
             professional marketing tools accessible to all businesses.",
        ),
        Line::from(""),
        heading("How It Works"),
        Line::from(
            "Describe your business objectives and target audience; the generator uses a \
             hosted language model to draft a marketing plan that aligns with your goals \
             and industry best practices, rendered as markdown right in the terminal.",
        ),
        Line::from(""),
        heading("Our Commitment"),
        Line::from(
            "A reliable, friendly tool for building marketing strategies, continuously \
             improved based on feedback from the community.",
        ),
    ])
}

/// Number of content lines, for scroll clamping
pub fn line_count() -> u16 {
    content().lines.len() as u16
}
