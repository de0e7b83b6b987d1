use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::about;
use crate::generation::GenerationPhase;
use crate::notification::render_notification;

use super::state::{App, Focus, Screen};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::About => self.render_about(frame),
            Screen::Generator => self.render_generator(frame),
        }
    }

    fn render_generator(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(7), // Description input
            Constraint::Min(3),    // Plan pane takes the rest
            Constraint::Length(1), // Footer with key hints
        ])
        .split(frame.area());

        self.render_input_field(frame, layout[0]);
        self.render_plan_pane(frame, layout[1]);
        self.render_footer(frame, layout[2]);

        // Copy acknowledgment overlays the footer's right edge
        render_notification(&self.notification, frame, layout[2]);
    }

    /// Render the description input (top)
    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::DescriptionInput {
            Color::Cyan // Focused
        } else {
            Color::DarkGray // Unfocused
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Business Description ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }

    /// Render the plan pane (middle)
    fn render_plan_pane(&mut self, frame: &mut Frame, area: Rect) {
        // Track the viewport height for scroll clamping
        self.plan_viewport_height = area.height.saturating_sub(2);

        let border_color = if self.focus == Focus::PlanPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Marketing Plan ")
            .border_style(Style::default().fg(border_color));

        let paragraph = match &self.generation.phase {
            GenerationPhase::Idle => Paragraph::new(
                "Describe your business above, then press Ctrl+G to generate a marketing plan.",
            )
            .style(Style::default().fg(Color::DarkGray)),
            GenerationPhase::Submitting => Paragraph::new("Creating your plan...")
                .style(Style::default().fg(Color::Yellow)),
            // Markdown-to-styled-text conversion is delegated to tui-markdown
            GenerationPhase::Success(plan) => {
                Paragraph::new(tui_markdown::from_str(plan)).scroll((self.plan_scroll, 0))
            }
            GenerationPhase::Error(message) => {
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red))
            }
        };

        frame.render_widget(paragraph.block(block), area);
    }

    /// Render the footer key hints (bottom)
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint_style = Style::default().fg(Color::DarkGray);
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let generate_hint = if self.generation.is_submitting() {
            Span::styled("generating…", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("generate", hint_style)
        };

        let line = Line::from(vec![
            Span::styled(" Ctrl+G ", key_style),
            generate_hint,
            Span::styled("  Tab ", key_style),
            Span::styled("switch pane", hint_style),
            Span::styled("  Ctrl+Y ", key_style),
            Span::styled("copy plan", hint_style),
            Span::styled("  F1 ", key_style),
            Span::styled("about", hint_style),
            Span::styled("  Ctrl+C ", key_style),
            Span::styled("quit", hint_style),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the About screen
    fn render_about(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.about_viewport_height = area.height.saturating_sub(2);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" About ")
            .title_bottom(" Esc/q back  ↑/↓ scroll ")
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(about::content())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.about_scroll, 0));

        frame.render_widget(paragraph, area);
    }
}
