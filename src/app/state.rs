use std::sync::mpsc;
use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::clipboard;
use crate::config::Config;
use crate::generation::{GenerationPhase, GenerationState, spawn_worker};
use crate::notification::NotificationState;

/// Which pane has focus on the generator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    DescriptionInput,
    PlanPane,
}

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Generator,
    About,
}

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub generation: GenerationState,
    pub focus: Focus,
    pub screen: Screen,
    pub plan_scroll: u16,
    pub plan_viewport_height: u16,
    pub about_scroll: u16,
    pub about_viewport_height: u16,
    pub notification: NotificationState,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance and spawn the generation worker
    pub fn new(config: Config) -> Self {
        // Multi-line textarea for the business description
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(
            "Describe your business, target audience, goals, budget range, timeline, \
             and any specific marketing objectives...",
        );
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Business Description ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        // Wire the generation state to its worker thread
        let mut generation = GenerationState::new();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(&config.generation, request_rx, response_tx);
        generation.connect(request_tx, response_rx);

        Self {
            textarea,
            generation,
            focus: Focus::DescriptionInput, // Start in the description field
            screen: Screen::Generator,
            plan_scroll: 0,
            plan_viewport_height: 0, // Set during first render
            about_scroll: 0,
            about_viewport_height: 0,
            notification: NotificationState::new(),
            config,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current description text
    pub fn description(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Trigger a generation for the current description
    ///
    /// No-op for empty input or while a request is in flight.
    pub fn start_generation(&mut self) {
        let description = self.description();
        if self.generation.start(&description) {
            self.plan_scroll = 0;
        }
    }

    /// Copy the current plan to the clipboard and show the acknowledgment
    ///
    /// Copies the raw markdown exactly as returned by the model. Returns
    /// true when text was placed on the clipboard.
    pub fn copy_plan(&mut self) -> bool {
        let Some(plan) = self.generation.plan_text() else {
            return false;
        };
        let plan = plan.to_string();

        if clipboard::copy_to_clipboard(&plan, self.config.clipboard.backend).is_ok() {
            self.notification.show("Copied!");
            true
        } else {
            false
        }
    }

    /// Drain worker responses
    pub fn poll_worker(&mut self) {
        self.generation.poll();
    }

    /// Advance time-based state (copy acknowledgment revert)
    pub fn tick(&mut self, now: Instant) {
        self.notification.expire(now);
    }

    /// Line count of the plan pane content, for scroll clamping
    pub fn plan_line_count(&self) -> u16 {
        match &self.generation.phase {
            GenerationPhase::Success(text) => text.lines().count() as u16,
            GenerationPhase::Error(message) => message.lines().count() as u16,
            _ => 0,
        }
    }

    /// Maximum plan scroll position based on content and viewport
    pub fn max_plan_scroll(&self) -> u16 {
        self.plan_line_count()
            .saturating_sub(self.plan_viewport_height)
    }
}
