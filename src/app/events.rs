use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus, Screen};

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        match self.screen {
            Screen::About => self.handle_about_key(key),
            Screen::Generator => match self.focus {
                Focus::DescriptionInput => self.handle_input_key(key),
                Focus::PlanPane => self.handle_plan_key(key),
            },
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // F1: Toggle the About screen
        if key.code == KeyCode::F(1) {
            self.toggle_about();
            return true;
        }

        // Ctrl+G: Trigger plan generation
        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.screen == Screen::Generator {
                self.start_generation();
            }
            return true;
        }

        // Ctrl+Y: Copy the current plan
        if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.screen == Screen::Generator {
                self.copy_plan();
            }
            return true;
        }

        false
    }

    fn toggle_about(&mut self) {
        self.screen = match self.screen {
            Screen::Generator => Screen::About,
            Screen::About => {
                self.about_scroll = 0;
                Screen::Generator
            }
        };
    }

    /// Keys for the description input pane
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = Focus::PlanPane,
            // Everything else edits the description
            _ => {
                self.textarea.input(key);
            }
        }
    }

    /// Keys for the plan pane (scrolling the rendered markdown)
    fn handle_plan_key(&mut self, key: KeyEvent) {
        let max_scroll = self.max_plan_scroll();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.focus = Focus::DescriptionInput,
            KeyCode::Up | KeyCode::Char('k') => {
                self.plan_scroll = self.plan_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.plan_scroll = (self.plan_scroll + 1).min(max_scroll);
            }
            KeyCode::PageUp => {
                self.plan_scroll = self.plan_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.plan_scroll = (self.plan_scroll + 10).min(max_scroll);
            }
            KeyCode::Home | KeyCode::Char('g') => self.plan_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.plan_scroll = max_scroll,
            _ => {}
        }
    }

    /// Keys for the About screen
    fn handle_about_key(&mut self, key: KeyEvent) {
        let max_scroll = self.max_about_scroll();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.about_scroll = 0;
                self.screen = Screen::Generator;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.about_scroll = self.about_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.about_scroll = (self.about_scroll + 1).min(max_scroll);
            }
            KeyCode::PageUp => {
                self.about_scroll = self.about_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.about_scroll = (self.about_scroll + 10).min(max_scroll);
            }
            KeyCode::Home => self.about_scroll = 0,
            KeyCode::End => self.about_scroll = max_scroll,
            _ => {}
        }
    }

    fn max_about_scroll(&self) -> u16 {
        crate::about::line_count().saturating_sub(self.about_viewport_height)
    }
}
