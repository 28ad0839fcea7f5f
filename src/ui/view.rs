//! Terminal-only state: the input widget, transcript scrolling and the
//! activity indicator clock. Conversation data lives in
//! [`ConversationState`](crate::core::conversation::ConversationState).

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

pub const INPUT_PLACEHOLDER: &str = "Type your message...";
const MAX_INPUT_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Edited,
    Scrolled,
    SubmitRequested,
    QuitRequested,
}

/// Transcript scroll position. Follows the newest line until the user
/// scrolls up, and resumes following once they scroll back to the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    follow: bool,
    max_offset: u16,
    page: u16,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: 0,
            page: 1,
        }
    }
}

impl ScrollState {
    /// Record the latest layout and return the offset to render with.
    pub fn update_bounds(&mut self, content_rows: u16, viewport_rows: u16) -> u16 {
        self.max_offset = content_rows.saturating_sub(viewport_rows);
        self.page = viewport_rows.max(1);
        if self.follow || self.offset > self.max_offset {
            self.offset = self.max_offset;
        }
        self.offset
    }

    pub fn page_up(&mut self) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(self.page);
    }

    pub fn page_down(&mut self) {
        self.offset = self.offset.saturating_add(self.page).min(self.max_offset);
        if self.offset == self.max_offset {
            self.follow = true;
        }
    }

    pub fn follow_latest(&mut self) {
        self.follow = true;
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }
}

pub struct ChatView {
    pub title: String,
    pub textarea: TextArea<'static>,
    pub scroll: ScrollState,
    pub pulse_start: Instant,
}

impl ChatView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            textarea: new_textarea(),
            scroll: ScrollState::default(),
            pulse_start: Instant::now(),
        }
    }

    /// Current contents of the input box.
    pub fn draft(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear_input(&mut self) {
        self.textarea = new_textarea();
    }

    /// Rows the input box needs, without borders.
    pub fn input_rows(&self) -> u16 {
        (self.textarea.lines().len() as u16).clamp(1, MAX_INPUT_ROWS)
    }

    pub fn insert_paste(&mut self, text: &str) {
        let sanitized = sanitize_pasted_text(text);
        if !sanitized.is_empty() {
            self.textarea.insert_str(sanitized);
        }
    }

    pub fn mark_request_started(&mut self) {
        self.pulse_start = Instant::now();
        self.scroll.follow_latest();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyOutcome::QuitRequested
            }
            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
            {
                self.textarea.insert_newline();
                KeyOutcome::Edited
            }
            KeyCode::Enter => KeyOutcome::SubmitRequested,
            KeyCode::PageUp => {
                self.scroll.page_up();
                KeyOutcome::Scrolled
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                KeyOutcome::Scrolled
            }
            _ => {
                self.textarea.input(tui_textarea::Input::from(key));
                KeyOutcome::Edited
            }
        }
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
    textarea
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}
