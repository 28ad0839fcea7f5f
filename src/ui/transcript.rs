//! Projection of the transcript into styled terminal lines.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::core::message::{Message, TranscriptRole};
use crate::ui::wrap::wrap_line;

pub const USER_LABEL: &str = "You";
pub const ASSISTANT_LABEL: &str = "Assistant";

fn label_style(role: TranscriptRole) -> Style {
    match role {
        TranscriptRole::User => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        TranscriptRole::Assistant => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn text_style(role: TranscriptRole) -> Style {
    match role {
        TranscriptRole::User => Style::default().fg(Color::Cyan),
        TranscriptRole::Assistant => Style::default(),
    }
}

/// User turns sit on the right, assistant turns on the left.
fn alignment(role: TranscriptRole) -> Alignment {
    match role {
        TranscriptRole::User => Alignment::Right,
        TranscriptRole::Assistant => Alignment::Left,
    }
}

/// Every turn becomes a label line, its content lines and a blank spacer.
/// Content is split on newlines, so indentation and blank lines survive, and
/// each line is then word-wrapped to `width` columns. One returned line is
/// one terminal row.
pub fn build_display_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();

    for msg in messages {
        let label = if msg.is_user() {
            USER_LABEL
        } else {
            ASSISTANT_LABEL
        };
        lines.push(
            Line::from(Span::styled(label, label_style(msg.role))).alignment(alignment(msg.role)),
        );

        for content_line in msg.content.split('\n') {
            let content_line = content_line.strip_suffix('\r').unwrap_or(content_line);
            for row in wrap_line(content_line, width) {
                lines.push(
                    Line::from(Span::styled(row, text_style(msg.role)))
                        .alignment(alignment(msg.role)),
                );
            }
        }

        lines.push(Line::from(""));
    }

    lines
}
