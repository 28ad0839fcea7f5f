use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::conversation::ConversationState;
use crate::ui::transcript::build_display_lines;
use crate::ui::view::ChatView;

const IDLE_INPUT_TITLE: &str = "Send with Enter (Alt+Enter for new line)";
const STATUS_HINT: &str = "PgUp/PgDn to scroll • Ctrl+C to quit";

pub fn ui(f: &mut Frame, view: &mut ChatView, state: &ConversationState, session_id: &str) {
    let input_area_height = view.input_rows();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(input_area_height + 2), // +2 for borders
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(view.title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(Color::Black)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(header, chunks[0]);

    // Lines arrive pre-wrapped, so the line count is the row count.
    let lines = build_display_lines(state.messages(), chunks[1].width);
    let total_rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let scroll_offset = view.scroll.update_bounds(total_rows, chunks[1].height);

    let transcript = Paragraph::new(lines).scroll((scroll_offset, 0));
    f.render_widget(transcript, chunks[1]);

    let input_title = if state.is_loading() {
        format!("Sending... {}", pulse_symbol(view))
    } else {
        IDLE_INPUT_TITLE.to_string()
    };
    let border_color = if state.is_loading() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    view.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(input_title),
    );
    f.render_widget(&view.textarea, chunks[2]);

    f.render_widget(status_line(state, session_id), chunks[3]);
}

/// Red error text when the last request failed, otherwise key hints.
fn status_line<'a>(state: &'a ConversationState, session_id: &str) -> Paragraph<'a> {
    if !state.error().is_empty() {
        return Paragraph::new(Line::from(Span::styled(
            state.error(),
            Style::default().fg(Color::Red),
        )));
    }

    let short_id: String = session_id.chars().take(8).collect();
    Paragraph::new(Line::from(vec![
        Span::styled(STATUS_HINT, Style::default().add_modifier(Modifier::DIM)),
        Span::styled(
            format!(" • session {short_id}"),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]))
}

fn pulse_symbol(view: &ChatView) -> char {
    // Two cycles per second
    let elapsed = view.pulse_start.elapsed().as_millis() as f32 / 1000.0;
    let pulse_phase = (elapsed * 2.0) % 2.0;
    let pulse_intensity = if pulse_phase < 1.0 {
        pulse_phase
    } else {
        2.0 - pulse_phase
    };

    if pulse_intensity < 0.33 {
        '○'
    } else if pulse_intensity < 0.66 {
        '◐'
    } else {
        '●'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(view: &mut ChatView, state: &ConversationState) -> String {
        render_sized(view, state, 60, 16)
    }

    fn render_sized(
        view: &mut ChatView,
        state: &ConversationState,
        width: u16,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| ui(f, view, state, "0f8e2c1a-1111-2222-3333-444455556666"))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_title_transcript_and_hint() {
        let mut view = ChatView::new("Nimdie Legal");
        let mut state = ConversationState::new();
        state.submit_start("Hello");
        state.receive_success("Hi there");

        let text = render_to_text(&mut view, &state);
        assert!(text.contains("Nimdie Legal"));
        assert!(text.contains("Hello"));
        assert!(text.contains("Hi there"));
        assert!(text.contains("session 0f8e2c1a"));
        assert!(text.contains(IDLE_INPUT_TITLE));
    }

    #[test]
    fn shows_sending_indicator_while_loading() {
        let mut view = ChatView::new("Nimdie Legal");
        let mut state = ConversationState::new();
        state.submit_start("Hello");

        let text = render_to_text(&mut view, &state);
        assert!(text.contains("Sending..."));
    }

    #[test]
    fn shows_error_instead_of_hint() {
        let mut view = ChatView::new("Nimdie Legal");
        let mut state = ConversationState::new();
        state.submit_start("Hello");
        state.receive_failure("Server Error");

        let text = render_to_text(&mut view, &state);
        assert!(text.contains("Server Error"));
        assert!(!text.contains(STATUS_HINT));
    }

    #[test]
    fn following_shows_end_of_word_wrapped_reply() {
        let mut view = ChatView::new("Nimdie Legal");
        let mut state = ConversationState::new();
        state.submit_start("Hello");
        state.receive_success(format!("{}\nFINAL-LINE", "abcdef ".repeat(20)));

        let text = render_sized(&mut view, &state, 12, 14);
        assert!(text.contains("FINAL-LINE"), "{text}");
    }

    #[test]
    fn page_down_reaches_end_of_word_wrapped_reply() {
        let mut view = ChatView::new("Nimdie Legal");
        let mut state = ConversationState::new();
        state.submit_start("Hello");
        state.receive_success(format!("{}\nFINAL-LINE", "abcdef ".repeat(20)));

        render_sized(&mut view, &state, 12, 14);
        view.scroll.page_up();
        view.scroll.page_up();
        let text = render_sized(&mut view, &state, 12, 14);
        assert!(!text.contains("FINAL-LINE"));

        for _ in 0..5 {
            view.scroll.page_down();
        }
        let text = render_sized(&mut view, &state, 12, 14);
        assert!(text.contains("FINAL-LINE"), "{text}");
    }
}
