//! Prompt card rendering widget.
//!
//! The prompt card stacks a status line, the free-text input, the
//! quick-action hints, and the outcome of the last send inside a single
//! bordered block.

use clawdeck_config::PromptConfig;
use clawdeck_gateway::StatusSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::PromptState;

/// Rows the prompt card needs, including its borders.
pub const PROMPT_CARD_HEIGHT: u16 = 7;

/// Renders the prompt card to the buffer.
///
/// While a send is pending the input row is dimmed and marked as
/// sending; the card ignores input in that state, so the rendering
/// mirrors it. The last send's outcome is shown as a `Sent:` or
/// `Error:` line under the input.
///
/// # Examples
///
/// ```
/// use clawdeck_config::PromptConfig;
/// use clawdeck_gateway::StatusSnapshot;
/// use clawdeck_tui::PromptState;
/// use clawdeck_tui::widgets::render_prompt_card;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 7);
/// let mut buf = Buffer::empty(area);
///
/// render_prompt_card(
///     &PromptState::default(),
///     &StatusSnapshot::offline(),
///     &PromptConfig::default(),
///     true,
///     area,
///     &mut buf,
/// );
/// ```
pub fn render_prompt_card(
    prompt: &PromptState,
    snapshot: &StatusSnapshot,
    config: &PromptConfig,
    is_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", config.title), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    let content = vec![
        status_line(snapshot),
        input_line(prompt, is_focused),
        quick_actions_line(&config.quick_actions, &config.board_url),
        outcome_line(prompt),
        last_response_line(snapshot),
    ];

    Paragraph::new(content).render(inner, buf);
}

/// The online/offline summary row.
fn status_line(snapshot: &StatusSnapshot) -> Line<'static> {
    let (dot, dot_color) = if snapshot.online {
        ("●", Color::Green)
    } else {
        ("○", Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(format!("{dot} "), Style::default().fg(dot_color)),
        Span::styled(
            snapshot.state_label(),
            Style::default().fg(Color::White),
        ),
    ];

    if snapshot.online {
        spans.push(Span::styled(
            format!("  sessions: {}", snapshot.active_sessions),
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(uptime) = snapshot.uptime_secs {
            spans.push(Span::styled(
                format!("  up: {}", format_uptime(uptime)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(tokens) = snapshot.total_tokens {
            spans.push(Span::styled(
                format!("  tokens: {tokens}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Line::from(spans)
}

/// The free-text input row, dimmed while a send is pending.
fn input_line(prompt: &PromptState, is_focused: bool) -> Line<'_> {
    if prompt.pending {
        return Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                prompt.input.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "  sending…",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
    }

    let mut spans = vec![
        Span::styled("> ", Style::default().fg(Color::Green)),
        Span::styled(prompt.input.as_str(), Style::default().fg(Color::White)),
    ];
    if is_focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

/// Function-key hints for the configured quick actions plus the board link.
fn quick_actions_line(actions: &[String], board_url: &str) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    for (i, action) in actions.iter().take(3).enumerate() {
        spans.push(Span::styled(format!("F{}", i + 1), key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }
    if !board_url.is_empty() {
        spans.push(Span::styled("o", key_style));
        spans.push(Span::styled(" Open board ↗", text_style));
    }

    Line::from(spans)
}

/// The `Sent:` / `Error:` outcome of the last send, `Ready` before any.
fn outcome_line(prompt: &PromptState) -> Line<'_> {
    match prompt.status_line.as_deref() {
        Some(status) => {
            let color = if status.starts_with("Error:") {
                Color::Red
            } else {
                Color::Green
            };
            Line::from(Span::styled(status, Style::default().fg(color)))
        }
        None => Line::from(Span::styled("Ready", Style::default().fg(Color::DarkGray))),
    }
}

fn last_response_line(snapshot: &StatusSnapshot) -> Line<'_> {
    match snapshot.last_response.as_deref() {
        Some(text) => Line::from(vec![
            Span::styled("last: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text, Style::default().fg(Color::Gray)),
        ]),
        None => Line::from(""),
    }
}

/// Formats seconds as a compact `1h02m` style duration.
fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Helper to convert buffer to string for testing.
    fn buffer_to_string(buf: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    result.push_str(cell.symbol());
                }
            }
            result.push('\n');
        }
        result
    }

    fn render(prompt: &PromptState, snapshot: &StatusSnapshot) -> String {
        let area = Rect::new(0, 0, 100, PROMPT_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_prompt_card(prompt, snapshot, &PromptConfig::default(), true, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn offline_card_shows_state_and_input() {
        let content = render(&PromptState::default(), &StatusSnapshot::offline());

        assert!(content.contains("OpenClaw Board"));
        assert!(content.contains("offline"));
        assert!(content.contains(">"));
    }

    #[test]
    fn online_card_shows_session_summary() {
        let snapshot = StatusSnapshot::from_response(&json!({
            "activeSessions": 2,
            "uptimeSec": 3720
        }));

        let content = render(&PromptState::default(), &snapshot);
        assert!(content.contains("online"));
        assert!(content.contains("sessions: 2"));
        assert!(content.contains("up: 1h02m"));
    }

    #[test]
    fn pending_send_dims_input() {
        let prompt = PromptState {
            input: "restart the media server".to_string(),
            pending: true,
            status_line: None,
        };

        let content = render(&prompt, &StatusSnapshot::offline());
        assert!(content.contains("sending…"));
        assert!(content.contains("restart the media server"));
    }

    #[test]
    fn outcome_defaults_to_ready_before_any_send() {
        let content = render(&PromptState::default(), &StatusSnapshot::offline());
        assert!(content.contains("Ready"));
    }

    #[test]
    fn outcome_lines_render_verbatim() {
        let sent = PromptState {
            status_line: Some("Sent: hello".to_string()),
            ..Default::default()
        };
        assert!(render(&sent, &StatusSnapshot::offline()).contains("Sent: hello"));

        let failed = PromptState {
            status_line: Some("Error: connection refused".to_string()),
            ..Default::default()
        };
        assert!(
            render(&failed, &StatusSnapshot::offline()).contains("Error: connection refused")
        );
    }

    #[test]
    fn quick_actions_are_listed() {
        let content = render(&PromptState::default(), &StatusSnapshot::offline());

        assert!(content.contains("F1"));
        assert!(content.contains("F2"));
        assert!(content.contains("F3"));
    }

    #[test]
    fn format_uptime_variants() {
        assert_eq!(format_uptime(90), "1m");
        assert_eq!(format_uptime(3600), "1h00m");
        assert_eq!(format_uptime(3720), "1h02m");
    }
}
