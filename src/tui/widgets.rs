//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{is_valid_email, is_valid_name, is_valid_phone, option_key, FieldKind};
use crate::schemas::{keys, ContactPreference};
use crate::tui::state::{TuiState, CONTACT_FIELDS, CONTACT_PREF_ROW, PRACTICAL_FIELDS};

/// Render the whole wizard screen: header, current step, footer
pub fn render(f: &mut Frame, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_step(f, chunks[1], state);
    render_footer(f, chunks[2], state);
}

/// Render the header section (3 lines): title, progress bar, spacer
pub fn render_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;
    let title = Line::from(vec![
        Span::styled("┌─ Aanvraag ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "─".repeat(border_width.saturating_sub(13)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("┐", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(title)).alignment(Alignment::Left), chunks[0]);

    let progress = state.session.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(u16::from(progress))
        .label(format!("{}%", progress));
    f.render_widget(gauge, chunks[1]);
}

/// Render the current step: heading plus its input
pub fn render_step(f: &mut Frame, area: Rect, state: &TuiState) {
    let prompt = state.session.current_step().prompt();

    let body_style = if state.transition_started.is_some() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(""), Line::from("")];
    lines.extend(field_lines(state, prompt.field));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", prompt.heading),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .style(body_style)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn field_lines(state: &TuiState, field: FieldKind) -> Vec<Line<'static>> {
    let answers = state.session.answers();

    match field {
        FieldKind::SingleChoice { key, options } => options
            .iter()
            .enumerate()
            .map(|(i, (value, label))| {
                let selected = answers.text(key) == Some(*value);
                option_line(i == state.cursor, if selected { "(•)" } else { "( )" }, label)
            })
            .collect(),
        FieldKind::MultiChoice { prefix, options } => options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let checked = answers.is_present(&option_key(prefix, option));
                option_line(i == state.cursor, if checked { "[x]" } else { "[ ]" }, option)
            })
            .collect(),
        FieldKind::FreeText { key, placeholder } => {
            vec![text_line(None, answers.text(key).unwrap_or(""), placeholder, true)]
        }
        FieldKind::Practical => PRACTICAL_FIELDS
            .iter()
            .enumerate()
            .map(|(i, (key, label))| {
                text_line(Some(*label), answers.text(key).unwrap_or(""), "", i == state.cursor)
            })
            .collect(),
        FieldKind::Contact => contact_lines(state),
        FieldKind::Success => vec![
            Line::from(Span::styled(
                "Bedankt! Ik neem zo snel mogelijk contact met je op.",
                Style::default().fg(Color::Green),
            )),
            Line::from(""),
            Line::from("Druk op n voor een nieuwe aanvraag."),
        ],
    }
}

fn contact_lines(state: &TuiState) -> Vec<Line<'static>> {
    let answers = state.session.answers();
    let checks: [fn(&str) -> bool; 3] = [is_valid_name, is_valid_email, is_valid_phone];

    let mut lines: Vec<Line<'static>> = CONTACT_FIELDS
        .iter()
        .zip(checks)
        .enumerate()
        .map(|(i, ((key, label), check))| {
            let value = answers.text(key).unwrap_or("");
            let mut line = text_line(Some(*label), value, "", i == state.cursor);
            if !value.is_empty() && !check(value) {
                line.spans.push(Span::styled("  ongeldig", Style::default().fg(Color::Red)));
            }
            line
        })
        .collect();

    let chosen = answers.contact_preference();
    let focused = state.cursor == CONTACT_PREF_ROW;
    let mut spans = vec![Span::styled(
        if focused { "> Voorkeur: " } else { "  Voorkeur: " },
        Style::default().fg(Color::Gray),
    )];
    for preference in ContactPreference::ALL {
        let style = if preference == chosen {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", preference.label()), style));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(spans));

    if answers.text(keys::CONTACT_PREF).is_none() {
        lines.push(Line::from(Span::styled(
            format!("  (standaard: {})", chosen.label()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn option_line(focused: bool, marker: &str, label: &str) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(if focused { "> " } else { "  " }, style),
        Span::styled(format!("{} {}", marker, label), style),
    ])
}

fn text_line(label: Option<&str>, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(if focused { "> " } else { "  " })];
    if let Some(label) = label {
        spans.push(Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)));
    }
    if value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

/// Render the footer section (4 lines): status, key hints
pub fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let border_width = area.width as usize;

    let status_text = state.logs.last().cloned().unwrap_or_default();
    let status_line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width(&status_text, border_width.saturating_sub(4)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(status_line)), chunks[1]);

    let keys_text = key_hints(state.current_field());
    let keys_line = Line::from(vec![
        Span::styled("│ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            pad_to_width(keys_text, border_width.saturating_sub(4)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" │", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(Text::from(keys_line)), chunks[2]);

    let bottom = Line::from(Span::styled(
        format!("└{}┘", "─".repeat(border_width.saturating_sub(2))),
        Style::default().fg(Color::Cyan),
    ));
    f.render_widget(Paragraph::new(Text::from(bottom)), chunks[3]);
}

fn key_hints(field: FieldKind) -> &'static str {
    match field {
        FieldKind::SingleChoice { .. } => "[↑↓] kies  [enter] volgende  [esc] terug  [q] stop",
        FieldKind::MultiChoice { .. } => {
            "[↑↓] kies  [spatie] aan/uit  [enter] volgende  [esc] terug"
        }
        FieldKind::FreeText { .. } => {
            "typ je antwoord  [enter] volgende  [esc] terug  [ctrl-c] stop"
        }
        FieldKind::Practical => "[tab] volgend veld  [enter] volgende  [esc] terug",
        FieldKind::Contact => "[tab] volgend veld  [←→] voorkeur  [enter] verstuur  [esc] terug",
        FieldKind::Success => "[n] nieuwe aanvraag  [q] stop",
    }
}

/// Pad or truncate text to a fixed number of characters
fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    } else {
        format!("{:<width$}", text, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_pads_short_text() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
    }

    #[test]
    fn test_pad_to_width_truncates_on_char_boundary() {
        assert_eq!(pad_to_width("Privéfeest", 6), "Privé…");
    }

    #[test]
    fn test_key_hints_success_mentions_new_request() {
        assert!(key_hints(FieldKind::Success).contains("nieuwe aanvraag"));
    }
}
