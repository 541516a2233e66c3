use note_highlights_engine::PositionRange;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[0]);

    // Highlights panel
    let title = match &app.panel.file_name {
        Some(name) => format!("Highlights: {name}"),
        None => "Highlights".to_string(),
    };
    let panel_block = Block::default().borders(Borders::ALL).title(title);

    if let Some(message) = app.error.as_deref().or(app.panel.status()) {
        let message = Paragraph::new(message.to_string())
            .block(panel_block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .panel_items()
            .into_iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::raw(item.text)),
                    Line::from(Span::styled(
                        item.meta,
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(panel_block)
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

        f.render_stateful_widget(list, chunks[0], &mut app.list_state);
    }

    // Document pane
    let lines: Vec<Line> = app
        .document_lines()
        .into_iter()
        .enumerate()
        .map(|(idx, text)| document_line(text, idx, app.selection))
        .collect();

    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let document = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Note"))
        .scroll((scroll, 0));

    f.render_widget(document, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Enter: Jump | r: Reload"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}

fn document_line(text: String, idx: usize, selection: Option<PositionRange>) -> Line<'static> {
    let Some((before, selected, after)) = selection.and_then(|sel| split_selection(&text, idx, sel))
    else {
        return Line::from(text);
    };

    let selected_style = Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw(before),
        Span::styled(selected, selected_style),
        Span::raw(after),
    ])
}

/// Splits line `idx` into the parts before, inside and after `sel`.
///
/// Columns are char counts. Returns `None` for lines outside the selection.
pub fn split_selection(
    text: &str,
    idx: usize,
    sel: PositionRange,
) -> Option<(String, String, String)> {
    if idx < sel.start.line || idx > sel.end.line {
        return None;
    }

    let len = text.chars().count();
    let from = if idx == sel.start.line {
        sel.start.column.min(len)
    } else {
        0
    };
    let to = if idx == sel.end.line {
        sel.end.column.min(len)
    } else {
        len
    }
    .max(from);

    let before = text.chars().take(from).collect();
    let selected = text.chars().skip(from).take(to - from).collect();
    let after = text.chars().skip(to).collect();
    Some((before, selected, after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use note_highlights_engine::Position;
    use pretty_assertions::assert_eq;

    fn sel(a: (usize, usize), b: (usize, usize)) -> PositionRange {
        PositionRange::new(Position::new(a.0, a.1), Position::new(b.0, b.1))
    }

    fn parts(a: &str, b: &str, c: &str) -> Option<(String, String, String)> {
        Some((a.into(), b.into(), c.into()))
    }

    #[test]
    fn single_line_selection() {
        let range = sel((2, 3), (2, 7));
        assert_eq!(split_selection("abcdefghij", 2, range), parts("abc", "defg", "hij"));
        assert_eq!(split_selection("abcdefghij", 1, range), None);
        assert_eq!(split_selection("abcdefghij", 3, range), None);
    }

    #[test]
    fn multi_line_selection() {
        let range = sel((1, 4), (3, 2));
        assert_eq!(split_selection("one ==two", 1, range), parts("one ", "==two", ""));
        assert_eq!(split_selection("middle", 2, range), parts("", "middle", ""));
        assert_eq!(split_selection("end== x", 3, range), parts("", "en", "d== x"));
    }

    #[test]
    fn columns_are_chars() {
        let range = sel((0, 1), (0, 3));
        assert_eq!(split_selection("ünïcode", 0, range), parts("ü", "nï", "code"));
    }

    #[test]
    fn columns_past_line_end_are_clamped() {
        let range = sel((0, 10), (0, 20));
        assert_eq!(split_selection("short", 0, range), parts("short", "", ""));
    }
}
