use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Field, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Form
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("STRIDELOG")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_form(f, app, main_chunks[1]);
    draw_workout_table(f, app, main_chunks[2]);

    let help = match app.input_mode {
        InputMode::Normal => {
            "a: Add | e: Edit | m: Modify km | d: Delete | j/k: Navigate | q: Quit"
        }
        InputMode::Adding => "Tab: Switch field | Enter: OK | Esc: Cancel",
        InputMode::Modifying => "Enter: Save distance | Esc: Cancel",
    };
    let footer_text = match &app.status {
        Some(status) => format!("{}  ·  {}", status, help),
        None => help.to_string(),
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if let Some(notice) = &app.notice {
        draw_notice(f, notice, size);
    }
}

fn field_block(title: &str, active: bool) -> Block<'_> {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let adding = app.input_mode == InputMode::Adding;
    let modifying = app.input_mode == InputMode::Modifying;

    let date = Paragraph::new(app.form.date.as_str())
        .block(field_block(" Date (DD.MM.YY) ", adding && app.focus == Field::Date));
    f.render_widget(date, chunks[0]);

    let (km_title, km_value) = if modifying {
        (" New distance (km) ", app.modify_input.as_str())
    } else {
        (" Distance (km) ", app.form.km.as_str())
    };
    let km = Paragraph::new(km_value)
        .block(field_block(km_title, modifying || (adding && app.focus == Field::Km)));
    f.render_widget(km, chunks[1]);

    if (adding || modifying) && app.notice.is_none() {
        let target = if modifying || app.focus == Field::Km { chunks[1] } else { chunks[0] };
        let before: String = app.active_input().chars().take(app.cursor_position).collect();
        f.set_cursor_position((cursor_x(target, &before), target.y.saturating_add(1)));
    }
}

/// Column for the cursor after `before`, kept inside the field's borders.
fn cursor_x(field: Rect, before: &str) -> u16 {
    let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
    let last_inner = field.width.saturating_sub(2).saturating_sub(1);
    field.x.saturating_add(1).saturating_add(offset.min(last_inner))
}

fn draw_workout_table(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Workouts ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let workouts = app.rows();
    if workouts.is_empty() {
        let empty = Paragraph::new("No workouts yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = workouts
        .iter()
        .map(|w| {
            Row::new(vec![
                Span::raw(w.date.clone()),
                Span::styled(w.km_display(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12), // Date
            Constraint::Min(8),     // Km
        ],
    )
    .header(Row::new(vec!["Date", "Km"]).style(Style::default().fg(Color::Yellow)))
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_notice(f: &mut Frame, notice: &str, area: Rect) {
    let popup = centered(area, 50, 5);
    let text = vec![
        Line::from(Span::styled(notice, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Invalid entry ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
