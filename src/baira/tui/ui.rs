use super::state::TuiState;
use baira::api::MessageLevel;
use baira::model::ListName;
use baira::store::ListStorage;
use baira::view::{ListBody, ListView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const TODO_ACCENT: Color = Color::Rgb(106, 48, 169);
const BUY_ACCENT: Color = Color::Rgb(255, 204, 51);
const CLEARED_ACCENT: Color = Color::Rgb(76, 175, 80);

const INPUT_TITLE: &str = " New item · Enter: todo · Ctrl+Enter: buy · Esc: clear ";
const HINTS: &str = "Tab: switch list  ↑↓: select  Del: delete  Ctrl+T: move  Ctrl+C: quit";
const CLEAR_ALL_LABEL: &str = "🗑 CLEAR ALL (Ctrl+Shift+Del)";
const CLEARED_LABEL: &str = "✔ CLEARED!";

fn accent(list: ListName) -> Color {
    match list {
        ListName::Todo => TODO_ACCENT,
        ListName::Buy => BUY_ACCENT,
    }
}

pub fn draw_ui<S: ListStorage>(frame: &mut Frame, state: &TuiState<S>, now: Instant) {
    let [input_area, lists_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_input(frame, state, input_area);

    let [todo_area, buy_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(lists_area);
    for (list, area) in [(ListName::Todo, todo_area), (ListName::Buy, buy_area)] {
        if let Some(view) = state.view(list) {
            draw_list(frame, state, view, area, now);
        }
    }

    draw_status(frame, state, status_area, now);
}

fn draw_input<S: ListStorage>(frame: &mut Frame, state: &TuiState<S>, area: Rect) {
    let block = Block::bordered().title(INPUT_TITLE);
    let text_width = u16::try_from(state.input.width()).unwrap_or(u16::MAX);
    let inner_width = area.width.saturating_sub(2);
    let offset = input_scroll(text_width, inner_width);
    let input = Paragraph::new(state.input.as_str())
        .scroll((0, offset))
        .block(block);
    frame.render_widget(input, area);

    if state.pending.is_none() {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(text_width - offset)
            .min(area.x.saturating_add(inner_width));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

/// Columns to scroll the input so the cursor after the last character stays visible.
fn input_scroll(text_width: u16, inner_width: u16) -> u16 {
    text_width.saturating_sub(inner_width.saturating_sub(1))
}

fn draw_list<S: ListStorage>(
    frame: &mut Frame,
    state: &TuiState<S>,
    view: &ListView,
    area: Rect,
    now: Instant,
) {
    let focused = state.focus == view.list;
    let title = format!(" {} {} ", view.heading, view.count_label);
    let title_style = if state.is_flashing(view.list, now) {
        Style::default()
            .fg(Color::Black)
            .bg(accent(view.list))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(accent(view.list))
            .add_modifier(Modifier::BOLD)
    };
    let border_style = if focused {
        Style::default().fg(accent(view.list))
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered()
        .title(Span::styled(title, title_style))
        .border_style(border_style);

    match &view.body {
        ListBody::Empty(empty) => {
            let text = vec![
                Line::from(""),
                Line::from(empty.icon),
                Line::from(Span::styled(
                    empty.message,
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let placeholder = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(placeholder, area);
        }
        ListBody::Rows(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|row| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{}. ", row.position),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(row.text.clone()),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol("✕ ")
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

            let mut list_state = ListState::default();
            if focused {
                list_state.select(Some(state.selected(view.list)));
            }
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn draw_status<S: ListStorage>(frame: &mut Frame, state: &TuiState<S>, area: Rect, now: Instant) {
    let cleared = state.reset_acknowledged(now);
    let (label, label_style) = if cleared {
        (
            CLEARED_LABEL,
            Style::default()
                .fg(CLEARED_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (CLEAR_ALL_LABEL, Style::default().fg(Color::Red))
    };
    let label_width = (label.width() as u16 + 1).min(area.width);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width)]).areas(area);

    let left_line = if let Some(pending) = &state.pending {
        Line::from(Span::styled(
            format!("{} [y/N]", pending.prompt()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(notice) = &state.notice {
        let color = match notice.level {
            MessageLevel::Info => Color::DarkGray,
            MessageLevel::Success => Color::Green,
            MessageLevel::Warning => Color::Yellow,
            MessageLevel::Error => Color::Red,
        };
        Line::from(Span::styled(notice.content.clone(), Style::default().fg(color)))
    } else {
        Line::from(Span::styled(HINTS, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(left_line), left);
    frame.render_widget(
        Paragraph::new(Span::styled(label, label_style)).alignment(Alignment::Right),
        right,
    );
}
