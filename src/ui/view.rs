use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    conversation::PeerKind, selectable_list::SelectableItem, shell_state::ShellState,
};

use super::styles;

const CHECKBOX_WIDTH: usize = 4;
const GROUP_TAG: &str = " (chat)";
const ELLIPSIS: char = '…';

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [menu_area, list_area, buttons_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(Paragraph::new(menu_line()), menu_area);
    render_conversation_list(frame, list_area, state);
    frame.render_widget(Paragraph::new(buttons_line()), buttons_area);
    frame.render_widget(
        Paragraph::new(Span::styled(status_text(state), styles::status_style())),
        status_area,
    );
}

fn render_conversation_list(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let list = state.list();
    let title = format!(
        "Conversations ({}, {} selected)",
        list.len(),
        list.selected_indexes().len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles::list_border_style());

    if list.is_empty() {
        frame.render_widget(
            Paragraph::new("No conversations. Press r to refresh.").block(block),
            area,
        );
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = list
        .items()
        .iter()
        .map(|item| ListItem::new(row_line(item, peer_kind_of(state, item.key), inner_width)))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(state.cursor());

    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(styles::cursor_style()),
        area,
        &mut list_state,
    );
}

fn peer_kind_of(state: &ShellState, peer_id: i64) -> Option<PeerKind> {
    state
        .conversations()
        .iter()
        .find(|conversation| conversation.peer_id == peer_id)
        .map(|conversation| conversation.peer_kind)
}

fn row_line(item: &SelectableItem<i64>, kind: Option<PeerKind>, width: usize) -> Line<'static> {
    let (marker, marker_style) = if item.selected {
        ("[x] ", styles::checked_marker_style())
    } else {
        ("[ ] ", styles::unchecked_marker_style())
    };

    let tag = if kind == Some(PeerKind::Group) {
        GROUP_TAG
    } else {
        ""
    };

    let name_budget = width.saturating_sub(CHECKBOX_WIDTH + tag.width());
    let mut spans = vec![
        Span::styled(marker, marker_style),
        Span::styled(
            truncate_to_width(&item.label, name_budget),
            styles::conversation_name_style(),
        ),
    ];

    if !tag.is_empty() {
        spans.push(Span::styled(tag, styles::group_tag_style()));
    }

    Line::from(spans)
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn menu_line() -> Line<'static> {
    hint_line(&[
        ("App", None),
        ("q", Some(("Exit", styles::action_label_style()))),
        ("r", Some(("Refresh", styles::action_label_style()))),
        ("L", Some(("Logout", styles::action_label_style()))),
    ])
}

fn buttons_line() -> Line<'static> {
    hint_line(&[
        ("space", Some(("Toggle", styles::action_label_style()))),
        ("a", Some(("Select all", styles::action_label_style()))),
        ("n", Some(("Unselect all", styles::action_label_style()))),
        ("d", Some(("Delete selected", styles::danger_label_style()))),
    ])
}

fn hint_line(entries: &[(&'static str, Option<(&'static str, Style)>)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, (key, label)) in entries.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }

        match label {
            Some((label, style)) => {
                spans.push(Span::styled(format!("[{key}]"), styles::key_hint_style()));
                spans.push(Span::styled(format!(" {label}"), *style));
            }
            None => spans.push(Span::styled(*key, styles::action_label_style())),
        }
    }

    Line::from(spans)
}

fn status_text(state: &ShellState) -> String {
    let position = state
        .cursor()
        .map(|index| format!("{}/{}", index + 1, state.list().len()))
        .unwrap_or_else(|| "-".to_owned());

    format!("{} | row {position} | j/k: move", state.status())
}
