//! Controls menu rendering.
//!
//! Responsibilities:
//! - Draw the tab header, the bindings list or sensitivity gauge, the rebind
//!   prompt and the footer hints.
//!
//! Does NOT handle:
//! - Reading controller or store state; everything comes from the snapshot.
//!
//! Invariants:
//! - Rendering is a pure function of `MenuSnapshot` and the target area.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs},
};

use crate::controller::{Slot, Tab};
use crate::ui::snapshot::{BindingRow, MenuSnapshot};
use crate::ui::theme::MenuTheme;

/// Width of the action label column.
const LABEL_WIDTH: usize = 18;

/// Render the controls menu into `area`.
pub fn render_menu(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot) {
    let theme = MenuTheme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(f, chunks[0], snapshot, &theme);
    match snapshot.tab {
        Tab::Controls => render_bindings(f, chunks[1], snapshot, &theme),
        Tab::Sensitivity => render_sensitivity(f, chunks[1], snapshot, &theme),
    }
    render_status(f, chunks[2], snapshot, &theme);
    render_hints(f, chunks[3], snapshot, &theme);
}

fn render_tabs(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot, theme: &MenuTheme) {
    let titles = [Tab::Controls, Tab::Sensitivity].map(Tab::title);
    let selected = match snapshot.tab {
        Tab::Controls => 0,
        Tab::Sensitivity => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.text_dim())
        .highlight_style(theme.title())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(Span::styled(" Settings ", theme.title())),
        );
    f.render_widget(tabs, area);
}

fn render_bindings(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot, theme: &MenuTheme) {
    let items: Vec<ListItem> = snapshot
        .rows
        .iter()
        .map(|row| ListItem::new(binding_line(row, theme)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Key Bindings "),
        )
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !snapshot.rows.is_empty() {
        state.select(Some(snapshot.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn binding_line<'a>(row: &'a BindingRow, theme: &MenuTheme) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!("{:<width$}", row.label, width = LABEL_WIDTH),
        theme.text(),
    )];

    if row.keys.is_empty() && row.pending_slot.is_none() {
        spans.push(Span::styled("(unbound)", theme.text_dim()));
    }

    for (index, key) in row.keys.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" / ", theme.text_dim()));
        }
        if row.pending_slot == Some(Slot::Index(index)) {
            spans.push(Span::styled(format!("[{key}?]"), theme.pending()));
        } else {
            spans.push(Span::styled(key.as_str(), theme.text()));
        }
    }

    if row.pending_slot == Some(Slot::Append) {
        if !row.keys.is_empty() {
            spans.push(Span::styled(" / ", theme.text_dim()));
        }
        spans.push(Span::styled("[+?]", theme.pending()));
    }

    if row.conflicted {
        spans.push(Span::styled("  (shared)", theme.warning()));
    }

    Line::from(spans)
}

fn render_sensitivity(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot, theme: &MenuTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(" Sensitivity ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(theme.title())
        .ratio(snapshot.range.ratio(snapshot.sensitivity))
        .label(format!("{:.2}", snapshot.sensitivity));
    f.render_widget(gauge, chunks[0]);

    let range = Line::from(vec![
        Span::styled("min ", theme.text_dim()),
        Span::styled(format!("{:.2}", snapshot.range.min()), theme.text()),
        Span::styled("  max ", theme.text_dim()),
        Span::styled(format!("{:.2}", snapshot.range.max()), theme.text()),
        Span::styled("  step ", theme.text_dim()),
        Span::styled(format!("{:.2}", snapshot.range.step()), theme.text()),
    ]);
    f.render_widget(Paragraph::new(range), chunks[1]);
}

fn render_status(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot, theme: &MenuTheme) {
    let line = if let Some(prompt) = &snapshot.prompt {
        Line::from(Span::styled(prompt.as_str(), theme.pending()))
    } else if let Some(first) = snapshot.conflicts.first() {
        let more = snapshot.conflicts.len() - 1;
        let text = if more > 0 {
            format!("{first} (+{more} more)")
        } else {
            first.clone()
        };
        Line::from(Span::styled(text, theme.warning()))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_hints(f: &mut Frame, area: Rect, snapshot: &MenuSnapshot, theme: &MenuTheme) {
    let mut spans = Vec::new();
    for (keys, description) in &snapshot.hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*keys, theme.title()));
        spans.push(Span::styled(format!(":{description}"), theme.text_dim()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
