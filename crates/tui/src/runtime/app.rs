//! Top-level interactive state: the world view plus the controls menu.
//!
//! Responsibilities:
//! - Route each key event to the menu when it holds the input channel,
//!   otherwise to the world keymap.
//! - Track when a redraw is needed from store and controller notifications.
//! - Render the world log and, when open, the menu on top.
//!
//! Does NOT handle:
//! - Terminal setup or the async event stream (see `main.rs`).
//!
//! Invariants:
//! - Ctrl+C always quits, whoever holds the keyboard.
//! - World keys never fire while the menu holds the input channel.
//! - The store listener registered in `new` is removed on drop.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use rebind_config::{ConfigStore, ListenerId};

use crate::controller::{BindingController, MENU_INPUT_OWNER};
use crate::input::{InputChannel, WorldKeymap, key_from_event};
use crate::ui::{MenuSnapshot, MenuTheme, render_menu};

/// Interactive session over a shared store.
pub struct App<S: ConfigStore + 'static> {
    store: Rc<S>,
    channel: Rc<InputChannel>,
    controller: BindingController<S>,
    world: WorldKeymap,
    world_stale: Rc<Cell<bool>>,
    world_log: VecDeque<String>,
    log_capacity: usize,
    dirty: Rc<Cell<bool>>,
    quit: bool,
    store_listener: ListenerId,
}

impl<S: ConfigStore + 'static> App<S> {
    pub fn new(store: Rc<S>, log_capacity: usize) -> Self {
        let channel = InputChannel::new();
        let dirty = Rc::new(Cell::new(true));
        let world_stale = Rc::new(Cell::new(false));

        let store_listener = {
            let dirty = Rc::clone(&dirty);
            let world_stale = Rc::clone(&world_stale);
            store.add_listener(Rc::new(move || {
                world_stale.set(true);
                dirty.set(true);
            }))
        };

        let controller = BindingController::new(Rc::clone(&store), Rc::clone(&channel));
        {
            let dirty = Rc::clone(&dirty);
            controller.subscribe(move || dirty.set(true));
        }

        Self {
            world: WorldKeymap::from_store(store.as_ref()),
            store,
            channel,
            controller,
            world_stale,
            world_log: VecDeque::with_capacity(log_capacity),
            log_capacity: log_capacity.max(1),
            dirty,
            quit: false,
            store_listener,
        }
    }

    pub fn controller(&self) -> &BindingController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut BindingController<S> {
        &mut self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns true once per pending redraw.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// World actions triggered so far, oldest first.
    pub fn world_log(&self) -> impl Iterator<Item = &str> {
        self.world_log.iter().map(String::as_str)
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(_, _) => self.dirty.set(true),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("Quit requested");
            self.quit = true;
            return;
        }

        if self.channel.is_held_by(MENU_INPUT_OWNER) {
            let outcome = self.controller.handle_key(key);
            tracing::trace!(outcome = ?outcome, "Menu handled key");
            return;
        }

        if key.code == KeyCode::Esc {
            self.controller.activate();
            return;
        }

        self.handle_world_key(&key);
    }

    fn handle_world_key(&mut self, key: &KeyEvent) {
        if self.world_stale.replace(false) {
            self.world = WorldKeymap::from_store(self.store.as_ref());
        }

        let Some(action) = self.world.resolve(key) else {
            tracing::trace!(key = ?key.code, "Unbound world key");
            return;
        };
        let pressed = key_from_event(key)
            .map(|k| k.id().to_string())
            .unwrap_or_default();
        let entry = format!("{action} ({pressed})");
        tracing::debug!(entry = %entry, "World action");

        if self.world_log.len() == self.log_capacity {
            self.world_log.pop_front();
        }
        self.world_log.push_back(entry);
        self.dirty.set(true);
    }

    pub fn render(&self, f: &mut Frame) {
        let theme = MenuTheme::default();
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let items: Vec<ListItem> = self
            .world_log
            .iter()
            .map(|entry| ListItem::new(entry.as_str()))
            .collect();
        let world = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_dim())
                .title(" World "),
        );
        f.render_widget(world, chunks[0]);

        let footer = Line::from(vec![
            Span::styled("Esc", theme.title()),
            Span::styled(":controls  ", theme.text_dim()),
            Span::styled("Ctrl+C", theme.title()),
            Span::styled(":quit", theme.text_dim()),
        ]);
        f.render_widget(Paragraph::new(footer), chunks[1]);

        if self.controller.is_active() {
            let menu_area = centered(area, 70, 80);
            f.render_widget(Clear, menu_area);
            render_menu(f, menu_area, &MenuSnapshot::capture(&self.controller));
        }
    }
}

impl<S: ConfigStore + 'static> Drop for App<S> {
    fn drop(&mut self) {
        self.store.remove_listener(self.store_listener);
    }
}

/// A rectangle of the given percentages centered in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
