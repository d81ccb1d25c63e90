// Macro management - state behind the "/outreach" view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tui_textarea::TextArea;

use super::app::Route;
use super::input::TextInput;
use super::pointer::{hit, PointerHub, PointerSubscription};
use crate::macros::{Macro, MacroError, MacroRegistry};

/// Focusable elements of the macro view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroFocus {
    Name,
    Message,
    Create,
    /// Fixed "+" control in the corner
    NewMacro,
}

const FOCUS_ORDER: [MacroFocus; 4] = [
    MacroFocus::Name,
    MacroFocus::Message,
    MacroFocus::Create,
    MacroFocus::NewMacro,
];

/// What a macro-view event asks of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacrosAction {
    None,
    Created,
    Rejected,
    Navigate(Route),
}

/// Clickable regions recorded by the last render
#[derive(Debug, Clone, Default)]
pub struct MacroHitRegions {
    pub name: Option<Rect>,
    pub message: Option<Rect>,
    pub create: Option<Rect>,
    pub new_macro: Option<Rect>,
}

pub struct MacrosView {
    registry: MacroRegistry,
    name: TextInput,
    message: TextArea<'static>,
    errors: Vec<MacroError>,
    focus: MacroFocus,
    list_offset: usize,

    pointer: Option<PointerSubscription>,
    pub hit_regions: MacroHitRegions,
}

impl Default for MacrosView {
    fn default() -> Self {
        Self::new()
    }
}

impl MacrosView {
    pub fn new() -> Self {
        Self {
            registry: MacroRegistry::new(),
            name: TextInput::new("Enter the name of the macro"),
            message: Self::create_message_area(""),
            errors: Vec::new(),
            focus: MacroFocus::Name,
            list_offset: 0,

            pointer: None,
            hit_regions: MacroHitRegions::default(),
        }
    }

    /// Start receiving pointer-down events (view mounted)
    pub fn activate(&mut self, hub: &PointerHub) {
        if self.pointer.is_none() {
            self.pointer = Some(hub.subscribe(Route::Outreach));
        }
    }

    /// Stop receiving them (view unmounted)
    pub fn deactivate(&mut self) {
        self.pointer = None;
    }

    pub fn is_listening(&self) -> bool {
        self.pointer.is_some()
    }

    fn create_message_area(text: &str) -> TextArea<'static> {
        let mut area = TextArea::new(text.lines().map(str::to_string).collect());
        area.set_placeholder_text("Enter the message for the macro");
        area
    }

    pub fn macros(&self) -> &[Macro] {
        self.registry.list()
    }

    pub fn name_input(&self) -> &TextInput {
        &self.name
    }

    pub fn message_area(&self) -> &TextArea<'static> {
        &self.message
    }

    pub fn message_text(&self) -> String {
        self.message.lines().join("\n")
    }

    pub fn errors(&self) -> &[MacroError] {
        &self.errors
    }

    pub fn focus(&self) -> MacroFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: MacroFocus) {
        self.focus = focus;
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn set_name(&mut self, name: &str) {
        self.name.set_value(name);
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = Self::create_message_area(message);
    }

    /// Append the entered macro. Both inputs must be non-empty; on success
    /// the inputs are cleared, on rejection they are kept.
    pub fn create(&mut self) -> MacrosAction {
        let name = self.name.value().to_string();
        let message = self.message_text();

        match self.registry.create(name.as_str(), message.as_str()) {
            Ok(created) => {
                tracing::info!(name = %created.name, "Macro added");
                self.errors.clear();
                self.name.clear();
                self.message = Self::create_message_area("");
                self.focus = MacroFocus::Name;
                MacrosAction::Created
            }
            Err(_) => {
                // Show every missing input, not only the first
                self.errors = MacroRegistry::validate(&name, &message);
                MacrosAction::Rejected
            }
        }
    }

    fn focus_step(&mut self, forward: bool) {
        let index = FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        let len = FOCUS_ORDER.len();
        let next = if forward { index + 1 } else { index + len - 1 };
        self.focus = FOCUS_ORDER[next % len];
    }

    fn scroll_list(&mut self, down: bool) {
        let max = self.registry.len().saturating_sub(1);
        self.list_offset = if down {
            (self.list_offset + 1).min(max)
        } else {
            self.list_offset.saturating_sub(1)
        };
    }

    /// Bracketed paste into the focused input; buttons ignore it
    pub fn paste(&mut self, text: &str) {
        match self.focus {
            MacroFocus::Name => {
                self.name.insert_str(text);
            }
            MacroFocus::Message => {
                self.message.insert_str(text.replace("\r\n", "\n"));
            }
            MacroFocus::Create | MacroFocus::NewMacro => {}
        }
    }

    pub fn handle_pointer_down(&mut self, column: u16, row: u16) -> MacrosAction {
        let regions = self.hit_regions.clone();

        if hit(regions.new_macro, column, row) {
            self.focus = MacroFocus::NewMacro;
            return MacrosAction::Navigate(Route::Outreach);
        }
        if hit(regions.create, column, row) {
            self.focus = MacroFocus::Create;
            return self.create();
        }
        if hit(regions.name, column, row) {
            self.focus = MacroFocus::Name;
        } else if hit(regions.message, column, row) {
            self.focus = MacroFocus::Message;
        }
        MacrosAction::None
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MacrosAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                return self.create();
            }
            if self.focus == MacroFocus::Message {
                self.message.input(key);
            }
            return MacrosAction::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_step(true);
                return MacrosAction::None;
            }
            KeyCode::BackTab => {
                self.focus_step(false);
                return MacrosAction::None;
            }
            KeyCode::PageDown => {
                self.scroll_list(true);
                return MacrosAction::None;
            }
            KeyCode::PageUp => {
                self.scroll_list(false);
                return MacrosAction::None;
            }
            _ => {}
        }

        match self.focus {
            MacroFocus::Name => {
                if key.code == KeyCode::Enter {
                    return self.create();
                }
                self.name.handle_key(key);
                MacrosAction::None
            }
            MacroFocus::Message => {
                if key.code == KeyCode::Esc {
                    self.focus = MacroFocus::Create;
                } else {
                    self.message.input(key);
                }
                MacrosAction::None
            }
            MacroFocus::Create => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.create(),
                _ => MacrosAction::None,
            },
            MacroFocus::NewMacro => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => {
                    MacrosAction::Navigate(Route::Outreach)
                }
                _ => MacrosAction::None,
            },
        }
    }
}
