// Form input primitives - single-line text fields and option selects
//
// Key handling mirrors the dialog text input: char-indexed cursor, so
// multi-byte input (names, emoji) never splits a code point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press did to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Value or cursor changed
    Changed,
    /// Key was not meant for this input
    Ignored,
}

/// Single-line text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize, // char index
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert pasted text at the cursor. Line breaks and other control
    /// characters are dropped; the field holds a single line.
    pub fn insert_str(&mut self, text: &str) -> InputOutcome {
        let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
        if cleaned.is_empty() {
            return InputOutcome::Ignored;
        }
        let byte_pos = Self::char_to_byte_offset(&self.value, self.cursor);
        self.value.insert_str(byte_pos, &cleaned);
        self.cursor += cleaned.chars().count();
        InputOutcome::Changed
    }

    /// Convert a char-index to its byte offset in `s`.
    fn char_to_byte_offset(s: &str, char_pos: usize) -> usize {
        s.char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(s.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return InputOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = Self::char_to_byte_offset(&self.value, self.cursor);
                self.value.insert(byte_pos, c);
                self.cursor += 1;
                InputOutcome::Changed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_pos = Self::char_to_byte_offset(&self.value, self.cursor);
                    self.value.remove(byte_pos);
                }
                InputOutcome::Changed
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let byte_pos = Self::char_to_byte_offset(&self.value, self.cursor);
                    self.value.remove(byte_pos);
                }
                InputOutcome::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Changed
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                InputOutcome::Changed
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputOutcome::Changed
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                InputOutcome::Changed
            }
            _ => InputOutcome::Ignored,
        }
    }
}

/// One entry in a select: the submitted value and what the list shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Option list with an optional "nothing chosen yet" state
#[derive(Debug, Clone)]
pub struct SelectInput {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Submitted value, empty when nothing is chosen
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.label.as_str())
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.options.len());
    }

    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        if self.options.is_empty() {
            return InputOutcome::Ignored;
        }
        let last = self.options.len() - 1;

        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                self.selected = Some(match self.selected {
                    None | Some(0) => 0,
                    Some(i) => i - 1,
                });
                InputOutcome::Changed
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
                InputOutcome::Changed
            }
            KeyCode::Home => {
                self.selected = Some(0);
                InputOutcome::Changed
            }
            KeyCode::End => {
                self.selected = Some(last);
                InputOutcome::Changed
            }
            _ => InputOutcome::Ignored,
        }
    }
}
