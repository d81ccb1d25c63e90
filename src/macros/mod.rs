// Session-scoped macro list
//
// Macros are never persisted to disk and nothing consumes them yet: the
// registry only accepts new entries and hands the list back for display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, reusable message snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub message: String,
}

/// Why a macro was not created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MacroError {
    #[error("Macro name is required")]
    EmptyName,
    #[error("Message is required")]
    EmptyMessage,
}

/// Append-only list of macros in creation order
#[derive(Debug, Default)]
pub struct MacroRegistry {
    items: Vec<Macro>,
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reason `create` would reject this pair, name first
    pub fn validate(name: &str, message: &str) -> Vec<MacroError> {
        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(MacroError::EmptyName);
        }
        if message.is_empty() {
            errors.push(MacroError::EmptyMessage);
        }
        errors
    }

    /// Append a macro. Empty names or messages leave the list untouched.
    /// Duplicate names are allowed.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<&Macro, MacroError> {
        let name = name.into();
        let message = message.into();

        if let Some(error) = Self::validate(&name, &message).into_iter().next() {
            return Err(error);
        }

        tracing::debug!(name = %name, "Macro created");
        self.items.push(Macro { name, message });
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn list(&self) -> &[Macro] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
