//! Text input fields shared by the login and registration forms

use serde::Serialize;

const MASK: char = '•';

/// A labelled text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    label: &'static str,
    placeholder: &'static str,
    value: String,
    focused: bool,
    secure: bool,
    revealed: bool,
}

impl TextField {
    /// Plain text field
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            focused: false,
            secure: false,
            revealed: false,
        }
    }

    /// Masked field with a visibility toggle
    pub fn secure(label: &'static str, placeholder: &'static str) -> Self {
        Self { secure: true, ..Self::new(label, placeholder) }
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Mark the field focused
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Clear focus
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Whether the field has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Flip between masked and revealed (no-op on plain fields)
    pub fn toggle_visibility(&mut self) {
        if self.secure {
            self.revealed = !self.revealed;
        }
    }

    /// Whether a secure field currently shows its value
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Render state
    pub fn view(&self) -> FieldView {
        let value = if self.secure && !self.revealed {
            std::iter::repeat(MASK).take(self.value.chars().count()).collect()
        } else {
            self.value.clone()
        };

        FieldView {
            label: self.label,
            placeholder: self.placeholder,
            value,
            focused: self.focused,
            secure: self.secure,
            revealed: self.revealed,
        }
    }
}

/// Render state of a [`TextField`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Label above the input
    pub label: &'static str,
    /// Placeholder shown while empty
    pub placeholder: &'static str,
    /// Displayed value (masked unless revealed)
    pub value: String,
    /// Focus highlight
    pub focused: bool,
    /// Whether the field is a password field
    pub secure: bool,
    /// Whether a password field is currently revealed
    pub revealed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_field_masks_until_revealed() {
        let mut field = TextField::secure("Password", "Enter your password");
        field.set_value("hunter2");

        assert_eq!(field.view().value, "•••••••");
        field.toggle_visibility();
        assert_eq!(field.view().value, "hunter2");
        field.toggle_visibility();
        assert!(!field.is_revealed());
    }

    #[test]
    fn test_plain_field_ignores_toggle() {
        let mut field = TextField::new("Email", "Enter your email");
        field.set_value("a@b.c");
        field.toggle_visibility();

        assert!(!field.is_revealed());
        assert_eq!(field.view().value, "a@b.c");
    }

    #[test]
    fn test_focus() {
        let mut field = TextField::new("Email", "Enter your email");
        field.focus();
        assert!(field.view().focused);
        field.blur();
        assert!(!field.is_focused());
    }
}
