//! Text input state for the form fields of every page.

use std::collections::BTreeMap;

use crate::models::FieldId;

/// Single line text input with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the value and move the cursor to the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Return the value and leave the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

/// All form inputs, keyed by field identifier
#[derive(Debug, Clone, Default)]
pub struct Forms {
    inputs: BTreeMap<FieldId, TextInput>,
}

impl Forms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.inputs.get(&id).map(TextInput::value).unwrap_or("")
    }

    pub fn input(&self, id: FieldId) -> Option<&TextInput> {
        self.inputs.get(&id)
    }

    pub fn input_mut(&mut self, id: FieldId) -> &mut TextInput {
        self.inputs.entry(id).or_default()
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.input_mut(id).set(value);
    }

    /// Read a field and clear it
    pub fn take(&mut self, id: FieldId) -> String {
        self.input_mut(id).take()
    }
}
