//! Single-line input editing shared by all widgets.

/// Edit operations applicable to an [`InputBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Insert a character at the cursor
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Move the cursor one character left
    Left,
    /// Move the cursor one character right
    Right,
    /// Move the cursor to the start of the line
    Home,
    /// Move the cursor to the end of the line
    End,
}

/// A single-line edit buffer with a cursor.
///
/// The cursor is a byte offset into the value, always on a `char`
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    /// Apply one edit operation.
    pub fn apply(&mut self, edit: EditAction) {
        match edit {
            EditAction::Insert(ch) => self.insert(ch),
            EditAction::Backspace => self.backspace(),
            EditAction::Left => self.move_left(),
            EditAction::Right => self.move_right(),
            EditAction::Home => self.cursor = 0,
            EditAction::End => self.cursor = self.value.len(),
        }
    }

    fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary();
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(index, _)| index)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map_or(self.value.len(), |ch| self.cursor + ch.len_utf8())
    }

    /// The current contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the contents are empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Clear the buffer and return the previous contents.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// The value with a caret marker inserted at the cursor position.
    #[must_use]
    pub fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}
