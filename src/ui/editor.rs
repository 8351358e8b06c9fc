//! Multi-line text buffer backing the article input area
//!
//! Holds the input text and a cursor. The cursor is a byte offset that
//! always sits on a char boundary.

use unicode_width::UnicodeWidthStr;

/// Editable text with a cursor
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextEditor {
    text: String,
    cursor: usize,
}

impl TextEditor {
    /// Create an empty editor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut editor = Self::new();
        editor.set_text(text);
        editor
    }

    /// Current contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents, moving the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = normalize_newlines(&text.into());
        self.cursor = self.text.len();
    }

    /// Remove all text
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a single character at the cursor
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor (used for pastes)
    pub fn insert_str(&mut self, s: &str) {
        let s = normalize_newlines(s);
        self.text.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move up one line, keeping the column where possible
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    /// Move down one line, keeping the column where possible
    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Cursor position as (row, display column), for placing the
    /// terminal cursor. Wide glyphs count as two columns.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let col = before[self.line_start(self.cursor)..].width();
        (row, col)
    }

    /// Number of lines (an empty buffer has one line)
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line_end = self.line_end(line_start);
        self.text[line_start..line_end]
            .char_indices()
            .nth(column)
            .map_or(line_end, |(i, _)| line_start + i)
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
