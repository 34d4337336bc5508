use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Editable text with a cursor
///
/// The cursor is a byte offset into the text and always sits on a char boundary.
/// Columns are display cells, so wide glyphs take two.
/// Editing methods return true if the text changed, so callers know when to
/// recompute statistics. Cursor movement never changes the text.
#[derive(Debug, Default, Clone)]
pub struct Editor {
    text: String,
    cursor: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The complete current text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Zero-based `(row, column)` of the cursor, the column counted in display cells
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let column = before[self.line_start()..].width();
        (row, column)
    }

    pub fn insert_char(&mut self, character: char) -> bool {
        self.text.insert(self.cursor, character);
        self.cursor += character.len_utf8();
        true
    }

    pub fn insert_str(&mut self, string: &str) -> bool {
        if string.is_empty() {
            return false;
        }
        self.text.insert_str(self.cursor, string);
        self.cursor += string.len();
        true
    }

    /// Removes the character before the cursor
    pub fn backspace(&mut self) -> bool {
        let Some(previous) = self.text[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= previous.len_utf8();
        self.text.remove(self.cursor);
        true
    }

    /// Removes the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(previous) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= previous.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Moves to the previous line, keeping the column where possible
    pub fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let (_, column) = self.cursor_position();
        let previous_end = start - 1;
        let previous_start = self.text[..previous_end].rfind('\n').map_or(0, |i| i + 1);
        self.cursor = self.offset_of_column(previous_start, previous_end, column);
    }

    /// Moves to the next line, keeping the column where possible
    pub fn move_down(&mut self) {
        let end = self.line_end();
        if end == self.text.len() {
            return;
        }
        let (_, column) = self.cursor_position();
        let next_start = end + 1;
        let next_end = self.text[next_start..]
            .find('\n')
            .map_or(self.text.len(), |i| next_start + i);
        self.cursor = self.offset_of_column(next_start, next_end, column);
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i)
    }

    // Byte offset of the first char at or past display `column` within the line
    // spanning `start..end`, clamped to its end
    fn offset_of_column(&self, start: usize, end: usize, column: usize) -> usize {
        let mut width = 0;
        for (index, character) in self.text[start..end].char_indices() {
            if width >= column {
                return start + index;
            }
            width += character.width().unwrap_or(0);
        }
        end
    }
}
