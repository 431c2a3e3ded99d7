//! Plain-text buffer backing the prompt editor.
//!
//! The cursor is a byte offset that always sits on a char boundary.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptEditor {
    text: String,
    cursor: usize,
}

impl PromptEditor {
    /// Start editing `text` with the cursor at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

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

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Previous line, same char column or its end if shorter
    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line > 0 {
            self.cursor = self.offset_at(line - 1, col);
        }
    }

    /// Next line, same char column or its end if shorter
    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line < self.text.matches('\n').count() {
            self.cursor = self.offset_at(line + 1, col);
        }
    }

    /// Cursor position as (line, column), both counted in chars from zero
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].chars().count())
    }

    /// Byte offset of char column `col` on `line`, clamped to the line end
    fn offset_at(&self, line: usize, col: usize) -> usize {
        let start: usize = self.text.split('\n').take(line).map(|l| l.len() + 1).sum();
        let line_text = self.text[start..].split('\n').next().unwrap_or_default();
        start
            + line_text
                .char_indices()
                .nth(col)
                .map(|(i, _)| i)
                .unwrap_or(line_text.len())
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_cursor_at_end() {
        let editor = PromptEditor::new("abc");
        assert_eq!(editor.cursor(), 3);
        assert_eq!(editor.cursor_line_col(), (0, 3));
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut editor = PromptEditor::new("ab");
        editor.insert_char('c');
        assert_eq!(editor.text(), "abc");
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(), "a");
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut editor = PromptEditor::new("Zürich");
        editor.move_home();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.cursor_line_col(), (0, 2));
        editor.backspace();
        assert_eq!(editor.text(), "Zrich");
        editor.insert_char('é');
        assert_eq!(editor.text(), "Zérich");
        editor.move_left();
        editor.delete();
        assert_eq!(editor.text(), "Zrich");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut editor = PromptEditor::new("x");
        editor.delete();
        assert_eq!(editor.text(), "x");
    }

    #[test]
    fn test_home_end_respect_lines() {
        let mut editor = PromptEditor::new("first\nsecond");
        editor.move_home();
        assert_eq!(editor.cursor_line_col(), (1, 0));
        editor.move_left();
        assert_eq!(editor.cursor_line_col(), (0, 5));
        editor.move_home();
        assert_eq!(editor.cursor(), 0);
        editor.move_end();
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn test_up_down_keep_column() {
        let mut editor = PromptEditor::new("Zürich office\nab\nCustomer ID");
        editor.move_up();
        assert_eq!(editor.cursor_line_col(), (1, 2));
        editor.move_up();
        assert_eq!(editor.cursor_line_col(), (0, 2));
        assert_eq!(&editor.text()[editor.cursor()..], "rich office\nab\nCustomer ID");
        editor.move_up();
        assert_eq!(editor.cursor_line_col(), (0, 2));

        editor.move_end();
        editor.move_down();
        assert_eq!(editor.cursor_line_col(), (1, 2));
        editor.move_down();
        assert_eq!(editor.cursor_line_col(), (2, 2));
        editor.move_down();
        assert_eq!(editor.cursor_line_col(), (2, 2));
    }

    #[test]
    fn test_newline_splits_line() {
        let mut editor = PromptEditor::new("ab");
        editor.move_left();
        editor.insert_newline();
        assert_eq!(editor.text(), "a\nb");
        assert_eq!(editor.cursor_line_col(), (1, 0));
    }
}
