/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Lines of the document (cached for position calculations)
    lines: Vec<String>,
    /// Language identifier reported by the client at open time
    language_id: String,
}

impl Document {
    pub fn new(text: String, language_id: String) -> Self {
        let lines = text.lines().map(|s| s.to_string()).collect();
        Self {
            text,
            lines,
            language_id,
        }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.lines = new_text.lines().map(|s| s.to_string()).collect();
        self.text = new_text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Text of the given line strictly before the cursor column.
    /// Columns beyond the line end clamp to the full line.
    pub fn line_prefix(&self, line: u32, character: u32) -> Option<&str> {
        let line_text = self.lines.get(line as usize)?;
        let mut end = (character as usize).min(line_text.len());
        while !line_text.is_char_boundary(end) {
            end -= 1;
        }
        Some(&line_text[..end])
    }

    /// Get byte offset from position. Walks the raw text so line
    /// terminators count their real width (`\r\n` is two bytes).
    pub fn offset_from_position(&self, line: u32, character: u32) -> usize {
        let mut line_start = 0;
        for _ in 0..line {
            match self.text[line_start..].find('\n') {
                Some(i) => line_start += i + 1,
                None => break,
            }
        }
        let rest = &self.text[line_start..];
        let line_len = rest
            .find(|c| c == '\n' || c == '\r')
            .unwrap_or(rest.len());
        line_start + (character as usize).min(line_len)
    }
}
