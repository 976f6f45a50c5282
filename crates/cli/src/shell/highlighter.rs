use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

pub struct WayfinderHighlighter {
    commands: Vec<String>,
    page_ids: Vec<String>,
}

impl WayfinderHighlighter {
    pub fn new(commands: Vec<String>, page_ids: Vec<String>) -> Self {
        Self { commands, page_ids }
    }
}

impl Highlighter for WayfinderHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled_text = StyledText::new();
        let mut current_pos = 0;

        for word in line.split_inclusive(char::is_whitespace) {
            let trimmed = word.trim();
            let style = if trimmed.is_empty() {
                Style::new()
            } else if line[..current_pos].trim().is_empty() {
                if self.commands.iter().any(|c| c == trimmed) {
                    Style::new().fg(Color::LightGreen).bold()
                } else {
                    Style::new()
                }
            } else if trimmed.starts_with('-') {
                Style::new().fg(Color::Cyan)
            } else if self.page_ids.iter().any(|id| id == trimmed) {
                Style::new().fg(Color::Yellow)
            } else {
                Style::new()
            };

            styled_text.push((style, word.to_string()));
            current_pos += word.len();
        }

        styled_text
    }
}
