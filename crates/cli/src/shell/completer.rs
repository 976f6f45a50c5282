use reedline::{Completer, Span, Suggestion};

/// Completes command names, and page ids after `open` and `crumbs`.
pub struct WayfinderCompleter {
    commands: Vec<String>,
    /// (id, title) of every discovered page
    pages: Vec<(String, String)>,
}

impl WayfinderCompleter {
    pub fn new(commands: Vec<String>, pages: Vec<(String, String)>) -> Self {
        Self { commands, pages }
    }
}

fn suggestion(value: String, description: Option<String>, start: usize, end: usize) -> Suggestion {
    Suggestion {
        value,
        description,
        style: None,
        extra: None,
        span: Span { start, end },
        append_whitespace: true,
        match_indices: None,
    }
}

impl Completer for WayfinderCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line = &line[..pos.min(line.len())];
        let trimmed = line.trim_start();

        if !trimmed.contains(' ') {
            return self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(trimmed))
                .map(|cmd| suggestion(cmd.clone(), None, pos - trimmed.len(), pos))
                .collect();
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if !matches!(parts.first(), Some(&"open") | Some(&"crumbs")) {
            return vec![];
        }

        let last_word = if line.ends_with(' ') {
            ""
        } else {
            parts.last().copied().unwrap_or("")
        };
        let start = pos - last_word.len();

        self.pages
            .iter()
            .filter(|(id, _)| id.starts_with(last_word))
            .map(|(id, title)| suggestion(id.clone(), Some(title.clone()), start, pos))
            .collect()
    }
}
