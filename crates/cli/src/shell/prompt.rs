use nu_ansi_term::Color;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Shows the breadcrumb trail of the current page.
pub struct TrailPrompt {
    trail: Vec<String>,
}

impl TrailPrompt {
    pub fn new(trail: Vec<String>) -> Self {
        Self { trail }
    }
}

impl Prompt for TrailPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let prefix = Color::LightBlue.bold().paint("wayfinder");
        let path = if self.trail.is_empty() {
            "/".to_string()
        } else {
            shorten_trail(&self.trail)
        };
        Cow::Owned(format!("{} {} > ", prefix, Color::Yellow.paint(path)))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("(search) ")
    }
}

/// Abbreviate all but the last two titles to their first character.
fn shorten_trail(trail: &[String]) -> String {
    let keep_from = trail.len().saturating_sub(2);
    trail
        .iter()
        .enumerate()
        .map(|(i, title)| {
            if i < keep_from {
                title.chars().next().map(String::from).unwrap_or_default()
            } else {
                title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
