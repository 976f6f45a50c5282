use wayfinder_api::SearchInput;
use super::context::ShellContext;
use super::view::{HistoryRow, render_menu, render_trail};
use anyhow::{anyhow, bail};
use clap::Parser;
use clap::error::ErrorKind;
use nu_ansi_term::Color;
use tabled::{Table, settings::Style};

/// Helper struct for Clap parsing within the shell
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(no_binary_name = true)]
pub enum ShellCommand {
    /// Show the menu as the surface currently displays it
    Menu,
    /// Select a menu item, opening its page
    Open {
        /// Page id
        id: String,
    },
    /// Return to the previous page
    Back,
    /// Show the breadcrumb trail of a page
    Crumbs {
        /// Page id (optional, defaults to the current page)
        id: Option<String>,
    },
    /// Type into the menu search box
    Find {
        /// Search text; an empty query restores the full menu
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Submit the search box, optionally typing the query first
    Submit {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print the current page
    Where,
    /// Print the back history, most recent first
    History,
    /// Clear the screen
    Clear,
}

impl ShellCommand {
    /// Automatically generates the list of available command names from the enum.
    pub fn command_names() -> Vec<String> {
        use clap::CommandFactory;
        let cmd = Self::command();
        let mut names = vec!["help".to_string(), "exit".to_string(), "quit".to_string()];
        names.extend(cmd.get_subcommands().map(|s| s.get_name().to_string()));
        names
    }

    pub fn execute(&self, context: &ShellContext) -> anyhow::Result<String> {
        match self {
            ShellCommand::Menu => Ok(render_menu(
                &context.menu.main(),
                &context.menu.footer(),
                context.menu.selected().as_deref(),
            )),
            ShellCommand::Open { id } => {
                if context.menu_item(id).is_none() {
                    bail!("no menu item with id '{id}'");
                }
                context.menu.select(id);
                Ok(String::new())
            }
            ShellCommand::Back => {
                if !context.service().can_go_back() {
                    return Ok("Nothing to go back to.".to_string());
                }
                context.service().go_back();
                Ok(String::new())
            }
            ShellCommand::Crumbs { id } => {
                let id = id
                    .clone()
                    .or_else(|| context.service().current_page_id())
                    .ok_or_else(|| anyhow!("no page given and no page open"))?;
                let trail = context.service().breadcrumbs(&id);
                if trail.is_empty() {
                    bail!("unknown page '{id}'");
                }
                Ok(render_trail(&trail))
            }
            ShellCommand::Find { text } => {
                let search = context
                    .search_box()
                    .ok_or_else(|| anyhow!("search is disabled for this menu"))?;
                search.type_text(&text.join(" "));
                let suggestions = search.suggestions();
                if suggestions.is_empty() && !text.is_empty() {
                    return Ok("NO MATCHING PAGES".to_string());
                }
                Ok(render_menu(
                    &context.menu.main(),
                    &[],
                    context.menu.selected().as_deref(),
                ))
            }
            ShellCommand::Submit { text } => {
                let search = context
                    .search_box()
                    .ok_or_else(|| anyhow!("search is disabled for this menu"))?;
                if !text.is_empty() {
                    search.type_text(&text.join(" "));
                }
                let query = search.text();
                if query.trim().is_empty() {
                    bail!("nothing to submit");
                }
                search.submit();
                // A matched query clears the box
                if search.text() == query {
                    return Ok("NO MATCHING PAGES".to_string());
                }
                Ok(String::new())
            }
            ShellCommand::Where => Ok(match context.current() {
                Some(page) => format!(
                    "{} {}\n{}",
                    Color::Yellow.bold().paint(&page.title),
                    Color::DarkGray.paint(format!("({})", page.id)),
                    context.frame.shown().unwrap_or_default()
                ),
                None => "No page open.".to_string(),
            }),
            ShellCommand::History => {
                let service = context.service();
                let rows: Vec<HistoryRow> = service
                    .history()
                    .into_iter()
                    .rev()
                    .enumerate()
                    .map(|(i, id)| HistoryRow {
                        step: i + 1,
                        title: service.page(&id).map(|p| p.title).unwrap_or_default(),
                        id,
                    })
                    .collect();
                if rows.is_empty() {
                    return Ok("History is empty.".to_string());
                }
                Ok(Table::new(&rows).with(Style::psql()).to_string())
            }
            ShellCommand::Clear => Ok(String::new()),
        }
    }
}

pub fn parse_shell_command(input: &str) -> anyhow::Result<Option<ShellCommand>> {
    // Use shlex to split arguments while respecting quotes
    let args = shlex::split(input).ok_or_else(|| anyhow!("invalid quoting"))?;

    match ShellCommand::try_parse_from(args) {
        Ok(c) => Ok(Some(c)),
        Err(e) => {
            // Handle help/version display without returning an error
            if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion {
                println!("{}", e);
                return Ok(None);
            }
            Err(e.into())
        }
    }
}
