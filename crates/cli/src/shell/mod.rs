mod command;
mod completer;
mod context;
mod highlighter;
mod prompt;
mod surface;
pub(crate) mod view;

use nu_ansi_term::Color;
use reedline::{
    ColumnarMenu, DefaultHinter, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder,
    Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::path::PathBuf;
use tracing::{debug, info};
use wayfinder_runtime::NavigationRegistry;

use self::command::{ShellCommand, parse_shell_command};
use self::completer::WayfinderCompleter;
use self::context::ShellContext;
use self::highlighter::WayfinderHighlighter;
use self::prompt::TrailPrompt;

// Shell configuration constants
const SHELL_HISTORY_SIZE: usize = 500;

pub struct ReplServer {
    context: ShellContext,
}

impl ReplServer {
    pub fn new(registry: NavigationRegistry) -> Self {
        Self {
            context: ShellContext::connect(registry),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let pages = self.context.page_ids().len();
        info!(pages, "shell started");
        println!(
            "{} pages discovered. Type 'help' for commands.",
            Color::LightGreen.paint(pages.to_string())
        );
        self.flush_output();

        let line_editor = self.setup_line_editor()?;
        self.run_loop(line_editor)
    }

    fn setup_line_editor(&self) -> anyhow::Result<Reedline> {
        let commands = ShellCommand::command_names();
        let page_ids = self.context.page_ids();
        let pages = self
            .context
            .registry
            .navigator()
            .pages()
            .map(|page| (page.id.clone(), page.title.clone()))
            .collect();

        let completer = Box::new(WayfinderCompleter::new(commands.clone(), pages));
        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let history = match history_file() {
            Some(path) => FileBackedHistory::with_file(SHELL_HISTORY_SIZE, path),
            None => FileBackedHistory::new(SHELL_HISTORY_SIZE),
        }
        .or_else(|e| {
            debug!("history file unavailable: {}", e);
            FileBackedHistory::new(SHELL_HISTORY_SIZE)
        })
        .map_err(|e| anyhow::anyhow!("failed to create shell history: {e}"))?;

        let highlighter = Box::new(WayfinderHighlighter::new(commands, page_ids));

        Ok(Reedline::create()
            .with_history(Box::new(history))
            .with_completer(completer)
            .with_highlighter(highlighter)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_hinter(Box::new(
                DefaultHinter::default().with_style(
                    nu_ansi_term::Style::new()
                        .italic()
                        .fg(nu_ansi_term::Color::LightGray),
                ),
            ))
            .with_edit_mode(Box::new(Emacs::new(keybindings))))
    }

    fn run_loop(&self, mut line_editor: Reedline) -> anyhow::Result<()> {
        loop {
            let prompt = TrailPrompt::new(self.context.trail());
            let sig = line_editor.read_line(&prompt);

            match sig {
                Ok(Signal::Success(buffer)) => {
                    let trimmed = buffer.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == "exit" || trimmed == "quit" {
                        break;
                    }

                    match parse_shell_command(trimmed) {
                        Ok(Some(cmd)) => {
                            match cmd.execute(&self.context) {
                                Ok(output) => {
                                    if matches!(cmd, ShellCommand::Clear) {
                                        let _ = line_editor.clear_screen();
                                    }
                                    self.flush_output();
                                    if !output.is_empty() {
                                        println!("{}", output);
                                    }
                                }
                                Err(e) => {
                                    self.flush_output();
                                    eprintln!("Error: {}", e);
                                }
                            }
                        }
                        Ok(None) => {} // Help or handled by Clap
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn flush_output(&self) {
        for line in self.context.drain_output() {
            println!("{}", line);
        }
    }
}

fn history_file() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".wayfinder");
    path.push("shell");
    std::fs::create_dir_all(&path).ok()?;
    path.push("history");
    Some(path)
}

pub fn run(registry: NavigationRegistry) -> anyhow::Result<()> {
    ReplServer::new(registry).run()
}
