//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::cli::SAMPLE_QUESTIONS;
use crate::output::formatter::OutputFormatter;
use nl2sql_application::{AnswerQuestionUseCase, DisplayParams, QueryExecutorPort};
use nl2sql_domain::{Clock, SystemClock};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What the loop should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Quit,
}

/// Interactive question REPL
pub struct QuestionRepl<E: QueryExecutorPort + 'static, C: Clock = SystemClock> {
    use_case: AnswerQuestionUseCase<E, C>,
    formatter: Box<dyn OutputFormatter + Send + Sync>,
    params: DisplayParams,
}

impl<E: QueryExecutorPort + 'static, C: Clock> QuestionRepl<E, C> {
    pub fn new(
        use_case: AnswerQuestionUseCase<E, C>,
        formatter: Box<dyn OutputFormatter + Send + Sync>,
        params: DisplayParams,
    ) -> Self {
        Self {
            use_case,
            formatter,
            params,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("rental-nl2sql").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        Self::print_welcome();

        loop {
            match rl.readline("nl2sql> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        println!("{}", Self::command_text(line));
                        if Self::handle_command(line) == CommandOutcome::Quit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    println!();
                    println!("{}", self.answer(line).await);
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Answer one question and render it with the configured formatter
    pub async fn answer(&self, question: &str) -> String {
        let answer = self.use_case.execute(question).await;
        self.formatter.format_answer(question, &answer, &self.params)
    }

    fn print_welcome() {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      rental-nl2sql - Interactive Mode       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask a question about tenants, landlords, properties or bookings.");
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  /help, /h, /?     - Show this help",
            "  /samples          - Show example questions",
            "  /quit, /exit, /q  - Exit",
            "",
        ]
        .join("\n")
    }

    fn samples_text() -> String {
        let mut text = String::from("Try one of these:\n");
        for question in SAMPLE_QUESTIONS {
            text.push_str(&format!("  - {}\n", question));
        }
        text
    }

    fn command_text(cmd: &str) -> String {
        match cmd {
            "/quit" | "/exit" | "/q" => "Bye!".to_string(),
            "/help" | "/h" | "/?" => Self::help_text(),
            "/samples" => Self::samples_text(),
            _ => format!("Unknown command: {}\nType /help for available commands", cmd),
        }
    }

    /// Returns `Quit` for the exit commands.
    fn handle_command(cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => CommandOutcome::Quit,
            _ => CommandOutcome::Continue,
        }
    }
}
