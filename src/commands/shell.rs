//! Interactive roster session over stdin/stdout.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::config;
use crate::core::SortDirection;
use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::session::Session;

const HELP_TEXT: &str = "\
Commands:
  add <name> <score>   add a student (score 0-100)
  asc                  show the roster sorted ascending
  desc                 show the roster sorted descending
  list                 show the roster in insertion order
  clear                remove all students
  help                 show this help
  quit                 end the session
";

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Add { name: String, score: String },
    Sort(SortDirection),
    List,
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Pure function to parse a shell input line.
///
/// `add` treats the last token as the score and everything between as the
/// name, so multi-word names need no quoting: `add Mary Jane 88`.
fn parse_command(line: &str) -> ShellCommand {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return ShellCommand::Empty;
    };

    match keyword {
        "add" => {
            let (score, name_parts) = match args.split_last() {
                Some((score, name_parts)) => (*score, name_parts),
                None => ("", args),
            };
            ShellCommand::Add {
                name: name_parts.join(" "),
                score: score.to_string(),
            }
        }
        "asc" | "ascending" => ShellCommand::Sort(SortDirection::Ascending),
        "desc" | "descending" => ShellCommand::Sort(SortDirection::Descending),
        "list" => ShellCommand::List,
        "clear" => ShellCommand::Clear,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    }
}

pub fn run_shell(no_seed: bool, plain: bool, config_path: Option<PathBuf>) -> Result<()> {
    let file_config = config::load_config(config_path.as_deref());

    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::new(file_config.color_mode()).apply_env()
    };
    let fmt = ColoredFormatter::new(formatting);

    let mut session = if no_seed {
        Session::new()
    } else {
        Session::from_seed(file_config.seed_students())
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let interactive = stdin.is_terminal();

    if !no_seed {
        print!("{}", session.render_current("Loaded default students."));
    }
    if interactive {
        println!("{}", fmt.dim("Type 'help' for commands."));
        print!("> ");
        stdout.flush()?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        log::debug!("shell input: {line:?}");

        match parse_command(&line) {
            ShellCommand::Add { name, score } => match session.on_add(&name, &score) {
                Ok(block) => print!("{block}"),
                Err(e) => eprintln!("{}", fmt.error(&e.to_string())),
            },
            ShellCommand::Sort(direction) => print!("{}", session.on_sort(direction)),
            ShellCommand::List => print!("{}", session.render_current("Current roster")),
            ShellCommand::Clear => print!("{}", session.on_clear()),
            ShellCommand::Help => print!("{}", fmt.info(HELP_TEXT)),
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
            ShellCommand::Unknown(keyword) => {
                eprintln!(
                    "{}",
                    fmt.error(&format!("Unknown command {keyword:?} (try 'help')"))
                );
            }
        }

        if interactive {
            print!("> ");
            stdout.flush()?;
        }
    }

    Ok(())
}
