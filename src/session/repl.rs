use super::{Action, Session};
use crate::analyze::Scorer;
use crate::error::{EcoError, Result};
use crate::render::{render, OutputFormat, View};
use crate::types::input::{Guess, ProductInput};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "ecoscan> ";

pub const HELP: &str = "\
commands:
  name <text>      set product name (optional)
  desc <text>      set short description (materials, packaging)
  guess <0-100>    how eco-friendly you think it is
  save             save inputs
  analyze          compute the eco-score
  accuracy         compare your guess with the score
  explain          show the AI explanation
  reset            clear everything
  show             redraw the page
  help             this text
  quit             leave";

/// Uncommitted form fields; `save` turns them into a `ProductInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    name: String,
    description: String,
    guess: Guess,
}

impl Draft {
    fn new(guess: Guess) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            guess,
        }
    }

    fn to_input(&self) -> ProductInput {
        ProductInput::new(self.name.clone(), self.description.clone(), self.guess)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Name(String),
    Desc(String),
    Guess(Guess),
    Dispatch(Action),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str, draft: &Draft) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let command = match verb.to_lowercase().as_str() {
        "name" => Command::Name(rest.to_string()),
        "desc" | "description" => Command::Desc(rest.to_string()),
        "guess" => Command::Guess(Guess::parse(rest)?),
        "save" => Command::Dispatch(Action::Save(draft.to_input())),
        "analyze" => Command::Dispatch(Action::Analyze),
        "accuracy" => Command::Dispatch(Action::ShowAccuracy),
        "explain" => Command::Dispatch(Action::ShowExplanation),
        "reset" => Command::Dispatch(Action::Reset),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(EcoError::ActionUnavailable(format!(
                "unknown command '{other}' (try 'help')"
            )))
        }
    };
    Ok(Some(command))
}

/// Drives one interactive session until `quit` or end of input and returns
/// the final session.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    scorer: &Scorer,
    default_guess: Guess,
    format: OutputFormat,
) -> Result<Session> {
    let mut session = Session::with_default_guess(default_guess);
    let mut draft = Draft::new(default_guess);

    writeln!(writer, "{}", render(&View::of(&session, scorer), format)?)?;
    writeln!(writer, "type 'help' for commands")?;
    write!(writer, "{PROMPT}")?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        match parse_command(&line, &draft) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(writer, "{HELP}")?,
            Ok(Some(Command::Show)) => {
                writeln!(writer, "{}", render(&View::of(&session, scorer), format)?)?
            }
            Ok(Some(Command::Name(name))) => draft.name = name,
            Ok(Some(Command::Desc(description))) => draft.description = description,
            Ok(Some(Command::Guess(guess))) => draft.guess = guess,
            Ok(Some(Command::Dispatch(action))) => {
                let saving = matches!(action, Action::Save(_));
                let resetting = matches!(action, Action::Reset);
                match session.apply(action, scorer) {
                    Ok(next) => {
                        session = next;
                        if resetting {
                            draft = Draft::new(default_guess);
                        }
                        if saving {
                            writeln!(writer, "inputs saved")?;
                        } else {
                            writeln!(writer, "{}", render(&View::of(&session, scorer), format)?)?;
                        }
                    }
                    Err(e) => writeln!(writer, "notice: {e}")?,
                }
            }
            Err(e) => writeln!(writer, "notice: {e}")?,
        }
        write!(writer, "{PROMPT}")?;
        writer.flush()?;
    }

    writeln!(writer)?;
    Ok(session)
}
