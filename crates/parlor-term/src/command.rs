//! Front-end command parsing.

use std::time::Duration;

use parlor_core::{Legality, Square};

use crate::error::TermError;

/// A `setoption` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOption {
    /// `setoption name Legality value pseudo|strict`
    Legality(Legality),
    /// `setoption name Clock value <seconds>`
    Clock(Duration),
}

/// A parsed front-end command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `newgame` -- reset the session, applying pending options.
    NewGame,
    /// `click <row> <col>` -- a raw square click.
    Click { row: u8, col: u8 },
    /// `select <sq>` -- a square click in algebraic form.
    Select(Square),
    /// `move <from> <to>` -- play a move directly.
    Move { from: Square, to: Square },
    /// `board` -- print the board and capture tally.
    Board,
    /// `moves` -- list the selected piece's destinations.
    Moves,
    /// `history` -- print the move list.
    History,
    /// `status` -- print the status line.
    Status,
    /// `tick <seconds>` -- run the side to move's clock.
    Tick(Duration),
    /// `clock` -- print both clocks.
    Clock,
    /// `setoption name <id> value <v>`
    SetOption(TermOption),
    /// `quit` -- leave the loop.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, TermError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "newgame" => Ok(Command::NewGame),
        "board" => Ok(Command::Board),
        "moves" => Ok(Command::Moves),
        "history" => Ok(Command::History),
        "status" => Ok(Command::Status),
        "clock" => Ok(Command::Clock),
        "quit" => Ok(Command::Quit),
        "click" => Ok(Command::Click {
            row: parse_int(tokens.get(1), "click", "row")?,
            col: parse_int(tokens.get(2), "click", "col")?,
        }),
        "select" => Ok(Command::Select(parse_square(tokens.get(1), "select", "square")?)),
        "move" => Ok(Command::Move {
            from: parse_square(tokens.get(1), "move", "from")?,
            to: parse_square(tokens.get(2), "move", "to")?,
        }),
        "tick" => {
            let secs: u64 = parse_int(tokens.get(1), "tick", "seconds")?;
            Ok(Command::Tick(Duration::from_secs(secs)))
        }
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `name <id> value <v>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, TermError> {
    let [name_kw, name, value_kw, value] = tokens else {
        return Err(TermError::MalformedSetOption);
    };
    if *name_kw != "name" || *value_kw != "value" {
        return Err(TermError::MalformedSetOption);
    }

    let option = match name.to_ascii_lowercase().as_str() {
        "legality" => {
            let legality = value.parse().map_err(|_| TermError::InvalidOptionValue {
                name: "Legality",
                value: value.to_string(),
            })?;
            TermOption::Legality(legality)
        }
        "clock" => {
            let secs: u64 = value.parse().map_err(|_| TermError::InvalidOptionValue {
                name: "Clock",
                value: value.to_string(),
            })?;
            TermOption::Clock(Duration::from_secs(secs))
        }
        _ => {
            return Err(TermError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

fn parse_square(token: Option<&&str>, command: &'static str, argument: &'static str) -> Result<Square, TermError> {
    let text = token.ok_or(TermError::MissingArgument { command, argument })?;
    Square::from_algebraic(text).ok_or_else(|| TermError::InvalidSquare {
        text: text.to_string(),
    })
}

fn parse_int<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, TermError> {
    let value = token.ok_or(TermError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| TermError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}
