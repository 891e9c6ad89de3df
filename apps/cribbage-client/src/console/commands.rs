//! Console input: one line, one command.

use crate::domain::{Card, PlayerId};
use crate::error::ClientError;
use crate::errors::ErrorCode;
use crate::services::Event;

pub const HELP: &str = "\
commands:
  <player> <card>   select a card, e.g. `1 AS`, `2 10h`, `2 qd`
  ok                acknowledge the open prompt (accepts a new game)
  no                decline the open prompt
  cancel            abort the request in flight
  new               start a new game
  refresh           reload the authority's game
  help              show this text
  quit              leave the table";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, ClientError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ClientError::invalid(ErrorCode::ValidationError, "empty command"));
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "ok" | "y" | "yes" => Command::Event(Event::Acknowledge),
        "no" | "n" | "cancel" => Command::Event(Event::Cancel),
        "new" => Command::Event(Event::NewGameRequested),
        "refresh" => Command::Event(Event::RefreshRequested),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        player => {
            let who = parse_player(player)?;
            let token = words.next().ok_or_else(|| {
                ClientError::invalid(ErrorCode::ParseCard, "missing card after player number")
            })?;
            let card: Card = token.parse()?;
            Command::Event(Event::CardSelected { who, card })
        }
    };

    if words.next().is_some() {
        return Err(ClientError::invalid(
            ErrorCode::ValidationError,
            format!("unexpected trailing input in '{}'", line.trim()),
        ));
    }
    Ok(command)
}

/// Players are numbered 1 and 2 on the console.
fn parse_player(s: &str) -> Result<PlayerId, ClientError> {
    match s {
        "1" => Ok(0),
        "2" => Ok(1),
        other => Err(ClientError::invalid(
            ErrorCode::InvalidPlayer,
            format!("unknown command or player '{other}' (type `help`)"),
        )),
    }
}
