//! Player input parsing.
//!
//! Each line holds one command: a move as two integers separated by
//! whitespace and/or a comma (`1 2`, `1,2`, `1, 2`), or `quit`.

use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at `(x, y)`.
    Move { x: i32, y: i32 },
    /// Stop playing.
    Quit,
}

/// Errors that can occur when parsing an input line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two coordinates, got {0}")]
    WrongArity(usize),

    #[error("invalid coordinate: {0:?}")]
    InvalidNumber(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(Some(Command::Quit));
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(InputError::WrongArity(parts.len()));
        }

        let number = |s: &str| {
            s.parse::<i32>()
                .map_err(|_| InputError::InvalidNumber(s.to_string()))
        };
        Ok(Some(Command::Move {
            x: number(parts[0])?,
            y: number(parts[1])?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_moves() {
        let expected = Some(Command::Move { x: 1, y: 2 });
        assert_eq!(Command::parse("1 2"), Ok(expected));
        assert_eq!(Command::parse("1,2"), Ok(expected));
        assert_eq!(Command::parse("  1 ,  2 \n"), Ok(expected));
        assert_eq!(
            Command::parse("-1 0"),
            Ok(Some(Command::Move { x: -1, y: 0 }))
        );
    }

    #[test]
    fn parse_quit_and_blank() {
        assert_eq!(Command::parse("quit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("Q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Command::parse("1"), Err(InputError::WrongArity(1)));
        assert_eq!(Command::parse("1 2 3"), Err(InputError::WrongArity(3)));
        assert_eq!(
            Command::parse("a 2"),
            Err(InputError::InvalidNumber("a".to_string()))
        );
        assert_eq!(
            Command::parse("1 99999999999"),
            Err(InputError::InvalidNumber("99999999999".to_string()))
        );
    }
}
