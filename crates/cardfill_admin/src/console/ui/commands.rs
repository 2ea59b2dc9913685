use thiserror::Error;

use super::screens::ScreenKind;

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Screen(ScreenKind),
    Search(String),
    Filter(Option<String>),
    Next,
    Previous,
    PageSize(usize),
    Refresh,
    Screens,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for the list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown screen {0:?}; type `screens` for the list")]
    UnknownScreen(String),
    #[error("page size must be a positive number, got {0:?}")]
    InvalidPageSize(String),
}

pub const HELP: &[&str] = &[
    "screen <name>      switch to another list (see `screens`)",
    "search [keyword]   search; without a keyword clears the search",
    "filter <value|all> filter on the screen's category or status",
    "next | n           next page",
    "prev | p           previous page",
    "size <n>           change the page size",
    "refresh | r        reload the current page",
    "screens            list the screens",
    "help               show this help",
    "quit | q           exit",
];

/// Parses one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "screen" | "s" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("screen"));
            }
            let kind = ScreenKind::from_name(rest)
                .ok_or_else(|| CommandError::UnknownScreen(rest.to_string()))?;
            Command::Screen(kind)
        }
        "search" | "/" => Command::Search(rest.to_string()),
        "filter" | "f" => match rest {
            "" => return Err(CommandError::MissingArgument("filter")),
            value if value.eq_ignore_ascii_case("all") => Command::Filter(None),
            value => Command::Filter(Some(value.to_string())),
        },
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "size" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("size"));
            }
            match rest.parse::<usize>() {
                Ok(size) if size > 0 => Command::PageSize(size),
                _ => return Err(CommandError::InvalidPageSize(rest.to_string())),
            }
        }
        "refresh" | "r" => Command::Refresh,
        "screens" => Command::Screens,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}
