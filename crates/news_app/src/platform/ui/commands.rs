use news_core::{Msg, ParseSortByError, SortBy, DEFAULT_CATEGORIES};

pub const HELP: &str = "\
Commands:
  category <name> | cat <name>   browse a category (or type its number)
  sort <publishedAt|relevance|popularity>
  search <term>                  search all news
  home                           leave search, back to the last category
  more                           load the next page
  refresh                        reload the current listing
  help                           show this text
  quit                           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("no category number {0} (1-{max})", max = DEFAULT_CATEGORIES.len())]
    NoSuchCategory(usize),
    #[error(transparent)]
    Sort(#[from] ParseSortByError),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => UiCommand::Quit,
        "help" | "?" => UiCommand::Help,
        "home" => UiCommand::Dispatch(Msg::HomeClicked),
        "more" | "m" => UiCommand::Dispatch(Msg::LoadMoreClicked),
        "refresh" | "r" => UiCommand::Dispatch(Msg::Refresh),
        "category" | "cat" => {
            let name = required(rest, "category")?;
            UiCommand::Dispatch(Msg::CategorySelected(name.to_string()))
        }
        "sort" => {
            let sort: SortBy = required(rest, "sort")?.parse()?;
            UiCommand::Dispatch(Msg::SortSelected(sort))
        }
        // Blank terms go through; the reducer ignores them.
        "search" | "s" => UiCommand::Dispatch(Msg::SearchSubmitted(rest.to_string())),
        _ => match word.parse::<usize>() {
            Ok(number) => {
                let name = number
                    .checked_sub(1)
                    .and_then(|index| DEFAULT_CATEGORIES.get(index))
                    .ok_or(CommandError::NoSuchCategory(number))?;
                UiCommand::Dispatch(Msg::CategorySelected((*name).to_string()))
            }
            Err(_) => return Err(CommandError::Unknown(word.to_string())),
        },
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}
