use story_core::{CollectionState, Record};

/// One line of terminal input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the query with the text and submit it.
    Search(String),
    /// Submit the current query again.
    Resubmit,
    /// Remove the row with this 1-based index.
    Remove(usize),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Resubmit;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("q" | "quit"), None, None) => Command::Quit,
        (Some("h" | "help"), None, None) => Command::Help,
        (Some("rm"), Some(index), None) => match index.parse::<usize>() {
            Ok(index) if index > 0 => Command::Remove(index),
            _ => Command::Invalid(format!("not a row number: {index}")),
        },
        _ => Command::Invalid(format!("unknown command: {line}")),
    }
}

/// Resolves a 1-based row number against what is on screen. Rows are
/// hidden while loading, so nothing can be removed until the fetch settles.
pub fn row_to_remove(stories: &CollectionState, index: usize) -> Result<Record, String> {
    if stories.is_loading {
        return Err("Wait for loading to finish".to_string());
    }
    index
        .checked_sub(1)
        .and_then(|row| stories.data.get(row))
        .cloned()
        .ok_or_else(|| format!("No row {index}"))
}

pub const HELP: &str =
    "Type a query and press Enter to search. Enter alone searches again. :rm <n> removes row n, :q quits.";
