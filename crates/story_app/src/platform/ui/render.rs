use story_core::{AppViewModel, Record};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
// Save cursor, jump to the first line, clear it; restore after writing.
const HEADER_START: &str = "\x1b7\x1b[1;1H\x1b[2K";
const HEADER_END: &str = "\x1b8";

pub fn headline(view: &AppViewModel, total_comments: u64) -> String {
    if view.clock.is_empty() {
        format!("Story Search | Total Comments {total_comments}")
    } else {
        format!(
            "Story Search | Total Comments {total_comments} | It is {}",
            view.clock
        )
    }
}

/// Full-screen repaint of the current view.
pub fn render(view: &AppViewModel, total_comments: u64, notice: Option<&str>) -> String {
    let mut lines = vec![headline(view, total_comments), String::new()];

    let hint = if view.can_submit {
        ""
    } else {
        "  (enter a query to search)"
    };
    lines.push(format!("Search: {}{}", view.query, hint));
    lines.push(String::new());

    if view.stories.is_error {
        lines.push("Something went wrong ...".to_string());
    }
    if view.stories.is_loading {
        lines.push("Loading ...".to_string());
    } else {
        lines.extend(
            view.stories
                .data
                .iter()
                .enumerate()
                .map(|(i, record)| format_row(i + 1, record)),
        );
    }

    lines.push(String::new());
    if let Some(notice) = notice {
        lines.push(notice.to_string());
    }
    lines.push("> ".to_string());

    let mut out = String::from(CLEAR_SCREEN);
    out.push_str(&lines.join("\n"));
    out
}

/// Repaints only the headline, leaving the cursor where the user is typing.
pub fn render_headline(view: &AppViewModel, total_comments: u64) -> String {
    format!(
        "{HEADER_START}{}{HEADER_END}",
        headline(view, total_comments)
    )
}

fn format_row(index: usize, record: &Record) -> String {
    let link = if record.url.is_empty() {
        String::new()
    } else {
        format!(" <{}>", record.url)
    };
    format!(
        "{index:>3}. {title}{link} | {author} | {comments} comments | {points} points",
        title = record.title,
        author = record.author,
        comments = record.num_comments,
        points = record.points,
    )
}
