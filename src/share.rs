//! Progress export
//!
//! Plain-text summary for the share sheet or the clipboard.

use crate::board::BoardState;

/// Link appended to every shared message
pub const SHARE_URL: &str = "shuflovic.github.io/reading_bingo";
/// Share sheet title
pub const SHARE_TITLE: &str = "Reading Bingo 2026 Progress";

/// How a share attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the system share sheet
    Shared,
    /// Written to the clipboard
    Copied,
    /// Every copy mechanism failed
    Failed,
}

impl ShareOutcome {
    /// Toast to show, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some("Progress copied to clipboard!"),
            ShareOutcome::Failed => Some("Could not copy progress"),
        }
    }
}

/// Build the shareable progress text
pub fn progress_message(board: &BoardState) -> String {
    let progress = board.progress();
    let report = board.report();

    let mut message = String::from("📚 READING BINGO 2026 📚\n\n");
    message.push_str(&format!(
        "Progress: {}/{} books archived\n",
        progress.marked, progress.total
    ));
    message.push_str(&format!("Bingo Lines: {}\n\n", report.count));

    let mut completed = board.marked_tasks().peekable();
    if completed.peek().is_some() {
        message.push_str("Completed Tasks:\n");
        for task in completed {
            message.push_str(&format!("◆ {}\n", task));
        }
    }

    message.push('\n');
    message.push_str(SHARE_URL);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FREE_INDEX;

    #[test]
    fn test_empty_board_message() {
        let message = progress_message(&BoardState::new());
        assert_eq!(
            message,
            "📚 READING BINGO 2026 📚\n\n\
             Progress: 0/25 books archived\n\
             Bingo Lines: 0\n\n\
             \nshuflovic.github.io/reading_bingo"
        );
    }

    #[test]
    fn test_completed_tasks_listed_without_free() {
        let mut board = BoardState::new();
        for i in [0, 1, 2, 3, 4, FREE_INDEX] {
            board.toggle_mark(i).unwrap();
        }
        let message = progress_message(&board);

        // FREE counts towards progress but is never listed
        assert!(message.contains("Progress: 6/25 books archived\n"));
        assert!(message.contains("Bingo Lines: 1\n"));
        assert!(message.contains("Completed Tasks:\n◆ On TBR over 5 years\n"));
        assert!(!message.contains("◆ FREE"));
        assert_eq!(message.matches('◆').count(), 5);
        assert!(message.ends_with("\n\nshuflovic.github.io/reading_bingo"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(ShareOutcome::Shared.message(), None);
        assert_eq!(
            ShareOutcome::Copied.message(),
            Some("Progress copied to clipboard!")
        );
        assert_eq!(ShareOutcome::Failed.message(), Some("Could not copy progress"));
    }
}
