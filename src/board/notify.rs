//! Bingo count transitions
//!
//! Celebration fires on increases only. Losing a line (unmarking, or a
//! shuffle that breaks one) just lowers the stored count quietly.

/// What happened to the bingo count after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoTransition {
    /// New lines completed
    Gained { delta: u32 },
    /// Lines were broken
    Lost,
    /// Count did not move
    Unchanged,
}

impl BingoTransition {
    /// Classify the move from `previous` to `current`
    pub fn between(previous: u32, current: u32) -> Self {
        if current > previous {
            BingoTransition::Gained {
                delta: current - previous,
            }
        } else if current < previous {
            BingoTransition::Lost
        } else {
            BingoTransition::Unchanged
        }
    }

    /// Whether confetti should fire
    pub fn celebrates(&self) -> bool {
        matches!(self, BingoTransition::Gained { .. })
    }

    /// Whether the stored count changed and must be saved
    pub fn needs_save(&self) -> bool {
        !matches!(self, BingoTransition::Unchanged)
    }

    /// Toast text for a gain
    pub fn message(&self) -> Option<String> {
        match self {
            BingoTransition::Gained { delta: 1 } => Some("Bingo Completed!".to_string()),
            BingoTransition::Gained { delta } => Some(format!("{} New Bingos!", delta)),
            _ => None,
        }
    }
}
