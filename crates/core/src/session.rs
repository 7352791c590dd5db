//! Session module - attempt policy and the terminal score hand-off

/// Settings supplied once by the host when the game view opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether a player may submit more than one score
    pub multiple_attempts: bool,
    /// Score of the player's earlier attempt, if any
    pub previous_score: Option<u64>,
}

impl SessionConfig {
    /// A new attempt may begin when there is no earlier score, or repeats are allowed
    pub fn should_play(&self) -> bool {
        self.previous_score.is_none() || self.multiple_attempts
    }

    /// At most one score will ever be recorded for this player
    pub fn single_attempt(&self) -> bool {
        !self.multiple_attempts
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            multiple_attempts: true,
            previous_score: None,
        }
    }
}

/// Terminal score emitted exactly once when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub score: u64,
    pub level: u32,
    pub rows_cleared: u32,
    pub single_attempt: bool,
}

/// Progress of a collaborator request, reported back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProgressState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl ProgressState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressState::NotStarted => "notStarted",
            ProgressState::InProgress => "inProgress",
            ProgressState::Completed => "completed",
            ProgressState::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_always_plays() {
        let config = SessionConfig {
            multiple_attempts: false,
            previous_score: None,
        };
        assert!(config.should_play());
    }

    #[test]
    fn test_repeat_needs_multiple_attempts() {
        let single = SessionConfig {
            multiple_attempts: false,
            previous_score: Some(40),
        };
        assert!(!single.should_play());

        let multi = SessionConfig {
            multiple_attempts: true,
            previous_score: Some(40),
        };
        assert!(multi.should_play());
    }
}
