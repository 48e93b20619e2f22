//! Configuration constants for the Feud game engine
//!
//! This module contains the limits, defaults, and thresholds used
//! throughout the engine to validate authored questions and to drive
//! scoring and timing consistently.

/// Scoring constants
pub mod score {
    /// Points added to a team each time it is awarded
    pub const INCREMENT: u64 = 10;
    /// Display name of the first team
    pub const TEAM_A_NAME: &str = "Team A";
    /// Display name of the second team
    pub const TEAM_B_NAME: &str = "Team B";
    /// Maximum length of a team display name
    pub const MAX_TEAM_NAME_LENGTH: usize = 30;
}

/// Question authoring constants
pub mod question {
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 200;
    /// Maximum length of an answer text in characters
    pub const MAX_ANSWER_LENGTH: usize = 200;
    /// Upper bound for the summed points of all answers of a question
    pub const MAX_TOTAL_POINTS: u32 = 100;
    /// Lowest round tier
    pub const MIN_ROUND: u8 = 1;
    /// Highest round tier (the final round)
    pub const MAX_ROUND: u8 = 4;
    /// Minimum time limit in seconds accepted by the authoring form
    pub const MIN_TIME_LIMIT: u32 = 10;
    /// Maximum time limit in seconds accepted by the authoring form
    pub const MAX_TIME_LIMIT: u32 = 300;
    /// Time limit in seconds used when none is given
    pub const DEFAULT_TIME_LIMIT: u32 = 30;
    /// Category assigned to questions created through the authoring form
    pub const CUSTOM_CATEGORY: &str = "Custom";
}

/// Persistence constants
pub mod storage {
    /// Key under which the full question list is stored
    pub const QUESTIONS_KEY: &str = "coffeeFeudQuestions";
}

/// Timer constants
pub mod timer {
    use std::time::Duration;

    /// Interval between two countdown ticks
    pub const TICK: Duration = Duration::from_secs(1);
    /// Remaining fraction below which the timer is considered low
    pub const LOW_FRACTION: f64 = 0.6;
    /// Remaining fraction below which the timer is considered critical
    pub const CRITICAL_FRACTION: f64 = 0.3;
}

/// Audio cue constants
pub mod sound {
    /// Cue played whenever a single answer is revealed
    pub const REVEAL_CUE: &str = "/reveal.mp3";
    /// Maximum length of a cue path
    pub const MAX_CUE_LENGTH: usize = 200;
}
