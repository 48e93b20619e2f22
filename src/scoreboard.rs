//! Team scores and the winner of a game
//!
//! Two teams play against each other. Each award adds a fixed increment to
//! one team; there is no decrement and no upper bound.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::constants::score::{INCREMENT, TEAM_A_NAME, TEAM_B_NAME};

/// One of the two competing teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Team {
    /// The first team
    A,
    /// The second team
    B,
}

/// The result of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// One team scored strictly more
    #[display("{name} wins with {points} points")]
    Winner {
        /// The winning team
        team: Team,
        /// Display name of the winning team
        name: String,
        /// Final score of the winning team
        points: u64,
    },
    /// Both teams scored the same
    #[display("It's a tie")]
    Tie,
}

/// Scores and display names of both teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Display name of each team
    names: EnumMap<Team, String>,
    /// Points of each team
    scores: EnumMap<Team, u64>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::with_names(TEAM_A_NAME, TEAM_B_NAME)
    }
}

impl Scoreboard {
    /// Creates a zeroed scoreboard with custom team names
    pub fn with_names(team_a: &str, team_b: &str) -> Self {
        Self {
            names: enum_map! {
                Team::A => team_a.to_owned(),
                Team::B => team_b.to_owned(),
            },
            scores: EnumMap::default(),
        }
    }

    /// Awards a team the fixed increment
    ///
    /// # Returns
    ///
    /// The team's new score
    pub fn increment(&mut self, team: Team) -> u64 {
        let score = &mut self.scores[team];
        *score = score.saturating_add(INCREMENT);
        *score
    }

    /// Awards team A
    pub fn increment_a(&mut self) -> u64 {
        self.increment(Team::A)
    }

    /// Awards team B
    pub fn increment_b(&mut self) -> u64 {
        self.increment(Team::B)
    }

    /// The score of a team
    pub fn get(&self, team: Team) -> u64 {
        self.scores[team]
    }

    /// The score of team A
    pub fn get_a(&self) -> u64 {
        self.get(Team::A)
    }

    /// The score of team B
    pub fn get_b(&self) -> u64 {
        self.get(Team::B)
    }

    /// The display name of a team
    pub fn name(&self, team: Team) -> &str {
        &self.names[team]
    }

    /// Sets both scores back to zero, keeping the names
    pub fn reset(&mut self) {
        self.scores = EnumMap::default();
    }

    /// Compares the scores
    ///
    /// A strictly greater score wins; equal scores tie.
    pub fn outcome(&self) -> Outcome {
        let (a, b) = (self.get_a(), self.get_b());
        let team = match a.cmp(&b) {
            std::cmp::Ordering::Greater => Team::A,
            std::cmp::Ordering::Less => Team::B,
            std::cmp::Ordering::Equal => return Outcome::Tie,
        };

        Outcome::Winner {
            team,
            name: self.names[team].clone(),
            points: self.scores[team],
        }
    }
}
