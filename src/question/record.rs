//! Stored question records
//!
//! A [`QuestionRecord`] is created once through the authoring form and never
//! mutated afterwards. Records are stored as camelCase JSON, and loading
//! tolerates older saves that lack a difficulty or a time limit.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants;

use super::id::QuestionId;

/// How hard a question is expected to be
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Difficulty {
    /// An easy question
    #[serde(alias = "easy")]
    Easy,
    /// A medium question
    #[default]
    #[serde(alias = "medium")]
    Medium,
    /// A hard question
    #[serde(alias = "hard")]
    Hard,
}

/// One survey answer with its share of the responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// The answer as shown once revealed
    #[serde(rename = "answer")]
    pub text: String,
    /// Share of survey responses out of 100
    pub points: u32,
}

impl AnswerEntry {
    /// Creates a new answer entry
    pub fn new(text: impl Into<String>, points: u32) -> Self {
        Self {
            text: text.into(),
            points,
        }
    }
}

/// A validated question that has not been assigned an ID yet
///
/// Only [`QuestionDraft::finish`](super::QuestionDraft::finish) produces
/// these, so every `NewQuestion` satisfies the authoring invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub(super) prompt: String,
    pub(super) face_off_prompt: String,
    pub(super) answers: Vec<AnswerEntry>,
    pub(super) category: String,
    pub(super) round: u8,
    pub(super) difficulty: Difficulty,
    pub(super) time_limit: u32,
}

impl NewQuestion {
    /// Attaches an ID, producing the record that gets stored
    pub fn with_id(self, id: QuestionId) -> QuestionRecord {
        let NewQuestion {
            prompt,
            face_off_prompt,
            answers,
            category,
            round,
            difficulty,
            time_limit,
        } = self;

        QuestionRecord {
            id,
            prompt,
            face_off_prompt,
            answers,
            category,
            round,
            difficulty,
            time_limit,
        }
    }

    /// The answers of this question in display order
    pub fn answers(&self) -> &[AnswerEntry] {
        &self.answers
    }

    /// The question prompt
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Saved IDs are usually decimal strings, but bare numbers also occur
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(QuestionId),
    Millis(u64),
}

impl From<StoredId> for QuestionId {
    fn from(stored: StoredId) -> Self {
        match stored {
            StoredId::Text(id) => id,
            StoredId::Millis(millis) => millis.into(),
        }
    }
}

/// Blank or unknown difficulties fall back to the default
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDifficulty {
    Known(Difficulty),
    Other(String),
}

/// An answer as saved, points possibly fractional
#[derive(Deserialize)]
struct StoredAnswer {
    #[serde(default)]
    answer: String,
    #[serde(default)]
    points: f64,
}

impl From<StoredAnswer> for AnswerEntry {
    fn from(stored: StoredAnswer) -> Self {
        let points = stored.points.round().clamp(0.0, f64::from(u32::MAX)) as u32;
        Self::new(stored.answer, points)
    }
}

/// Serialization helper accepting older stored shapes
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredQuestion {
    id: StoredId,
    question: String,
    face_off_question: Option<String>,
    #[serde(default)]
    answers: Vec<StoredAnswer>,
    category: Option<String>,
    round: Option<u8>,
    difficulty: Option<StoredDifficulty>,
    time_limit: Option<u32>,
}

/// A stored survey question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredQuestion")]
pub struct QuestionRecord {
    /// Unique identifier assigned at creation
    id: QuestionId,
    /// The question text
    #[serde(rename = "question")]
    prompt: String,
    /// Shorter phrasing used in a face-off
    #[serde(rename = "faceOffQuestion")]
    face_off_prompt: String,
    /// Survey answers in display order
    answers: Vec<AnswerEntry>,
    /// Free-text category label
    category: String,
    /// Point-multiplier tier, 1 to 4
    round: u8,
    /// Expected difficulty
    difficulty: Difficulty,
    /// Seconds allotted to the question
    time_limit: u32,
}

impl From<StoredQuestion> for QuestionRecord {
    /// Fills in the fields older saves did not carry
    fn from(stored: StoredQuestion) -> Self {
        let face_off_prompt = stored
            .face_off_question
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| stored.question.clone());

        Self {
            id: stored.id.into(),
            prompt: stored.question,
            face_off_prompt,
            answers: stored.answers.into_iter().map(AnswerEntry::from).collect(),
            category: stored
                .category
                .unwrap_or_else(|| constants::question::CUSTOM_CATEGORY.to_owned()),
            round: stored.round.unwrap_or(constants::question::MIN_ROUND),
            difficulty: match stored.difficulty {
                Some(StoredDifficulty::Known(difficulty)) => difficulty,
                Some(StoredDifficulty::Other(other)) => {
                    if !other.trim().is_empty() {
                        debug!("unknown difficulty `{other}`, using the default");
                    }
                    Difficulty::default()
                }
                None => Difficulty::default(),
            },
            time_limit: stored
                .time_limit
                .filter(|&t| t > 0)
                .unwrap_or(constants::question::DEFAULT_TIME_LIMIT),
        }
    }
}

impl QuestionRecord {
    /// The unique identifier of this question
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// The question text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The face-off phrasing, equal to the prompt when none was given
    pub fn face_off_prompt(&self) -> &str {
        &self.face_off_prompt
    }

    /// The survey answers in display order
    pub fn answers(&self) -> &[AnswerEntry] {
        &self.answers
    }

    /// The category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The round tier
    pub fn round(&self) -> u8 {
        self.round
    }

    /// A human readable label for the round tier
    ///
    /// The multiplier is informational only; scoring never applies it.
    pub fn round_label(&self) -> &'static str {
        match self.round {
            1 => "Round 1 (Single Points)",
            2 => "Round 2 (Double Points)",
            3 => "Round 3 (Triple Points)",
            _ => "Round 4 (Final Round)",
        }
    }

    /// The expected difficulty
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seconds allotted to the question
    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    /// Sum of the points of all answers
    pub fn total_points(&self) -> u64 {
        self.answers.iter().map(|a| u64::from(a.points)).sum()
    }
}

/// Selects which questions take part in a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionFilter {
    /// Every stored question
    #[default]
    All,
    /// Only questions with this exact category
    Category(String),
}

impl QuestionFilter {
    /// Checks whether a question passes this filter
    pub fn matches(&self, question: &QuestionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => question.category == *category,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_front_end_names() {
        let record = NewQuestion {
            prompt: "Name a popular coffee drink".to_owned(),
            face_off_prompt: "Coffee drink?".to_owned(),
            answers: vec![AnswerEntry::new("Espresso", 40)],
            category: "Coffee".to_owned(),
            round: 2,
            difficulty: Difficulty::Easy,
            time_limit: 25,
        }
        .with_id(QuestionId::from(7));

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["question"], "Name a popular coffee drink");
        assert_eq!(json["faceOffQuestion"], "Coffee drink?");
        assert_eq!(json["answers"][0]["answer"], "Espresso");
        assert_eq!(json["answers"][0]["points"], 40);
        assert_eq!(json["timeLimit"], 25);
        assert_eq!(json["difficulty"], "Easy");

        let back: QuestionRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_loads_legacy_shape() {
        let json = r#"{
            "id": "1712345678901",
            "question": "Name something people do first thing in the morning",
            "answers": [{"answer": "Brush teeth", "points": 30, "revealed": false}],
            "category": "Morning Routine",
            "round": 1
        }"#;

        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty(), Difficulty::Medium);
        assert_eq!(record.time_limit(), 30);
        assert_eq!(record.face_off_prompt(), record.prompt());
        assert_eq!(record.answers()[0], AnswerEntry::new("Brush teeth", 30));
    }

    #[test]
    fn test_record_zero_time_limit_defaults() {
        let json = r#"{"id": "1", "question": "Q", "answers": [], "timeLimit": 0, "difficulty": "hard"}"#;

        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time_limit(), 30);
        assert_eq!(record.difficulty(), Difficulty::Hard);
        assert_eq!(record.category(), "Custom");
    }

    #[test]
    fn test_round_label() {
        let mut record: QuestionRecord =
            serde_json::from_str(r#"{"id": "1", "question": "Q", "round": 3}"#).unwrap();
        assert_eq!(record.round_label(), "Round 3 (Triple Points)");
        record.round = 4;
        assert_eq!(record.round_label(), "Round 4 (Final Round)");
    }

    #[test]
    fn test_filter_matches() {
        let record: QuestionRecord =
            serde_json::from_str(r#"{"id": "1", "question": "Q", "category": "Coffee"}"#).unwrap();

        assert!(QuestionFilter::All.matches(&record));
        assert!(QuestionFilter::Category("Coffee".to_owned()).matches(&record));
        assert!(!QuestionFilter::Category("Tea".to_owned()).matches(&record));
    }

    #[test]
    fn test_record_loads_loose_values() {
        let json = r#"{
            "id": 1712345678901,
            "question": "Name a breakfast drink",
            "answers": [{"answer": "Coffee", "points": 12.5}, {"answer": "Tea", "points": 30}],
            "difficulty": ""
        }"#;

        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), QuestionId::from(1_712_345_678_901));
        assert_eq!(record.difficulty(), Difficulty::Medium);
        assert_eq!(
            record.answers(),
            &[AnswerEntry::new("Coffee", 13), AnswerEntry::new("Tea", 30)]
        );
        assert_eq!(record.total_points(), 43);
    }

    #[test]
    fn test_record_rejects_missing_question() {
        let json = r#"{"id": "2", "difficulty": "", "answers": [{"points": 12.5}]}"#;
        assert!(serde_json::from_str::<QuestionRecord>(json).is_err());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
