//! Authoring form input
//!
//! A [`QuestionDraft`] mirrors what the host typed into the authoring form.
//! [`QuestionDraft::finish`] is the only way to obtain a [`NewQuestion`], so
//! everything that reaches the repository has passed validation.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::question::{
    CUSTOM_CATEGORY, DEFAULT_TIME_LIMIT, MAX_ANSWER_LENGTH, MAX_PROMPT_LENGTH, MAX_ROUND,
    MAX_TIME_LIMIT, MAX_TOTAL_POINTS, MIN_ROUND, MIN_TIME_LIMIT,
};

use super::record::{AnswerEntry, Difficulty, NewQuestion};

/// Errors reported to the host when a draft cannot become a question
#[derive(Error, Debug)]
pub enum DraftError {
    /// No answer has both a text and a positive number of points
    #[error("please add at least one valid answer with points")]
    NoValidAnswers,
    /// The answers add up to more than 100 points
    #[error("total points for all answers should not exceed 100, got {0}")]
    TooManyPoints(u64),
    /// A field is outside its allowed range
    #[error(transparent)]
    Invalid(#[from] garde::Report),
}

/// Rejects prompts that are empty once trimmed
#[allow(clippy::ptr_arg)]
fn validate_prompt(value: &String, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        Err(garde::Error::new("question is required"))
    } else {
        Ok(())
    }
}

/// A single answer row of the authoring form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DraftAnswer {
    /// The answer text, possibly blank
    #[garde(length(chars, max = MAX_ANSWER_LENGTH))]
    pub text: String,
    /// The points typed for this answer, zero when left empty
    #[garde(skip)]
    pub points: u32,
}

/// Everything the host entered into the authoring form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionDraft {
    /// The question text (required)
    #[garde(custom(validate_prompt), length(chars, max = MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Optional shorter phrasing for the face-off
    #[garde(length(chars, max = MAX_PROMPT_LENGTH))]
    pub face_off_prompt: String,
    /// Optional category; blank means [`CUSTOM_CATEGORY`]
    #[garde(length(chars, max = MAX_PROMPT_LENGTH))]
    pub category: String,
    /// The round tier
    #[garde(range(min = MIN_ROUND, max = MAX_ROUND))]
    pub round: u8,
    /// Expected difficulty
    #[garde(skip)]
    pub difficulty: Difficulty,
    /// Seconds allotted, zero meaning the default
    #[garde(range(min = MIN_TIME_LIMIT, max = MAX_TIME_LIMIT))]
    pub time_limit: u32,
    /// Answer rows in display order, blank rows included
    #[garde(dive)]
    pub answers: Vec<DraftAnswer>,
}

impl Default for QuestionDraft {
    /// An empty form with a single blank answer row
    fn default() -> Self {
        Self {
            prompt: String::new(),
            face_off_prompt: String::new(),
            category: String::new(),
            round: MIN_ROUND,
            difficulty: Difficulty::default(),
            time_limit: DEFAULT_TIME_LIMIT,
            answers: vec![DraftAnswer::default()],
        }
    }
}

impl QuestionDraft {
    /// Starts a draft with the given prompt and default settings
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Appends an answer row
    #[must_use]
    pub fn with_answer(mut self, text: impl Into<String>, points: u32) -> Self {
        self.answers.push(DraftAnswer {
            text: text.into(),
            points,
        });
        self
    }

    /// Sum of the points currently typed, blank rows included
    ///
    /// This is the running total the form displays while editing.
    pub fn typed_points(&self) -> u64 {
        self.answers.iter().map(|a| u64::from(a.points)).sum()
    }

    /// Validates the draft and turns it into a question ready to be stored
    ///
    /// Answer rows with blank text or zero points are dropped. A blank
    /// face-off prompt falls back to the prompt and a zero time limit to
    /// the default.
    ///
    /// # Errors
    ///
    /// * `DraftError::Invalid` - A field is outside its allowed range or too long
    /// * `DraftError::NoValidAnswers` - No usable answer remains
    /// * `DraftError::TooManyPoints` - The answers add up to more than 100
    pub fn finish(mut self) -> Result<NewQuestion, DraftError> {
        if self.time_limit == 0 {
            self.time_limit = DEFAULT_TIME_LIMIT;
        }

        self.validate()?;

        let answers = self
            .answers
            .iter()
            .filter_map(|a| {
                let text = a.text.trim();
                (!text.is_empty() && a.points > 0).then(|| AnswerEntry::new(text, a.points))
            })
            .collect_vec();

        if answers.is_empty() {
            return Err(DraftError::NoValidAnswers);
        }

        let total: u64 = answers.iter().map(|a| u64::from(a.points)).sum();
        if total > u64::from(MAX_TOTAL_POINTS) {
            return Err(DraftError::TooManyPoints(total));
        }

        let prompt = self.prompt.trim().to_owned();
        let face_off_prompt = match self.face_off_prompt.trim() {
            "" => prompt.clone(),
            face_off => face_off.to_owned(),
        };
        let category = match self.category.trim() {
            "" => CUSTOM_CATEGORY.to_owned(),
            category => category.to_owned(),
        };

        Ok(NewQuestion {
            prompt,
            face_off_prompt,
            answers,
            category,
            round: self.round,
            difficulty: self.difficulty,
            time_limit: self.time_limit,
        })
    }
}
