//! Question repository
//!
//! The repository holds every known question in stored order. It is opened
//! once per session from a [`Storage`] port and writes the full list back
//! under a single key after every successful addition.

use derive_where::derive_where;
use itertools::{Either, Itertools};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    constants,
    question::{NewQuestion, QuestionFilter, QuestionId, QuestionRecord},
    storage::Storage,
};

/// Errors that can occur while persisting questions
#[derive(Error, Debug)]
pub enum Error {
    /// The question list could not be serialized
    #[error("could not serialize questions")]
    Serialize(#[from] serde_json::Error),
    /// The storage port refused the write
    #[error("could not persist questions: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The ordered collection of stored questions
#[derive_where(Debug)]
pub struct Repository<S> {
    /// Questions in stored order
    questions: Vec<QuestionRecord>,
    /// Saved entries that could not be read as questions, written back untouched
    unreadable: Vec<Value>,
    /// Key under which the list is stored
    key: String,
    /// Durable storage backing the list
    #[derive_where(skip)]
    storage: S,
}

/// Splits saved entries into readable questions and everything else
fn sort_entries(entries: Vec<Value>, key: &str) -> (Vec<QuestionRecord>, Vec<Value>) {
    entries.into_iter().partition_map(|entry| {
        match QuestionRecord::deserialize(&entry) {
            Ok(question) => {
                if question.total_points() > u64::from(constants::question::MAX_TOTAL_POINTS) {
                    debug!(
                        "question {} under `{key}` has {} points",
                        question.id(),
                        question.total_points()
                    );
                }
                Either::Left(question)
            }
            Err(e) => {
                warn!("keeping unreadable question under `{key}` as is: {e}");
                Either::Right(entry)
            }
        }
    })
}

impl<S: Storage> Repository<S> {
    /// Opens the repository stored under the default key
    ///
    /// See [`Repository::open_with_key`].
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, constants::storage::QUESTIONS_KEY)
    }

    /// Opens the repository stored under `key`
    ///
    /// The stored list is read once. A missing entry yields an empty
    /// repository. Entries that cannot be read as questions are logged and
    /// left out of the list, but they are kept and written back on the next
    /// save, so nothing saved is ever dropped. A value that is not a list
    /// at all is kept the same way as a single entry.
    ///
    /// # Arguments
    ///
    /// * `storage` - The durable store to read from and write to
    /// * `key` - The key holding the serialized question list
    pub fn open_with_key(storage: S, key: &str) -> Self {
        let (questions, unreadable) = match storage.get(key) {
            Ok(Some(saved)) => match serde_json::from_str::<Value>(&saved) {
                Ok(Value::Array(entries)) => sort_entries(entries, key),
                Ok(other) => {
                    warn!("ignoring question list under `{key}` that is not a list");
                    (Vec::new(), vec![other])
                }
                Err(e) => {
                    warn!("ignoring malformed question list under `{key}`: {e}");
                    (Vec::new(), vec![Value::String(saved)])
                }
            },
            Ok(None) => (Vec::new(), Vec::new()),
            Err(e) => {
                warn!("could not read question list under `{key}`: {e}");
                (Vec::new(), Vec::new())
            }
        };

        Self {
            questions,
            unreadable,
            key: key.to_owned(),
            storage,
        }
    }

    /// Adds a validated question, assigning it a fresh ID
    ///
    /// The question is appended to the end of the list and the whole list
    /// is written back to storage. Nothing changes if the write fails.
    ///
    /// # Returns
    ///
    /// The stored record with its assigned ID
    ///
    /// # Errors
    ///
    /// * `Error::Serialize` - The list could not be serialized
    /// * `Error::Storage` - The storage port refused the write
    pub fn add(&mut self, question: NewQuestion) -> Result<QuestionRecord, Error> {
        let id = QuestionId::after(self.questions.iter().map(QuestionRecord::id).max());
        let record = question.with_id(id);

        self.persist_with(&record)?;
        self.questions.push(record.clone());

        info!("added question {id} ({} stored)", self.questions.len());

        Ok(record)
    }

    /// Writes the list with `added` appended, followed by the unreadable entries
    fn persist_with(&mut self, added: &QuestionRecord) -> Result<(), Error> {
        let mut entries = self
            .questions
            .iter()
            .chain(std::iter::once(added))
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        entries.extend(self.unreadable.iter().cloned());

        let serialized = serde_json::to_string(&entries)?;
        self.storage
            .set(&self.key, &serialized)
            .map_err(|e| Error::Storage(Box::new(e)))
    }
}

impl<S> Repository<S> {
    /// Returns every question in stored order
    pub fn list(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Returns the number of saved entries that could not be read as questions
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    /// Returns the number of stored questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks whether no question is stored
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterates over the questions passing `filter`, in stored order
    pub fn filtered<'a>(
        &'a self,
        filter: &'a QuestionFilter,
    ) -> impl Iterator<Item = &'a QuestionRecord> + 'a {
        self.questions.iter().filter(move |q| filter.matches(q))
    }

    /// Returns the distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.category().to_owned())
            .unique()
            .collect()
    }

    /// Returns the storage backing this repository
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
