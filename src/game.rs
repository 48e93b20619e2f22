//! Core game flow and state management
//!
//! This module contains the [`Game`] controller that drives a session from
//! the lobby through every question to the final result. It owns the
//! question repository, the countdown, the reveal tracker, and the
//! scoreboard, and talks to the presentation layer only through the
//! [`Tunnel`] and [`Speaker`] ports.

use std::fmt::Debug;

use garde::Validate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

use crate::{
    constants,
    question::{AnswerEntry, Difficulty, DraftError, QuestionDraft, QuestionFilter, QuestionId, QuestionRecord},
    repository::{self, Repository},
    reveal::RevealTracker,
    scoreboard::{Outcome, Scoreboard, Team},
    session::{Speaker, Tunnel},
    storage::Storage,
    timer::{Countdown, TimerBand, TimerState},
};

/// The phase of a game session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting in the lobby for the host to start
    #[default]
    NotStarted,
    /// Questions are being played
    InProgress,
    /// Every question has been played
    GameOver,
}

/// Global configuration options for a game session
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct Options {
    /// Display name of the first team
    #[garde(length(chars, min = 1, max = constants::score::MAX_TEAM_NAME_LENGTH))]
    pub team_a_name: String,
    /// Display name of the second team
    #[garde(length(chars, min = 1, max = constants::score::MAX_TEAM_NAME_LENGTH))]
    pub team_b_name: String,
    /// Audio cue played when a single answer is revealed
    #[garde(length(chars, max = constants::sound::MAX_CUE_LENGTH))]
    pub reveal_cue: String,
    /// Whether every answer is revealed when the timer runs out
    #[garde(skip)]
    pub reveal_on_time_up: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            team_a_name: constants::score::TEAM_A_NAME.to_owned(),
            team_b_name: constants::score::TEAM_B_NAME.to_owned(),
            reveal_cue: constants::sound::REVEAL_CUE.to_owned(),
            reveal_on_time_up: true,
        }
    }
}

/// Errors returned when a command is not allowed in the current state
#[derive(Error, Debug)]
pub enum Error {
    /// The game has left the lobby already
    #[error("the game has already started")]
    AlreadyStarted,
    /// There is nothing to play in the current view
    #[error("there are no questions to play")]
    NoQuestions,
    /// The command is only available while questions are being played
    #[error("the game is not in progress")]
    NotInProgress,
    /// The current view ran out of questions mid-game
    #[error("there are no questions in this view")]
    EmptyView,
    /// The current question has no answer with this index
    #[error("answer {0} does not exist")]
    NoSuchAnswer(usize),
    /// Neither every answer is revealed nor has the timer run out
    #[error("reveal every answer or wait for the timer before moving on")]
    AdvanceBlocked,
    /// The authoring form was rejected
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// The question could not be stored
    #[error(transparent)]
    Repository(#[from] repository::Error),
}

/// Commands sent by the host's controls
#[derive(Debug, Deserialize, Clone)]
pub enum IncomingMessage {
    /// Leave the lobby and show the first question
    Start,
    /// Reveal the answer at this index
    Reveal(usize),
    /// Reveal every answer and pause the timer
    RevealAll,
    /// Pause or resume the timer
    TogglePause,
    /// Move on to the next question or the results
    Next,
    /// Go back to the lobby and clear the scores
    Reset,
    /// Award a team
    Score(Team),
    /// Change which questions are played
    SelectCategory(QuestionFilter),
    /// Submit the authoring form
    AddQuestion(QuestionDraft),
}

/// Timed events scheduled by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// One second of the countdown has elapsed
    Tick {
        /// Timer generation the tick belongs to; stale ticks are dropped
        generation: u64,
    },
}

/// Content that is only shown once revealed
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum PossiblyHidden<T> {
    /// Content is visible
    Visible(T),
    /// Content is still hidden
    Hidden,
}

/// Countdown information for the presentation layer
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimerMessage {
    /// Seconds remaining
    pub time_left: u32,
    /// Seconds the countdown started from
    pub time_limit: u32,
    /// Fraction of time remaining in `[0, 1]`
    pub progress: f64,
    /// Urgency band
    pub band: TimerBand,
    /// Phase of the countdown
    pub state: TimerState,
}

impl From<&Countdown> for TimerMessage {
    fn from(countdown: &Countdown) -> Self {
        Self {
            time_left: countdown.time_left(),
            time_limit: countdown.time_limit(),
            progress: countdown.progress(),
            band: countdown.band(),
            state: countdown.state(),
        }
    }
}

/// Everything needed to render the question screen
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QuestionMessage {
    /// Index of the current question in the active view (0-based)
    pub index: usize,
    /// Number of questions in the active view
    pub count: usize,
    /// The question text
    pub prompt: String,
    /// The face-off phrasing
    pub face_off_prompt: String,
    /// Category label
    pub category: String,
    /// Expected difficulty
    pub difficulty: Difficulty,
    /// Round tier label
    pub round: String,
    /// Answer slots in display order
    pub answers: Vec<PossiblyHidden<AnswerEntry>>,
    /// Number of revealed answers
    pub revealed: usize,
    /// Countdown state
    pub timer: TimerMessage,
    /// Whether the host paused the timer
    pub paused: bool,
    /// Whether the timer has run out
    pub time_up: bool,
    /// Whether moving on is allowed
    pub can_advance: bool,
    /// Whether this is the last question of the view
    pub is_last: bool,
    /// Current scores
    pub scores: Scoreboard,
}

/// Update messages describing a single change
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum UpdateMessage {
    /// The game left the lobby
    Started {
        /// Number of questions to be played
        count: usize,
    },
    /// A new question is on screen
    QuestionAnnouncement {
        /// Index of the question (0-based)
        index: usize,
        /// Number of questions in the view
        count: usize,
        /// The question text
        prompt: String,
        /// Seconds allotted
        time_limit: u32,
    },
    /// A single answer was revealed
    AnswerRevealed {
        /// Index of the answer
        index: usize,
        /// The revealed answer
        answer: AnswerEntry,
    },
    /// Every answer is now visible
    AllRevealed,
    /// The countdown moved
    Timer {
        /// Seconds remaining
        time_left: u32,
        /// Urgency band
        band: TimerBand,
    },
    /// The countdown reached zero
    TimeUp,
    /// The host paused or resumed the timer
    Paused(bool),
    /// A team was awarded
    Score {
        /// The awarded team
        team: Team,
        /// The team's new score
        points: u64,
    },
    /// The last question was played
    GameOver(Outcome),
    /// The game went back to the lobby
    Reset,
    /// The active view changed
    CategorySelected(QuestionFilter),
    /// A question was authored and stored
    QuestionAdded {
        /// ID of the new question
        id: QuestionId,
        /// Number of stored questions
        count: usize,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Sync messages describing the whole screen
///
/// Every reachable state of the game maps to exactly one variant.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum SyncMessage {
    /// No question exists yet; the host should author one
    Welcome,
    /// Waiting for the host to start
    Lobby {
        /// Number of questions in the active view
        count: usize,
        /// Known categories
        categories: Vec<String>,
        /// The active view
        filter: QuestionFilter,
        /// Whether starting is allowed
        can_start: bool,
    },
    /// A question is being played
    Question(Box<QuestionMessage>),
    /// The active view has no questions; the only way on is a reset
    EmptyView,
    /// Final results
    GameOver {
        /// Who won
        outcome: Outcome,
        /// Final scores
        scores: Scoreboard,
    },
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// The game flow controller
///
/// A `Game` is created once per session with its injected ports. It is
/// driven by host commands and by the [`AlarmMessage`]s it schedules
/// through the `schedule_message` closures passed to its methods.
pub struct Game<S, T, P> {
    /// Stored questions
    repository: Repository<S>,
    /// Channel to the presentation layer
    tunnel: T,
    /// Audio cue playback
    speaker: P,
    /// Session configuration
    options: Options,
    /// Which questions are played
    filter: QuestionFilter,
    /// Current phase
    phase: Phase,
    /// Index of the current question within the active view
    index: usize,
    /// Revealed answers of the current question
    reveal: RevealTracker,
    /// Countdown of the current question
    countdown: Countdown,
    /// Team scores
    scoreboard: Scoreboard,
    /// Whether the host paused the timer
    paused: bool,
    /// Whether the countdown of the current question ran out
    time_up: bool,
    /// Bumped whenever pending ticks must be discarded
    generation: u64,
}

impl<S, T, P> Debug for Game<S, T, P> {
    /// Custom debug implementation that avoids printing the question list
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("index", &self.index)
            .field("questions", &self.repository.len())
            .finish_non_exhaustive()
    }
}

/// Returns a countdown that is not ticking
fn idle_countdown() -> Countdown {
    let mut countdown = Countdown::new(0);
    countdown.pause();
    countdown
}

// Convenience methods
impl<S, T: Tunnel, P: Speaker> Game<S, T, P> {
    /// Iterates over the questions of the active view
    fn active(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.repository.filtered(&self.filter)
    }

    /// The question on screen, if any
    fn current(&self) -> Option<&QuestionRecord> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.active().nth(self.index)
    }

    /// The question on screen, or why there is none
    fn current_in_progress(&self) -> Result<&QuestionRecord, Error> {
        if self.phase != Phase::InProgress {
            return Err(Error::NotInProgress);
        }
        self.current().ok_or(Error::EmptyView)
    }

    /// Whether the countdown should be ticking right now
    fn timer_should_run(&self) -> bool {
        !self.paused && !self.reveal.is_fully_revealed() && self.current().is_some()
    }

    /// Stops the countdown and invalidates pending ticks
    fn halt_timer(&mut self) {
        if self.countdown.pause() {
            self.generation += 1;
        }
    }

    /// Starts the countdown if nothing holds it back
    fn run_timer<A: FnMut(AlarmMessage, Duration)>(&mut self, mut schedule_message: A) {
        if self.timer_should_run() && self.countdown.resume() {
            self.generation += 1;
            schedule_message(
                AlarmMessage::Tick {
                    generation: self.generation,
                },
                constants::timer::TICK,
            );
        }
    }

    /// Sends the full screen state
    fn announce_state(&self) {
        self.tunnel.send_state(&self.state_message());
    }

    /// Shows the question at `index` of the active view
    ///
    /// Clears reveals and flags, restarts the countdown, and drops every
    /// tick scheduled for the previous question.
    fn load_question<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        index: usize,
        schedule_message: A,
    ) {
        self.index = index;
        self.paused = false;
        self.time_up = false;
        self.generation += 1;

        let count = self.question_count();
        let Some((total, time_limit, prompt)) = self
            .current()
            .map(|q| (q.answers().len(), q.time_limit(), q.prompt().to_owned()))
        else {
            debug!("no question at index {index} of the current view");
            self.reveal.reset(0);
            self.countdown = idle_countdown();
            self.announce_state();
            return;
        };

        debug!("showing question {} of {count}", index + 1);

        self.reveal.reset(total);
        self.countdown.reset(time_limit);
        self.countdown.pause();

        self.tunnel.send_message(&UpdateMessage::QuestionAnnouncement {
            index,
            count,
            prompt,
            time_limit,
        });

        self.run_timer(schedule_message);
        self.announce_state();
    }

    /// Moves to the final results
    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.halt_timer();
        self.generation += 1;

        let outcome = self.scoreboard.outcome();
        debug!("game over: {outcome}");

        self.tunnel.send_message(&UpdateMessage::GameOver(outcome));
        self.announce_state();
    }

    /// Marks the current question as out of time
    fn expire(&mut self) {
        self.time_up = true;
        self.generation += 1;

        debug!("time is up on question {}", self.index + 1);
        self.tunnel.send_message(&UpdateMessage::TimeUp);

        if self.options.reveal_on_time_up && !self.reveal.is_fully_revealed() {
            self.reveal.reveal_all();
            self.tunnel.send_message(&UpdateMessage::AllRevealed);
        }

        self.announce_state();
    }

    /// Builds the question screen for `question`
    fn question_message(&self, question: &QuestionRecord) -> QuestionMessage {
        QuestionMessage {
            index: self.index,
            count: self.question_count(),
            prompt: question.prompt().to_owned(),
            face_off_prompt: question.face_off_prompt().to_owned(),
            category: question.category().to_owned(),
            difficulty: question.difficulty(),
            round: question.round_label().to_owned(),
            answers: question
                .answers()
                .iter()
                .enumerate()
                .map(|(i, answer)| {
                    if self.reveal.is_revealed(i) {
                        PossiblyHidden::Visible(answer.clone())
                    } else {
                        PossiblyHidden::Hidden
                    }
                })
                .collect(),
            revealed: self.reveal.count(),
            timer: (&self.countdown).into(),
            paused: self.paused,
            time_up: self.time_up,
            can_advance: self.can_advance(),
            is_last: self.is_last_question(),
            scores: self.scoreboard.clone(),
        }
    }
}

impl<S: Storage, T: Tunnel, P: Speaker> Game<S, T, P> {
    /// Creates a new game in the lobby with default options
    ///
    /// # Arguments
    ///
    /// * `repository` - The stored questions
    /// * `tunnel` - Channel to the presentation layer
    /// * `speaker` - Audio cue playback
    pub fn new(repository: Repository<S>, tunnel: T, speaker: P) -> Self {
        Self {
            repository,
            tunnel,
            speaker,
            options: Options::default(),
            filter: QuestionFilter::All,
            phase: Phase::NotStarted,
            index: 0,
            reveal: RevealTracker::default(),
            countdown: idle_countdown(),
            scoreboard: Scoreboard::default(),
            paused: false,
            time_up: false,
            generation: 0,
        }
    }

    /// Creates a new game in the lobby with the given options
    ///
    /// # Errors
    ///
    /// Returns a `garde::Report` if the options are invalid.
    pub fn with_options(
        repository: Repository<S>,
        tunnel: T,
        speaker: P,
        options: Options,
    ) -> Result<Self, garde::Report> {
        options.validate()?;

        let mut game = Self::new(repository, tunnel, speaker);
        game.scoreboard = Scoreboard::with_names(&options.team_a_name, &options.team_b_name);
        game.options = options;
        Ok(game)
    }

    /// Leaves the lobby and shows the first question
    ///
    /// # Errors
    ///
    /// * `Error::AlreadyStarted` - The game is not in the lobby
    /// * `Error::NoQuestions` - The active view is empty
    pub fn start<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        schedule_message: A,
    ) -> Result<(), Error> {
        if self.phase != Phase::NotStarted {
            return Err(Error::AlreadyStarted);
        }

        let count = self.question_count();
        if count == 0 {
            return Err(Error::NoQuestions);
        }

        debug!("starting game with {count} questions");

        self.phase = Phase::InProgress;
        self.tunnel.send_message(&UpdateMessage::Started { count });
        self.load_question(0, schedule_message);

        Ok(())
    }

    /// Reveals a single answer of the current question
    ///
    /// Revealing an answer twice does nothing. A new reveal plays the reveal
    /// cue; playback failures are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// * `Error::NotInProgress` - No question is being played
    /// * `Error::EmptyView` - The active view has no questions
    /// * `Error::NoSuchAnswer` - The index is out of range
    pub fn reveal(&mut self, index: usize) -> Result<(), Error> {
        let answer = self
            .current_in_progress()?
            .answers()
            .get(index)
            .cloned()
            .ok_or(Error::NoSuchAnswer(index))?;

        if !self.reveal.reveal(index) {
            return Ok(());
        }

        if let Err(e) = self.speaker.play(&self.options.reveal_cue) {
            warn!("audio play failed: {e}");
        }

        self.tunnel
            .send_message(&UpdateMessage::AnswerRevealed { index, answer });

        if self.reveal.is_fully_revealed() {
            self.halt_timer();
            self.tunnel.send_message(&UpdateMessage::AllRevealed);
        }

        self.announce_state();

        Ok(())
    }

    /// Reveals every answer of the current question and pauses the timer
    ///
    /// # Errors
    ///
    /// * `Error::NotInProgress` - No question is being played
    /// * `Error::EmptyView` - The active view has no questions
    pub fn reveal_all(&mut self) -> Result<(), Error> {
        self.current_in_progress()?;

        self.reveal.reveal_all();
        self.paused = true;
        self.halt_timer();

        self.tunnel.send_message(&UpdateMessage::AllRevealed);
        self.tunnel.send_message(&UpdateMessage::Paused(true));
        self.announce_state();

        Ok(())
    }

    /// Pauses a running timer or resumes a paused one
    ///
    /// Resuming has no visible effect on the countdown while every answer
    /// is revealed or after it ran out.
    ///
    /// # Errors
    ///
    /// * `Error::NotInProgress` - No question is being played
    /// * `Error::EmptyView` - The active view has no questions
    pub fn toggle_pause<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        schedule_message: A,
    ) -> Result<(), Error> {
        self.current_in_progress()?;

        self.paused = !self.paused;
        if self.paused {
            self.halt_timer();
        } else {
            self.run_timer(schedule_message);
        }

        self.tunnel.send_message(&UpdateMessage::Paused(self.paused));
        self.announce_state();

        Ok(())
    }

    /// Moves on to the next question, or to the results after the last one
    ///
    /// # Errors
    ///
    /// * `Error::NotInProgress` - No question is being played
    /// * `Error::EmptyView` - The active view has no questions
    /// * `Error::AdvanceBlocked` - Answers remain hidden and time is left
    pub fn advance<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        schedule_message: A,
    ) -> Result<(), Error> {
        self.current_in_progress()?;

        if !self.can_advance() {
            return Err(Error::AdvanceBlocked);
        }

        if self.is_last_question() {
            self.finish();
        } else {
            self.load_question(self.index + 1, schedule_message);
        }

        Ok(())
    }

    /// Returns to the lobby from any phase, clearing scores and reveals
    pub fn reset(&mut self) {
        debug!("resetting game");

        self.phase = Phase::NotStarted;
        self.index = 0;
        self.paused = false;
        self.time_up = false;
        self.generation += 1;
        self.reveal.reset(0);
        self.countdown = idle_countdown();
        self.scoreboard.reset();

        self.tunnel.send_message(&UpdateMessage::Reset);
        self.announce_state();
    }

    /// Awards a team
    ///
    /// # Errors
    ///
    /// * `Error::NotInProgress` - No question is being played
    pub fn score(&mut self, team: Team) -> Result<u64, Error> {
        if self.phase != Phase::InProgress {
            return Err(Error::NotInProgress);
        }

        let points = self.scoreboard.increment(team);
        self.tunnel
            .send_message(&UpdateMessage::Score { team, points });
        self.announce_state();

        Ok(points)
    }

    /// Changes which questions are played
    ///
    /// During a game the view restarts at its first question; an empty view
    /// leaves the game showing [`SyncMessage::EmptyView`].
    pub fn select_category<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        filter: QuestionFilter,
        schedule_message: A,
    ) {
        debug!("selecting {filter:?}");

        self.filter = filter.clone();
        self.tunnel
            .send_message(&UpdateMessage::CategorySelected(filter));

        if self.phase == Phase::InProgress {
            self.load_question(0, schedule_message);
        } else {
            self.announce_state();
        }
    }

    /// Validates an authoring form and stores the new question
    ///
    /// When the game is stuck on an empty view and the new question belongs
    /// to it, the question is shown right away.
    ///
    /// # Errors
    ///
    /// * `Error::Draft` - The form was rejected; nothing is stored
    /// * `Error::Repository` - The question could not be persisted
    pub fn add_question<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        draft: QuestionDraft,
        schedule_message: A,
    ) -> Result<QuestionId, Error> {
        let question = draft.finish()?;
        let was_empty_view = self.phase == Phase::InProgress && self.current().is_none();

        let id = self.repository.add(question)?.id();

        self.tunnel.send_message(&UpdateMessage::QuestionAdded {
            id,
            count: self.repository.len(),
        });

        if was_empty_view && self.current().is_some() {
            self.load_question(self.index, schedule_message);
        } else {
            self.announce_state();
        }

        Ok(id)
    }

    /// Handles a command sent by the host's controls
    ///
    /// # Errors
    ///
    /// Returns whatever error the dispatched command returns.
    pub fn receive_message<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: IncomingMessage,
        schedule_message: A,
    ) -> Result<(), Error> {
        match message {
            IncomingMessage::Start => self.start(schedule_message),
            IncomingMessage::Reveal(index) => self.reveal(index),
            IncomingMessage::RevealAll => self.reveal_all(),
            IncomingMessage::TogglePause => self.toggle_pause(schedule_message),
            IncomingMessage::Next => self.advance(schedule_message),
            IncomingMessage::Reset => {
                self.reset();
                Ok(())
            }
            IncomingMessage::Score(team) => self.score(team).map(|_| ()),
            IncomingMessage::SelectCategory(filter) => {
                self.select_category(filter, schedule_message);
                Ok(())
            }
            IncomingMessage::AddQuestion(draft) => {
                self.add_question(draft, schedule_message).map(|_| ())
            }
        }
    }

    /// Handles a scheduled alarm
    ///
    /// Ticks from an earlier question, or from before a pause, are ignored.
    pub fn receive_alarm<A: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: AlarmMessage,
        mut schedule_message: A,
    ) {
        match message {
            AlarmMessage::Tick { generation } => {
                if generation != self.generation
                    || self.phase != Phase::InProgress
                    || !self.countdown.is_running()
                {
                    return;
                }

                let expired = self.countdown.tick();

                self.tunnel.send_message(&UpdateMessage::Timer {
                    time_left: self.countdown.time_left(),
                    band: self.countdown.band(),
                });

                if expired.is_some() {
                    self.expire();
                } else {
                    schedule_message(message, constants::timer::TICK);
                }
            }
        }
    }
}

impl<S, T: Tunnel, P: Speaker> Game<S, T, P> {
    /// Returns the message needed to render the current screen
    pub fn state_message(&self) -> SyncMessage {
        match self.phase {
            Phase::NotStarted if self.repository.is_empty() => SyncMessage::Welcome,
            Phase::NotStarted => {
                let count = self.question_count();
                SyncMessage::Lobby {
                    count,
                    categories: self.repository.categories(),
                    filter: self.filter.clone(),
                    can_start: count > 0,
                }
            }
            Phase::InProgress => match self.current() {
                Some(question) => SyncMessage::Question(Box::new(self.question_message(question))),
                None => SyncMessage::EmptyView,
            },
            Phase::GameOver => SyncMessage::GameOver {
                outcome: self.scoreboard.outcome(),
                scores: self.scoreboard.clone(),
            },
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the current question within the active view
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The question on screen, if any
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.current()
    }

    /// Number of questions in the active view
    pub fn question_count(&self) -> usize {
        self.active().count()
    }

    /// Whether the current question is the last of the view
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.question_count()
    }

    /// Whether every answer of the current question is visible
    pub fn is_fully_revealed(&self) -> bool {
        self.reveal.is_fully_revealed()
    }

    /// Whether the countdown of the current question ran out
    pub fn is_time_up(&self) -> bool {
        self.time_up
    }

    /// Whether the host paused the timer
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether moving on is allowed right now
    pub fn can_advance(&self) -> bool {
        self.current().is_some() && (self.reveal.is_fully_revealed() || self.time_up)
    }

    /// Revealed answers of the current question
    pub fn reveal_tracker(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Countdown of the current question
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Team scores
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The winner, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        (self.phase == Phase::GameOver).then(|| self.scoreboard.outcome())
    }

    /// The active view
    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    /// The stored questions
    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    /// Session configuration
    pub fn options(&self) -> &Options {
        &self.options
    }
}
