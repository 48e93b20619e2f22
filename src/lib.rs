//! # Feud Game Library
//!
//! This library provides the core logic of a two-team survey trivia game.
//! A host authors questions with ranked answers, plays them one by one with
//! a countdown, reveals answers on demand, and awards points to either team
//! until a winner is declared.
//!
//! Rendering, audio, and persistence are left to the caller through the
//! [`session::Tunnel`], [`session::Speaker`], and [`storage::Storage`] ports.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]

pub mod constants;

pub mod game;
pub mod question;
pub mod repository;
pub mod reveal;
pub mod scoreboard;
pub mod session;
pub mod storage;
pub mod timer;

pub use game::{AlarmMessage, Game, IncomingMessage, Options, Phase, SyncMessage, UpdateMessage};
pub use question::{QuestionDraft, QuestionFilter, QuestionId, QuestionRecord};
pub use repository::Repository;
pub use scoreboard::{Outcome, Team};
