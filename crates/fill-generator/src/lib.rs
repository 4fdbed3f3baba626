//! Seeded data generator for fill-db.
//!
//! This crate produces the rows that fill-db writes into the `users` and
//! `messages` tables. Content (usernames, sentences) comes from a seeded RNG
//! so two runs with the same seed produce the same logins and texts.
//!
//! # Architecture
//!
//! ```text
//!        seed
//!          │
//!    ┌─────┴──────────────┐
//!    ▼                    ▼
//! ┌───────────────┐  ┌──────────────────┐
//! │ UserGenerator │  │ MessageGenerator │
//! │               │  │                  │
//! │ - rng         │  │ - rng  (seeded)  │
//! │ - index       │  │ - assignment rng │
//! │ - hash        │  │   (OS entropy)   │
//! └──────┬────────┘  └────────┬─────────┘
//!        ▼                    ▼
//!  UserRow { index,     MessageRow { user_id, text }
//!    login, hash }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fill_generator::{MessageGenerator, UserGenerator};
//!
//! let mut users = UserGenerator::new(42);
//! let user = users.next_user();
//! assert!(user.login.starts_with("user_0_"));
//!
//! let mut messages = MessageGenerator::new(42);
//! let message = messages.next_message(10).unwrap();
//! assert!((1..=10).contains(&message.user_id));
//! ```

pub mod generator;
pub mod generators;
pub mod row;

// Re-exports for convenience
pub use generator::{
    GeneratorError, MessageGenerator, MessageRowIterator, UserGenerator, UserRowIterator,
};
pub use generators::password::{DEFAULT_PASSWORD, DEFAULT_PASSWORD_HASH};
pub use generators::sentence::MESSAGE_WORD_COUNT;
pub use row::{MessageRow, UserRow};
