//! User and message generators producing rows for the fill phases.

use crate::generators::login::generate_login;
use crate::generators::numeric::generate_user_id;
use crate::generators::password::{hash_password, DEFAULT_PASSWORD};
use crate::generators::sentence::{generate_sentence, MESSAGE_WORD_COUNT};
use crate::row::{MessageRow, UserRow};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// No user id can be drawn because the users table holds no ids.
    #[error("Cannot assign messages to users: user id range [1, {user_max_id}] is empty")]
    EmptyUserRange { user_max_id: i64 },
}

/// Generator for `users` rows.
///
/// The seeded RNG makes the login sequence reproducible: two generators with
/// the same seed yield identical rows.
pub struct UserGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Current row index
    index: u64,
    /// Hash shared by every generated user
    password_hash: String,
}

impl UserGenerator {
    /// Create a new user generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            password_hash: hash_password(DEFAULT_PASSWORD),
        }
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next user row.
    pub fn next_user(&mut self) -> UserRow {
        let index = self.index;
        let login = generate_login(&mut self.rng, index);
        self.index += 1;

        UserRow {
            index,
            login,
            password_hash: self.password_hash.clone(),
        }
    }

    /// Generate `count` user rows lazily.
    pub fn users(&mut self, count: u64) -> UserRowIterator<'_> {
        UserRowIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates user rows.
pub struct UserRowIterator<'a> {
    generator: &'a mut UserGenerator,
    remaining: u64,
}

impl Iterator for UserRowIterator<'_> {
    type Item = UserRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_user())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UserRowIterator<'_> {}

/// Generator for `messages` rows.
///
/// Message text comes from the seeded RNG. The referenced user id is drawn
/// from a second RNG seeded from OS entropy, so the message-to-user
/// assignment differs between runs unless pinned with
/// [`MessageGenerator::with_assignment_seed`].
pub struct MessageGenerator {
    /// Seeded RNG for message text
    rng: StdRng,
    /// RNG for the `user_id` column
    assignment_rng: StdRng,
    /// Words per message
    word_count: usize,
}

impl MessageGenerator {
    /// Create a new message generator whose user assignment is not reproducible.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            assignment_rng: StdRng::from_os_rng(),
            word_count: MESSAGE_WORD_COUNT,
        }
    }

    /// Create a message generator with a reproducible user assignment too.
    pub fn with_assignment_seed(seed: u64, assignment_seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            assignment_rng: StdRng::seed_from_u64(assignment_seed),
            word_count: MESSAGE_WORD_COUNT,
        }
    }

    /// Generate the next message referencing a user in `[1, user_max_id]`.
    pub fn next_message(&mut self, user_max_id: i64) -> Result<MessageRow, GeneratorError> {
        let user_id = generate_user_id(&mut self.assignment_rng, user_max_id)
            .ok_or(GeneratorError::EmptyUserRange { user_max_id })?;
        let text = generate_sentence(&mut self.rng, self.word_count);

        Ok(MessageRow { user_id, text })
    }

    /// Generate `count` message rows lazily.
    ///
    /// The user id range is checked up front, so the iterator itself cannot
    /// fail.
    pub fn messages(
        &mut self,
        count: u64,
        user_max_id: i64,
    ) -> Result<MessageRowIterator<'_>, GeneratorError> {
        if user_max_id < 1 {
            return Err(GeneratorError::EmptyUserRange { user_max_id });
        }

        Ok(MessageRowIterator {
            generator: self,
            user_max_id,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates message rows.
pub struct MessageRowIterator<'a> {
    generator: &'a mut MessageGenerator,
    user_max_id: i64,
    remaining: u64,
}

impl Iterator for MessageRowIterator<'_> {
    type Item = MessageRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // The range was validated in `MessageGenerator::messages`
        self.generator.next_message(self.user_max_id).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MessageRowIterator<'_> {}
