//! Fill sequencing: users, max-id check, messages.

use crate::error::FillError;
use crate::metrics::FillReport;
use crate::progress::ProgressLog;
use crate::sink::SeedSink;
use anyhow::Context;
use fill_generator::{MessageGenerator, MessageRow, UserGenerator, UserRow};
use std::time::Instant;
use tracing::{debug, info};

/// What a fill run should generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillPlan {
    /// Number of users to insert.
    pub users: u64,
    /// Number of messages to insert.
    pub messages: u64,
    /// Seed for usernames and message text.
    pub seed: u64,
    /// Seed for message-to-user assignment. `None` draws from OS entropy.
    pub assignment_seed: Option<u64>,
}

impl FillPlan {
    pub fn new(users: u64, messages: u64, seed: u64) -> Self {
        Self {
            users,
            messages,
            seed,
            assignment_seed: None,
        }
    }

    /// Pin the message-to-user assignment.
    pub fn with_assignment_seed(mut self, assignment_seed: u64) -> Self {
        self.assignment_seed = Some(assignment_seed);
        self
    }

    fn message_generator(&self) -> MessageGenerator {
        match self.assignment_seed {
            Some(assignment_seed) => {
                MessageGenerator::with_assignment_seed(self.seed, assignment_seed)
            }
            None => MessageGenerator::new(self.seed),
        }
    }
}

/// Run the fill sequence against `sink`.
///
/// Users are generated and inserted first. The max user id is then read back
/// and must be at least the requested user count, otherwise the run stops
/// with [`FillError::InsertionIncomplete`] before any message is generated.
/// Messages reference ids drawn uniformly from `[1, user_max_id]`.
///
/// Nothing already committed is undone when a later step fails.
pub async fn run_fill<S: SeedSink>(sink: &S, plan: &FillPlan) -> anyhow::Result<FillReport> {
    let mut report = FillReport::default();

    info!(
        "Filling store with {} users and {} messages (seed={})",
        plan.users, plan.messages, plan.seed
    );

    // Users
    let gen_start = Instant::now();
    let users = generate_users(plan);
    report.users.generation_duration = gen_start.elapsed();

    let insert_start = Instant::now();
    report.users.rows_inserted = sink
        .insert_users(&users)
        .await
        .context("Failed to insert users")?;
    report.users.insert_duration = insert_start.elapsed();
    drop(users);

    info!(
        "Inserted {} users in {:?}",
        report.users.rows_inserted,
        report.users.total_duration()
    );

    // Max id check
    let user_max_id = sink
        .fetch_user_max_id()
        .await
        .context("Failed to fetch max user id")?;
    report.user_max_id = user_max_id;
    debug!("Max user id after user phase: {}", user_max_id);

    if u64::try_from(user_max_id).unwrap_or(0) < plan.users {
        return Err(FillError::InsertionIncomplete {
            expected: plan.users,
            actual: user_max_id,
        }
        .into());
    }

    // Messages
    if plan.messages == 0 {
        info!("No messages requested; skipping message phase");
        return Ok(report);
    }

    let gen_start = Instant::now();
    let messages = generate_messages(plan, user_max_id)?;
    report.messages.generation_duration = gen_start.elapsed();

    let insert_start = Instant::now();
    report.messages.rows_inserted = sink
        .insert_messages(&messages)
        .await
        .context("Failed to insert messages")?;
    report.messages.insert_duration = insert_start.elapsed();

    info!(
        "Inserted {} messages referencing users 1..={} in {:?}",
        report.messages.rows_inserted,
        user_max_id,
        report.messages.total_duration()
    );

    Ok(report)
}

fn generate_users(plan: &FillPlan) -> Vec<UserRow> {
    let mut generator = UserGenerator::new(plan.seed);
    let mut progress = ProgressLog::new("Users", plan.users);

    generator
        .users(plan.users)
        .inspect(|_| progress.tick())
        .collect()
}

fn generate_messages(plan: &FillPlan, user_max_id: i64) -> Result<Vec<MessageRow>, FillError> {
    let mut generator = plan.message_generator();
    let mut progress = ProgressLog::new("Messages", plan.messages);

    Ok(generator
        .messages(plan.messages, user_max_id)?
        .inspect(|_| progress.tick())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fill_generator::DEFAULT_PASSWORD_HASH;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StoredUser {
        id: i64,
        login: String,
        password_hash: String,
    }

    /// In-memory sink with auto-increment ids and injectable failures.
    #[derive(Default)]
    struct MemorySink {
        users: Mutex<Vec<StoredUser>>,
        messages: Mutex<Vec<MessageRow>>,
        next_id: Mutex<i64>,
        fail_user_insert: bool,
        /// Rows silently dropped from each user insert.
        drop_user_rows: usize,
        message_inserts: Mutex<u32>,
    }

    impl MemorySink {
        fn with_existing_users(count: i64) -> Self {
            let sink = Self::default();
            for id in 1..=count {
                sink.users.lock().unwrap().push(StoredUser {
                    id,
                    login: format!("existing_{id}"),
                    ..Default::default()
                });
            }
            *sink.next_id.lock().unwrap() = count;
            sink
        }
    }

    #[async_trait::async_trait]
    impl SeedSink for MemorySink {
        async fn insert_users(&self, rows: &[UserRow]) -> anyhow::Result<u64> {
            if self.fail_user_insert {
                anyhow::bail!("duplicate key value violates unique constraint");
            }
            let kept = rows.len().saturating_sub(self.drop_user_rows);
            let mut users = self.users.lock().unwrap();
            let mut next_id = self.next_id.lock().unwrap();
            for row in &rows[..kept] {
                *next_id += 1;
                users.push(StoredUser {
                    id: *next_id,
                    login: row.login.clone(),
                    password_hash: row.password_hash.clone(),
                });
            }
            Ok(kept as u64)
        }

        async fn fetch_user_max_id(&self) -> anyhow::Result<i64> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .map(|u| u.id)
                .max()
                .unwrap_or(0))
        }

        async fn insert_messages(&self, rows: &[MessageRow]) -> anyhow::Result<u64> {
            *self.message_inserts.lock().unwrap() += 1;
            self.messages.lock().unwrap().extend_from_slice(rows);
            Ok(rows.len() as u64)
        }
    }

    #[tokio::test]
    async fn test_fill_empty_tables() {
        let sink = MemorySink::default();
        let plan = FillPlan::new(5, 3, 42);

        let report = run_fill(&sink, &plan).await.unwrap();

        assert_eq!(report.users.rows_inserted, 5);
        assert_eq!(report.user_max_id, 5);
        assert_eq!(report.messages.rows_inserted, 3);

        let users = sink.users.lock().unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        for (i, user) in users.iter().enumerate() {
            assert!(user.login.starts_with(&format!("user_{i}_")));
            assert_eq!(user.password_hash, DEFAULT_PASSWORD_HASH);
        }

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| (1..=5).contains(&m.user_id)));
    }

    #[tokio::test]
    async fn test_fill_with_existing_users_widens_range() {
        let sink = MemorySink::with_existing_users(2);
        let plan = FillPlan::new(5, 200, 42).with_assignment_seed(1);

        let report = run_fill(&sink, &plan).await.unwrap();

        assert_eq!(sink.users.lock().unwrap().len(), 7);
        assert_eq!(report.user_max_id, 7);

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 200);
        assert!(messages.iter().all(|m| (1..=7).contains(&m.user_id)));
    }

    #[tokio::test]
    async fn test_user_insert_failure_skips_messages() {
        let sink = MemorySink {
            fail_user_insert: true,
            ..Default::default()
        };
        let plan = FillPlan::new(5, 3, 42);

        let err = run_fill(&sink, &plan).await.unwrap_err();

        assert!(format!("{err:#}").contains("Failed to insert users"));
        assert_eq!(*sink.message_inserts.lock().unwrap(), 0);
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_insertion_skips_messages() {
        let sink = MemorySink {
            drop_user_rows: 2,
            ..Default::default()
        };
        let plan = FillPlan::new(5, 3, 42);

        let err = run_fill(&sink, &plan).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<FillError>(),
            Some(&FillError::InsertionIncomplete {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(*sink.message_inserts.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_zero_messages_skips_message_insert() {
        let sink = MemorySink::default();
        let plan = FillPlan::new(2, 0, 42);

        let report = run_fill(&sink, &plan).await.unwrap();

        assert_eq!(report.users.rows_inserted, 2);
        assert_eq!(report.messages.rows_inserted, 0);
        assert_eq!(*sink.message_inserts.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_user_table_with_messages_is_fatal() {
        let sink = MemorySink::default();
        let plan = FillPlan::new(0, 3, 42);

        let err = run_fill(&sink, &plan).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<FillError>(),
            Some(&FillError::Generator(
                fill_generator::GeneratorError::EmptyUserRange { user_max_id: 0 }
            ))
        );
        assert_eq!(*sink.message_inserts.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_same_seed_same_logins() {
        let sink1 = MemorySink::default();
        let sink2 = MemorySink::default();
        let plan = FillPlan::new(10, 0, 42);

        run_fill(&sink1, &plan).await.unwrap();
        run_fill(&sink2, &plan).await.unwrap();

        let logins1: Vec<String> = sink1
            .users
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.login.clone())
            .collect();
        let logins2: Vec<String> = sink2
            .users
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.login.clone())
            .collect();
        assert_eq!(logins1, logins2);
    }
}
