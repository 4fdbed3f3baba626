//! Common CLI argument definitions shared by all populators.

use clap::Args;

/// Default number of users to generate.
pub const DEFAULT_USERS: u64 = 100_000;

/// Default number of messages to generate.
pub const DEFAULT_MESSAGES: u64 = 100_000;

/// Default seed for content generation.
pub const DEFAULT_SEED: u64 = 42;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonFillArgs {
    /// Number of users to generate
    #[arg(long, short = 'u', default_value_t = DEFAULT_USERS)]
    pub users: u64,

    /// Number of messages to generate
    #[arg(long, short = 'm', default_value_t = DEFAULT_MESSAGES)]
    pub messages: u64,

    /// Random seed for usernames and message text (same seed = same content)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}
