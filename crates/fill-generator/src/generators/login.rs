//! Login generator.

use fake::faker::internet::en::Username;
use fake::Fake;
use rand::Rng;

/// Prefix shared by every generated login.
pub const LOGIN_PREFIX: &str = "user";

/// Generate a login for the row at `index`.
///
/// The index keeps logins unique within a run even when the fake username
/// repeats.
pub fn generate_login<R: Rng + ?Sized>(rng: &mut R, index: u64) -> String {
    let username: String = Username().fake_with_rng(rng);
    format!("{LOGIN_PREFIX}_{index}_{username}")
}
