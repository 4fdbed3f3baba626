//! Numeric value generators.

use rand::Rng;

/// Pick a user id uniformly in `[1, user_max_id]` (inclusive).
///
/// Returns `None` when the range is empty.
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R, user_max_id: i64) -> Option<i64> {
    if user_max_id < 1 {
        return None;
    }
    Some(rng.random_range(1..=user_max_id))
}
