//! Individual value generators for the seeded columns.
//!
//! Each generator takes the RNG it should draw from, so callers decide which
//! values are reproducible (seeded RNG) and which are not.

pub mod login;
pub mod numeric;
pub mod password;
pub mod sentence;
