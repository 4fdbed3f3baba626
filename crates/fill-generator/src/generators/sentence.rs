//! Message text generator.

use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::Rng;

/// Number of words in every generated message.
pub const MESSAGE_WORD_COUNT: usize = 12;

/// Generate a lorem sentence with exactly `words` words, ending in a period.
pub fn generate_sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    Sentence(words..words + 1).fake_with_rng(rng)
}
