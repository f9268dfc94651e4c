//! Random draws: the popular-word pick and the noise token
//!
//! Both draws are generic over [`rand::Rng`] so tests can inject a seeded
//! generator; production callers pass `rand::thread_rng()`.

use super::BuilderError;
use crate::dataset::Genre;
use rand::Rng;

/// The fixed 46-symbol phonetic alphabet noise tokens are drawn from
pub const NOISE_ALPHABET: [&str; 46] = [
    "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ", "た",
    "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ", "ま", "み",
    "む", "め", "も", "や", "ゆ", "よ", "ら", "り", "る", "れ", "ろ", "わ", "を", "ん",
];

/// Number of symbols in a noise token
pub const NOISE_LEN: usize = 3;

/// Draw one word uniformly at random from a genre's word list
///
/// # Errors
///
/// Returns `BuilderError::EmptyWordPool` if the genre has no words.
pub fn draw_word<R: Rng>(rng: &mut R, genre: &Genre) -> Result<String, BuilderError> {
    if genre.words.is_empty() {
        return Err(BuilderError::EmptyWordPool(genre.name.clone()));
    }
    let idx = rng.gen_range(0..genre.words.len());
    Ok(genre.words[idx].clone())
}

/// Generate a noise token: `NOISE_LEN` symbols drawn independently and
/// uniformly with replacement from [`NOISE_ALPHABET`]
pub fn noise_token<R: Rng>(rng: &mut R) -> String {
    (0..NOISE_LEN)
        .map(|_| NOISE_ALPHABET[rng.gen_range(0..NOISE_ALPHABET.len())])
        .collect()
}
