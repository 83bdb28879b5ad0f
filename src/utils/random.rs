//! Random selection, scores, and identifiers.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CoreError, Result};

const DEFAULT_ID_PREFIX: &str = "item";
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Pick one element uniformly at random.
pub fn get_random_element<T>(items: &[T]) -> Result<&T> {
    items
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| CoreError::validation("Cannot get random element from empty array"))
}

/// Build an id of the form `{prefix}-{epoch_ms}-{9 base36 chars}`.
///
/// The prefix defaults to `item`. Ids are unique enough for display and
/// client-side keys, not for security.
pub fn generate_id(prefix: Option<&str>) -> String {
    let prefix = prefix.unwrap_or(DEFAULT_ID_PREFIX);
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), suffix)
}

/// Uniform integer in `[min, max]`.
///
/// An inverted range (`max < min`) returns `min` rather than drawing from
/// `[max, min]` the way the JavaScript helper's arithmetic happened to.
pub fn calculate_score(min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}
