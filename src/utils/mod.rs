//! Stateless helpers shared by NebulaAI packages.

mod format;
mod random;
mod strings;
mod validation;

use std::time::Duration;

pub use format::{format_currency, format_percentage};
pub use random::{calculate_score, generate_id, get_random_element};
pub use strings::{capitalize_first, normalize_string, sanitize_input};
pub use validation::{is_valid_email, is_valid_url, validate_vibe};

/// Wait for `duration` without blocking the runtime.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delay_waits_for_duration() {
        let start = tokio::time::Instant::now();
        delay(Duration::from_millis(1500)).await;

        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_delay_zero_completes() {
        tokio_test::block_on(delay(Duration::ZERO));
    }
}
