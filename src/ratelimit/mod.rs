//! Rate limiting logic and state management.

mod clock;
mod limiter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::RateLimiter;
