// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Wall-clock readings since the Unix epoch, one newtype per unit.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// A clock set before 1970 reads as zero rather than failing.
fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn saturate(value: u128) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seconds(pub i64);

/// Whole milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(pub i64);

/// Whole microseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Micros(pub i64);

/// Whole nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nanos(pub i64);

impl Seconds {
    /// Current time.
    pub fn now() -> Self {
        Self(saturate(u128::from(since_epoch().as_secs())))
    }
}

impl Millis {
    /// Current time.
    pub fn now() -> Self {
        Self(saturate(since_epoch().as_millis()))
    }
}

impl Micros {
    /// Current time.
    pub fn now() -> Self {
        Self(saturate(since_epoch().as_micros()))
    }
}

impl Nanos {
    /// Current time.
    pub fn now() -> Self {
        Self(saturate(since_epoch().as_nanos()))
    }
}
