//! Unix timestamps as used on the wire

use serde::Serialize;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, 32-bit like the node's own timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Timestamp(u32);

impl Timestamp {
    pub const fn from_secs(secs: u32) -> Self {
        Timestamp(secs)
    }

    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Timestamp(u32::try_from(secs).unwrap_or(u32::MAX))
    }

    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Saturates at the end of the 32-bit range
    pub fn after(&self, duration: Duration) -> Self {
        let add = u32::try_from(duration.as_secs()).unwrap_or(u32::MAX);
        Timestamp(self.0.saturating_add(add))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
