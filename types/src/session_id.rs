//! Session identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one attempt to capture, process, and validate a document image.
///
/// Ids are issued sequentially by the verification service and carry no
/// meaning beyond uniqueness within a service instance.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sess-{}", self.0)
    }
}
