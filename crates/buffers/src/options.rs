//! Builder configuration.

use serde::{Deserialize, Serialize};

/// Largest buffer addressable with 32-bit unsigned offsets minus the sign bit.
pub const MAX_BUFFER_SIZE: usize = (1 << 31) - 1;

/// Options for [`Builder`](crate::Builder).
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only has to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Bytes allocated up front.
    pub initial_capacity: usize,
    /// Hard limit on the buffer size; reservations beyond it fail.
    pub max_size: usize,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            max_size: MAX_BUFFER_SIZE,
        }
    }
}
