//! Deterministic uid allocation.
//!
//! Objects built without a caller-supplied uid draw one from an allocator.
//! The same sequence of allocations always yields the same uids.

use serde::{Deserialize, Serialize};

/// Default prefix for system-generated uids.
pub const SYSTEM_UID_PREFIX: &str = "_obj";

/// Whether a uid was chosen by the caller or generated.
///
/// Only affects display, never equality or lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UidOrigin {
    User,
    System,
}

/// Monotonic uid source. Never reissues a value.
#[derive(Debug, Clone)]
pub struct UidAllocator {
    prefix: String,
    next: u64,
}

impl Default for UidAllocator {
    fn default() -> Self {
        Self::new(SYSTEM_UID_PREFIX)
    }
}

impl UidAllocator {
    /// Creates an allocator issuing `"{prefix}{n}"` for n = 1, 2, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Issues the next uid.
    pub fn allocate(&mut self) -> String {
        let uid = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        uid
    }

    /// Number of uids issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}
