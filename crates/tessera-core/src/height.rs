//! # Block Heights
//!
//! Defines `BlockHeight`, the unit of ledger time. Lock maturity is
//! expressed against heights, never wall-clock timestamps: the ordering
//! of operations is external to the ledger, and the current height is
//! passed into any operation that depends on it.

use serde::{Deserialize, Serialize};

/// A position in the external total order of ledger operations.
///
/// Heights only ever compare and advance; the ledger itself holds no
/// clock. A lock with `unlock_height` at or below the current height is
/// mature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// Access the inner height value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether a lock maturing at `unlock_height` is unlockable at this height.
    pub fn has_reached(&self, unlock_height: BlockHeight) -> bool {
        *self >= unlock_height
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "height:{}", self.0)
    }
}
