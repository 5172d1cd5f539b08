/*!
 * Heap Types
 * Common types for heap management
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heap operation result
pub type HeapResult<T> = Result<T, HeapError>;

/// Heap errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error(
        "region exhausted: requested {requested} bytes with break at 0x{brk:x} (limit {limit} bytes)"
    )]
    RegionExhausted {
        requested: Size,
        brk: Address,
        limit: Size,
    },

    #[error("size overflow: {count} elements of {elem_size} bytes each")]
    SizeOverflow { count: Size, elem_size: Size },

    #[error("invalid allocation handle: 0x{0:x}")]
    InvalidHandle(Address),

    #[error("payload access out of bounds: offset {offset} + len {len} exceeds block size {size}")]
    AccessOutOfBounds { offset: Size, len: Size, size: Size },
}

/// Opaque handle to a live allocation
///
/// Maps internally to a block record; callers never compute header offsets
/// themselves. The absent allocation ("nothing") is `Option::None`, never a
/// magic handle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    pub(super) slot: u32,
    pub(super) address: Address,
}

impl Allocation {
    /// Payload offset within the managed region
    pub fn address(&self) -> Address {
        self.address
    }
}

/// Heap statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapStats {
    pub region_limit: Size,
    pub region_break: Address,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub usage_percentage: f64,
}
