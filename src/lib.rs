/*!
 * brkheap
 * User-space heap manager over a growable, trailing-edge region
 */

pub mod core;
pub mod heap;

// Re-exports
pub use crate::core::limits::{DEFAULT_REGION_LIMIT, HEADER_SIZE};
pub use crate::core::types::{Address, Size};
pub use heap::{
    Allocation, Allocator, BufferRegion, HeapAllocator, HeapError, HeapInfo, HeapResult,
    HeapStats, Region,
};
