/*!
 * Heap Traits
 * Allocation interface abstractions
 */

use super::types::{Allocation, HeapResult, HeapStats};
use crate::core::types::Size;

/// Heap allocator interface
pub trait Allocator: Send + Sync {
    /// Allocate a block of at least `size` usable bytes
    /// `size == 0` is a defined no-op yielding `None`
    fn allocate(&self, size: Size) -> HeapResult<Option<Allocation>>;

    /// Release an allocation; `None` is a no-op
    fn release(&self, allocation: Option<Allocation>);

    /// Allocate `count * elem_size` bytes with every byte zeroed
    fn allocate_zeroed(&self, count: Size, elem_size: Size) -> HeapResult<Option<Allocation>>;

    /// Grow an allocation, or keep it when already large enough
    fn resize(
        &self,
        allocation: Option<Allocation>,
        new_size: Size,
    ) -> HeapResult<Option<Allocation>>;

    /// Check whether a handle refers to a live allocation
    fn is_valid(&self, allocation: Allocation) -> bool;

    /// Size a live allocation was created with
    fn block_size(&self, allocation: Allocation) -> Option<Size>;
}

/// Heap statistics provider
pub trait HeapInfo: Send + Sync {
    /// Get heap statistics
    fn stats(&self) -> HeapStats;

    /// Get region info as (limit, break, available)
    fn info(&self) -> (Size, Size, Size);
}
