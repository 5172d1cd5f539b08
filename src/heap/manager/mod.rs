/*!
 * Heap Manager
 * Owned allocator state behind a single process-wide lock
 */

mod allocator;
mod derived;
mod registry;

use super::region::{BufferRegion, Region};
use super::traits::{Allocator, HeapInfo};
use super::types::{Allocation, HeapResult, HeapStats};
use crate::core::limits::{DEFAULT_REGION_LIMIT, HEADER_SIZE};
use crate::core::types::Size;
use log::info;
use parking_lot::Mutex;
use registry::{BlockRegistry, Slot};
use std::sync::Arc;

/// Shared mutable state: the registry and the region, only ever touched
/// with the lock held
struct HeapState<R: Region> {
    registry: BlockRegistry,
    region: R,
}

impl<R: Region> HeapState<R> {
    /// Map a handle back to its record, validating the pairing
    ///
    /// Returns the slot and the block's creation size. Fails for vacated
    /// slots, free records, and handles whose payload offset does not match
    /// the record (a slot recycled for a different block).
    fn resolve(&self, allocation: Allocation) -> Option<(Slot, Size)> {
        let record = self.registry.record(allocation.slot)?;
        if record.free || record.start + HEADER_SIZE != allocation.address {
            return None;
        }
        Some((allocation.slot, record.size))
    }
}

/// Heap allocator
///
/// Clones share the same underlying heap; independent instances are fully
/// isolated from each other, so any number can coexist in one process.
pub struct HeapAllocator<R: Region = BufferRegion> {
    state: Arc<Mutex<HeapState<R>>>,
    limit: Size,
}

impl HeapAllocator<BufferRegion> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REGION_LIMIT)
    }

    /// Create a heap with a custom region growth limit (useful for testing)
    pub fn with_capacity(limit: Size) -> Self {
        Self::with_region(BufferRegion::with_limit(limit), limit)
    }
}

impl<R: Region> HeapAllocator<R> {
    /// Build a heap over a caller-provided region implementation
    ///
    /// `limit` is only used for statistics; the region itself decides when
    /// growth is denied.
    pub fn with_region(region: R, limit: Size) -> Self {
        info!(
            "heap initialized: first-fit over a growable region, limit {} bytes",
            limit
        );
        Self {
            state: Arc::new(Mutex::new(HeapState {
                registry: BlockRegistry::new(),
                region,
            })),
            limit,
        }
    }

    /// Check whether a handle refers to a live allocation
    pub fn is_valid(&self, allocation: Allocation) -> bool {
        self.state.lock().resolve(allocation).is_some()
    }

    /// Size a live allocation was created with
    pub fn block_size(&self, allocation: Allocation) -> Option<Size> {
        self.state.lock().resolve(allocation).map(|(_, size)| size)
    }

    /// Get heap statistics
    pub fn stats(&self) -> HeapStats {
        let state = self.state.lock();
        let (allocated, free) = state.registry.census();
        let brk = state.region.brk();
        HeapStats {
            region_limit: self.limit,
            region_break: brk,
            allocated_blocks: allocated,
            free_blocks: free,
            usage_percentage: if self.limit == 0 {
                0.0
            } else {
                (brk as f64 / self.limit as f64) * 100.0
            },
        }
    }

    /// Get region info as (limit, break, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let brk = self.state.lock().region.brk();
        (self.limit, brk, self.limit.saturating_sub(brk))
    }
}

impl<R: Region> Allocator for HeapAllocator<R> {
    fn allocate(&self, size: Size) -> HeapResult<Option<Allocation>> {
        HeapAllocator::allocate(self, size)
    }

    fn release(&self, allocation: Option<Allocation>) {
        HeapAllocator::release(self, allocation)
    }

    fn allocate_zeroed(&self, count: Size, elem_size: Size) -> HeapResult<Option<Allocation>> {
        HeapAllocator::allocate_zeroed(self, count, elem_size)
    }

    fn resize(
        &self,
        allocation: Option<Allocation>,
        new_size: Size,
    ) -> HeapResult<Option<Allocation>> {
        HeapAllocator::resize(self, allocation, new_size)
    }

    fn is_valid(&self, allocation: Allocation) -> bool {
        HeapAllocator::is_valid(self, allocation)
    }

    fn block_size(&self, allocation: Allocation) -> Option<Size> {
        HeapAllocator::block_size(self, allocation)
    }
}

impl<R: Region> HeapInfo for HeapAllocator<R> {
    fn stats(&self) -> HeapStats {
        HeapAllocator::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        HeapAllocator::info(self)
    }
}

impl<R: Region> Clone for HeapAllocator<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            limit: self.limit,
        }
    }
}

impl Default for HeapAllocator<BufferRegion> {
    fn default() -> Self {
        Self::new()
    }
}
