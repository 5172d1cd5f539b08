/*!
 * Allocation Paths
 * allocate and release over the registry and the region
 */

use super::HeapAllocator;
use crate::core::limits::HEADER_SIZE;
use crate::core::types::Size;
use crate::heap::region::Region;
use crate::heap::types::{Allocation, HeapError, HeapResult};
use log::{error, info, warn};

impl<R: Region> HeapAllocator<R> {
    /// Allocate a block of at least `size` usable bytes
    ///
    /// Reuses the first free block large enough (creation order) before
    /// growing the region; an oversized reuse keeps the block's original
    /// size and whatever bytes it held. A fresh block's contents are
    /// unspecified. `size == 0` allocates nothing and yields `None`.
    pub fn allocate(&self, size: Size) -> HeapResult<Option<Allocation>> {
        if size == 0 {
            return Ok(None);
        }

        let mut state = self.state.lock();

        if let Some(slot) = state.registry.find_first_fit(size) {
            if let Some(record) = state.registry.record_mut(slot) {
                record.free = false;
                let address = record.start + HEADER_SIZE;
                info!(
                    "reused block at 0x{:x} ({} bytes held, {} requested)",
                    address, record.size, size
                );
                return Ok(Some(Allocation { slot, address }));
            }
        }

        let brk = state.region.brk();
        let Some(total) = HEADER_SIZE.checked_add(size) else {
            return Err(HeapError::RegionExhausted {
                requested: size,
                brk,
                limit: self.limit,
            });
        };

        match state.region.grow(total) {
            Some(start) => {
                let slot = state.registry.append(start, size);
                let address = start + HEADER_SIZE;
                info!(
                    "carved {} bytes at 0x{:x} (break now 0x{:x})",
                    size,
                    address,
                    state.region.brk()
                );
                Ok(Some(Allocation { slot, address }))
            }
            None => {
                error!(
                    "region growth denied: {} bytes requested at break 0x{:x} (limit {})",
                    size, brk, self.limit
                );
                Err(HeapError::RegionExhausted {
                    requested: size,
                    brk,
                    limit: self.limit,
                })
            }
        }
    }

    /// Release an allocation
    ///
    /// The block sitting exactly at the region boundary is destroyed and the
    /// boundary retracted past its header; any other block stays resident
    /// with its free flag set, awaiting reuse. `None` is a no-op, and a
    /// stale or mismatched handle is ignored with a warning.
    pub fn release(&self, allocation: Option<Allocation>) {
        let Some(allocation) = allocation else {
            return;
        };

        let mut state = self.state.lock();

        let Some((slot, size)) = state.resolve(allocation) else {
            warn!(
                "ignoring release of invalid or already freed handle 0x{:x}",
                allocation.address()
            );
            return;
        };

        // The boundary comparison, not chain position, decides whether the
        // block is physically reclaimable.
        if allocation.address() + size == state.region.brk() {
            if state.registry.tail() == Some(slot) {
                state.registry.remove_tail();
                state.region.shrink(HEADER_SIZE + size);
                info!(
                    "released top block ({} bytes), break retracted to 0x{:x}",
                    size,
                    state.region.brk()
                );
                return;
            }
            // Chain state and boundary diverged; flag-free instead of
            // shrinking through someone else's bytes.
            error!(
                "block at 0x{:x} touches the boundary but is not the chain tail",
                allocation.address()
            );
        }

        if let Some(record) = state.registry.record_mut(slot) {
            record.free = true;
        }
        info!(
            "released interior block at 0x{:x} ({} bytes kept for reuse)",
            allocation.address(),
            size
        );
    }
}
