/*!
 * Derived Operations
 * Zero-filled allocation, resizing, and payload access
 */

use super::HeapAllocator;
use crate::core::types::Size;
use crate::heap::region::Region;
use crate::heap::types::{Allocation, HeapError, HeapResult};

impl<R: Region> HeapAllocator<R> {
    /// Allocate `count * elem_size` bytes with every byte zeroed
    ///
    /// Zero elements or zero-sized elements allocate nothing. An overflowing
    /// product is rejected before any allocation is attempted.
    pub fn allocate_zeroed(&self, count: Size, elem_size: Size) -> HeapResult<Option<Allocation>> {
        if count == 0 || elem_size == 0 {
            return Ok(None);
        }
        let size = count
            .checked_mul(elem_size)
            .ok_or(HeapError::SizeOverflow { count, elem_size })?;

        let Some(allocation) = self.allocate(size)? else {
            return Ok(None);
        };

        // Second lock acquisition; safe because no other thread can name
        // this handle yet.
        let mut state = self.state.lock();
        let start = allocation.address();
        state.region.bytes_mut()[start..start + size].fill(0);
        Ok(Some(allocation))
    }

    /// Grow an allocation, or keep it when already large enough
    ///
    /// A block whose creation size already covers `new_size` is returned
    /// unchanged: no shrink, no copy. Growing allocates a new block, copies
    /// the old block's full creation size, and releases the old handle; on
    /// allocation failure the old allocation is untouched and still owned by
    /// the caller.
    ///
    /// `resize(None, n)` is `allocate(n)`. `resize(Some(a), 0)` likewise
    /// delegates to `allocate(0)` and therefore returns `None` without
    /// releasing `a` — the historical behavior of this interface, kept
    /// deliberately; release `a` explicitly if the block should be given up.
    pub fn resize(
        &self,
        allocation: Option<Allocation>,
        new_size: Size,
    ) -> HeapResult<Option<Allocation>> {
        let Some(allocation) = allocation else {
            return self.allocate(new_size);
        };
        if new_size == 0 {
            return self.allocate(0);
        }

        let old_size = {
            let state = self.state.lock();
            state.resolve(allocation).map(|(_, size)| size)
        };
        let Some(old_size) = old_size else {
            return Err(HeapError::InvalidHandle(allocation.address()));
        };

        if old_size >= new_size {
            return Ok(Some(allocation));
        }

        let Some(grown) = self.allocate(new_size)? else {
            return Ok(None);
        };

        {
            let mut state = self.state.lock();
            let src = allocation.address();
            let dst = grown.address();
            state.region.bytes_mut().copy_within(src..src + old_size, dst);
        }
        self.release(Some(allocation));
        Ok(Some(grown))
    }

    /// Copy bytes into an allocation's payload at `offset`
    pub fn write(&self, allocation: Allocation, offset: Size, data: &[u8]) -> HeapResult<()> {
        let mut state = self.state.lock();
        let Some((_, size)) = state.resolve(allocation) else {
            return Err(HeapError::InvalidHandle(allocation.address()));
        };
        let len = data.len();
        match offset.checked_add(len) {
            Some(end) if end <= size => {}
            _ => return Err(HeapError::AccessOutOfBounds { offset, len, size }),
        }
        let start = allocation.address() + offset;
        state.region.bytes_mut()[start..start + len].copy_from_slice(data);
        Ok(())
    }

    /// Copy `len` bytes out of an allocation's payload at `offset`
    pub fn read(&self, allocation: Allocation, offset: Size, len: Size) -> HeapResult<Vec<u8>> {
        let state = self.state.lock();
        let Some((_, size)) = state.resolve(allocation) else {
            return Err(HeapError::InvalidHandle(allocation.address()));
        };
        match offset.checked_add(len) {
            Some(end) if end <= size => {}
            _ => return Err(HeapError::AccessOutOfBounds { offset, len, size }),
        }
        let start = allocation.address() + offset;
        Ok(state.region.bytes()[start..start + len].to_vec())
    }
}
