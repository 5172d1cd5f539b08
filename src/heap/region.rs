/*!
 * Region Growth Interface
 * Trailing-edge adjustment of the managed byte range
 */

use crate::core::limits::DEFAULT_REGION_LIMIT;
use crate::core::types::{Address, Size};

/// Growable byte region adjusted only at its top edge
///
/// `grow` mirrors the classic program-break primitive: on success it returns
/// the prior boundary, on denial it returns `None` and leaves all state
/// untouched. `shrink` has one caller, the release path, which has already
/// verified the retracted bytes belong to the current top block.
pub trait Region: Send {
    /// Current top boundary of the region
    fn brk(&self) -> Address;

    /// Extend the region by `n` bytes at its top; returns the prior
    /// boundary, or `None` if growth is denied
    fn grow(&mut self, n: Size) -> Option<Address>;

    /// Retract the boundary by `n` bytes
    fn shrink(&mut self, n: Size);

    /// Bytes currently inside the region
    fn bytes(&self) -> &[u8];

    /// Mutable view of the bytes currently inside the region
    fn bytes_mut(&mut self) -> &mut [u8];
}

/// In-process region backed by a byte buffer with a hard growth limit
///
/// The limit stands in for the platform refusing to move the break, which
/// makes growth denial reachable in tests.
#[derive(Debug)]
pub struct BufferRegion {
    buf: Vec<u8>,
    limit: Size,
}

impl BufferRegion {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_REGION_LIMIT)
    }

    /// Create a region with a custom growth limit
    pub fn with_limit(limit: Size) -> Self {
        Self {
            buf: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Size {
        self.limit
    }
}

impl Default for BufferRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl Region for BufferRegion {
    fn brk(&self) -> Address {
        self.buf.len()
    }

    fn grow(&mut self, n: Size) -> Option<Address> {
        let prior = self.buf.len();
        let new_brk = prior.checked_add(n)?;
        if new_brk > self.limit {
            return None;
        }
        self.buf.resize(new_brk, 0);
        Some(prior)
    }

    fn shrink(&mut self, n: Size) {
        let new_len = self.buf.len().saturating_sub(n);
        self.buf.truncate(new_len);
    }

    fn bytes(&self) -> &[u8] {
        &self.buf
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}
