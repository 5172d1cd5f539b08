/*!
 * Heap Management
 *
 * First-fit heap allocator over a growable, trailing-edge region.
 *
 * ## Allocation strategy
 *
 * - **First-fit reuse**: released blocks stay resident and the first free
 *   block large enough (creation order) wins; O(n) over every block ever
 *   carved, no bucketing, no best-fit
 * - **Append-only growth**: a scan miss grows the region at its top and
 *   appends a fresh block; blocks are never split
 * - **Top-only reclaim**: releasing the block at the physical top of the
 *   region retracts the boundary past its header; releasing any other block
 *   just flips its free flag
 *
 * Creation order equals address order equals registry order, so the chain
 * tail and the physical top block always coincide at release time.
 *
 * ## Concurrency
 *
 * One process-wide mutex serializes every operation. The derived operations
 * (`allocate_zeroed`, `resize`) are compositions of the primitive ones and
 * take the lock more than once; that is safe because no other thread can
 * name the handles they operate on between their internal calls.
 */

mod manager;
pub mod region;
pub mod traits;
pub mod types;

pub use manager::HeapAllocator;
pub use region::{BufferRegion, Region};
pub use traits::{Allocator, HeapInfo};
pub use types::{Allocation, HeapError, HeapResult, HeapStats};
