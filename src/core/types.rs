/*!
 * Core Types
 * Common types used across the heap manager
 */

/// Byte offset into the managed region
pub type Address = usize;

/// Size type for heap operations
pub type Size = usize;
