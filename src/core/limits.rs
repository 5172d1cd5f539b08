/*!
 * Limits and Constants
 *
 * Centralized location for heap-wide limits and magic numbers.
 */

use crate::core::types::Size;

/// Fixed per-block header size (16 bytes)
/// Every block occupies HEADER_SIZE + size bytes of the region; the payload
/// starts exactly HEADER_SIZE past the block's start offset
pub const HEADER_SIZE: Size = 16;

/// Default region growth limit (64MB)
/// Used as default capacity for the buffer-backed region
pub const DEFAULT_REGION_LIMIT: Size = 64 * 1024 * 1024;
