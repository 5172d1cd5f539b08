/*!
 * Block Registry
 * Slot arena tracking every block ever carved from the region
 */

use crate::core::types::{Address, Size};

/// Index of a block record in the registry arena
pub(super) type Slot = u32;

/// Metadata for one block carved from the region
#[derive(Debug, Clone)]
pub(super) struct BlockRecord {
    /// Header offset; the payload starts HEADER_SIZE past it
    pub start: Address,
    /// Bytes requested at creation; never changes afterwards
    pub size: Size,
    pub free: bool,
    pub next: Option<Slot>,
}

/// Singly-linked chain of block records in creation order
///
/// Creation order equals address order: blocks are only appended at the
/// region top and only the tail is ever physically destroyed. Records live
/// in a slot arena with a free-slot list; links are slot indices, never
/// raw addresses.
#[derive(Debug, Default)]
pub(super) struct BlockRegistry {
    records: Vec<Option<BlockRecord>>,
    free_slots: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, slot: Slot) -> Option<&BlockRecord> {
        self.records.get(slot as usize)?.as_ref()
    }

    pub fn record_mut(&mut self, slot: Slot) -> Option<&mut BlockRecord> {
        self.records.get_mut(slot as usize)?.as_mut()
    }

    pub fn tail(&self) -> Option<Slot> {
        self.tail
    }

    /// First free block large enough for `size`, scanning in creation order
    ///
    /// Pure query, O(n) over every block ever carved; the earliest
    /// qualifying block wins regardless of how oversized it is.
    pub fn find_first_fit(&self, size: Size) -> Option<Slot> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let record = self.record(slot)?;
            if record.free && record.size >= size {
                return Some(slot);
            }
            cursor = record.next;
        }
        None
    }

    /// Append a freshly carved block at the chain tail
    pub fn append(&mut self, start: Address, size: Size) -> Slot {
        let record = BlockRecord {
            start,
            size,
            free: false,
            next: None,
        };
        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.records[slot as usize] = Some(record);
                slot
            }
            None => {
                self.records.push(Some(record));
                (self.records.len() - 1) as Slot
            }
        };
        if let Some(tail) = self.tail {
            if let Some(tail_record) = self.record_mut(tail) {
                tail_record.next = Some(slot);
            }
        }
        if self.head.is_none() {
            self.head = Some(slot);
        }
        self.tail = Some(slot);
        slot
    }

    /// Unlink and destroy the tail block, returning its record
    ///
    /// No back-links exist, so the predecessor is found by a forward scan
    /// from head; it becomes the new tail with its link truncated.
    pub fn remove_tail(&mut self) -> Option<BlockRecord> {
        let tail = self.tail?;
        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            let mut cursor = self.head;
            while let Some(slot) = cursor {
                let next = self.record(slot)?.next;
                if next == Some(tail) {
                    if let Some(record) = self.record_mut(slot) {
                        record.next = None;
                    }
                    self.tail = Some(slot);
                    break;
                }
                cursor = next;
            }
        }
        let record = self.records[tail as usize].take();
        self.free_slots.push(tail);
        record
    }

    /// Count of (in-use, free) records on the chain
    pub fn census(&self) -> (usize, usize) {
        let mut allocated = 0;
        let mut free = 0;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            match self.record(slot) {
                Some(record) => {
                    if record.free {
                        free += 1;
                    } else {
                        allocated += 1;
                    }
                    cursor = record.next;
                }
                None => break,
            }
        }
        (allocated, free)
    }
}
