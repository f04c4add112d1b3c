// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

/// Assigns the formals and locals of one method their local slot.
///
/// Slots are handed out in call order starting at `1`; slot `0` always holds
/// the receiver and is never allocated. Fields never get a slot.
#[derive(Debug)]
pub struct SlotAllocator {
    next_slot: usize,
    slots: HashMap<String, usize>,
}

impl SlotAllocator {
    pub const RECEIVER: usize = 0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            next_slot: Self::RECEIVER + 1,
            slots: HashMap::new(),
        }
    }

    /// Gives `id` the next free slot, or returns `None` when `id` already
    /// has one.
    #[must_use]
    pub fn allocate(&mut self, id: &str) -> Option<usize> {
        if self.slots.contains_key(id) {
            return None;
        }

        let slot = self.next_slot;
        self.next_slot += 1;
        self.slots.insert(id.to_string(), slot);
        Some(slot)
    }

    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    /// The amount of slots in use, the receiver included.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.next_slot
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}
