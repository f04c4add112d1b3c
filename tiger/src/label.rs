// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A symbolic jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label {
    id: usize,
}

impl Label {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("L_")?;
        self.id.fmt(f)
    }
}

/// Hands out labels that are unique for the lifetime of the allocator.
///
/// One allocator belongs to one compilation session. Labels are never
/// recycled, so two sessions that start from the same id produce the same
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    next_id: usize,
    issued: usize,
}

impl LabelAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts numbering at `id`, e.g. when an earlier phase already used the
    /// ids below it.
    #[must_use]
    pub const fn starting_at(id: usize) -> Self {
        Self {
            next_id: id,
            issued: 0,
        }
    }

    #[must_use]
    pub fn fresh(&mut self) -> Label {
        let label = Label::new(self.next_id);
        self.next_id += 1;
        self.issued += 1;
        label
    }

    /// The amount of labels handed out by this allocator.
    #[must_use]
    pub const fn issued(&self) -> usize {
        self.issued
    }
}
