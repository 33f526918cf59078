// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

// Replaces the cosmetic fixed-delay "loading" pattern: a host that keeps a
// non-zero presentation delay tags each filter run with a generation and
// drops results whose generation has been superseded. Computation itself is
// pure and synchronous, so with zero delay no result is ever stale.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Clone, Default)]
pub struct RefreshTracker {
    latest: u64,
}

impl RefreshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}
