// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use glossa_app::{Collection, RandomSource, Record};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use std::collections::VecDeque;

const PREFIXES: [&str; 12] = [
    "Atomic", "Borrowed", "Cached", "Deferred", "Eager", "Frozen", "Global", "Hashed", "Inline",
    "Lazy", "Mutable", "Pinned",
];

const NOUNS: [&str; 14] = [
    "Buffer",
    "Channel",
    "Cursor",
    "Handle",
    "Index",
    "Iterator",
    "Ledger",
    "Pointer",
    "Queue",
    "Registry",
    "Segment",
    "Slot",
    "Table",
    "Token",
];

const VERBS: [&str; 10] = [
    "stores", "tracks", "guards", "batches", "orders", "routes", "caches", "counts", "borrows",
    "releases",
];

const OBJECTS: [&str; 10] = [
    "pending writes",
    "shared state",
    "open handles",
    "queued work",
    "decoded frames",
    "worker threads",
    "page offsets",
    "parsed tokens",
    "heap blocks",
    "retry attempts",
];

/// Deterministic generator of plausible glossary entries.
#[derive(Debug, Clone)]
pub struct TermFaker {
    rng: ChaCha8Rng,
}

impl TermFaker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `0..n`; 0 when `n` is 0.
    pub fn int_n(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    pub fn record(&mut self) -> Record {
        let name = format!("{} {}", self.pick(&PREFIXES), self.pick(&NOUNS));
        let description = format!(
            "{} that {} {}.",
            self.pick(&NOUNS),
            self.pick(&VERBS),
            self.pick(&OBJECTS)
        );
        Record::new(name, description)
    }

    pub fn records(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.record()).collect()
    }

    pub fn collection(&mut self, count: usize) -> Collection {
        Collection::new(self.records(count))
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// `count` records named `term 000`, `term 001`, ... in ascending order.
pub fn numbered_collection(count: usize) -> Collection {
    (0..count)
        .map(|index| Record::new(format!("term {index:03}"), format!("definition {index:03}")))
        .collect()
}

/// Replays a fixed list of indices, wrapping each into the length of the list
/// being drawn from.
/// Falls back to index 0 once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            draws: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        self.draws += 1;
        let next = self.indices.pop_front().unwrap_or(0);
        items.get(next % items.len())
    }
}
