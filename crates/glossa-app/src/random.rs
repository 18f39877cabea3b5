// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Record;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{OsError, OsRng, SeedableRng};
use tracing::trace;

/// The single source of randomness behind term draws.
pub trait RandomSource {
    /// Uniform choice over `items`; `None` only when `items` is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn from_entropy() -> Result<Self, OsError> {
        Ok(Self {
            rng: ChaCha8Rng::try_from_rng(&mut OsRng)?,
        })
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Uniform choice over `items`, falling back to `default` only when `items`
/// is empty. The default never competes with real items.
pub fn choose_or_default<'a, T, R>(source: &mut R, default: &'a T, items: &'a [T]) -> &'a T
where
    R: RandomSource,
{
    source.choose(items).unwrap_or(default)
}

pub fn pick_random<R>(source: &mut R, records: &[Record]) -> Record
where
    R: RandomSource,
{
    let placeholder = Record::placeholder();
    let picked = choose_or_default(source, &placeholder, records).clone();
    trace!(name = %picked.name, candidates = records.len(), "drew random term");
    picked
}
