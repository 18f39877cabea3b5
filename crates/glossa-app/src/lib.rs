// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod model;
pub mod query;
pub mod random;
pub mod seed;
pub mod state;

pub use model::*;
pub use query::*;
pub use random::*;
pub use state::*;
