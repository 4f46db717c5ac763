#![doc = include_str!("../README.md")]

mod clock;
mod derivation;
mod engine;
mod error;
mod grammar;
mod parsers;
mod production;
mod search;
mod tracing;
pub use crate::clock::{Clock, DEFAULT_BUDGET, Deadline, MonotonicClock};
pub use crate::derivation::{Derivation, Direction, Failure, Outcome, Step};
pub use crate::engine::DerivationEngine;
pub use crate::error::Error;
pub use crate::grammar::Grammar;
pub use crate::production::Production;
pub use crate::search::Strategy;

pub(crate) use hashbrown::HashSet;
