use crate::clock::{Clock, DEFAULT_BUDGET, Deadline, MonotonicClock};
use crate::derivation::{Derivation, Direction};
use crate::grammar::Grammar;
use crate::production::Production;
use crate::search::Strategy;
use crate::tracing;

use std::time::Duration;

/// Runs leftmost and rightmost derivations of target strings from a start symbol.
///
/// The grammar and start symbol are fixed at construction and never validated: a start
/// symbol the grammar does not define simply fails to derive anything. Each call starts from
/// the start symbol with a fresh trace, so calls are independent of each other.
///
/// ```rust
/// use derivation::{DerivationEngine, Grammar};
///
/// let grammar: Grammar = "S -> aSb | ab".parse().unwrap();
/// let engine = DerivationEngine::new(grammar, "S");
///
/// let derivation = engine.derive_leftmost("aabb");
/// assert!(derivation.is_success());
/// assert_eq!(derivation.forms().collect::<Vec<_>>(), ["S", "aSb", "aabb"]);
///
/// assert!(!engine.derive_rightmost("aab").is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationEngine {
    grammar: Grammar,
    start: String,
    budget: Duration,
    strategy: Strategy,
}

impl DerivationEngine {
    /// Engine with the default one second budget and greedy first-fit search
    #[must_use]
    pub fn new(grammar: Grammar, start: impl Into<String>) -> Self {
        Self {
            grammar,
            start: start.into(),
            budget: DEFAULT_BUDGET,
            strategy: Strategy::default(),
        }
    }

    /// Build the grammar from productions in declaration order, see [`Grammar::from_parts`]
    #[must_use]
    pub fn from_productions(productions: Vec<Production>, start: impl Into<String>) -> Self {
        Self::new(Grammar::from_parts(productions), start)
    }

    /// Time allowed for each derivation started through [`DerivationEngine::derive`]
    #[must_use]
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    #[must_use]
    pub fn start_symbol(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub const fn budget(&self) -> Duration {
        self.budget
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Derive `target` rewriting the first occurrence of a non-terminal each step
    #[must_use]
    pub fn derive_leftmost(&self, target: &str) -> Derivation {
        self.derive(Direction::Leftmost, target)
    }

    /// Derive `target` rewriting the last occurrence of a non-terminal each step
    #[must_use]
    pub fn derive_rightmost(&self, target: &str) -> Derivation {
        self.derive(Direction::Rightmost, target)
    }

    /// Leftmost then rightmost, each with its own budget
    #[must_use]
    pub fn derive_both(&self, target: &str) -> (Derivation, Derivation) {
        (self.derive_leftmost(target), self.derive_rightmost(target))
    }

    /// Derive `target` against the wall clock, with the engine's budget starting now
    #[must_use]
    pub fn derive(&self, direction: Direction, target: &str) -> Derivation {
        let deadline = Deadline::start(MonotonicClock::new(), self.budget);
        self.derive_until(direction, target, &deadline)
    }

    /// Derive `target`, giving up once `deadline` is exceeded.
    ///
    /// The deadline is sampled once per search iteration, never in the middle of one.
    #[must_use]
    pub fn derive_until<C: Clock>(
        &self,
        direction: Direction,
        target: &str,
        deadline: &Deadline<C>,
    ) -> Derivation {
        let _span = tracing::span!(
            tracing::Level::DEBUG,
            "derive",
            direction = direction.abbreviation(),
            input = target
        )
        .entered();

        let derivation = self
            .strategy
            .run(&self.grammar, &self.start, direction, target, deadline);

        tracing::event!(
            tracing::Level::DEBUG,
            "{} derivation finished after {} steps, success: {}",
            direction,
            derivation.steps().len(),
            derivation.is_success()
        );

        derivation
    }
}
