//! Rewrite search from the start symbol towards a target string.
//!
//! Candidates for the next rewrite are produced in a fixed order: rules in the grammar's scan
//! order, and for each rule whose non-terminal occurs in the current form, its alternatives in
//! declaration order. The occurrence rewritten is the first or last one, by [`Direction`].
//! A candidate is admissible when it is no longer than the target (counted in `char`s).
//!
//! [`Strategy::GreedyFirstFit`] commits to the first admissible candidate every iteration and
//! never revisits a choice, so it can miss derivations that exist.
//! [`Strategy::Backtracking`] walks the same candidates depth-first and finds a derivation
//! whenever one exists whose forms all stay within the target's length.

use crate::HashSet;
use crate::clock::{Clock, Deadline};
use crate::derivation::{Derivation, Direction, Failure, Outcome, Step, splice};
use crate::grammar::Grammar;
use crate::tracing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the engine searches for a derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Strategy {
    /// First admissible rewrite wins, no backtracking
    #[default]
    GreedyFirstFit,
    /// Depth-first search over all admissible rewrites, skipping forms already seen
    Backtracking,
}

impl Strategy {
    pub(crate) fn run<C: Clock>(
        self,
        grammar: &Grammar,
        start: &str,
        direction: Direction,
        target: &str,
        deadline: &Deadline<C>,
    ) -> Derivation {
        let search = Search {
            grammar,
            direction,
            target,
            target_len: target.chars().count(),
        };

        let (steps, outcome) = match self {
            Strategy::GreedyFirstFit => search.greedy(start, deadline),
            Strategy::Backtracking => search.backtracking(start, deadline),
        };

        Derivation::new(
            direction,
            start.to_string(),
            target.to_string(),
            steps,
            outcome,
        )
    }
}

struct Candidate<'gram> {
    lhs: &'gram str,
    rhs: &'gram str,
    next: String,
}

impl Candidate<'_> {
    fn step(&self) -> Step {
        Step::new(self.lhs, self.rhs, self.next.clone())
    }
}

struct Search<'a> {
    grammar: &'a Grammar,
    direction: Direction,
    target: &'a str,
    target_len: usize,
}

impl<'a> Search<'a> {
    /// Admissible rewrites of `current`, in candidate order. Lazy, so the greedy search only
    /// builds the forms it has to look at.
    fn candidates<'s>(&'s self, current: &'s str) -> impl Iterator<Item = Candidate<'a>> + 's {
        self.grammar
            .rules_iter()
            .filter_map(move |(lhs, alternatives)| {
                let pos = self.direction.locate(current, lhs)?;
                Some(alternatives.iter().filter_map(move |rhs| {
                    let next = splice(current, pos, lhs, rhs)?;
                    Some(Candidate {
                        lhs,
                        rhs: rhs.as_str(),
                        next,
                    })
                }))
            })
            .flatten()
            .filter(move |candidate| candidate.next.chars().count() <= self.target_len)
    }

    fn timeout<C: Clock>(deadline: &Deadline<C>) -> Outcome {
        tracing::event!(
            tracing::Level::DEBUG,
            "derivation budget of {}s exceeded",
            deadline.budget().as_secs_f64()
        );
        Outcome::Failure(Failure::TimeoutExceeded {
            budget: deadline.budget(),
        })
    }

    fn greedy<C: Clock>(&self, start: &str, deadline: &Deadline<C>) -> (Vec<Step>, Outcome) {
        let _span = tracing::span!(tracing::Level::DEBUG, "greedy").entered();

        let mut current = start.to_string();
        let mut steps = Vec::new();

        while current != self.target {
            let Some(candidate) = self.candidates(&current).next() else {
                tracing::event!(tracing::Level::DEBUG, "no rule applies to {current}");
                return (steps, Outcome::Failure(Failure::NoRuleApplicable));
            };

            tracing::event!(
                tracing::Level::TRACE,
                "applying rule: {} -> {}",
                candidate.lhs,
                candidate.rhs
            );
            steps.push(candidate.step());
            current = candidate.next;

            // sampled once per iteration, after the rewrite
            if deadline.is_exceeded() {
                return (steps, Self::timeout(deadline));
            }
        }

        (steps, Outcome::Success)
    }

    fn backtracking<C: Clock>(&self, start: &str, deadline: &Deadline<C>) -> (Vec<Step>, Outcome) {
        let _span = tracing::span!(tracing::Level::DEBUG, "backtracking").entered();

        if start == self.target {
            return (Vec::new(), Outcome::Success);
        }

        let mut visited = HashSet::new();
        visited.insert(start.to_string());

        // one frame of pending candidates per form on the current path
        let mut frames = vec![self.candidates(start).collect::<Vec<_>>().into_iter()];
        let mut path: Vec<Step> = Vec::new();

        while let Some(frame) = frames.last_mut() {
            if deadline.is_exceeded() {
                return (path, Self::timeout(deadline));
            }

            let Some(candidate) = frame.next() else {
                frames.pop();
                path.pop();
                continue;
            };

            if visited.contains(&candidate.next) {
                continue;
            }
            visited.insert(candidate.next.clone());

            tracing::event!(
                tracing::Level::TRACE,
                "trying rule: {} -> {} at depth {}",
                candidate.lhs,
                candidate.rhs,
                path.len()
            );
            path.push(candidate.step());

            if candidate.next == self.target {
                return (path, Outcome::Success);
            }

            frames.push(self.candidates(&candidate.next).collect::<Vec<_>>().into_iter());
        }

        tracing::event!(
            tracing::Level::DEBUG,
            "search space exhausted after {} forms",
            visited.len()
        );
        (path, Outcome::Failure(Failure::NoRuleApplicable))
    }
}
