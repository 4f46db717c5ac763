use crate::production::Alternative;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::time::Duration;

/// Which occurrence of a non-terminal a rewrite replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Direction {
    /// Rewrite the first (lowest index) occurrence
    Leftmost,
    /// Rewrite the last (highest index) occurrence
    Rightmost,
}

impl Direction {
    /// Byte index of the occurrence of `lhs` in `form` this direction rewrites.
    #[must_use]
    pub fn locate(self, form: &str, lhs: &str) -> Option<usize> {
        match self {
            Direction::Leftmost => form.find(lhs),
            Direction::Rightmost => form.rfind(lhs),
        }
    }

    /// `form` with the located occurrence of `lhs` replaced by `rhs`.
    #[must_use]
    pub fn rewrite(self, form: &str, lhs: &str, rhs: &str) -> Option<String> {
        let pos = self.locate(form, lhs)?;
        splice(form, pos, lhs, rhs)
    }

    /// Short tag used in status lines
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::Leftmost => "LMD",
            Direction::Rightmost => "RMD",
        }
    }
}

/// Replace the `lhs` found at byte `pos` of `form` with `rhs`.
pub(crate) fn splice(form: &str, pos: usize, lhs: &str, rhs: &str) -> Option<String> {
    let before = form.get(..pos)?;
    let after = form.get(pos + lhs.len()..)?;

    let mut next = String::with_capacity(before.len() + rhs.len() + after.len());
    next.push_str(before);
    next.push_str(rhs);
    next.push_str(after);
    Some(next)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Leftmost => write!(f, "Leftmost"),
            Direction::Rightmost => write!(f, "Rightmost"),
        }
    }
}

/// One accepted rewrite: the rule applied and the sentential form it produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[non_exhaustive]
pub struct Step {
    pub lhs: String,
    pub rhs: String,
    pub form: String,
}

impl Step {
    pub(crate) fn new(lhs: &str, rhs: &str, form: String) -> Self {
        Self {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            form,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} => {}", self.lhs, Alternative(&self.rhs), self.form)
    }
}

/// Why a derivation attempt stopped without reaching its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Failure {
    /// No rule and alternative produced an admissible rewrite of the current form
    NoRuleApplicable,
    /// The time budget ran out
    TimeoutExceeded { budget: Duration },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::NoRuleApplicable => write!(f, "no valid derivation found"),
            Failure::TimeoutExceeded { budget } => {
                write!(f, "exceeded the {}-second limit", budget.as_secs_f64())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Outcome {
    Success,
    Failure(Failure),
}

/// The trace of one derivation attempt and how it ended.
///
/// Steps applied before a failure are kept, so a failed attempt can still be reported
/// step by step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Derivation {
    direction: Direction,
    start: String,
    target: String,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl Derivation {
    pub(crate) const fn new(
        direction: Direction,
        start: String,
        target: String,
        steps: Vec<Step>,
        outcome: Outcome,
    ) -> Self {
        Self {
            direction,
            start,
            target,
            steps,
            outcome,
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn start_symbol(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }

    #[must_use]
    pub const fn failure(&self) -> Option<Failure> {
        match self.outcome {
            Outcome::Success => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Every sentential form in order, starting with the start symbol
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.start.as_str()).chain(self.steps.iter().map(|step| step.form.as_str()))
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Attempting {} Derivation for \"{}\":",
            self.direction, self.target
        )?;

        for (idx, step) in self.steps.iter().enumerate() {
            writeln!(f, "Applying rule: {} -> {}", step.lhs, Alternative(&step.rhs))?;
            writeln!(f, "Step {}: {}", idx + 1, step.form)?;
        }

        let tag = self.direction.abbreviation();
        match self.outcome {
            Outcome::Success => write!(f, "{} Derivation Completed Successfully!", self.direction),
            Outcome::Failure(Failure::NoRuleApplicable) => {
                write!(f, "{tag}: No valid derivation found for the input string.")
            }
            Outcome::Failure(failure @ Failure::TimeoutExceeded { .. }) => {
                write!(f, "{tag}: Parsing {failure}. Exiting.")
            }
        }
    }
}
