use crate::error::Error;
use crate::parsers;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Marker used in the text notation for an empty alternative.
pub(crate) const EPSILON: &str = "ε";

/// A Production maps one non-terminal to its alternatives, in declaration order.
///
/// Non-terminals and alternatives are plain strings: a rewrite replaces an occurrence
/// of `lhs` inside the current sentential form with one alternative.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Production {
    lhs: String,
    rhs: Vec<String>,
}

impl Production {
    /// Construct a `Production` from a left hand side and its alternatives
    #[must_use]
    pub fn from_parts<L, R>(lhs: L, rhs: impl IntoIterator<Item = R>) -> Production
    where
        L: Into<String>,
        R: Into<String>,
    {
        Production {
            lhs: lhs.into(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        }
    }

    /// The non-terminal this production rewrites
    #[must_use]
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// Get iterator of the `Production`'s alternatives, in declaration order
    pub fn rhs_iter(&self) -> impl Iterator<Item = &str> {
        self.rhs.iter().map(String::as_str)
    }

    /// Get number of alternatives
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rhs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<String>) {
        (self.lhs, self.rhs)
    }
}

pub(crate) struct Alternative<'a>(pub(crate) &'a str);

impl fmt::Display for Alternative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "{EPSILON}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

pub(crate) fn fmt_rule(f: &mut fmt::Formatter, lhs: &str, rhs: &[String]) -> fmt::Result {
    write!(f, "{lhs} ->")?;
    for (idx, alternative) in rhs.iter().enumerate() {
        if idx > 0 {
            write!(f, " |")?;
        }
        write!(f, " {}", Alternative(alternative))?;
    }
    Ok(())
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_rule(f, &self.lhs, &self.rhs)
    }
}

impl FromStr for Production {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parsers::production_complete(s) {
            Result::Ok((_, o)) => Ok(o),
            Result::Err(e) => Err(Error::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

    const SYMBOLS: &[char] = &['S', 'A', 'B', 'a', 'b', 'c', '0', '1', '(', ')', '+'];

    fn arbitrary_token(g: &mut Gen, allow_empty: bool) -> String {
        let min = usize::from(!allow_empty);
        let len = min + usize::arbitrary(g) % 5;
        (0..len)
            .filter_map(|_| g.choose(SYMBOLS).copied())
            .collect()
    }

    impl Arbitrary for Production {
        fn arbitrary(g: &mut Gen) -> Self {
            let lhs = arbitrary_token(g, false);
            let count = 1 + usize::arbitrary(g) % 4;
            let rhs: Vec<String> = (0..count).map(|_| arbitrary_token(g, true)).collect();
            Production { lhs, rhs }
        }
    }

    fn prop_to_string_and_back(prod: Production) -> TestResult {
        let to_string = prod.to_string();
        let from_str = Production::from_str(&to_string);
        match from_str {
            Ok(from_prod) => TestResult::from_bool(from_prod == prod),
            _ => TestResult::error(format!("{prod} to string and back should be safe")),
        }
    }

    #[test]
    fn to_string_and_back() {
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_to_string_and_back as fn(Production) -> TestResult)
    }

    #[test]
    fn from_parts_keeps_declaration_order() {
        let production = Production::from_parts("S", ["aSb", "ab"]);
        assert_eq!(production.lhs(), "S");
        assert_eq!(production.rhs_iter().collect::<Vec<_>>(), vec!["aSb", "ab"]);
        assert_eq!(production.len(), 2);
        assert!(!production.is_empty());
    }

    #[test]
    fn display() {
        let production = Production::from_parts("S", ["aSb", "ab"]);
        assert_eq!(production.to_string(), "S -> aSb | ab");
    }

    #[test]
    fn display_empty_alternative() {
        let production = Production::from_parts("A", ["a", ""]);
        assert_eq!(production.to_string(), "A -> a | ε");
    }

    #[test]
    fn parse_complete() {
        let expected = Production::from_parts("S", ["aSb", "ab"]);
        assert_eq!(Ok(expected), Production::from_str("S -> aSb | ab"));
    }

    #[test]
    fn parse_error() {
        let result = Production::from_str("S -> aSb |");
        assert!(result.is_err(), "production result should be error {result:?}");

        match result.unwrap_err() {
            Error::ParseError(_) => (),
        }
    }

    #[test]
    fn parse_incomplete() {
        let result = Production::from_str("");
        assert!(matches!(result, Err(Error::ParseError(_))), "{result:?} should be err");
    }

    #[test]
    fn parse_two_productions_is_error() {
        let result = Production::from_str("S -> aSb | ab\nA -> a");
        assert!(result.is_err(), "{result:?} should be error");
    }
}
