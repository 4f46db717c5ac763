//! Grammar module holding the rewrite rules a derivation draws from.
//!
//! A [`Grammar`] maps each non-terminal to its alternatives. Non-terminals are matched as
//! plain substrings of the sentential form, so any token can act as one: single uppercase
//! letters (`S`), bracketed names (`<expr>`) or other reserved markers.
//!
//! # Examples
//!
//! ```rust
//! use derivation::Grammar;
//!
//! let grammar: Grammar = "S -> aSb | ab".parse().unwrap();
//! assert_eq!(grammar.alternatives("S"), Some(&["aSb".to_string(), "ab".to_string()][..]));
//!
//! // declarations for the same non-terminal replace earlier ones
//! let grammar: Grammar = "S -> aSb | ab
//! S -> c".parse().unwrap();
//! assert_eq!(grammar.alternatives("S").map(<[String]>::len), Some(1));
//! ```

use crate::error::Error;
use crate::parsers;
use crate::production::{Production, fmt_rule};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::str;

/// A Grammar is an ordered set of rules, one per non-terminal.
///
/// Rules are kept in lexicographic order of their non-terminal, which is also the order a
/// derivation scans them in. Alternatives keep their declaration order.
#[derive(Clone, Default, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Grammar {
    rules: BTreeMap<String, Vec<String>>,
}

impl Grammar {
    /// Construct a new, empty `Grammar`
    #[must_use]
    pub const fn new() -> Grammar {
        Grammar {
            rules: BTreeMap::new(),
        }
    }

    /// Construct a `Grammar` from `Production`s, in declaration order
    #[must_use]
    pub fn from_parts(v: Vec<Production>) -> Grammar {
        v.into_iter().collect()
    }

    /// parse a grammar from its text notation
    pub fn parse_from(input: &str) -> Result<Grammar, Error> {
        match parsers::grammar_complete(input) {
            Result::Ok((_, o)) => Ok(o),
            Result::Err(e) => Err(Error::from(e)),
        }
    }

    /// Add `Production` to the `Grammar`.
    ///
    /// An existing rule for the same non-terminal is replaced, not merged, and returned.
    pub fn add_production(&mut self, prod: Production) -> Option<Production> {
        let (lhs, rhs) = prod.into_parts();
        self.rules
            .insert(lhs.clone(), rhs)
            .map(|previous| Production::from_parts(lhs, previous))
    }

    /// Iterate rules as `(non-terminal, alternatives)` in scan order
    pub fn rules_iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(lhs, rhs)| (lhs.as_str(), rhs.as_slice()))
    }

    /// Iterate the `Grammar`'s rules as `Production`s
    pub fn productions_iter(&self) -> impl Iterator<Item = Production> + '_ {
        self.rules_iter()
            .map(|(lhs, rhs)| Production::from_parts(lhs, rhs.iter().map(String::as_str)))
    }

    /// Iterate the defined non-terminals in scan order
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Alternatives declared for `lhs`, if it is defined
    #[must_use]
    pub fn alternatives(&self, lhs: &str) -> Option<&[String]> {
        self.rules.get(lhs).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, lhs: &str) -> bool {
        self.rules.contains_key(lhs)
    }

    /// Number of rules, i.e. distinct non-terminals
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Production> for Grammar {
    fn from_iter<T: IntoIterator<Item = Production>>(iter: T) -> Self {
        let mut grammar = Grammar::new();
        for prod in iter {
            grammar.add_production(prod);
        }
        grammar
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (lhs, rhs) in &self.rules {
            fmt_rule(f, lhs, rhs)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl str::FromStr for Grammar {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from(s)
    }
}
