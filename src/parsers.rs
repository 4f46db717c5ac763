use crate::grammar::Grammar;
use crate::production::{EPSILON, Production};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{self, line_ending, multispace1, satisfy, space0},
    combinator::{all_consuming, map, not, opt, recognize, value},
    multi::{many0_count, many1_count, separated_list1},
    sequence::{delimited, preceded, terminated},
};

fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '|' | ';' | '#')
}

pub fn arrow(input: &str) -> IResult<&str, &str> {
    alt((tag("->"), tag("→"), tag("::="))).parse(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(preceded(
        complete::char('#'),
        take_till(|c: char| c == '\r' || c == '\n'),
    ))
    .parse(input)
}

/// Blank space between productions: whitespace, line breaks, comments and stray `;`.
fn filler(input: &str) -> IResult<&str, ()> {
    value((), many0_count(alt((multispace1, comment, tag(";"))))).parse(input)
}

/// The left hand side ends where an arrow starts, even without surrounding spaces.
pub fn lhs(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(preceded(not(arrow), satisfy(is_symbol_char)))).parse(input)
}

pub fn alternative(input: &str) -> IResult<&str, String> {
    map(take_while1(is_symbol_char), |alt: &str| {
        if alt == EPSILON {
            String::new()
        } else {
            alt.to_string()
        }
    })
    .parse(input)
}

fn alternative_separator(input: &str) -> IResult<&str, char> {
    delimited(space0, complete::char('|'), space0).parse(input)
}

pub fn production(input: &str) -> IResult<&str, Production> {
    map(
        (
            terminated(preceded(space0, lhs), space0),
            terminated(arrow, space0),
            terminated(separated_list1(alternative_separator, alternative), space0),
        ),
        |(lhs, _, rhs)| Production::from_parts(lhs, rhs),
    )
    .parse(input)
}

pub fn production_complete(input: &str) -> IResult<&str, Production> {
    all_consuming(production).parse(input)
}

fn production_separator(input: &str) -> IResult<&str, ()> {
    value(
        (),
        (
            space0,
            opt(comment),
            alt((line_ending, tag(";"))),
            filler,
        ),
    )
    .parse(input)
}

pub fn grammar(input: &str) -> IResult<&str, Grammar> {
    map(
        delimited(filler, separated_list1(production_separator, production), filler),
        Grammar::from_parts,
    )
    .parse(input)
}

pub fn grammar_complete(input: &str) -> IResult<&str, Grammar> {
    all_consuming(grammar).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lhs_stops_at_arrow() {
        let (rest, lhs) = lhs("S->aSb").unwrap();
        assert_eq!(lhs, "S");
        assert_eq!(rest, "->aSb");
    }

    #[test]
    fn lhs_rejects_separator() {
        assert!(lhs("|S").is_err());
    }

    #[test]
    fn arrow_variants() {
        for input in ["->", "→", "::="] {
            let (rest, _) = arrow(input).unwrap();
            assert!(rest.is_empty(), "{input} should be an arrow");
        }
    }

    #[test]
    fn epsilon_alternative_is_empty() {
        let (_, alt) = alternative("ε").unwrap();
        assert_eq!(alt, "");
    }

    #[test]
    fn production_match() {
        let input = "S -> aSb | ab";
        let expected = Production::from_parts("S", ["aSb", "ab"]);

        let (_, actual) = production(input).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn production_without_spaces() {
        let (_, actual) = production("S->aSb|ab").unwrap();
        assert_eq!(Production::from_parts("S", ["aSb", "ab"]), actual);
    }

    #[test]
    fn production_multichar_nonterminal() {
        let (_, actual) = production("<expr> ::= <expr>+<term> | <term>").unwrap();
        assert_eq!(
            Production::from_parts("<expr>", ["<expr>+<term>", "<term>"]),
            actual
        );
    }

    #[test]
    fn production_missing_arrow() {
        assert!(production_complete("S aSb | ab").is_err());
    }

    #[test]
    fn grammar_match() {
        let input = "
            # balanced a/b
            S -> aSb | ab
            A -> a ; B -> b;
        ";
        let expected = Grammar::from_parts(vec![
            Production::from_parts("S", ["aSb", "ab"]),
            Production::from_parts("A", ["a"]),
            Production::from_parts("B", ["b"]),
        ]);

        let (_, actual) = grammar_complete(input).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn grammar_trailing_comment() {
        let (_, actual) = grammar_complete("S -> ab # only one\n").unwrap();
        assert_eq!(
            Grammar::from_parts(vec![Production::from_parts("S", ["ab"])]),
            actual
        );
    }

    #[test]
    fn empty_grammar_is_error() {
        assert!(grammar_complete("").is_err());
        assert!(grammar_complete("  # nothing here\n").is_err());
    }
}
