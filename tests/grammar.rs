#![cfg(test)]

use derivation::{DerivationEngine, Error, Failure, Grammar, Production};

#[test]
fn parse_and_display() {
    let grammar: Grammar = "
        # arithmetic over one digit
        <e> ::= <e>+<t> | <t>
        <t> → 1
        "
    .parse()
    .unwrap();

    assert_eq!(grammar.to_string(), "<e> -> <e>+<t> | <t>\n<t> -> 1\n");
}

#[test]
fn display_parses_back() {
    let grammar: Grammar = "S -> aSb | ab; A -> ε | a".parse().unwrap();
    let reparsed: Grammar = grammar.to_string().parse().unwrap();
    assert_eq!(grammar, reparsed);
}

#[test]
fn invalid_grammar() {
    let result: Result<Grammar, _> = "S -> aSb | | ab".parse();
    assert!(matches!(result, Err(Error::ParseError(_))), "{result:?}");
}

#[test]
fn duplicate_declarations_keep_the_last() {
    let grammar = Grammar::from_parts(vec![
        Production::from_parts("S", ["aSb", "ab"]),
        Production::from_parts("S", ["c"]),
    ]);
    let engine = DerivationEngine::new(grammar, "S");

    assert_eq!(
        engine.derive_leftmost("ab").failure(),
        Some(Failure::NoRuleApplicable)
    );
    assert!(engine.derive_leftmost("c").is_success());
}

#[test]
fn scan_order_is_by_symbol_not_declaration() {
    // B is declared first but A is scanned first
    let grammar: Grammar = "S -> AB
        B -> b
        A -> a"
        .parse()
        .unwrap();
    let engine = DerivationEngine::new(grammar, "S");

    let derivation = engine.derive_rightmost("ab");
    assert_eq!(derivation.forms().collect::<Vec<_>>(), ["S", "AB", "aB", "ab"]);
}

#[test]
fn multichar_nonterminals() {
    let grammar: Grammar = "<e> ::= <e>+<t> | <t>
        <t> ::= 1"
        .parse()
        .unwrap();
    let engine = DerivationEngine::new(grammar, "<e>");

    // length bound keeps "<e>+<t>" (7 chars) out of reach for a 3 char target
    let derivation = engine.derive_leftmost("1+1");
    assert_eq!(derivation.failure(), Some(Failure::NoRuleApplicable));

    // targets may themselves be sentential forms
    let derivation = engine.derive_leftmost("<t>");
    assert!(derivation.is_success());
    assert_eq!(derivation.forms().collect::<Vec<_>>(), ["<e>", "<t>"]);
}
