extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

mod grammar;
pub use grammar::pretty_print::{
    FirstFollowOutput, NonterminalSetsOutput, ProductionOutput, ProductionOutputVec, SetListOutput,
    SymbolSetOutput,
};
pub use grammar::{
    FirstTable, FollowTable, Grammar, GrammarError, Rule, Symbol, SymbolSet, ARROW, END_MARK,
    LAMBDA,
};

#[wasm_bindgen]
pub fn first_follow_to_json(grammar: &str) -> String {
    match crate::Grammar::parse(grammar) {
        Ok(g) => {
            let first = g.first_table();
            let follow = g.follow_table(&first);
            g.to_first_follow_output(&first, &follow).to_json()
        }
        Err(e) => format!("{{\"error\":\"{}\"}}", e),
    }
}


#[cfg(test)]
mod first_follow_tests {
    use crate::{FirstTable, Grammar, Symbol, SymbolSet};

    fn nt(name: &str) -> Symbol {
        Symbol::Nonterminal(name.to_string())
    }

    fn sorted(set: &SymbolSet) -> Vec<&str> {
        let mut names = set.names();
        names.sort_unstable();
        names
    }

    #[test]
    fn small_grammar_first_and_follow() {
        let g = Grammar::parse("S -> A S b\nS -> C\nA -> a\nC -> c\nC -> lambda").unwrap();
        let first = FirstTable::build(&g);
        let follow = g.follow_table(&first);

        assert_eq!(sorted(first.first(&nt("S")).unwrap()), vec!["a", "c", "lambda"]);
        assert_eq!(sorted(first.first(&nt("A")).unwrap()), vec!["a"]);
        assert_eq!(sorted(first.first(&nt("C")).unwrap()), vec!["c", "lambda"]);

        assert_eq!(sorted(follow.follow(&nt("S")).unwrap()), vec!["$", "b"]);
        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["a", "b", "c"]);
        assert_eq!(sorted(follow.follow(&nt("C")).unwrap()), vec!["$", "b"]);
    }

    #[test]
    fn first_of_a_terminal_is_itself() {
        let g = Grammar::parse("S -> A S b\nS -> C\nA -> a\nC -> c\nC -> lambda").unwrap();
        let first = g.first_table();

        for terminal in g.terminals() {
            assert_eq!(first.first(terminal).unwrap().names(), vec![terminal.name()]);
        }
        assert_eq!(
            first.first(&Symbol::Epsilon).unwrap().names(),
            vec!["lambda"]
        );
    }

    #[test]
    fn first_of_sequence_stops_at_first_non_nullable() {
        let g = Grammar::parse("S -> A S b\nS -> C\nA -> a\nC -> c\nC -> lambda").unwrap();
        let first = g.first_table();

        let c_then_b = [nt("C"), Symbol::Terminal("b".to_string())];
        assert_eq!(sorted(&first.first_of_sequence(&c_then_b)), vec!["b", "c"]);

        let a_then_b = [nt("A"), Symbol::Terminal("b".to_string())];
        assert_eq!(sorted(&first.first_of_sequence(&a_then_b)), vec!["a"]);
    }

    #[test]
    fn first_of_empty_sequence_is_lambda() {
        let g = Grammar::parse("S -> a").unwrap();
        let first = g.first_table();

        let mut expected = SymbolSet::new();
        expected.insert(Symbol::Epsilon);
        assert_eq!(first.first_of_sequence(&[]), expected);
    }

    #[test]
    fn expression_grammar() {
        let g = Grammar::parse(
            "E -> T X\nX -> + T X\nX -> lambda\nT -> F Y\nY -> * F Y\nY -> lambda\nF -> ( E )\nF -> id",
        )
        .unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert_eq!(sorted(first.first(&nt("E")).unwrap()), vec!["(", "id"]);
        assert_eq!(sorted(first.first(&nt("X")).unwrap()), vec!["+", "lambda"]);
        assert_eq!(sorted(first.first(&nt("T")).unwrap()), vec!["(", "id"]);
        assert_eq!(sorted(first.first(&nt("Y")).unwrap()), vec!["*", "lambda"]);
        assert_eq!(sorted(first.first(&nt("F")).unwrap()), vec!["(", "id"]);

        assert_eq!(sorted(follow.follow(&nt("E")).unwrap()), vec!["$", ")"]);
        assert_eq!(sorted(follow.follow(&nt("X")).unwrap()), vec!["$", ")"]);
        assert_eq!(sorted(follow.follow(&nt("T")).unwrap()), vec!["$", ")", "+"]);
        assert_eq!(sorted(follow.follow(&nt("Y")).unwrap()), vec!["$", ")", "+"]);
        assert_eq!(
            sorted(follow.follow(&nt("F")).unwrap()),
            vec!["$", ")", "*", "+"]
        );
    }

    #[test]
    fn follow_skips_over_trailing_nullables() {
        let g = Grammar::parse("S -> A B C\nA -> a\nB -> lambda\nC -> lambda\nC -> c").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["$", "c"]);
        assert_eq!(sorted(follow.follow(&nt("B")).unwrap()), vec!["$", "c"]);
        assert_eq!(sorted(follow.follow(&nt("C")).unwrap()), vec!["$"]);
    }

    #[test]
    fn follow_collects_from_every_occurrence_in_a_rule() {
        let g = Grammar::parse("S -> A a A b\nA -> x").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn repeated_nonterminal_ending_the_rule_also_inherits() {
        // the inner occurrence sees `a`, the final one inherits FOLLOW(S)
        let g = Grammar::parse("S -> A a A\nA -> x").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["$", "a"]);
    }

    #[test]
    fn lambda_never_enters_a_follow_set() {
        let g = Grammar::parse("S -> A B\nA -> lambda\nA -> a\nB -> lambda\nB -> b").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert_eq!(sorted(first.first(&nt("S")).unwrap()), vec!["a", "b", "lambda"]);
        for nonterminal in g.nonterminals() {
            let set = follow.follow(nonterminal).unwrap();
            assert!(!set.contains(&Symbol::Epsilon), "FOLLOW({})", nonterminal);
        }
        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["$", "b"]);
        assert_eq!(sorted(follow.follow(&nt("B")).unwrap()), vec!["$"]);
    }

    #[test]
    fn end_marker_seeds_follow_of_start_symbol() {
        let g = Grammar::parse("S -> a S\nS -> b").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert!(follow
            .follow(g.start_symbol())
            .unwrap()
            .contains(&Symbol::EndOfInput));
        assert_eq!(sorted(follow.follow(&nt("S")).unwrap()), vec!["$"]);
    }

    #[test]
    fn mutually_recursive_nonterminals_converge() {
        let g = Grammar::parse("X -> Y\nY -> X").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert!(first.first(&nt("X")).unwrap().is_empty());
        assert!(first.first(&nt("Y")).unwrap().is_empty());
        assert_eq!(sorted(follow.follow(&nt("X")).unwrap()), vec!["$"]);
        assert_eq!(sorted(follow.follow(&nt("Y")).unwrap()), vec!["$"]);
    }

    #[test]
    fn nonterminal_without_rules_has_empty_first() {
        let g = Grammar::parse("S -> A b").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert!(first.first(&nt("A")).unwrap().is_empty());
        assert!(first.first(&nt("S")).unwrap().is_empty());
        assert_eq!(sorted(follow.follow(&nt("A")).unwrap()), vec!["b"]);
        // only rule-owning nonterminals get report rows
        assert_eq!(g.defined_nonterminals(), &[nt("S")]);
    }

    #[test]
    fn unreferenced_nonterminal_has_empty_follow() {
        let g = Grammar::parse("S -> a\nZ -> b").unwrap();
        let first = g.first_table();
        let follow = g.follow_table(&first);

        assert!(follow.follow(&nt("Z")).unwrap().is_empty());
        assert_eq!(sorted(follow.follow(&nt("S")).unwrap()), vec!["$"]);
    }

    #[test]
    fn tables_are_deterministic() {
        let g = Grammar::parse("E -> T X\nX -> + T X\nX -> lambda\nT -> id").unwrap();

        let first_a = g.first_table();
        let first_b = g.first_table();
        assert_eq!(first_a, first_b);

        let follow_a = g.follow_table(&first_a);
        let follow_b = g.follow_table(&first_b);
        assert_eq!(follow_a, follow_b);
    }
}
