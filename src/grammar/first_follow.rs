use std::collections::HashMap;

use log::debug;

use super::grammar::Grammar;
use super::symbol::{Symbol, SymbolSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstTable {
    map: HashMap<Symbol, SymbolSet>,
}

impl FirstTable {
    pub fn build(grammar: &Grammar) -> FirstTable {
        let mut map: HashMap<Symbol, SymbolSet> = HashMap::new();

        // FIRST(t) = {t}, FIRST(lambda) = {lambda}, and an empty set for
        // every nonterminal whether or not it owns rules
        for terminal in grammar.terminals() {
            let mut set = SymbolSet::new();
            set.insert(terminal.clone());
            map.insert(terminal.clone(), set);
        }
        let mut epsilon = SymbolSet::new();
        epsilon.insert(Symbol::Epsilon);
        map.insert(Symbol::Epsilon, epsilon);
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal.clone(), SymbolSet::new());
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for rule in grammar.rules() {
                let contribution = sequence_first(&map, &rule.rhs);
                let first = map.get_mut(&rule.lhs).unwrap();
                changed |= first.insert_all(contribution);
            }
        }
        debug!("FIRST sets converged after {} passes", passes);

        FirstTable { map }
    }

    pub fn first(&self, symbol: &Symbol) -> Option<&SymbolSet> {
        self.map.get(symbol)
    }

    pub fn first_of_sequence(&self, symbols: &[Symbol]) -> SymbolSet {
        sequence_first(&self.map, symbols)
    }
}

// Stops at the first non-nullable symbol; lambda goes in only when the scan
// runs off the end, so the empty sequence yields exactly {lambda}.
fn sequence_first(map: &HashMap<Symbol, SymbolSet>, symbols: &[Symbol]) -> SymbolSet {
    let mut first = SymbolSet::new();
    for symbol in symbols {
        match symbol {
            Symbol::Epsilon => {
                // an epsilon production: lambda is the whole right-hand side
                first.insert(Symbol::Epsilon);
                return first;
            }
            Symbol::Terminal(_) | Symbol::EndOfInput => {
                first.insert(symbol.clone());
                return first;
            }
            Symbol::Nonterminal(_) => {
                // a nonterminal the grammar never defines has no entry and
                // behaves like one with an empty, non-nullable FIRST set
                let nullable = match map.get(symbol) {
                    Some(sub) => {
                        first.insert_all(sub.iter().filter(|s| !s.is_epsilon()).cloned());
                        sub.contains(&Symbol::Epsilon)
                    }
                    None => false,
                };
                if !nullable {
                    return first;
                }
            }
        }
    }
    first.insert(Symbol::Epsilon);
    first
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTable {
    map: HashMap<Symbol, SymbolSet>,
}

impl FollowTable {
    pub fn build(grammar: &Grammar, first: &FirstTable) -> FollowTable {
        let mut map: HashMap<Symbol, SymbolSet> = HashMap::new();
        for nonterminal in grammar.nonterminals() {
            map.insert(nonterminal.clone(), SymbolSet::new());
        }
        // The start symbol carries the end-of-input marker unconditionally.
        map.get_mut(grammar.start_symbol())
            .unwrap()
            .insert(Symbol::EndOfInput);

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for rule in grammar.rules() {
                for (i, symbol) in rule.rhs.iter().enumerate() {
                    if !symbol.is_nonterminal() {
                        continue;
                    }
                    let tail_first = first.first_of_sequence(&rule.rhs[i + 1..]);
                    // When everything after the occurrence can vanish (or
                    // nothing follows it at all), the occurrence inherits
                    // FOLLOW of the rule's left-hand side. Clone that set
                    // up front: for self-recursive rules it is the same set
                    // being merged into.
                    let inherited = if tail_first.contains(&Symbol::Epsilon) {
                        map.get(&rule.lhs).cloned()
                    } else {
                        None
                    };
                    let follow = map.get_mut(symbol).unwrap();
                    // The epsilon marker is dropped on every merge; FOLLOW
                    // sets never contain it.
                    changed |=
                        follow.insert_all(tail_first.into_iter().filter(|s| !s.is_epsilon()));
                    if let Some(lhs_follow) = inherited {
                        changed |=
                            follow.insert_all(lhs_follow.into_iter().filter(|s| !s.is_epsilon()));
                    }
                }
            }
        }
        debug!("FOLLOW sets converged after {} passes", passes);

        FollowTable { map }
    }

    pub fn follow(&self, nonterminal: &Symbol) -> Option<&SymbolSet> {
        self.map.get(nonterminal)
    }
}

impl Grammar {
    pub fn first_table(&self) -> FirstTable {
        FirstTable::build(self)
    }

    pub fn follow_table(&self, first: &FirstTable) -> FollowTable {
        FollowTable::build(self, first)
    }
}
