use thiserror::Error;

use super::symbol::{Symbol, SymbolSet};
use super::LAMBDA;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("line {line}: {reason}")]
    MalformedRule { line: usize, reason: String },
    #[error("line {line}: empty left-hand side")]
    EmptyLhs { line: usize },
    #[error("grammar has no rules")]
    UndefinedStartSymbol,
    #[error("cannot read grammar source {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Rule>,
    terminals: SymbolSet,
    nonterminals: SymbolSet,
    lhs_order: Vec<Symbol>,
}

impl Grammar {
    // The `line` carried by errors is the 1-based position of the offending
    // pair.
    pub fn from_rules<I>(pairs: I) -> Result<Grammar, GrammarError>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut rules: Vec<Rule> = Vec::new();
        let mut terminals = SymbolSet::new();
        let mut nonterminals = SymbolSet::new();
        let mut lhs_order: Vec<Symbol> = Vec::new();

        for (n, (left, right_tokens)) in pairs.into_iter().enumerate() {
            let line = n + 1;

            let left = left.trim();
            if left.is_empty() {
                return Err(GrammarError::EmptyLhs { line });
            }
            let lhs = match Symbol::classify(left) {
                symbol @ Symbol::Nonterminal(_) => symbol,
                _ => {
                    return Err(GrammarError::MalformedRule {
                        line,
                        reason: format!("left-hand side `{}` is not a nonterminal", left),
                    })
                }
            };

            let rhs: Vec<Symbol> = right_tokens
                .iter()
                .map(|token| token.trim())
                .filter(|token| !token.is_empty())
                .map(Symbol::classify)
                .collect();
            if rhs.is_empty() {
                return Err(GrammarError::MalformedRule {
                    line,
                    reason: "empty right-hand side".to_string(),
                });
            }
            if rhs.len() > 1 && rhs.contains(&Symbol::Epsilon) {
                return Err(GrammarError::MalformedRule {
                    line,
                    reason: format!("{} must be the sole right-hand side token", LAMBDA),
                });
            }

            nonterminals.insert(lhs.clone());
            if !lhs_order.contains(&lhs) {
                lhs_order.push(lhs.clone());
            }
            for symbol in &rhs {
                match symbol {
                    Symbol::Terminal(_) => {
                        terminals.insert(symbol.clone());
                    }
                    Symbol::Nonterminal(_) => {
                        nonterminals.insert(symbol.clone());
                    }
                    // the reserved markers belong to neither inventory
                    Symbol::Epsilon | Symbol::EndOfInput => {}
                }
            }

            rules.push(Rule { lhs, rhs });
        }

        if rules.is_empty() {
            return Err(GrammarError::UndefinedStartSymbol);
        }

        Ok(Grammar {
            rules,
            terminals,
            nonterminals,
            lhs_order,
        })
    }

    pub fn start_symbol(&self) -> &Symbol {
        &self.rules[0].lhs
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rules_for<'a>(&'a self, lhs: &'a Symbol) -> impl Iterator<Item = &'a Rule> {
        self.rules.iter().filter(move |rule| &rule.lhs == lhs)
    }

    pub fn terminals(&self) -> &SymbolSet {
        &self.terminals
    }

    pub fn nonterminals(&self) -> &SymbolSet {
        &self.nonterminals
    }

    // rule-owning nonterminals, ordered by first left-hand side appearance
    pub fn defined_nonterminals(&self) -> &[Symbol] {
        &self.lhs_order
    }
}
