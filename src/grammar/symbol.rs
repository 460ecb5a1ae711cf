use std::fmt;

use super::{END_MARK, LAMBDA};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
    Epsilon,
    EndOfInput,
}

impl Symbol {
    pub fn classify(token: &str) -> Symbol {
        if token == LAMBDA {
            Symbol::Epsilon
        } else if !token.is_empty()
            && token.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
        {
            Symbol::Nonterminal(token.to_string())
        } else {
            Symbol::Terminal(token.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => name,
            Symbol::Epsilon => LAMBDA,
            Symbol::EndOfInput => END_MARK,
        }
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolSet {
    items: Vec<Symbol>,
}

impl SymbolSet {
    pub fn new() -> SymbolSet {
        SymbolSet { items: Vec::new() }
    }

    // reports whether the symbol was new; the fixpoint sweeps watch this
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.items.contains(&symbol) {
            false
        } else {
            self.items.push(symbol);
            true
        }
    }

    pub fn insert_all<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut changed = false;
        for symbol in symbols {
            changed |= self.insert(symbol);
        }
        changed
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.items.contains(symbol)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Symbol::name).collect()
    }
}

// membership equality; insertion order does not matter
impl PartialEq for SymbolSet {
    fn eq(&self, other: &SymbolSet) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|symbol| other.contains(symbol))
    }
}

impl Eq for SymbolSet {}

impl IntoIterator for SymbolSet {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
