use crowbook_text_processing::escape;
use serde::Serialize;

use super::first_follow::{FirstTable, FollowTable};
use super::grammar::Grammar;
use super::symbol::Symbol;
use super::LAMBDA;

fn latex_symbol(name: &str) -> String {
    if name == LAMBDA {
        "$\\lambda$".to_string()
    } else {
        escape::tex(name).to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize) -> String {
        format!(
            "{:>width$} -> {}",
            self.left,
            self.rights
                .iter()
                .map(|right| right.join(" "))
                .collect::<Vec<_>>()
                .join(" | "),
            width = left_width
        )
    }

    pub fn to_latex(&self) -> String {
        let rights = self
            .rights
            .iter()
            .map(|right| {
                right
                    .iter()
                    .map(|s| latex_symbol(s))
                    .collect::<Vec<_>>()
                    .join(" \\ ")
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");
        format!("{} & \\rightarrow & {}", escape::tex(self.left), rights)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_max_len = self
            .productions
            .iter()
            .map(|p| p.left.len())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|p| p.to_plaintext(left_max_len))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|p| p.to_latex()))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

// one `NAME: { a b c }` row
#[derive(Debug, Clone, Serialize)]
pub struct SymbolSetOutput<'a> {
    pub name: &'a str,
    pub members: Vec<&'a str>,
}

impl SymbolSetOutput<'_> {
    fn to_plaintext(&self) -> String {
        if self.members.is_empty() {
            format!("{}: {{ }}", self.name)
        } else {
            format!("{}: {{ {} }}", self.name, self.members.join(" "))
        }
    }

    fn to_latex(&self) -> String {
        format!(
            "{} & \\{{ {} \\}}",
            escape::tex(self.name),
            self.members
                .iter()
                .map(|m| latex_symbol(m))
                .collect::<Vec<_>>()
                .join(" \\ ")
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SetListOutput<'a> {
    data: Vec<SymbolSetOutput<'a>>,
}

impl SetListOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|s| s.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c}\n".to_string()
            + "Symbol & Set\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NonterminalSetsOutput<'a> {
    pub name: &'a str,
    pub first: Vec<&'a str>,
    pub follow: Vec<&'a str>,
}

impl NonterminalSetsOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!(
            "{} | {} | {}",
            self.name,
            self.first.join(", "),
            self.follow.join(", ")
        )
    }

    fn to_latex(&self) -> String {
        fn f(members: &[&str]) -> String {
            members
                .iter()
                .map(|m| latex_symbol(m))
                .collect::<Vec<_>>()
                .join(r"\ ")
        }

        format!(
            "{} & {} & {}",
            escape::tex(self.name),
            f(&self.first),
            f(&self.follow)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct FirstFollowOutput<'a> {
    data: Vec<NonterminalSetsOutput<'a>>,
}

impl FirstFollowOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c}\n".to_string()
            + "Symbol & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl Grammar {
    pub fn to_production_output(&self) -> ProductionOutputVec<'_> {
        let mut productions = Vec::new();
        for nonterminal in self.defined_nonterminals() {
            let rights = self
                .rules_for(nonterminal)
                .map(|rule| rule.rhs.iter().map(Symbol::name).collect())
                .collect();
            productions.push(ProductionOutput {
                left: nonterminal.name(),
                rights,
            });
        }
        ProductionOutputVec { productions }
    }

    pub fn to_symbol_output(&self) -> SetListOutput<'_> {
        SetListOutput {
            data: vec![
                SymbolSetOutput {
                    name: "Nonterminals",
                    members: self.nonterminals().names(),
                },
                SymbolSetOutput {
                    name: "Terminals",
                    members: self.terminals().names(),
                },
            ],
        }
    }

    pub fn to_first_output<'a>(&'a self, first: &'a FirstTable) -> SetListOutput<'a> {
        let data = self
            .defined_nonterminals()
            .iter()
            .map(|nonterminal| SymbolSetOutput {
                name: nonterminal.name(),
                members: first
                    .first(nonterminal)
                    .map(|set| set.names())
                    .unwrap_or_default(),
            })
            .collect();
        SetListOutput { data }
    }

    pub fn to_follow_output<'a>(&'a self, follow: &'a FollowTable) -> SetListOutput<'a> {
        let data = self
            .defined_nonterminals()
            .iter()
            .map(|nonterminal| SymbolSetOutput {
                name: nonterminal.name(),
                members: follow
                    .follow(nonterminal)
                    .map(|set| set.names())
                    .unwrap_or_default(),
            })
            .collect();
        SetListOutput { data }
    }

    pub fn to_first_follow_output<'a>(
        &'a self,
        first: &'a FirstTable,
        follow: &'a FollowTable,
    ) -> FirstFollowOutput<'a> {
        let data = self
            .defined_nonterminals()
            .iter()
            .map(|nonterminal| NonterminalSetsOutput {
                name: nonterminal.name(),
                first: first
                    .first(nonterminal)
                    .map(|set| set.names())
                    .unwrap_or_default(),
                follow: follow
                    .follow(nonterminal)
                    .map(|set| set.names())
                    .unwrap_or_default(),
            })
            .collect();
        FirstFollowOutput { data }
    }
}
