use std::fs;
use std::path::Path;

use super::grammar::{Grammar, GrammarError};
use super::ARROW;

impl Grammar {
    // One `LHS -> S1 S2 .. Sn` rule per line, blank lines skipped. The first
    // rule's left-hand symbol becomes the start symbol.
    pub fn parse(grammar: &str) -> Result<Grammar, GrammarError> {
        let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
        let mut line_map: Vec<usize> = Vec::new();

        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let line_no = i + 1;

            let (left, right) = match line.split_once(ARROW) {
                Some(parts) => parts,
                None => {
                    return Err(GrammarError::MalformedRule {
                        line: line_no,
                        reason: format!("missing {} separator", ARROW),
                    })
                }
            };
            if right.contains(ARROW) {
                return Err(GrammarError::MalformedRule {
                    line: line_no,
                    reason: format!("more than one {}", ARROW),
                });
            }
            let left = left.trim();
            if left.split_whitespace().count() > 1 {
                return Err(GrammarError::MalformedRule {
                    line: line_no,
                    reason: "left-hand side contains whitespace".to_string(),
                });
            }

            let tokens: Vec<String> = right.split_whitespace().map(str::to_string).collect();
            pairs.push((left.to_string(), tokens));
            line_map.push(line_no);
        }

        // from_rules numbers errors by pair position; map that back to the
        // source line the pair came from.
        Grammar::from_rules(pairs).map_err(|e| match e {
            GrammarError::MalformedRule { line, reason } => GrammarError::MalformedRule {
                line: line_map[line - 1],
                reason,
            },
            GrammarError::EmptyLhs { line } => GrammarError::EmptyLhs {
                line: line_map[line - 1],
            },
            other => other,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Grammar, GrammarError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GrammarError::SourceUnavailable {
            path: path.display().to_string(),
            source: e,
        })?;
        Grammar::parse(&text)
    }
}
