pub mod first_follow;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub mod symbol;

pub use first_follow::{FirstTable, FollowTable};
pub use grammar::{Grammar, GrammarError, Rule};
pub use symbol::{Symbol, SymbolSet};

pub const LAMBDA: &str = "lambda";
pub const END_MARK: &str = "$";
pub const ARROW: &str = "->";
