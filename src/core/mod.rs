//! Core domain types for Logik
//!
//! Rules, codes, scores and response classes. Everything here is pure and
//! deterministic; the search and the tree are built on top of it.

mod code;
mod response;
mod rules;
mod score;
mod set;

pub use code::{Code, CodeError, CodeSpace};
pub use response::ResponseClasses;
pub use rules::{Rules, RulesError};
pub use score::Score;
pub use set::CodeSet;
