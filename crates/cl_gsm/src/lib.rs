//! Codelimit GSM - generalized state machines over token streams.
//!
//! Patterns are written with a small algebra of token predicates and
//! automaton-building operators, compiled to an NFA by Thompson
//! construction, determinized by subset construction, and executed by the
//! [`Matcher`].
//!
//! # Architecture
//!
//! ```text
//! Expr (predicates, Seq, Union, Optional)
//!     │  postfix()           explicit-stack flattening
//!     ▼
//! [Op]                       Atom / Concat / Union / Optional / Empty
//!     │  expression_to_nfa() fold over an NFA stack
//!     ▼
//! Nfa ──► nfa_to_dfa() ──► Dfa ──► Matcher::find_all()
//! ```
//!
//! The alphabet is [`Predicate`], not characters. Most predicates consume
//! one token; `Lookahead` consumes none and `Balanced` consumes a
//! depth-counted span. The latter is not regular, so it stays an opaque
//! label in the automaton and is evaluated by the matcher when the
//! transition is taken.

mod dfa;
mod expr;
mod matcher;
mod nfa;
mod predicate;

pub use dfa::{nfa_to_dfa, Dfa, DfaState};
pub use expr::{optional, postfix, union, Expr, Op};
pub use matcher::Matcher;
pub use nfa::{expression_to_nfa, fold_postfix, Fragment, Nfa, NfaBuilder, State, StateId};
pub use predicate::{
    balanced, balanced_end, keyword, literal, lookahead, name, operator, or, symbol, Predicate,
};

/// Build an [`Expr::Seq`] from a list of predicates, literals and
/// expressions.
///
/// ```text
/// pattern![keyword("def"), name(), balanced("(", ")")]
/// pattern![optional("function"), name(), lookahead("{")]
/// ```
#[macro_export]
macro_rules! pattern {
    ($($item:expr),* $(,)?) => {
        $crate::Expr::Seq(vec![$($crate::Expr::from($item)),*])
    };
}
