//! Lambda-NFAs and DFAs built from transition tables, with backtracking
//! acceptance checks.

pub mod automaton;
pub mod dfa;
pub mod dot;
pub mod error;
pub mod graph;
pub mod nfa;
pub mod state;
pub mod symbol;

pub use automaton::{Automaton, SearchLimits};
pub use dfa::Dfa;
pub use dot::DotOptions;
pub use error::{AutomatonError, DeterminismViolation};
pub use graph::{AutomatonGraph, GraphBuilder, StateSet};
pub use nfa::Nfa;
pub use state::{StartState, State, StateRef, Transition};
pub use symbol::{Symbol, LAMBDA, LAMBDA_BYTE, LAMBDA_STR};
