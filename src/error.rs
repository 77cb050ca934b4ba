use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("missing construction argument: {0}")]
    MissingArgument(&'static str),
    #[error("start state is invalid: {0}")]
    InvalidStartState(String),
    #[error("symbol `{0}` is not part of the alphabet")]
    SymbolNotInAlphabet(String),
    #[error("DFA validation failed at state `{state}`: {violation}")]
    DeterminismValidationFailed {
        state: String,
        violation: DeterminismViolation,
    },
    #[error("search gave up after {0} steps")]
    SearchBudgetExhausted(usize),
    #[error("no state with index {0}")]
    UnknownState(usize),
}

/// Why a state breaks the determinism invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeterminismViolation {
    #[error("state has a lambda transition")]
    LambdaTransition,
    #[error("more than one transition on `{0}`")]
    DuplicateSymbol(String),
    #[error("no transition on `{0}`")]
    MissingSymbol(String),
    #[error("transition on `{0}`, which is not in the alphabet")]
    UnexpectedSymbol(String),
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
