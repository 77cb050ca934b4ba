use crate::error::{AutomatonError, Result};
use crate::symbol::Symbol;

/// Index of a state in its graph's arena.
pub type StateRef = usize;

/// A named vertex and its outgoing edges, in insertion order.
#[derive(Clone, Debug)]
pub struct State<S> {
    pub(crate) name: String,
    pub(crate) transitions: Vec<(S, StateRef)>,
}

impl<S: Symbol> State<S> {
    pub(crate) fn new(name: String) -> Self {
        State {
            name: name,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[(S, StateRef)] {
        &self.transitions
    }

    /// Targets reached by edges labelled exactly `symbol`.
    /// Lambda edges are only matched when `symbol` is itself lambda.
    #[inline]
    pub fn targets<'a>(&'a self, symbol: &'a S) -> impl Iterator<Item = StateRef> + 'a {
        self.transitions
            .iter()
            .filter(move |(label, _)| label == symbol)
            .map(|&(_, to)| to)
    }

    #[inline]
    pub(crate) fn has_lambda_to(&self, target: StateRef) -> bool {
        self.transitions
            .iter()
            .any(|(label, to)| *to == target && label.is_lambda())
    }

    /// Drops lambda edges from `own` (this state's index) to itself.
    /// Returns how many were dropped.
    pub(crate) fn strip_lambda_loops(&mut self, own: StateRef) -> usize {
        let before = self.transitions.len();
        self.transitions
            .retain(|(label, to)| !(*to == own && label.is_lambda()));
        before - self.transitions.len()
    }
}

/// One row of a transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub start: String,
    pub end: String,
    pub symbol: S,
}

impl<S> Transition<S> {
    pub fn new<A: Into<String>, B: Into<String>>(start: A, end: B, symbol: S) -> Self {
        Transition {
            start: start.into(),
            end: end.into(),
            symbol: symbol,
        }
    }
}

impl<'a, 'b, S> From<(&'a str, &'b str, S)> for Transition<S> {
    fn from((start, end, symbol): (&'a str, &'b str, S)) -> Self {
        Transition::new(start, end, symbol)
    }
}

impl<S> From<(String, String, S)> for Transition<S> {
    fn from((start, end, symbol): (String, String, S)) -> Self {
        Transition::new(start, end, symbol)
    }
}

/// The start state argument: either a name, or a sequence of which only the
/// first element is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartState {
    Name(String),
    Candidates(Vec<String>),
}

impl StartState {
    /// Normalizes to a single name.
    pub fn resolve(self) -> Result<String> {
        match self {
            StartState::Name(name) => Ok(name),
            StartState::Candidates(names) => names.into_iter().next().ok_or_else(|| {
                AutomatonError::InvalidStartState("empty start state sequence".to_owned())
            }),
        }
    }
}

impl<'a> From<&'a str> for StartState {
    fn from(name: &'a str) -> Self {
        StartState::Name(name.to_owned())
    }
}

impl From<String> for StartState {
    fn from(name: String) -> Self {
        StartState::Name(name)
    }
}

impl From<Vec<String>> for StartState {
    fn from(names: Vec<String>) -> Self {
        StartState::Candidates(names)
    }
}

impl<'a> From<Vec<&'a str>> for StartState {
    fn from(names: Vec<&'a str>) -> Self {
        StartState::Candidates(names.into_iter().map(String::from).collect())
    }
}

impl<'a, 'b> From<&'b [&'a str]> for StartState {
    fn from(names: &'b [&'a str]) -> Self {
        StartState::Candidates(names.iter().map(|&name| name.to_owned()).collect())
    }
}
