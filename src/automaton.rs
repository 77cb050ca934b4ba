use crate::error::{AutomatonError, Result};
use crate::graph::{AutomatonGraph, StateSet};
use crate::state::StateRef;
use crate::symbol::Symbol;

/// Caps the work a single acceptance check may do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of (state, input offset) branches to visit.
    /// `None` searches until the answer is known.
    pub max_steps: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        SearchLimits { max_steps: None }
    }

    pub fn steps(max_steps: usize) -> Self {
        SearchLimits { max_steps: Some(max_steps) }
    }
}

/// A recognizer over a state graph. Implementors decide what a step on a
/// symbol reaches and when a state counts as accepting; the search itself is
/// shared.
pub trait Automaton<S: Symbol> {
    fn graph(&self) -> &AutomatonGraph<S>;

    fn next_states(&self, symbol: &S, state: StateRef) -> StateSet;

    fn is_accepting(&self, state: StateRef) -> bool;

    /// Does some path from `state` consume all of `input` and end accepting?
    /// A `state` outside the graph is an `UnknownState` error.
    fn accepts_from(&self, input: &[S], state: StateRef) -> Result<bool> {
        search(self, input, state, &SearchLimits::unbounded())
    }

    fn accepts<I>(&self, input: I) -> Result<bool>
        where I: IntoIterator<Item = S>,
              Self: Sized
    {
        let input: Vec<S> = input.into_iter().collect();
        self.accepts_from(&input, self.graph().start())
    }

    fn accepts_within<I>(&self, input: I, limits: &SearchLimits) -> Result<bool>
        where I: IntoIterator<Item = S>,
              Self: Sized
    {
        let input: Vec<S> = input.into_iter().collect();
        search(self, &input, self.graph().start(), limits)
    }
}

/// Backtracking search. Equivalent to recursing on the first candidate, then
/// the next, and so on, but uses a heap stack of (state, offset) branches.
fn search<S, A>(automaton: &A,
                input: &[S],
                state: StateRef,
                limits: &SearchLimits)
                -> Result<bool>
    where S: Symbol,
          A: Automaton<S> + ?Sized
{
    let graph = automaton.graph();
    if state >= graph.len() {
        return Err(AutomatonError::UnknownState(state));
    }
    let mut stack = vec![(state, 0)];
    let mut steps = 0;

    while let Some((current, offset)) = stack.pop() {
        if let Some(max_steps) = limits.max_steps {
            if steps == max_steps {
                return Err(AutomatonError::SearchBudgetExhausted(max_steps));
            }
        }
        steps += 1;

        let symbol = match input.get(offset) {
            Some(symbol) => symbol,
            None => {
                if automaton.is_accepting(current) {
                    return Ok(true);
                }
                continue;
            }
        };
        if !symbol.is_lambda() && !graph.in_alphabet(symbol) {
            return Err(AutomatonError::SymbolNotInAlphabet(symbol.to_string()));
        }

        // an empty candidate set just drops this branch
        let candidates: Vec<StateRef> = automaton.next_states(symbol, current).iter().collect();
        for next in candidates.into_iter().rev() {
            stack.push((next, offset + 1));
        }
    }
    Ok(false)
}
