use std::fmt::{self, Write};

use crate::graph::AutomatonGraph;
use crate::state::StateRef;
use crate::symbol::{Symbol, LAMBDA_STR};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DotOptions {
    /// Draw accept states as double circles.
    pub mark_accepting: bool,
    /// Leave out non-accepting states that can never be left again, such as
    /// the `{}` state of a powerset construction.
    pub suppress_stuck_states: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            mark_accepting: true,
            suppress_stuck_states: false,
        }
    }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl<S: Symbol> AutomatonGraph<S> {
    fn is_stuck(&self, state: StateRef) -> bool {
        !self.is_accept(state) && self.state(state).transitions().iter().all(|&(_, to)| to == state)
    }

    /// Renders the graph in Graphviz dot syntax.
    pub fn dot(&self, options: &DotOptions) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.write_dot(&mut out, options);
        out
    }

    fn write_dot<W: Write>(&self, out: &mut W, options: &DotOptions) -> fmt::Result {
        let hidden = |state: StateRef| {
            options.suppress_stuck_states && state != self.start() && self.is_stuck(state)
        };

        writeln!(out, "digraph {} {{", quote(self.name()))?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(out, "    node [shape=circle];")?;
        writeln!(out, "    __start [shape=point];")?;
        for (idx, state) in self.states() {
            if hidden(idx) {
                continue;
            }
            if options.mark_accepting && self.is_accept(idx) {
                writeln!(out, "    {} [shape=doublecircle];", quote(state.name()))?;
            } else {
                writeln!(out, "    {};", quote(state.name()))?;
            }
        }
        writeln!(out, "    __start -> {};", quote(self.state(self.start()).name()))?;
        for (idx, state) in self.states() {
            if hidden(idx) {
                continue;
            }
            for &(ref symbol, to) in state.transitions() {
                if hidden(to) {
                    continue;
                }
                let label = if symbol.is_lambda() {
                    LAMBDA_STR.to_owned()
                } else {
                    symbol.to_string()
                };
                writeln!(out,
                         "    {} -> {} [label={}];",
                         quote(state.name()),
                         quote(self.state(to).name()),
                         quote(&label))?;
            }
        }
        write!(out, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use crate::nfa::Nfa;
    use crate::symbol::LAMBDA;

    fn nfa() -> Nfa<char> {
        Nfa::new(vec![("A", "B", 'a'), ("B", "C", LAMBDA)], vec!["C"], "A")
            .unwrap()
            .with_name("a")
    }

    #[test]
    fn renders_states_and_edges() {
        let dot = nfa().graph().dot(&DotOptions::default());
        assert!(dot.starts_with("digraph \"a\" {"));
        assert!(dot.contains("    \"C\" [shape=doublecircle];"));
        assert!(dot.contains("    __start -> \"A\";"));
        assert!(dot.contains("    \"A\" -> \"B\" [label=\"a\"];"));
        assert!(dot.contains("    \"B\" -> \"C\" [label=\"λ\"];"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn suppresses_stuck_states() {
        let dfa = nfa().powerset_construction().unwrap();
        let full = dfa.graph().dot(&DotOptions::default());
        assert!(full.contains("\"{}\""));

        let options = DotOptions {
            suppress_stuck_states: true,
            ..DotOptions::default()
        };
        let trimmed = dfa.graph().dot(&options);
        assert!(!trimmed.contains("\"{}\""));
        assert!(trimmed.contains("\"{A}\" -> \"{B,C}\" [label=\"a\"];"));
    }

    #[test]
    fn quotes_names() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
