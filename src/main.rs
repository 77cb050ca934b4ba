use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lambda_nfa::{Automaton, Dfa, DotOptions, Nfa, Transition};

/// Check strings against an automaton read from a transition table.
#[derive(Parser, Debug)]
#[command(name = "lambda-nfa", version)]
struct Cli {
    /// Transition table: one `start end symbol` triple per line, `λ` for
    /// lambda moves, `#` starts a comment
    table: PathBuf,
    /// Name of the start state
    #[arg(long)]
    start: String,
    /// Name of an accept state, may be repeated
    #[arg(long)]
    accept: Vec<String>,
    /// Require the table to describe a complete DFA
    #[arg(long, conflicts_with = "convert")]
    dfa: bool,
    /// Check inputs on the powerset construction of the NFA
    #[arg(long)]
    convert: bool,
    /// Print the automaton in Graphviz dot syntax
    #[arg(long)]
    dot: bool,
    /// Strings to check
    inputs: Vec<String>,
}

fn parse_table(source: &str) -> Result<Vec<Transition<char>>> {
    let mut table = Vec::new();
    for (lineno, line) in source.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (start, end, symbol) = match fields.as_slice() {
            &[start, end, symbol] => (start, end, symbol),
            _ => bail!("line {}: expected `start end symbol`", lineno + 1),
        };
        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => bail!("line {}: symbol `{}` is not a single character", lineno + 1, symbol),
        };
        table.push(Transition::new(start, end, symbol));
    }
    Ok(table)
}

fn report<A: Automaton<char>>(automaton: &A, dot: bool, inputs: &[String]) -> Result<()> {
    if dot {
        println!("{}", automaton.graph().dot(&DotOptions::default()));
    }
    for input in inputs {
        let accepted = automaton
            .accepts(input.chars())
            .with_context(|| format!("checking `{}`", input))?;
        println!("{}: {}", input, if accepted { "accepted" } else { "rejected" });
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.table)
        .with_context(|| format!("reading {}", cli.table.display()))?;
    let table = parse_table(&source)
        .with_context(|| format!("parsing {}", cli.table.display()))?;
    let name = cli.table.display().to_string();

    if cli.dfa {
        let dfa = Dfa::new(table, cli.accept, cli.start)
            .context("building DFA")?
            .with_name(name);
        return report(&dfa, cli.dot, &cli.inputs);
    }

    let nfa = Nfa::new(table, cli.accept, cli.start)
        .context("building NFA")?
        .with_name(name);
    if cli.convert {
        let dfa = nfa.powerset_construction().context("converting to DFA")?;
        report(&dfa, cli.dot, &cli.inputs)
    } else {
        report(&nfa, cli.dot, &cli.inputs)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_nfa::LAMBDA;

    #[test]
    fn table_file() {
        let table = parse_table("# even number of a's\nE O a\nO E a\n\nE F λ  # done\n").unwrap();
        assert_eq!(table,
                   vec![Transition::new("E", "O", 'a'),
                        Transition::new("O", "E", 'a'),
                        Transition::new("E", "F", LAMBDA)]);
    }

    #[test]
    fn malformed_lines() {
        assert!(parse_table("A B").is_err());
        assert!(parse_table("A B ab").is_err());
    }
}
