//! dfa-walk CLI: animate DFA acceptance in the terminal
//!
//! ## Usage
//!
//! ```bash
//! dfa-walk list                        # Show the built-in automata
//! dfa-walk show binary                 # Print Graphviz DOT source
//! dfa-walk run 4 aaab                  # Animate a validation run
//! dfa-walk run aba-bab abaababbab --fast --dot
//! ```

use clap::{Parser, Subcommand};
use dfa_walk::animation::{
    cancel_on_line, interpret, play, Cancellation, Highlights, PlaybackConfig, PlaybackOutcome,
    Renderer, Style, ThreadPacer,
};
use dfa_walk::dot::to_dot;
use dfa_walk::input::{validate_with, InputError, InputPolicy};
use dfa_walk::snapshot::{Snapshot, SnapshotError};
use dfa_walk::{simulate, Automaton, Registry, StateId};
use std::collections::BTreeMap;
use std::io::{self, BufReader};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Step-by-step DFA acceptance for four hand-authored automata
#[derive(Parser, Debug)]
#[command(name = "dfa-walk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in automata
    List,

    /// Print an automaton as Graphviz DOT
    Show {
        /// Automaton number (1-4), slug, or pattern
        automaton: Automaton,
    },

    /// Validate a string and animate the walk
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Automaton number (1-4), slug, or pattern
    automaton: Automaton,

    /// Input string; whitespace is ignored
    #[arg(num_args = 0..)]
    input: Vec<String>,

    /// Skip animation delays
    #[arg(long)]
    fast: bool,

    /// Delay before each step, in milliseconds
    #[arg(long, default_value_t = 1000)]
    step_ms: u64,

    /// Delay of the blink revert, in milliseconds
    #[arg(long, default_value_t = 500)]
    blink_ms: u64,

    /// Allow the empty string
    #[arg(long)]
    allow_empty: bool,

    /// Print the run as a JSON snapshot instead of animating
    #[arg(long)]
    json: bool,

    /// Print the highlighted graph as DOT after the animation
    #[arg(long)]
    dot: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Prints each paint instruction as it is applied.
struct TerminalRenderer {
    highlights: Highlights,
}

impl Renderer for TerminalRenderer {
    fn paint(&mut self, state: &StateId, style: Style) {
        if style != Style::Neutral {
            println!("  {state:<4} {style}");
        }
        self.highlights.paint(state, style);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode, CliError> {
    let registry = Registry::global();

    match command {
        Commands::List => {
            for (automaton, dfa) in registry.iter() {
                println!(
                    "{}. {:<9} {}  [alphabet: {}]",
                    automaton.number(),
                    automaton.slug(),
                    automaton.pattern(),
                    dfa.alphabet().iter().collect::<String>()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { automaton } => {
            println!("{}", to_dot(registry.get(automaton), &BTreeMap::new()));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run(args) => run_validation(registry, args),
    }
}

fn run_validation(registry: &Registry, args: RunArgs) -> Result<ExitCode, CliError> {
    let dfa = registry.get(args.automaton);
    let policy = InputPolicy {
        reject_empty: !args.allow_empty,
    };
    let input = validate_with(dfa, &args.input.join(" "), policy)?;
    let verdict = simulate(dfa, &input);
    let accepted = verdict.accepted;

    if args.json {
        let snapshot = Snapshot::record(args.automaton, input, verdict);
        println!("{}", snapshot.to_json()?);
        return Ok(exit_for(accepted));
    }

    println!("Entered String: {input}");
    let config = PlaybackConfig {
        step_delay_ms: args.step_ms,
        blink_delay_ms: args.blink_ms,
        skip_delays: args.fast,
    };
    let mut renderer = TerminalRenderer {
        highlights: Highlights::new(),
    };
    let steps = interpret(dfa, &verdict.trace);
    let cancel = Cancellation::new();
    if !config.skip_delays {
        println!("(press Enter to stop the animation)");
        // Left detached; a read still blocked on stdin ends with the process.
        cancel_on_line(BufReader::new(io::stdin()), cancel.clone());
    }
    let outcome = play(&steps, &mut renderer, &mut ThreadPacer, &config, &cancel);
    if let PlaybackOutcome::Cancelled { applied } = outcome {
        eprintln!("Animation stopped after {applied} of {} steps", steps.len());
    }

    if args.dot {
        println!("{}", to_dot(dfa, renderer.highlights.as_map()));
    }

    if accepted {
        println!("The string '{input}' is valid for the DFA.");
    } else {
        println!("The string '{input}' is not valid for the DFA.");
    }
    Ok(exit_for(accepted))
}

fn exit_for(accepted: bool) -> ExitCode {
    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
