// algotrace: step-by-step algorithm replay in the terminal

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use algotrace::graph::{
    Dijkstra, DijkstraInput, Kruskal, KruskalInput, Prim, PrimInput, TopologicalInput,
    TopologicalSort,
};
use algotrace::search::{BinarySearch, BinarySearchInput};
use algotrace::sorting::{
    DivideConquerAlgorithm, DivideConquerSort, DivideConquerSortInput, ElementaryAlgorithm,
    ElementarySort, ElementarySortInput, HeapSort, HeapSortInput, RadixSort, RadixSortInput,
};
use algotrace::strings::{BoyerMoore, BoyerMooreInput, Kmp, KmpInput, Lcs, LcsInput};
use algotrace::ui::{App, StateView};
use algotrace::Visualization;
use cli::{Cli, Command, SortAlgorithm};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with --json output or the TUI frame
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let json = cli.json;
    match cli.command {
        Command::Search(args) => {
            let input = BinarySearchInput {
                array: args.array,
                target: args.target,
            };
            present::<BinarySearch>(&input, json, |_| Vec::new())
        }
        Command::Sort(args) => sort(args, json),
        Command::Kmp(args) => {
            let input = KmpInput {
                text: args.text,
                pattern: args.pattern,
            };
            present::<Kmp>(&input, json, |failure| {
                vec![format!("failure table: {:?}", failure)]
            })
        }
        Command::BoyerMoore(args) => {
            let input = BoyerMooreInput {
                text: args.text,
                pattern: args.pattern,
            };
            present::<BoyerMoore>(&input, json, |table| {
                let entries: Vec<String> = table
                    .iter()
                    .map(|(c, i)| format!("'{}' → {}", c, i))
                    .collect();
                vec![format!("last occurrence: {}", entries.join(", "))]
            })
        }
        Command::Lcs(args) => {
            let input = LcsInput {
                first: args.first,
                second: args.second,
            };
            present::<Lcs>(&input, json, |_| Vec::new())
        }
        Command::Dijkstra(args) => {
            let input = DijkstraInput {
                graph: args.graph.graph(),
                source: args.source,
            };
            present::<Dijkstra>(&input, json, |_| Vec::new())
        }
        Command::Kruskal(args) => {
            let input = KruskalInput {
                graph: args.graph(),
            };
            present::<Kruskal>(&input, json, |_| Vec::new())
        }
        Command::Prim(args) => {
            let input = PrimInput {
                graph: args.graph.graph(),
                root: args.source,
            };
            present::<Prim>(&input, json, |_| Vec::new())
        }
        Command::Topological(args) => {
            let input = TopologicalInput {
                graph: args.graph(),
            };
            present::<TopologicalSort>(&input, json, |_| Vec::new())
        }
    }
}

fn sort(args: cli::SortArgs, json: bool) -> Result<()> {
    let elementary = |algorithm| ElementarySortInput {
        algorithm,
        array: args.array.clone(),
    };
    let divide = |algorithm| DivideConquerSortInput {
        algorithm,
        array: args.array.clone(),
    };
    let none = |_: &()| Vec::new();
    match args.algorithm {
        SortAlgorithm::Bubble => {
            present::<ElementarySort>(&elementary(ElementaryAlgorithm::Bubble), json, none)
        }
        SortAlgorithm::Selection => {
            present::<ElementarySort>(&elementary(ElementaryAlgorithm::Selection), json, none)
        }
        SortAlgorithm::Insertion => {
            present::<ElementarySort>(&elementary(ElementaryAlgorithm::Insertion), json, none)
        }
        SortAlgorithm::Merge => {
            present::<DivideConquerSort>(&divide(DivideConquerAlgorithm::Merge), json, none)
        }
        SortAlgorithm::Quick => {
            present::<DivideConquerSort>(&divide(DivideConquerAlgorithm::Quick), json, none)
        }
        SortAlgorithm::Heap => {
            let input = HeapSortInput {
                array: args.array.clone(),
            };
            present::<HeapSort>(&input, json, none)
        }
        SortAlgorithm::Radix => {
            let input = RadixSortInput {
                array: args.array.clone(),
                base: args.base,
            };
            present::<RadixSort>(&input, json, none)
        }
    }
}

#[derive(Serialize)]
struct Dump<'a, T, A> {
    algorithm: &'static str,
    pseudocode: &'static [&'static str],
    steps: &'a T,
    artifact: &'a A,
}

/// Run one visualization, then print it or open the viewer
fn present<V>(
    input: &V::Input,
    json: bool,
    notes: impl FnOnce(&V::Artifact) -> Vec<String>,
) -> Result<()>
where
    V: Visualization,
    V::State: StateView + Serialize,
    V::Artifact: Serialize,
    algotrace::Error: From<V::Error>,
{
    let output = V::execute(input)
        .map_err(algotrace::Error::from)
        .with_context(|| format!("cannot run {}", V::NAME))?;
    let pseudocode = V::pseudocode(input);

    if json {
        let dump = Dump {
            algorithm: V::NAME,
            pseudocode,
            steps: &output.trace,
            artifact: &output.artifact,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let notes = notes(&output.artifact);
    let app = App::new(V::NAME, pseudocode, output.trace).with_notes(notes);
    tracing::debug!(algorithm = V::NAME, "opening viewer");
    run_viewer(app)
}

fn run_viewer<K, S>(mut app: App<K, S>) -> Result<()>
where
    K: algotrace::StepKind,
    S: StateView,
{
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")
}
