//! Command-line arguments
//!
//! One subcommand per algorithm family. Arrays are comma separated, edges
//! use `u-v:w` (weight defaults to 1) and nodes default to the edge
//! endpoints in order of first appearance.

use algotrace::graph::{Edge, Graph, NodeId};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "algotrace",
    version,
    about = "Step through classical algorithms in the terminal",
    after_help = "Examples:\n  algotrace search --array 1,3,5,7,9,11 --target 7\n  algotrace sort --algorithm quick --array 5,2,9,1\n  algotrace kmp --text ABABDABACDABABCABAB --pattern ABABCABAB\n  algotrace dijkstra --edges 0-1:2,1-2:2,0-2:10 --source 0\n  algotrace kruskal --edges 0-1:4,1-2:1,2-3:3,3-0:2 --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print the trace as JSON instead of opening the viewer
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Binary search in a sorted array
    Search(SearchArgs),
    /// Sort an array with one of the sorting families
    Sort(SortArgs),
    /// Knuth-Morris-Pratt pattern search
    Kmp(MatchArgs),
    /// Boyer-Moore pattern search (bad-character rule)
    BoyerMoore(MatchArgs),
    /// Longest common subsequence of two strings
    Lcs(LcsArgs),
    /// Single-source shortest paths on a directed graph
    Dijkstra(RootedGraphArgs),
    /// Minimum spanning tree by Kruskal's algorithm
    Kruskal(GraphArgs),
    /// Minimum spanning tree grown by Prim's algorithm
    Prim(RootedGraphArgs),
    /// Topological order of a directed acyclic graph
    Topological(GraphArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Sorted values, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub array: Vec<i64>,

    /// Value to look for
    #[arg(long, allow_hyphen_values = true)]
    pub target: i64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    #[arg(long, value_enum)]
    pub algorithm: SortAlgorithm,

    /// Values to sort, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub array: Vec<i64>,

    /// Digit base for radix sort
    #[arg(long, default_value_t = 10)]
    pub base: u32,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    #[arg(long)]
    pub text: String,

    #[arg(long)]
    pub pattern: String,
}

#[derive(Args, Debug)]
pub struct LcsArgs {
    pub first: String,
    pub second: String,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Node ids, comma separated; defaults to the edge endpoints
    #[arg(long, value_delimiter = ',')]
    pub nodes: Vec<NodeId>,

    /// Edges as u-v:w, comma separated
    #[arg(long, value_delimiter = ',', value_parser = parse_edge)]
    pub edges: Vec<Edge>,
}

impl GraphArgs {
    pub fn graph(&self) -> Graph {
        let nodes = if self.nodes.is_empty() {
            let mut nodes = Vec::new();
            for edge in &self.edges {
                for id in [edge.from, edge.to] {
                    if !nodes.contains(&id) {
                        nodes.push(id);
                    }
                }
            }
            nodes
        } else {
            self.nodes.clone()
        };
        Graph::new(nodes, self.edges.clone())
    }
}

#[derive(Args, Debug)]
pub struct RootedGraphArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node
    #[arg(long, alias = "root")]
    pub source: NodeId,
}

/// Parse `u-v:w` or `u-v`
pub fn parse_edge(text: &str) -> Result<Edge, String> {
    let (ends, weight) = match text.split_once(':') {
        Some((ends, weight)) => {
            let weight = weight
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("bad weight in '{}': {}", text, e))?;
            (ends, weight)
        }
        None => (text, 1),
    };
    let (from, to) = ends
        .split_once('-')
        .ok_or_else(|| format!("expected u-v:w, got '{}'", text))?;
    let node = |s: &str| {
        s.trim()
            .parse::<NodeId>()
            .map_err(|e| format!("bad node id '{}' in '{}': {}", s, text, e))
    };
    Ok(Edge::new(node(from)?, node(to)?, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("0-1:2"), Ok(Edge::new(0, 1, 2)));
        assert_eq!(parse_edge("3-4"), Ok(Edge::new(3, 4, 1)));
        assert_eq!(parse_edge("1-2:-5"), Ok(Edge::new(1, 2, -5)));
        assert!(parse_edge("1:2").is_err());
        assert!(parse_edge("a-b:1").is_err());
    }

    #[test]
    fn test_nodes_default_to_endpoints() {
        let cli = Cli::parse_from(["algotrace", "kruskal", "--edges", "2-0:1,0-5:3"]);
        let Command::Kruskal(args) = cli.command else {
            panic!("expected kruskal");
        };
        assert_eq!(args.graph().nodes, vec![2, 0, 5]);
    }

    #[test]
    fn test_global_json_flag_and_negative_values() {
        let cli = Cli::parse_from([
            "algotrace", "sort", "--algorithm", "heap", "--array", "3,-1,2", "--json",
        ]);
        assert!(cli.json);
        let Command::Sort(args) = cli.command else {
            panic!("expected sort");
        };
        assert_eq!(args.array, vec![3, -1, 2]);
        assert_eq!(args.algorithm, SortAlgorithm::Heap);
    }
}
