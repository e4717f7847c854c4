//! Weighted graph algorithms
//!
//! - [`model`]: node ids, edges and adjacency
//! - [`validate`]: shared directed and undirected input rules
//! - [`union_find`]: disjoint sets backing Kruskal
//! - [`dijkstra`], [`topological`]: directed consumers
//! - [`kruskal`], [`prim`]: undirected minimum spanning trees

pub mod dijkstra;
pub mod kruskal;
pub mod model;
pub mod prim;
pub mod topological;
pub mod union_find;
pub mod validate;

pub use dijkstra::{Dijkstra, DijkstraInput, DijkstraKind, DijkstraState, ShortestPaths};
pub use kruskal::{EdgeStatus, Kruskal, KruskalInput, KruskalKind, KruskalState, MinimumSpanningTree};
pub use model::{Edge, Graph, NodeId};
pub use prim::{Prim, PrimInput, PrimKind, PrimState};
pub use topological::{TopologicalInput, TopologicalKind, TopologicalSort, TopologicalState};
pub use union_find::{UnionFind, UnionFindState};
