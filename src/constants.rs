// Input caps for visualization
//
// Every trace is produced eagerly and each step owns a full copy of the
// algorithm state, so these caps bound both step count and memory.

/// Longest array accepted by search and sort features
pub const MAX_ARRAY_LEN: usize = 64;

/// Longest text accepted by the pattern matchers
pub const MAX_TEXT_LEN: usize = 64;

/// Longest pattern accepted by the pattern matchers
pub const MAX_PATTERN_LEN: usize = 16;

/// Longest sequence accepted by LCS (the table is quadratic)
pub const MAX_SEQUENCE_LEN: usize = 16;

/// Largest graph accepted by the graph features
pub const MAX_NODES: usize = 26;

/// Largest edge weight magnitude. Path and tree sums over at most
/// `MAX_NODES` edges stay far inside `i64`.
pub const MAX_WEIGHT: i64 = 1_000_000;

/// Smallest radix sort base
pub const MIN_RADIX_BASE: u32 = 2;

/// Largest radix sort base
pub const MAX_RADIX_BASE: u32 = 16;
