//! Disjoint-set forest with path compression and union by rank

use serde::Serialize;

/// Copy of the forest, embedded in steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionFindState {
    pub parent: Vec<usize>,
    pub rank: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of `x`'s set. Every node on the walked path is re-pointed at the
    /// root afterwards.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they already share a
    /// root. On equal rank the second root goes under the first.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    pub fn parent(&self) -> &[usize] {
        &self.parent
    }

    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    pub fn snapshot(&self) -> UnionFindState {
        UnionFindState {
            parent: self.parent.clone(),
            rank: self.rank.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_rank_attaches_second_under_first() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert_eq!(uf.parent(), &[0, 0, 2, 3]);
        assert_eq!(uf.rank(), &[1, 0, 0, 0]);
        assert!(!uf.union(1, 0));
    }

    #[test]
    fn test_lower_rank_goes_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert!(uf.union(2, 1));
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank()[0], 1);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1); // 1 -> 0, rank[0] = 1
        uf.union(2, 3); // 3 -> 2, rank[2] = 1
        uf.union(0, 2); // 2 -> 0, rank[0] = 2
        assert_eq!(uf.parent()[3], 2);
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent()[3], 0);
        assert_eq!(uf.find(4), 4);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut uf = UnionFind::new(2);
        let before = uf.snapshot();
        uf.union(0, 1);
        assert_eq!(before.parent, vec![0, 1]);
        assert_eq!(uf.snapshot().parent, vec![0, 0]);
    }
}
