//! Disjoint sets over dense indices.

/// A disjoint-set forest over `0..len`.
///
/// `parent[i] == i` marks a root. There is no union by rank; depth is kept
/// in check by path compression alone.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `i`.
    ///
    /// Every node visited on the way up is re-pointed directly at the root.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = i;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. The root of `a`'s set becomes the
    /// parent of the root of `b`'s set. Returns `false` if they were already
    /// joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[rb] = ra;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn clusters(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.clusters(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn union_attaches_second_root_under_first() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(2, 3));
        assert_eq!(uf.find(3), 2);
        assert!(uf.union(0, 3));
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.find(3), 0);
        assert!(!uf.union(2, 0));
        assert_eq!(uf.clusters(), 2);
    }

    #[test]
    fn find_compresses_paths() {
        let mut uf = UnionFind::new(5);
        // chain 0 <- 1 <- 2 <- 3 <- 4
        for i in (0..4).rev() {
            uf.union(i, i + 1);
        }
        assert_eq!(uf.find(4), 0);
        assert!(uf.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn connectivity_matches_accepted_edges() {
        // 0-1, 2-3, 1-3; 4 stays alone
        let edges = [(0, 1), (2, 3), (1, 3)];
        let mut uf = UnionFind::new(5);
        for (a, b) in edges {
            uf.union(a, b);
        }
        for a in 0..4 {
            for b in 0..4 {
                assert!(uf.connected(a, b));
            }
            assert!(!uf.connected(a, 4));
        }
        assert_eq!(uf.clusters(), 2);
    }
}
