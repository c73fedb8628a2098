//! Connected-component labelling.

use mazer_core::Point;

use crate::PathRange;
use crate::pathrange::NO_LABEL;
use crate::traits::Pather;

impl PathRange {
    /// Label every position in the range with a connected-component ID and
    /// return the number of components found.
    ///
    /// Positions without neighbours (walls, for a maze pather) still get a
    /// label of their own, so callers usually count components over open
    /// positions via [`cc_at`](Self::cc_at).
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) -> usize {
        self.labels.fill(NO_LABEL);

        let mut label: u32 = 0;
        for start in 0..self.len() {
            if self.labels[start] != NO_LABEL {
                continue;
            }
            self.flood(pather, start, label, |_| {});
            label += 1;
        }
        label as usize
    }

    /// Flood-fill from a single point and return the set of connected
    /// positions, `p` included. Empty if `p` is out of range.
    pub fn cc_map<P: Pather>(&mut self, pather: &P, p: Point) -> Vec<Point> {
        self.labels.fill(NO_LABEL);

        let mut result = Vec::new();
        let Some(si) = self.index(p) else {
            return result;
        };
        self.flood(pather, si, 0, |np| result.push(np));
        result
    }

    /// Query the connected-component label of a point.
    ///
    /// Returns `None` if the point is outside the range or was not labelled
    /// by the last `cc_map_all` / `cc_map` call.
    pub fn cc_at(&self, p: Point) -> Option<usize> {
        let i = self.index(p)?;
        let label = self.labels[i];
        (label != NO_LABEL).then_some(label as usize)
    }

    // Iterative DFS labelling everything reachable from `start`.
    fn flood<P: Pather>(
        &mut self,
        pather: &P,
        start: usize,
        label: u32,
        mut visit: impl FnMut(Point),
    ) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.stack.clear();
        self.stack.push(start);
        self.labels[start] = label;
        visit(self.position(start));

        while let Some(ci) = self.stack.pop() {
            nbuf.clear();
            pather.neighbors(self.position(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.index(np) else {
                    continue;
                };
                if self.labels[ni] == NO_LABEL {
                    self.labels[ni] = label;
                    self.stack.push(ni);
                    visit(np);
                }
            }
        }
        self.nbuf = nbuf;
    }
}
