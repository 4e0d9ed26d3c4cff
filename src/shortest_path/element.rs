use crate::Cost;
use std::cmp::Ordering;

/// An entry of the Frontier: the index of a SearchNode and the Cost of reaching it.
///
/// Ordered in reverse by Cost, so that [`BinaryHeap`](std::collections::BinaryHeap) pops the
/// cheapest entry first. Equal Costs are left in whatever order the Heap produces.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element(pub usize, pub Cost);

impl PartialEq for Element {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}
