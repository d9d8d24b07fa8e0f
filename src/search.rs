//! This module implements a uniform-cost search in the style of
//! [pathfinding's dijkstra and astar functions](https://docs.rs/pathfinding/latest/pathfinding/directed/index.html).
//! The scratch state (frontier and parent map) lives only for the duration of one call.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap pops the smallest estimate first, then the entry
        // with the larger cost among equal estimates.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                // Earlier discovered nodes first, which keeps the result deterministic
                Ordering::Equal => other.index.cmp(&self.index),
                s => s,
            },
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Uniform-cost search from `start` until a node satisfying `success` is popped from the
/// frontier. Returns the path including `start` and the goal, and its total cost.
pub fn dijkstra<N, C, FN, IN, FS>(start: &N, successors: FN, success: FS) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    astar(start, successors, |_| Zero::zero(), success)
}

/// Same as [dijkstra] with the frontier ordered by cost plus `heuristic`. The heuristic must not
/// overestimate for the result to be a shortest path.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = 0usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index)?;
            if success(node) {
                debug!("Goal popped after expanding {} nodes", expanded);
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // A node may sit in the heap several times if a cheaper way to it was found later;
            // only the entry matching the recorded cost is expanded.
            if cost > c {
                continue;
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    warn!(
        "Frontier exhausted after expanding {} nodes without reaching the goal",
        expanded
    );
    None
}
