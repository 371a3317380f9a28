//! Generic A* with graph-search pruning, in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Problems are described through the [SearchProblem] capabilities instead of closures so
//! that the taken action can be recorded alongside each state.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::N_SMALLVEC_SIZE;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The capability set an A* search needs: a transition model, step costs, an
/// admissible heuristic and a goal test.
pub trait SearchProblem {
    type State: Eq + Hash + Clone;
    type Action: Copy;
    type Cost: Zero + PartialOrd + Copy;
    type Actions: IntoIterator<Item = Self::Action>;

    fn initial_state(&self) -> Self::State;
    /// Actions applicable in `state`. Their order decides expansion order among ties.
    fn actions(&self, state: &Self::State) -> Self::Actions;
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;
    fn cost(&self, state: &Self::State, action: Self::Action, next: &Self::State) -> Self::Cost;
    fn heuristic(&self, state: &Self::State) -> Self::Cost;
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// Optimal path found by [astar]. The first step is the initial state and carries no action.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<S, A, C> {
    pub steps: Vec<(Option<A>, S)>,
    pub cost: C,
    pub expanded: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Every reachable state was expanded without meeting the goal.
    Exhausted { expanded: usize },
    /// The expansion budget ran out before the search finished.
    BudgetExceeded { expanded: usize, limit: usize },
}

struct NodeInfo<A, C> {
    parent: usize,
    action: Option<A>,
    cost: C,
    closed: bool,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the entry pushed earliest
        match other.estimated_cost.partial_cmp(&self.estimated_cost) {
            Some(Ordering::Equal) | None => other.sequence.cmp(&self.sequence),
            Some(s) => s,
        }
    }
}

fn reverse_path<S, A, C>(nodes: &FxIndexMap<S, NodeInfo<A, C>>, goal: usize) -> Vec<(Option<A>, S)>
where
    S: Clone,
    A: Copy,
{
    let mut index = goal;
    let mut path: Vec<(Option<A>, S)> = std::iter::from_fn(|| {
        nodes.get_index(index).map(|(state, info)| {
            index = info.parent;
            (info.action, state.clone())
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs A* from the problem's initial state. States are never re-expanded once closed,
/// which keeps the result optimal as long as the heuristic is consistent. Expansion
/// stops with [SearchFailure::BudgetExceeded] after `max_expansions` closed states.
pub fn astar<P: SearchProblem>(
    problem: &P,
    max_expansions: Option<usize>,
) -> Result<Solution<P::State, P::Action, P::Cost>, SearchFailure> {
    let mut to_see = BinaryHeap::new();
    let start = problem.initial_state();
    to_see.push(SmallestCostHolder {
        estimated_cost: problem.heuristic(&start),
        cost: Zero::zero(),
        index: 0,
        sequence: 0,
    });
    let mut nodes: FxIndexMap<P::State, NodeInfo<P::Action, P::Cost>> = FxIndexMap::default();
    nodes.insert(
        start,
        NodeInfo {
            parent: usize::MAX,
            action: None,
            cost: Zero::zero(),
            closed: false,
        },
    );
    let mut sequence = 1;
    let mut expanded = 0;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, info)) = nodes.get_index(index) else {
                continue;
            };
            if problem.is_goal(node) {
                debug!("Goal reached after expanding {} nodes", expanded);
                return Ok(Solution {
                    steps: reverse_path(&nodes, index),
                    cost: info.cost,
                    expanded,
                });
            }
            // A state may sit in the heap several times if a cheaper way to it was found
            // later. Only the first pop of a state expands it.
            if info.closed || cost > info.cost {
                continue;
            }
            if let Some(limit) = max_expansions {
                if expanded >= limit {
                    warn!("Search aborted after expanding {} nodes", expanded);
                    return Err(SearchFailure::BudgetExceeded { expanded, limit });
                }
            }
            expanded += 1;
            problem
                .actions(node)
                .into_iter()
                .map(|action| {
                    let next = problem.result(node, action);
                    let move_cost = problem.cost(node, action, &next);
                    (action, next, move_cost)
                })
                .collect::<SmallVec<[_; N_SMALLVEC_SIZE]>>()
        };
        if let Some((_, info)) = nodes.get_index_mut(index) {
            info.closed = true;
        }
        for (action, successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            let entry = NodeInfo {
                parent: index,
                action: Some(action),
                cost: new_cost,
                closed: false,
            };
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = problem.heuristic(e.key());
                    n = e.index();
                    e.insert(entry);
                }
                Occupied(mut e) => {
                    if e.get().closed || !(new_cost < e.get().cost) {
                        continue;
                    }
                    h = problem.heuristic(e.key());
                    n = e.index();
                    e.insert(entry);
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
                sequence,
            });
            sequence += 1;
        }
    }
    debug!("Open set exhausted after expanding {} nodes", expanded);
    Err(SearchFailure::Exhausted { expanded })
}
