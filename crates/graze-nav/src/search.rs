use std::collections::BTreeMap;

use graze_core::{GridPos, HerdObserver};
use graze_grid::{GridError, GridWorld};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frontier::Frontier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchAlgorithm {
    /// Edge costs only (Dijkstra).
    Uniform,
    /// Edge cost plus straight-line distance to the goal, accumulated per hop.
    Heuristic,
}

/// Everything a search discovered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Discovered tile -> the tile it was reached from. The source has no entry.
    pub came_from: BTreeMap<GridPos, GridPos>,
    /// Recorded accumulated cost for every discovered tile, source included.
    pub cost_so_far: BTreeMap<GridPos, f32>,
    /// Tiles in the order they were expanded (popped with a current cost).
    pub expanded: Vec<GridPos>,
    pub reached_goal: bool,
}

pub fn search(
    algorithm: SearchAlgorithm,
    grid: &GridWorld,
    source: GridPos,
    goal: GridPos,
    observer: &mut dyn HerdObserver,
) -> Result<SearchResult, GridError> {
    match algorithm {
        SearchAlgorithm::Uniform => uniform_cost(grid, source, goal, observer),
        SearchAlgorithm::Heuristic => heuristic_search(grid, source, goal, observer),
    }
}

/// Uniform-cost search: `cost[n] = cost[current] + edge_cost(current, n)`.
pub fn uniform_cost(
    grid: &GridWorld,
    source: GridPos,
    goal: GridPos,
    observer: &mut dyn HerdObserver,
) -> Result<SearchResult, GridError> {
    run(grid, source, goal, observer, |_, _| 0.0)
}

/// Heuristic-guided search with compounding accumulation.
///
/// The candidate cost is `cost[current] + edge_cost(current, n) + distance(n, goal)` and that
/// whole sum is stored as `cost[n]`, so heuristic terms from earlier hops stay in the total. This
/// is not admissible A*; paths can be longer than the uniform-cost result.
pub fn heuristic_search(
    grid: &GridWorld,
    source: GridPos,
    goal: GridPos,
    observer: &mut dyn HerdObserver,
) -> Result<SearchResult, GridError> {
    run(grid, source, goal, observer, |n, goal| n.distance(goal))
}

fn run<H>(
    grid: &GridWorld,
    source: GridPos,
    goal: GridPos,
    observer: &mut dyn HerdObserver,
    heuristic: H,
) -> Result<SearchResult, GridError>
where
    H: Fn(GridPos, GridPos) -> f32,
{
    grid.tile_at(source)?;
    grid.tile_at(goal)?;

    let mut result = SearchResult::default();
    let mut frontier = Frontier::default();

    result.cost_so_far.insert(source, 0.0);
    frontier.push(source, 0.0);

    while let Some(node) = frontier.pop() {
        let current = node.cell;
        let Some(&current_cost) = result.cost_so_far.get(&current) else {
            continue;
        };
        if node.cost != current_cost {
            // Stale heap entry.
            continue;
        }

        observer.tile_visited(current);
        result.expanded.push(current);
        trace!(tile = %current, cost = current_cost, "expand");

        if current == goal {
            result.reached_goal = true;
            break;
        }

        for neighbor in grid.neighbors(current)? {
            let Some(edge) = grid.edge_cost(current, neighbor)? else {
                continue;
            };
            let candidate = current_cost + edge + heuristic(neighbor, goal);
            let improves = result
                .cost_so_far
                .get(&neighbor)
                .map_or(true, |&known| candidate < known);
            if !improves {
                continue;
            }

            result.cost_so_far.insert(neighbor, candidate);
            result.came_from.insert(neighbor, current);
            frontier.push(neighbor, candidate);
        }
    }

    debug!(
        %source,
        %goal,
        expanded = result.expanded.len(),
        discovered = result.cost_so_far.len(),
        reached = result.reached_goal,
        "search finished"
    );
    Ok(result)
}
