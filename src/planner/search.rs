// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{CampusGraph, Constraints};

#[derive(Debug, Clone, Copy)]
struct QueueItem<'a> {
    at: usize,
    id: &'a str,
    cost: f64,
}

impl PartialEq for QueueItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem<'_> {}

impl PartialOrd for QueueItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs (and then lower ids) are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(self.id))
    }
}

/// Shortest route found by [shortest_route], in terms of location indices.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Route {
    /// Visited locations, origin first
    pub nodes: Vec<usize>,

    /// Weight of every traversed walkway; `hops.len() + 1 == nodes.len()`
    pub hops: Vec<f64>,

    pub cost: f64,
}

/// Builds the adjacency lists of the walkways allowed by `constraints`,
/// in both directions. The graph itself is left untouched.
fn filtered_adjacency(g: &CampusGraph, constraints: &Constraints) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); g.len()];
    for (walkway, a, b) in g.walkways_with_ends() {
        if constraints.allows(walkway) {
            adjacency[a].push((b, walkway.weight));
            adjacency[b].push((a, walkway.weight));
        }
    }
    return adjacency;
}

fn reconstruct_route(came_from: &[Option<(usize, f64)>], mut last: usize, cost: f64) -> Route {
    let mut nodes = vec![last];
    let mut hops = Vec::new();

    while let Some((nd, weight)) = came_from[last] {
        nodes.push(nd);
        hops.push(weight);
        last = nd;
    }

    nodes.reverse();
    hops.reverse();
    return Route { nodes, hops, cost };
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest route between two locations (given by their indices)
/// over the walkways allowed by `constraints`.
///
/// Among locations with equal tentative cost, the one with the lexicographically
/// smallest id is settled first, which makes the result fully deterministic.
/// The search stops as soon as `to` is settled.
///
/// Returns `None` if there is no route between the two locations.
pub(super) fn shortest_route(
    g: &CampusGraph,
    from: usize,
    to: usize,
    constraints: &Constraints,
) -> Option<Route> {
    let adjacency = filtered_adjacency(g, constraints);
    let locations = g.locations();

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::with_capacity(locations.len());
    let mut came_from: Vec<Option<(usize, f64)>> = vec![None; locations.len()];
    let mut known_costs: Vec<f64> = vec![f64::INFINITY; locations.len()];
    let mut settled: Vec<bool> = vec![false; locations.len()];

    known_costs[from] = 0.0;
    queue.push(QueueItem {
        at: from,
        id: &locations[from].id,
        cost: 0.0,
    });

    while let Some(item) = queue.pop() {
        // Stale entries are left in the queue instead of being decreased in place
        if settled[item.at] {
            continue;
        }
        settled[item.at] = true;

        if item.at == to {
            return Some(reconstruct_route(&came_from, to, item.cost));
        }

        for &(neighbor, weight) in &adjacency[item.at] {
            if settled[neighbor] {
                continue;
            }

            let neighbor_cost = item.cost + weight;
            if neighbor_cost < known_costs[neighbor] {
                came_from[neighbor] = Some((item.at, weight));
                known_costs[neighbor] = neighbor_cost;
                queue.push(QueueItem {
                    at: neighbor,
                    id: &locations[neighbor].id,
                    cost: neighbor_cost,
                });
            }
        }
    }

    None
}
