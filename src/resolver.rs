// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use crate::{earth_distance, CampusGraph, Coordinate, EmptyGraph, Location};

/// Finds the closest [Location] to the given position ("snapping").
///
/// Ties are resolved in favor of the location which comes first in
/// [CampusGraph::locations]. The result is not checked for being reasonably
/// close - any position, however far away, snaps to some location.
///
/// This function requires computing the distance to every location in the graph.
pub fn nearest(g: &CampusGraph, position: Coordinate) -> Result<&Location, EmptyGraph> {
    nearest_index(g, position).map(|idx| &g.locations()[idx])
}

pub(crate) fn nearest_index(g: &CampusGraph, position: Coordinate) -> Result<usize, EmptyGraph> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, location) in g.locations().iter().enumerate() {
        let d = earth_distance(position, location.position);

        // Strict comparison keeps the first of equally distant locations
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((idx, d));
        }
    }

    best.map(|(idx, _)| idx).ok_or(EmptyGraph)
}
