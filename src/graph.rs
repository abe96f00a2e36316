// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use std::collections::hash_map::{Entry, HashMap};

use crate::{GraphError, Location, NotFound, Walkway};

/// Represents a campus as a set of [Locations](Location)
/// and undirected [Walkways](Walkway) between them.
///
/// The graph is immutable once built. Any number of planners and
/// [sessions](crate::NavigationSession) may share a reference to it;
/// closures and accessibility filtering are applied per query.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CampusGraph {
    locations: Vec<Location>,
    walkways: Vec<Walkway>,

    /// Location id to index in `locations`
    index: HashMap<String, usize>,

    /// Indices of the endpoints of every walkway, parallel to `walkways`
    ends: Vec<(usize, usize)>,
}

impl CampusGraph {
    /// Builds a graph from raw location and walkway data.
    ///
    /// Fails if two locations share an id, if a walkway references an unknown
    /// location, or if a walkway weight is not a positive, finite number.
    pub fn new(locations: Vec<Location>, walkways: Vec<Walkway>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(locations.len());
        for (idx, location) in locations.iter().enumerate() {
            match index.entry(location.id.clone()) {
                Entry::Vacant(e) => {
                    e.insert(idx);
                }
                Entry::Occupied(_) => {
                    return Err(GraphError::DuplicateLocation(location.id.clone()));
                }
            }
        }

        let mut ends = Vec::with_capacity(walkways.len());
        for walkway in &walkways {
            let lookup = |id: &String| {
                index
                    .get(id)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownLocation {
                        from: walkway.from.clone(),
                        to: walkway.to.clone(),
                        missing: id.clone(),
                    })
            };

            let a = lookup(&walkway.from)?;
            let b = lookup(&walkway.to)?;

            // NaN fails this check too
            if !(walkway.weight > 0.0 && walkway.weight.is_finite()) {
                return Err(GraphError::NonPositiveWeight {
                    from: walkway.from.clone(),
                    to: walkway.to.clone(),
                    weight: walkway.weight,
                });
            }

            ends.push((a, b));
        }

        log::debug!(
            "built campus graph with {} locations and {} walkways",
            locations.len(),
            walkways.len()
        );

        Ok(Self {
            locations,
            walkways,
            index,
            ends,
        })
    }

    /// Returns the number of locations in the graph.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns all [Locations](Location), in the order they were provided.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Returns all [Walkways](Walkway), in the order they were provided.
    pub fn walkways(&self) -> &[Walkway] {
        &self.walkways
    }

    /// Retrieves a [Location] with the provided id.
    pub fn get_location(&self, id: &str) -> Result<&Location, NotFound> {
        self.index
            .get(id)
            .map(|&idx| &self.locations[idx])
            .ok_or_else(|| NotFound(id.to_string()))
    }

    /// Returns the position of a location in [CampusGraph::locations].
    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterates over walkways together with the indices of their endpoints.
    pub(crate) fn walkways_with_ends(&self) -> impl Iterator<Item = (&Walkway, usize, usize)> {
        self.walkways
            .iter()
            .zip(self.ends.iter())
            .map(|(w, &(a, b))| (w, a, b))
    }
}
