// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

/// Reasons why a [CampusGraph](crate::CampusGraph) can't be built from the provided data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph: walkway {from}-{to} references unknown location {missing:?}")]
    UnknownLocation {
        from: String,
        to: String,
        missing: String,
    },

    #[error("invalid graph: walkway {from}-{to} has non-positive weight {weight}")]
    NonPositiveWeight { from: String, to: String, weight: f64 },

    #[error("invalid graph: duplicate location {0:?}")]
    DuplicateLocation(String),
}

/// A referenced location doesn't exist in the [CampusGraph](crate::CampusGraph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("location not found: {0:?}")]
pub struct NotFound(pub String);

/// Nearest-location lookup was attempted on a graph without any locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("campus graph has no locations")]
pub struct EmptyGraph;

/// Failure to parse a [WalkwayKey](crate::WalkwayKey) from its `FROM-TO` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid walkway key {0:?}: expected FROM-TO")]
pub struct ParseWalkwayKeyError(pub String);

/// Failure to load a [CampusGraph](crate::CampusGraph) from JSON data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
