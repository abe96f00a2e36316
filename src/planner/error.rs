// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use crate::{EmptyGraph, NotFound};

/// Error conditions which may occur during [plan](crate::plan) or
/// [plan_from_location](crate::plan_from_location).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The origin or destination location doesn't exist in the graph.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The origin position can't be snapped, as the graph has no locations.
    #[error(transparent)]
    EmptyGraph(#[from] EmptyGraph),

    /// The destination can't be reached from the origin under the given
    /// [Constraints](crate::Constraints). This is an expected outcome,
    /// e.g. when all walkways to a building are closed.
    #[error("no route found from {from} to {to}")]
    NoRouteFound { from: String, to: String },
}
