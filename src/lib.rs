// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

//! Pedestrian routing over a small, fixed campus.
//!
//! A campus is a [CampusGraph] of named [Locations](Location) connected by
//! undirected, weighted [Walkways](Walkway). Routes are found with Dijkstra's
//! algorithm under per-query [Constraints] (accessibility and closed walkways),
//! and returned as a [Path] with coordinates and turn-by-turn [Instructions](Instruction).
//! A [NavigationSession] keeps a route valid as the walker moves, rerouting
//! when they stray too far from it.
//!
//! # Example
//!
//! ```no_run
//! let g = campusnav::load_from_file("path/to/campus.json").expect("failed to load campus");
//!
//! let constraints = campusnav::Constraints::default();
//! let origin = campusnav::Coordinate::new(42.3598, -83.0675);
//! let path = campusnav::plan(&g, origin, "GYM", &constraints).expect("failed to find route");
//!
//! for instruction in &path.instructions {
//!     println!("{}. {}", instruction.index, instruction.text);
//! }
//! ```

mod closures;
mod distance;
mod error;
mod graph;
mod load;
mod planner;
mod resolver;
mod session;

pub use closures::{Constraints, ClosureSet, WalkwayKey};
pub use distance::{distance_to_polyline, distance_to_segment, earth_distance, EARTH_RADIUS};
pub use error::{EmptyGraph, GraphError, LoadError, NotFound, ParseWalkwayKeyError};
pub use graph::CampusGraph;
pub use load::{
    load_from_buffer, load_from_file, load_from_io, CampusData, LocationRecord, WalkwayRecord,
};
pub use planner::{
    plan, plan_from_location, Instruction, Maneuver, Path, PlanError, WALKING_SPEED,
};
pub use resolver::nearest;
pub use session::{
    NavigationSession, PositionUpdate, SessionError, SessionOptions, SessionState,
    DEFAULT_ARRIVAL_TOLERANCE, DEFAULT_DEVIATION_THRESHOLD,
};

use serde::{Deserialize, Serialize};

/// A position on Earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Represents a point of interest (a node) of the [CampusGraph].
///
/// `tags` are informational only and are never consulted by routing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub position: Coordinate,
    pub tags: Vec<String>,
}

/// Represents an undirected walkable connection between two [Locations](Location).
///
/// `weight` is the walking distance in meters and must be positive.
/// Closures are not part of a walkway; see [ClosureSet].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Walkway {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub accessible: bool,
}

impl Walkway {
    /// Returns the direction-independent key of this walkway.
    pub fn key(&self) -> WalkwayKey {
        WalkwayKey::new(&self.from, &self.to)
    }
}
