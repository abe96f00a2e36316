// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::search::Route;
use crate::{earth_distance, CampusGraph, Coordinate};

/// Average walking speed, in meters per second.
pub const WALKING_SPEED: f64 = 1.4;

/// Street names used in instruction texts, cycled by step.
/// They don't reflect actual walkway geometry.
const STREET_NAMES: [&str; 5] = [
    "West Kirby Street",
    "East Kirby Street",
    "Cass Avenue",
    "Lothrop Street",
    "Warren Avenue",
];

/// Classification of a single [Instruction].
///
/// Turn geometry is not computed: all hops are [Maneuver::Straight],
/// except for the last one, which is [Maneuver::Arrive].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Maneuver {
    Straight,
    Turn,
    Arrive,
}

/// A single step of a [Path], leading along one walkway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    /// 1-based number of this step
    pub index: usize,
    pub text: String,
    pub maneuver: Maneuver,

    /// Id of the location this step leads to
    pub location: String,

    /// Position of the location this step leads to
    pub coordinate: Coordinate,

    /// Straight-line length of this step, in meters
    pub distance: u64,

    /// Estimated walking time of this step, in minutes
    pub minutes: u64,
}

/// A planned route between two locations.
///
/// Paths are never modified in place; rerouting produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// Ids of visited locations, from the origin to the destination
    pub nodes: Vec<String>,

    /// Positions of visited locations, parallel to `nodes`
    pub points: Vec<Coordinate>,

    /// Total walking distance, in meters
    pub distance: f64,

    /// Estimated walking time, in seconds
    pub duration: u64,

    /// One instruction for every traversed walkway
    pub instructions: Vec<Instruction>,
}

impl Path {
    /// Id of the location where the path starts.
    pub fn origin(&self) -> &str {
        &self.nodes[0]
    }

    /// Id of the location where the path ends.
    pub fn destination(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of traversed walkways.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Converts a [Route] over location indices into a full Path.
    pub(super) fn from_route(g: &CampusGraph, route: Route) -> Self {
        let locations = g.locations();
        let last_step = route.hops.len();

        let instructions = route
            .nodes
            .windows(2)
            .enumerate()
            .map(|(i, hop)| {
                let source = &locations[hop[0]];
                let target = &locations[hop[1]];

                // Crow-flies length of the hop; only the path totals use walkway weights
                let distance = earth_distance(source.position, target.position).round();
                let minutes = (distance / WALKING_SPEED / 60.0).round();
                let street = STREET_NAMES[i % STREET_NAMES.len()];

                let (maneuver, verb) = if i + 1 == last_step {
                    (Maneuver::Arrive, "Arrive at")
                } else {
                    (Maneuver::Straight, "Head towards")
                };

                Instruction {
                    index: i + 1,
                    text: format!(
                        "{} {} on {} (~{} m, {} min)",
                        verb, target.name, street, distance, minutes
                    ),
                    maneuver,
                    location: target.id.clone(),
                    coordinate: target.position,
                    distance: distance as u64,
                    minutes: minutes as u64,
                }
            })
            .collect();

        Self {
            nodes: route
                .nodes
                .iter()
                .map(|&idx| locations[idx].id.clone())
                .collect(),
            points: route
                .nodes
                .iter()
                .map(|&idx| locations[idx].position)
                .collect(),
            distance: route.cost,
            duration: (route.cost / WALKING_SPEED).round() as u64,
            instructions,
        }
    }
}
