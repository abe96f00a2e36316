// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

mod error;
mod path;
mod search;

pub use error::PlanError;
pub use path::{Instruction, Maneuver, Path, WALKING_SPEED};

use crate::resolver::nearest_index;
use crate::{CampusGraph, Constraints, Coordinate, NotFound};

/// Finds the shortest walking [Path] from an arbitrary position to a location.
///
/// The origin is snapped to its [nearest](crate::nearest) location first.
/// Only walkways allowed by `constraints` are considered; filtering happens
/// per call and never modifies the graph, so concurrent queries with
/// different constraints don't interfere.
///
/// Returns [PlanError::NoRouteFound] if the destination can't be reached -
/// an expected outcome when walkways are closed or inaccessible.
pub fn plan(
    g: &CampusGraph,
    origin: Coordinate,
    destination_id: &str,
    constraints: &Constraints,
) -> Result<Path, PlanError> {
    let from = nearest_index(g, origin)?;
    plan_from_index(g, from, destination_id, constraints)
}

/// Finds the shortest walking [Path] between two locations.
pub fn plan_from_location(
    g: &CampusGraph,
    origin_id: &str,
    destination_id: &str,
    constraints: &Constraints,
) -> Result<Path, PlanError> {
    let from = g
        .index_of(origin_id)
        .ok_or_else(|| NotFound(origin_id.to_string()))?;
    plan_from_index(g, from, destination_id, constraints)
}

fn plan_from_index(
    g: &CampusGraph,
    from: usize,
    destination_id: &str,
    constraints: &Constraints,
) -> Result<Path, PlanError> {
    let to = g
        .index_of(destination_id)
        .ok_or_else(|| NotFound(destination_id.to_string()))?;

    let origin_id = &g.locations()[from].id;

    match search::shortest_route(g, from, to, constraints) {
        Some(route) => {
            log::debug!(
                "planned {} -> {}: {} m over {} walkways",
                origin_id,
                destination_id,
                route.cost,
                route.hops.len()
            );
            Ok(Path::from_route(g, route))
        }

        None => {
            log::debug!("no route from {} to {}", origin_id, destination_id);
            Err(PlanError::NoRouteFound {
                from: origin_id.clone(),
                to: destination_id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load_from_buffer, ClosureSet, EmptyGraph, WalkwayKey};

    const DATA: &[u8] = include_bytes!("../test_fixtures/campus.json");

    fn campus() -> CampusGraph {
        load_from_buffer(DATA).unwrap()
    }

    fn position(g: &CampusGraph, id: &str) -> Coordinate {
        g.get_location(id).unwrap().position
    }

    fn closed(keys: &[&str]) -> ClosureSet {
        keys.iter().map(|k| k.parse::<WalkwayKey>().unwrap()).collect()
    }

    #[test]
    fn direct_walkway() {
        let g = campus();
        let path = plan(&g, position(&g, "ENG"), "GYM", &Constraints::default()).unwrap();

        assert_eq!(path.nodes, ["ENG", "GYM"]);
        assert_eq!(path.distance, 220.0);
        assert_eq!(path.duration, 157);
        assert_eq!(path.points, [position(&g, "ENG"), position(&g, "GYM")]);
        assert_eq!(path.origin(), "ENG");
        assert_eq!(path.destination(), "GYM");
        assert_eq!(path.hop_count(), 1);
    }

    #[test]
    fn closed_walkway_takes_next_shortest() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: false,
            closed: closed(&["ENG-GYM"]),
        };
        let path = plan(&g, position(&g, "ENG"), "GYM", &constraints).unwrap();

        assert_eq!(path.nodes, ["ENG", "BUS", "GYM"]);
        assert_eq!(path.distance, 390.0);
    }

    #[test]
    fn closure_key_direction_does_not_matter() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: false,
            closed: closed(&["GYM-ENG"]),
        };
        let path = plan(&g, position(&g, "ENG"), "GYM", &constraints).unwrap();
        assert_eq!(path.distance, 390.0);
    }

    #[test]
    fn accessibility_avoids_inaccessible_walkways() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: true,
            closed: closed(&["ENG-GYM"]),
        };
        let path = plan(&g, position(&g, "ENG"), "GYM", &constraints).unwrap();

        // BUS-GYM is not accessible, so the route goes through ART
        assert_eq!(path.nodes, ["ENG", "ART", "GYM"]);
        assert_eq!(path.distance, 460.0);
    }

    #[test]
    fn accessibility_no_route() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: true,
            closed: closed(&["ENG-GYM", "ART-GYM"]),
        };
        assert_eq!(
            plan(&g, position(&g, "ENG"), "GYM", &constraints),
            Err(PlanError::NoRouteFound {
                from: "ENG".to_string(),
                to: "GYM".to_string(),
            })
        );

        // Without the accessibility requirement, BUS-GYM is usable
        let constraints = Constraints {
            accessible_only: false,
            ..constraints
        };
        let path = plan(&g, position(&g, "ENG"), "GYM", &constraints).unwrap();
        assert_eq!(path.nodes, ["ENG", "BUS", "GYM"]);
    }

    #[test]
    fn accessibility_filter_holds_for_all_routes() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: true,
            ..Default::default()
        };

        for origin in g.locations() {
            for destination in g.locations() {
                let path = match plan(&g, origin.position, &destination.id, &constraints) {
                    Ok(path) => path,
                    Err(PlanError::NoRouteFound { .. }) => continue,
                    Err(e) => panic!("unexpected error: {e}"),
                };

                for pair in path.nodes.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    let usable = g.walkways().iter().any(|w| {
                        w.accessible
                            && ((&w.from == a && &w.to == b) || (&w.from == b && &w.to == a))
                    });
                    assert!(usable, "{a}-{b} is not accessible");
                }
            }
        }
    }

    #[test]
    fn isolated_location() {
        let g = campus();
        assert!(matches!(
            plan(&g, position(&g, "ENG"), "ATEC", &Constraints::default()),
            Err(PlanError::NoRouteFound { .. })
        ));
    }

    #[test]
    fn unknown_destination() {
        let g = campus();
        assert_eq!(
            plan(&g, position(&g, "ENG"), "NOPE", &Constraints::default()),
            Err(PlanError::NotFound(NotFound("NOPE".to_string())))
        );
    }

    #[test]
    fn empty_graph() {
        let g = CampusGraph::default();
        assert_eq!(
            plan(&g, Coordinate::new(0.0, 0.0), "GYM", &Constraints::default()),
            Err(PlanError::EmptyGraph(EmptyGraph))
        );
    }

    #[test]
    fn origin_is_snapped() {
        let g = campus();
        // A bit off the Main Library
        let origin = Coordinate::new(42.3580, -83.0653);
        let path = plan(&g, origin, "ART", &Constraints::default()).unwrap();

        assert_eq!(path.origin(), "LIB");
        assert_eq!(path.nodes, ["LIB", "SCI", "ART"]);
        assert_eq!(path.distance, 340.0);
    }

    #[test]
    fn origin_at_destination() {
        let g = campus();
        let path = plan(&g, position(&g, "SCI"), "SCI", &Constraints::default()).unwrap();

        assert_eq!(path.nodes, ["SCI"]);
        assert_eq!(path.distance, 0.0);
        assert_eq!(path.duration, 0);
        assert!(path.instructions.is_empty());
    }

    #[test]
    fn from_location() {
        let g = campus();
        let path = plan_from_location(&g, "BUS", "LIB", &Constraints::default()).unwrap();
        assert_eq!(path.nodes, ["BUS", "ENG", "LIB"]);
        assert_eq!(path.distance, 370.0);

        assert_eq!(
            plan_from_location(&g, "NOPE", "LIB", &Constraints::default()),
            Err(PlanError::NotFound(NotFound("NOPE".to_string())))
        );
    }

    #[test]
    fn instructions() {
        let g = campus();
        let path = plan_from_location(&g, "BUS", "SCI", &Constraints::default()).unwrap();
        assert_eq!(path.nodes, ["BUS", "ENG", "SCI"]);
        assert_eq!(path.distance, 360.0);

        assert_eq!(
            path.instructions,
            [
                Instruction {
                    index: 1,
                    text: "Head towards Engineering Hall on West Kirby Street (~311 m, 4 min)"
                        .to_string(),
                    maneuver: Maneuver::Straight,
                    location: "ENG".to_string(),
                    coordinate: position(&g, "ENG"),
                    distance: 311,
                    minutes: 4,
                },
                Instruction {
                    index: 2,
                    text: "Arrive at Science Hall on East Kirby Street (~384 m, 5 min)".to_string(),
                    maneuver: Maneuver::Arrive,
                    location: "SCI".to_string(),
                    coordinate: position(&g, "SCI"),
                    distance: 384,
                    minutes: 5,
                },
            ]
        );
    }

    #[test]
    fn instruction_distance_is_straight_line() {
        let g = campus();
        let path = plan(&g, position(&g, "ENG"), "GYM", &Constraints::default()).unwrap();

        // The walkway weighs 220 m, but the step reports the crow-flies distance
        assert_eq!(path.distance, 220.0);
        let step = &path.instructions[0];
        assert_eq!(
            step.distance as f64,
            crate::earth_distance(position(&g, "ENG"), position(&g, "GYM")).round()
        );
        assert_eq!(step.distance, 238);
        assert_eq!(step.minutes, 3);
        assert_eq!(
            step.text,
            "Arrive at Recreation Center on West Kirby Street (~238 m, 3 min)"
        );
    }

    #[test]
    fn deterministic_and_idempotent() {
        let g = campus();
        let constraints = Constraints {
            accessible_only: false,
            closed: closed(&["ENG-GYM"]),
        };

        for origin in g.locations() {
            for destination in g.locations() {
                let first = plan(&g, origin.position, &destination.id, &constraints);
                let second = plan(&g, origin.position, &destination.id, &constraints);
                assert_eq!(first, second);

                // Re-planning from the path's own start reproduces it
                if let Ok(path) = first {
                    let again =
                        plan_from_location(&g, path.origin(), path.destination(), &constraints)
                            .unwrap();
                    assert_eq!(again.nodes, path.nodes);
                }
            }
        }
    }

    #[test]
    fn closures_never_shorten_routes() {
        let g = campus();
        let open = Constraints::default();

        for walkway in g.walkways() {
            let constraints = Constraints {
                accessible_only: false,
                closed: [walkway.key()].into_iter().collect(),
            };

            for origin in g.locations() {
                for destination in g.locations() {
                    let before = plan(&g, origin.position, &destination.id, &open);
                    let after = plan(&g, origin.position, &destination.id, &constraints);

                    match (before, after) {
                        (Ok(before), Ok(after)) => assert!(
                            after.distance >= before.distance,
                            "closing {} shortened {} -> {}",
                            walkway.key(),
                            origin.id,
                            destination.id
                        ),
                        (Ok(_), Err(PlanError::NoRouteFound { .. })) => {}
                        (Err(PlanError::NoRouteFound { .. }), Err(PlanError::NoRouteFound { .. })) => {}
                        (before, after) => panic!("unexpected: {before:?} -> {after:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn graph_is_not_modified() {
        let g = campus();
        let copy = g.clone();
        let constraints = Constraints {
            accessible_only: true,
            closed: closed(&["ENG-GYM", "SCI-ART"]),
        };
        let _ = plan(&g, position(&g, "BUS"), "ART", &constraints);
        assert_eq!(g, copy);
    }
}
