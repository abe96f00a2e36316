// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use crate::{
    distance_to_polyline, earth_distance, plan, CampusGraph, ClosureSet, Constraints, Coordinate,
    Path, PlanError,
};

/// Distance from the active [Path] (in meters) above which a
/// [NavigationSession] reroutes.
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 30.0;

/// Distance from the destination (in meters) at which a [NavigationSession]
/// considers the walker arrived.
pub const DEFAULT_ARRIVAL_TOLERANCE: f64 = 5.0;

/// Additional controls for a [NavigationSession].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Rerouting happens when the walker is more than this many meters away
    /// from every segment of the active path.
    pub deviation_threshold: f64,

    /// The walker has arrived when they are at most this many meters away
    /// from the destination.
    pub arrival_tolerance: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            arrival_tolerance: DEFAULT_ARRIVAL_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No destination is selected.
    Idle,

    /// A path to the destination is held, but position updates aren't monitored yet.
    Planned,

    /// Position updates are checked against the held path.
    Navigating,

    /// The walker reached the destination.
    Arrived,
}

/// Outcome of [NavigationSession::update_position].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionUpdate {
    /// The session isn't navigating; only the position was recorded.
    Recorded,

    /// The walker is within the deviation threshold of the active path.
    OnPath { deviation: f64 },

    /// The walker strayed from the path and a new one was planned.
    Rerouted { deviation: f64 },

    /// The walker reached the destination.
    Arrived,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no destination selected")]
    NoDestination,

    #[error("no path to navigate along")]
    NotPlanned,

    #[error("not navigating")]
    NotNavigating,

    /// Planning (or rerouting) failed. A previously held path is kept.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Tracks a walker's position against a planned [Path] to a destination,
/// replanning whenever they deviate from it or the [Constraints] change.
///
/// All operations are synchronous. The session doesn't run its own clock -
/// the caller drives it by calling [NavigationSession::update_position].
/// Calls into a single session must be serialized, but any number of sessions
/// may share one [CampusGraph].
#[derive(Debug, Clone)]
pub struct NavigationSession<'g> {
    graph: &'g CampusGraph,
    options: SessionOptions,
    state: SessionState,
    position: Coordinate,
    constraints: Constraints,
    destination: Option<String>,
    path: Option<Path>,
    reroutes: usize,
}

impl<'g> NavigationSession<'g> {
    /// Creates an [idle](SessionState::Idle) session with default options.
    pub fn new(graph: &'g CampusGraph, position: Coordinate) -> Self {
        Self::with_options(graph, position, SessionOptions::default())
    }

    pub fn with_options(
        graph: &'g CampusGraph,
        position: Coordinate,
        options: SessionOptions,
    ) -> Self {
        Self {
            graph,
            options,
            state: SessionState::Idle,
            position,
            constraints: Constraints::default(),
            destination: None,
            path: None,
            reroutes: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Returns the active [Path], if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Number of successful reroutes (due to deviation or constraint changes)
    /// since the session was created.
    pub fn reroute_count(&self) -> usize {
        self.reroutes
    }

    /// Plans a path from the current position to a new destination.
    ///
    /// On success, the session becomes [Planned](SessionState::Planned).
    /// On failure, the session is [cleared](NavigationSession::clear)
    /// and no path is held.
    pub fn select_destination(&mut self, destination_id: &str) -> Result<&Path, SessionError> {
        match plan(self.graph, self.position, destination_id, &self.constraints) {
            Ok(path) => {
                self.destination = Some(destination_id.to_string());
                self.state = SessionState::Planned;
                Ok(&*self.path.insert(path))
            }

            Err(e) => {
                self.clear();
                Err(e.into())
            }
        }
    }

    /// Starts monitoring position updates against the held path.
    pub fn start_navigating(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Planned | SessionState::Navigating => {
                self.state = SessionState::Navigating;
                Ok(())
            }
            SessionState::Idle | SessionState::Arrived => Err(SessionError::NotPlanned),
        }
    }

    /// Records a new position of the walker.
    ///
    /// When [navigating](SessionState::Navigating), checks for arrival and
    /// measures the deviation from the active path. If the deviation exceeds
    /// the threshold, a new path is planned from the new position to the same
    /// destination under the same constraints. If that fails, the previous
    /// path is kept and the failure is returned.
    pub fn update_position(
        &mut self,
        position: Coordinate,
    ) -> Result<PositionUpdate, SessionError> {
        self.position = position;

        if self.state != SessionState::Navigating {
            return Ok(PositionUpdate::Recorded);
        }

        let Some(path) = &self.path else {
            return Err(SessionError::NotPlanned);
        };

        let destination = self
            .graph
            .get_location(path.destination())
            .map_err(PlanError::from)?;
        if earth_distance(position, destination.position) <= self.options.arrival_tolerance {
            log::debug!("arrived at {}", destination.id);
            self.state = SessionState::Arrived;
            return Ok(PositionUpdate::Arrived);
        }

        let deviation = match path.points.as_slice() {
            [only] => earth_distance(position, *only),
            points => distance_to_polyline(position, points),
        };

        if deviation > self.options.deviation_threshold {
            log::info!("deviated {:.0} m from the path, rerouting", deviation);
            self.reroute()?;
            Ok(PositionUpdate::Rerouted { deviation })
        } else {
            Ok(PositionUpdate::OnPath { deviation })
        }
    }

    /// Marks the walk as finished. Meant for callers which step through
    /// the path points themselves and have exhausted them.
    pub fn arrive(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Navigating {
            return Err(SessionError::NotNavigating);
        }
        self.state = SessionState::Arrived;
        Ok(())
    }

    /// Drops the destination and the active path, returning to [SessionState::Idle].
    /// The position and constraints are kept.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.destination = None;
        self.path = None;
    }

    /// Changes whether only accessible walkways may be used, replanning the
    /// active path if there is one.
    pub fn set_accessible_only(&mut self, accessible_only: bool) -> Result<(), SessionError> {
        self.constraints.accessible_only = accessible_only;
        self.constraints_changed()
    }

    /// Replaces the set of closed walkways, replanning the active path if there is one.
    pub fn set_closures(&mut self, closed: ClosureSet) -> Result<(), SessionError> {
        self.constraints.closed = closed;
        self.constraints_changed()
    }

    /// Closes a single walkway, replanning the active path if there is one.
    pub fn close_walkway(&mut self, a: &str, b: &str) -> Result<(), SessionError> {
        self.constraints.closed.close(a, b);
        self.constraints_changed()
    }

    /// Reopens a single walkway, replanning the active path if there is one.
    pub fn reopen_walkway(&mut self, a: &str, b: &str) -> Result<(), SessionError> {
        self.constraints.closed.reopen(a, b);
        self.constraints_changed()
    }

    fn constraints_changed(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Planned | SessionState::Navigating => {
                log::info!("constraints changed, rerouting");
                self.reroute()
            }
            SessionState::Idle | SessionState::Arrived => Ok(()),
        }
    }

    /// Plans a new path from the current position, replacing the active one
    /// only if planning succeeds.
    fn reroute(&mut self) -> Result<(), SessionError> {
        let destination = self
            .destination
            .as_deref()
            .ok_or(SessionError::NoDestination)?;

        match plan(self.graph, self.position, destination, &self.constraints) {
            Ok(path) => {
                log::info!("rerouted: {}", path.nodes.join(" -> "));
                self.path = Some(path);
                self.reroutes += 1;
                Ok(())
            }

            Err(e) => {
                log::warn!(
                    "reroute to {} failed, keeping the previous path: {}",
                    destination,
                    e
                );
                Err(e.into())
            }
        }
    }
}
