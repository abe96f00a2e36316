// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::{ParseWalkwayKeyError, Walkway};

/// Direction-independent identifier of a [Walkway]:
/// `WalkwayKey::new("A", "B") == WalkwayKey::new("B", "A")`.
///
/// Displayed (and parsed) as `FROM-TO`. Parsing splits on the first `-`,
/// so the first location id must not contain a dash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalkwayKey(String, String);

impl WalkwayKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }

    /// Returns both endpoints, lexicographically smaller id first.
    pub fn ends(&self) -> (&str, &str) {
        (&self.0, &self.1)
    }
}

impl fmt::Display for WalkwayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

impl FromStr for WalkwayKey {
    type Err = ParseWalkwayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((a, b)) if !a.is_empty() && !b.is_empty() => Ok(Self::new(a, b)),
            _ => Err(ParseWalkwayKeyError(s.to_string())),
        }
    }
}

/// Set of temporarily unusable walkways, supplied per query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClosureSet(HashSet<WalkwayKey>);

impl ClosureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the walkway between `a` and `b`. Returns `false` if it was already closed.
    pub fn close(&mut self, a: &str, b: &str) -> bool {
        self.0.insert(WalkwayKey::new(a, b))
    }

    /// Reopens the walkway between `a` and `b`. Returns `false` if it wasn't closed.
    pub fn reopen(&mut self, a: &str, b: &str) -> bool {
        self.0.remove(&WalkwayKey::new(a, b))
    }

    /// Checks whether the walkway between `a` and `b` (in any direction) is closed.
    pub fn is_closed(&self, a: &str, b: &str) -> bool {
        self.0.contains(&WalkwayKey::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WalkwayKey> {
        self.0.iter()
    }
}

impl FromIterator<WalkwayKey> for ClosureSet {
    fn from_iter<I: IntoIterator<Item = WalkwayKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<WalkwayKey> for ClosureSet {
    fn extend<I: IntoIterator<Item = WalkwayKey>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Per-query restrictions on which [Walkways](Walkway) may be used.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Only use walkways flagged as accessible.
    pub accessible_only: bool,

    /// Walkways which must not be used.
    pub closed: ClosureSet,
}

impl Constraints {
    /// Checks whether a walkway may be traversed under these constraints.
    pub fn allows(&self, walkway: &Walkway) -> bool {
        if self.accessible_only && !walkway.accessible {
            return false;
        }

        !self.closed.is_closed(&walkway.from, &walkway.to)
    }
}
