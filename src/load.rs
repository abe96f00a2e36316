// (c) Copyright 2026 The campusnav Authors
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::{CampusGraph, Coordinate, LoadError, Location, Walkway};

/// Raw campus data, as provided in JSON files:
///
/// ```json
/// {
///   "locations": [{"id": "ENG", "name": "Engineering Hall", "lat": 42.3598, "lng": -83.0675, "tags": ["ECE"]}],
///   "walkways": [{"fromId": "ENG", "toId": "LIB", "weightMeters": 180, "accessible": true}]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampusData {
    pub locations: Vec<LocationRecord>,

    #[serde(default)]
    pub walkways: Vec<WalkwayRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
    #[serde(default, alias = "departments")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalkwayRecord {
    #[serde(rename = "fromId")]
    pub from_id: String,
    #[serde(rename = "toId")]
    pub to_id: String,
    #[serde(rename = "weightMeters")]
    pub weight_meters: f64,
    pub accessible: bool,
}

impl CampusData {
    /// Validates the data and converts it into a [CampusGraph].
    pub fn into_graph(self) -> Result<CampusGraph, crate::GraphError> {
        let locations = self
            .locations
            .into_iter()
            .map(|r| Location {
                id: r.id,
                name: r.name,
                position: Coordinate::new(r.lat, r.lng),
                tags: r.tags,
            })
            .collect();

        let walkways = self
            .walkways
            .into_iter()
            .map(|r| Walkway {
                from: r.from_id,
                to: r.to_id,
                weight: r.weight_meters,
                accessible: r.accessible,
            })
            .collect();

        CampusGraph::new(locations, walkways)
    }
}

/// Parse campus JSON data from a reader into a [CampusGraph].
///
/// The provided stream will be automatically wrapped in a buffered reader.
pub fn load_from_io<R: io::Read>(reader: R) -> Result<CampusGraph, LoadError> {
    let data: CampusData = serde_json::from_reader(io::BufReader::new(reader))?;
    Ok(data.into_graph()?)
}

/// Parse campus JSON data from a buffer into a [CampusGraph].
pub fn load_from_buffer(data: &[u8]) -> Result<CampusGraph, LoadError> {
    let data: CampusData = serde_json::from_slice(data)?;
    Ok(data.into_graph()?)
}

/// Parse campus JSON data from a file at the provided path into a [CampusGraph].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CampusGraph, LoadError> {
    let f = File::open(path)?;
    load_from_io(f)
}
