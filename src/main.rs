use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use campusnav::{self, CampusGraph, Constraints, NavigationSession, PositionUpdate, WalkwayKey};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct GraphLoadError(PathBuf, #[source] campusnav::LoadError);

#[derive(Parser)]
struct Cli {
    /// The path to the campus JSON file
    campus_file: PathBuf,

    /// Latitude of the start point
    start_lat: f64,

    /// Longitude of the start point
    start_lon: f64,

    /// Id of the destination location
    destination: String,

    /// Only use accessible walkways
    #[arg(long)]
    accessible: bool,

    /// Treat a walkway as closed, e.g. --close ENG-GYM (may be repeated)
    #[arg(long = "close", value_name = "FROM-TO")]
    closed: Vec<WalkwayKey>,

    /// Walk along the route with a navigation session, logging every step
    #[arg(long)]
    simulate: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let g = load_graph(&cli.campus_file)?;
    let origin = campusnav::Coordinate::new(cli.start_lat, cli.start_lon);
    let constraints = Constraints {
        accessible_only: cli.accessible,
        closed: cli.closed.into_iter().collect(),
    };

    let path = campusnav::plan(&g, origin, &cli.destination, &constraints)?;

    if cli.simulate {
        simulate(&g, origin, &cli.destination, constraints)?;
    }

    let coordinates: Vec<[f64; 2]> = path.points.iter().map(|p| [p.lon, p.lat]).collect();
    let mut features = vec![serde_json::json!({
        "type": "Feature",
        "properties": {
            "nodes": path.nodes,
            "distance": path.distance,
            "duration": path.duration,
        },
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
    })];

    features.extend(path.instructions.iter().map(|instruction| {
        serde_json::json!({
            "type": "Feature",
            "properties": instruction,
            "geometry": {
                "type": "Point",
                "coordinates": [instruction.coordinate.lon, instruction.coordinate.lat],
            },
        })
    }));

    let collection = serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    });
    println!("{}", serde_json::to_string_pretty(&collection)?);

    Ok(())
}

/// Steps through the planned path points one by one, as a position source would.
fn simulate(
    g: &CampusGraph,
    origin: campusnav::Coordinate,
    destination: &str,
    constraints: Constraints,
) -> Result<(), Box<dyn Error>> {
    let mut session = NavigationSession::new(g, origin);
    session.set_accessible_only(constraints.accessible_only)?;
    session.set_closures(constraints.closed)?;

    let path = session.select_destination(destination)?.clone();
    session.start_navigating()?;

    for (point, instruction) in path.points.iter().skip(1).zip(path.instructions.iter()) {
        log::info!("{}. {}", instruction.index, instruction.text);
        match session.update_position(*point)? {
            PositionUpdate::Arrived => break,
            PositionUpdate::Rerouted { deviation } => {
                log::warn!("rerouted after deviating {:.0} m", deviation)
            }
            PositionUpdate::OnPath { .. } | PositionUpdate::Recorded => {}
        }
    }

    // Position updates may stop short of the arrival tolerance
    if session.arrive().is_ok() {
        log::debug!("walked all path points");
    }
    log::info!("arrived at {}", destination);
    Ok(())
}

fn load_graph<P: AsRef<Path>>(path: P) -> Result<CampusGraph, GraphLoadError> {
    match campusnav::load_from_file(path.as_ref()) {
        Ok(g) => Ok(g),
        Err(e) => Err(GraphLoadError(PathBuf::from(path.as_ref()), e)),
    }
}
