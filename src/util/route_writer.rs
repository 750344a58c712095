use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ProfileError;
use crate::model::plan::Plan;
use crate::model::waypoint::Waypoint;
use crate::util::units::mps_to_knots;

#[derive(Debug, Serialize)]
struct RouteDocument<'a> {
    origin: Option<&'a str>,
    origin_runway: Option<&'a str>,
    destination: Option<&'a str>,
    destination_runway: Option<&'a str>,
    star: Option<&'a str>,
    waypoints: Vec<RoutePoint<'a>>,
}

#[derive(Debug, Serialize)]
struct RoutePoint<'a> {
    ident: &'a str,
    latitude: &'a str,
    longitude: &'a str,
    altitude_m: f64,
    altitude_ft: f64,
    tas_mps: f64,
    tas_kt: f64,
}

impl<'a> From<&'a Waypoint> for RoutePoint<'a> {
    fn from(wp: &'a Waypoint) -> Self {
        RoutePoint {
            ident: wp.get_ident(),
            latitude: wp.get_lat(),
            longitude: wp.get_long(),
            altitude_m: wp.get_altitude_m(),
            altitude_ft: wp.get_altitude_ft(),
            tas_mps: wp.get_tas(),
            tas_kt: mps_to_knots(wp.get_tas()),
        }
    }
}

/// Writes the corrected route as JSON. `star` is the procedure code actually
/// used, which may have come from the operator rather than the document.
pub fn write_route<W: Write>(
    plan: &Plan,
    star: Option<&str>,
    waypoints: &[Waypoint],
    out: W,
) -> Result<(), ProfileError> {
    let doc = RouteDocument {
        origin: plan.get_origin(),
        origin_runway: plan.get_origin_runway(),
        destination: plan.get_destination(),
        destination_runway: plan.get_destination_runway(),
        star,
        waypoints: waypoints.iter().map(RoutePoint::from).collect(),
    };
    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, &doc).map_err(|e| ProfileError::Output(e.to_string()))?;
    writeln!(out).map_err(|e| ProfileError::Output(e.to_string()))?;
    out.flush().map_err(|e| ProfileError::Output(e.to_string()))
}

pub fn write_route_file(
    plan: &Plan,
    star: Option<&str>,
    waypoints: &[Waypoint],
    file_path: &Path,
) -> Result<(), ProfileError> {
    let file = File::create(file_path).map_err(|e| ProfileError::io(file_path, e))?;
    write_route(plan, star, waypoints, file)
}
