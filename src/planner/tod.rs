use log::info;

use crate::model::waypoint::Waypoint;

const ALTITUDE_TOLERANCE_FT: f64 = 1e-6;

pub fn drop_invalid_tod(waypoints: &mut Vec<Waypoint>, tod_ident: &str) -> usize {
    let before = waypoints.len();
    waypoints.retain(|wp| {
        let lowered = wp.is_marker(tod_ident)
            && wp.get_altitude_ft() < wp.get_orig_altitude_ft() - ALTITUDE_TOLERANCE_FT;
        if lowered {
            info!(
                "Dropping {}: corrected to {:.0}ft, planned {:.0}ft",
                wp.get_ident(),
                wp.get_altitude_ft(),
                wp.get_orig_altitude_ft()
            );
        }
        !lowered
    });
    before - waypoints.len()
}
