use log::{debug, info};

use crate::model::waypoint::Waypoint;

use super::levelling::find_marker;

const SPEED_TOLERANCE: f64 = 1e-6;

/// Original altitude/speed pairs of the descent, highest altitude first.
/// Speeds are in meters per second.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedCurve {
    points: Vec<(f64, f64)>,
}

impl SpeedCurve {
    pub fn new(mut points: Vec<(f64, f64)>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        // Stable, so equal altitudes keep their route order.
        points.sort_by(|a, b| b.0.total_cmp(&a.0));
        Some(SpeedCurve { points })
    }

    pub fn from_descent(descent: &[Waypoint]) -> Option<Self> {
        Self::new(
            descent
                .iter()
                .map(|wp| (wp.get_orig_altitude_ft(), wp.get_orig_tas()))
                .collect(),
        )
    }

    pub fn speed_at(&self, altitude_ft: f64) -> Option<f64> {
        let (top_alt, top_tas) = self.points[0];
        let (bottom_alt, bottom_tas) = self.points[self.points.len() - 1];
        if altitude_ft >= top_alt {
            return Some(top_tas);
        }
        if altitude_ft <= bottom_alt {
            return Some(bottom_tas);
        }
        self.points.windows(2).find_map(|pair| {
            let (alt_high, tas_high) = pair[0];
            let (alt_low, tas_low) = pair[1];
            if alt_low <= altitude_ft && altitude_ft <= alt_high {
                let fraction = (altitude_ft - alt_low) / (alt_high - alt_low);
                Some(tas_low + (tas_high - tas_low) * fraction)
            } else {
                None
            }
        })
    }
}

pub fn rebase_speeds(waypoints: &mut [Waypoint], tod_ident: &str) -> usize {
    let Some(tod_index) = find_marker(waypoints, tod_ident) else {
        return 0;
    };
    let descent = &mut waypoints[tod_index..];
    let Some(curve) = SpeedCurve::from_descent(descent) else {
        info!("Too few waypoints after top of descent to rebase speeds");
        return 0;
    };

    let mut changed = 0;
    for wp in descent.iter_mut() {
        let Some(tas) = curve.speed_at(wp.get_altitude_ft()) else {
            continue;
        };
        if (tas - wp.get_tas()).abs() > SPEED_TOLERANCE {
            debug!(
                "{}: speed {:.1}m/s -> {:.1}m/s",
                wp.get_ident(),
                wp.get_tas(),
                tas
            );
            changed += 1;
        }
        wp.set_tas(tas);
    }
    changed
}
