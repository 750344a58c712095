use log::debug;

use crate::model::waypoint::Waypoint;

pub fn find_marker(waypoints: &[Waypoint], ident: &str) -> Option<usize> {
    waypoints.iter().position(|wp| wp.is_marker(ident))
}

// Single forward sweep: a levelled waypoint is the reference for the next.
pub fn level_after_descent(waypoints: &mut [Waypoint], tod_ident: &str) -> usize {
    let Some(tod_index) = find_marker(waypoints, tod_ident) else {
        return 0;
    };

    let mut changed = 0;
    for i in tod_index..waypoints.len().saturating_sub(1) {
        let prev_alt = waypoints[i].get_altitude_m();
        let next = &mut waypoints[i + 1];
        if prev_alt < next.get_altitude_m() {
            debug!(
                "{}: levelled at {:.0}m after top of descent",
                next.get_ident(),
                prev_alt
            );
            next.set_altitude_m(prev_alt);
            changed += 1;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::test_utils::tests::{assert_close, make_waypoint};

    use super::{find_marker, level_after_descent};

    #[test]
    fn test_no_tod_is_noop() {
        let mut wps = vec![
            make_waypoint("A", 5000.0, 200.0, 0.0),
            make_waypoint("B", 9000.0, 200.0, 10.0),
        ];
        assert_eq!(level_after_descent(&mut wps, "TOD"), 0);
        assert_close(wps[1].get_altitude_ft(), 9000.0);
    }

    #[test]
    fn test_climb_before_tod_kept() {
        let mut wps = vec![
            make_waypoint("A", 5000.0, 200.0, 0.0),
            make_waypoint("B", 9000.0, 200.0, 10.0),
            make_waypoint("TOD", 9000.0, 250.0, 10.0),
            make_waypoint("C", 6000.0, 220.0, 10.0),
        ];
        assert_eq!(level_after_descent(&mut wps, "TOD"), 0);
        assert_close(wps[1].get_altitude_ft(), 9000.0);
    }

    #[test]
    fn test_cascade() {
        let mut wps = vec![
            make_waypoint("TOD", 8000.0, 250.0, 0.0),
            make_waypoint("A", 6000.0, 230.0, 10.0),
            make_waypoint("B", 7000.0, 230.0, 10.0),
            make_waypoint("C", 7500.0, 230.0, 10.0),
            make_waypoint("D", 3000.0, 200.0, 10.0),
        ];
        assert_eq!(level_after_descent(&mut wps, "TOD"), 2);
        assert_close(wps[2].get_altitude_ft(), 6000.0);
        assert_close(wps[3].get_altitude_ft(), 6000.0);
        assert_close(wps[4].get_altitude_ft(), 3000.0);
    }

    #[test]
    fn test_tod_last() {
        let mut wps = vec![
            make_waypoint("A", 5000.0, 200.0, 0.0),
            make_waypoint("TOD", 9000.0, 200.0, 10.0),
        ];
        assert_eq!(find_marker(&wps, "TOD"), Some(1));
        assert_eq!(level_after_descent(&mut wps, "TOD"), 0);
    }

    proptest! {
        #[test]
        fn never_climbs_after_tod(
            alts in prop::collection::vec(0.0f64..40000.0, 1..30),
            tod in 0usize..30,
        ) {
            let tod = tod % alts.len();
            let mut wps: Vec<_> = alts
                .iter()
                .enumerate()
                .map(|(i, alt)| {
                    let ident = if i == tod { "TOD".to_string() } else { format!("WP{}", i) };
                    make_waypoint(&ident, *alt, 250.0, 10.0)
                })
                .collect();
            level_after_descent(&mut wps, "TOD");
            for pair in wps[tod..].windows(2) {
                prop_assert!(pair[1].get_altitude_m() <= pair[0].get_altitude_m());
            }
        }
    }
}
