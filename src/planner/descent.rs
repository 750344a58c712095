use log::debug;

use crate::model::waypoint::Waypoint;

pub const MAX_DESCENT_GRADIENT: f64 = 350.0;

/// Walks the route from the end, limiting each leg's drop to
/// `gradient_ft_per_nm` times the leg length. Every waypoint is finalised
/// (locked) once, against a successor that is already locked.
/// Returns the number of waypoints raised.
pub fn limit_descent_rate(waypoints: &mut [Waypoint], gradient_ft_per_nm: f64) -> usize {
    let Some(last) = waypoints.last_mut() else {
        return 0;
    };
    last.lock();

    let mut changed = 0;
    for i in (0..waypoints.len() - 1).rev() {
        let (head, tail) = waypoints.split_at_mut(i + 1);
        let wp = &mut head[i];
        let next = &tail[0];
        if wp.is_locked() {
            continue;
        }

        let allowed_drop = next.get_distance() * gradient_ft_per_nm;
        let alt_ft = wp.get_altitude_ft();
        let next_alt_ft = next.get_altitude_ft();
        if alt_ft - next_alt_ft > allowed_drop {
            let new_alt_ft = next_alt_ft + allowed_drop;
            debug!(
                "{}: {:.0}ft -> {:.0}ft, {:.1}nm to {} allows {:.0}ft",
                wp.get_ident(),
                alt_ft,
                new_alt_ft,
                next.get_distance(),
                next.get_ident(),
                allowed_drop
            );
            wp.set_altitude_ft(new_alt_ft);
            changed += 1;
        }
        wp.lock();
    }
    changed
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::test_utils::tests::{altitudes_ft, assert_close, make_waypoint};

    use super::{MAX_DESCENT_GRADIENT, limit_descent_rate};

    #[test]
    fn test_empty_route() {
        assert_eq!(limit_descent_rate(&mut [], MAX_DESCENT_GRADIENT), 0);
    }

    #[test]
    fn test_single_waypoint_locked() {
        let mut wps = vec![make_waypoint("LAST", 2000.0, 180.0, 8.0)];
        assert_eq!(limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT), 0);
        assert!(wps[0].is_locked());
        assert_close(wps[0].get_altitude_ft(), 2000.0);
    }

    #[test]
    fn test_end_to_end_fixture() {
        // W1 -> LAST drops 4000ft over 8nm, 2800ft allowed.
        // TOD -> W1 then drops 5200ft over 10nm, 3500ft allowed.
        let mut wps = vec![
            make_waypoint("TOD", 10000.0, 250.0, 0.0),
            make_waypoint("W1", 6000.0, 220.0, 10.0),
            make_waypoint("LAST", 2000.0, 180.0, 8.0),
        ];
        assert_eq!(limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT), 2);
        assert_close(wps[2].get_altitude_ft(), 2000.0);
        assert_close(wps[1].get_altitude_ft(), 2000.0 + 8.0 * 350.0);
        assert_close(wps[0].get_altitude_ft(), 4800.0 + 10.0 * 350.0);
        assert!(wps.iter().all(|wp| wp.is_locked()));
    }

    #[test]
    fn test_gentle_descent_untouched() {
        let mut wps = vec![
            make_waypoint("TOD", 10000.0, 250.0, 0.0),
            make_waypoint("W1", 7000.0, 220.0, 10.0),
            make_waypoint("LAST", 5000.0, 180.0, 8.0),
        ];
        assert_eq!(limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT), 0);
        let expected = [10000.0, 7000.0, 5000.0];
        for (actual, expected) in altitudes_ft(&wps).into_iter().zip(expected) {
            assert_close(actual, expected);
        }
    }

    #[test]
    fn test_climb_is_not_limited() {
        let mut wps = vec![
            make_waypoint("A", 3000.0, 200.0, 0.0),
            make_waypoint("B", 9000.0, 250.0, 1.0),
        ];
        assert_eq!(limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT), 0);
        assert_close(wps[0].get_altitude_ft(), 3000.0);
    }

    #[test]
    fn test_zero_distance_leg() {
        let mut wps = vec![
            make_waypoint("A", 5000.0, 200.0, 0.0),
            make_waypoint("B", 4000.0, 200.0, 0.0),
        ];
        assert_eq!(limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT), 1);
        assert_close(wps[0].get_altitude_ft(), 4000.0);
    }

    proptest! {
        #[test]
        fn no_leg_exceeds_gradient(
            legs in prop::collection::vec((0.0f64..40000.0, 0.0f64..60.0), 1..40)
        ) {
            let mut wps: Vec<_> = legs
                .iter()
                .enumerate()
                .map(|(i, (alt, dist))| make_waypoint(&format!("WP{}", i), *alt, 250.0, *dist))
                .collect();
            limit_descent_rate(&mut wps, MAX_DESCENT_GRADIENT);
            for pair in wps.windows(2) {
                let drop = pair[0].get_altitude_ft() - pair[1].get_altitude_ft();
                prop_assert!(drop <= pair[1].get_distance() * MAX_DESCENT_GRADIENT + 1e-6);
            }
            prop_assert!(wps.iter().all(|wp| wp.is_locked()));
        }
    }
}
