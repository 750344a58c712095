use log::{debug, info};

use crate::model::constraint::{ConstraintTable, ProcedureConstraints};
use crate::model::waypoint::Waypoint;

// No code, no table or no matching entry all mean "no constraint".
pub fn resolve_constraints<'a>(
    code: Option<&str>,
    table: Option<&'a ConstraintTable>,
) -> Option<&'a ProcedureConstraints> {
    let code = code?;
    let found = table?.get(code);
    match found {
        Some(procedure) => info!(
            "Using {} constraint(s) of {}",
            procedure.get_constraints().len(),
            code
        ),
        None => info!("No STAR constraints found for {}", code),
    }
    found
}

// First correction of the run: test the window on the planned feet, not the
// meters round trip.
pub fn apply_constraints(waypoints: &mut [Waypoint], procedure: &ProcedureConstraints) -> usize {
    let mut changed = 0;
    for wp in waypoints.iter_mut() {
        let Some(constraint) = procedure.find(wp.get_ident()) else {
            continue;
        };
        let altitude_ft = wp.get_orig_altitude_ft();
        let adjusted_ft = constraint.apply(altitude_ft);
        if adjusted_ft != altitude_ft {
            debug!(
                "{}: {:.0}ft -> {:.0}ft by {} constraint at {}",
                wp.get_ident(),
                altitude_ft,
                adjusted_ft,
                procedure.get_ident(),
                constraint.get_name()
            );
            wp.set_altitude_ft(adjusted_ft);
            changed += 1;
        }
    }
    changed
}
