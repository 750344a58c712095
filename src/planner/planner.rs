use std::fmt;

use log::{info, warn};

use crate::model::constraint::ProcedureConstraints;
use crate::model::waypoint::Waypoint;
use crate::preference::*;

use super::descent::{MAX_DESCENT_GRADIENT, limit_descent_rate};
use super::levelling::{find_marker, level_after_descent};
use super::speed::rebase_speeds;
use super::star::apply_constraints;
use super::tod::drop_invalid_tod;

pub const TOD_IDENT: &str = "TOD";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileReport {
    pub constrained: usize,
    pub rate_limited: usize,
    pub levelled: usize,
    pub respeeded: usize,
    pub dropped_tod: usize,
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} constrained, {} rate limited, {} levelled, {} speeds rebased, {} TOD dropped",
            self.constrained, self.rate_limited, self.levelled, self.respeeded, self.dropped_tod
        )
    }
}

pub struct Planner {
    max_descent_gradient: f64,
    tod_ident: String,
}

impl Planner {
    pub fn new() -> Self {
        let pref = crate::preference::manager();

        Self::with_settings(
            pref.get::<f64>(MAX_DESCENT_GRADIENT_PREF)
                .unwrap_or(MAX_DESCENT_GRADIENT),
            &pref
                .get::<String>(TOD_IDENT_PREF)
                .unwrap_or(TOD_IDENT.to_string()),
        )
    }

    pub fn with_settings(max_descent_gradient: f64, tod_ident: &str) -> Self {
        Self {
            max_descent_gradient,
            tod_ident: tod_ident.to_string(),
        }
    }

    pub fn get_max_descent_gradient(&self) -> f64 {
        self.max_descent_gradient
    }

    pub fn get_tod_ident(&self) -> &str {
        &self.tod_ident
    }

    pub fn adjust_profile(
        &self,
        mut waypoints: Vec<Waypoint>,
        procedure: Option<&ProcedureConstraints>,
    ) -> (Vec<Waypoint>, ProfileReport) {
        let mut report = ProfileReport::default();

        if let Some(procedure) = procedure {
            report.constrained = apply_constraints(&mut waypoints, procedure);
            info!(
                "{} waypoint(s) adjusted to {} constraints",
                report.constrained,
                procedure.get_ident()
            );
        }

        let have_constraints = procedure.is_some_and(|p| !p.is_empty());
        if have_constraints {
            report.rate_limited = limit_descent_rate(&mut waypoints, self.max_descent_gradient);
            info!(
                "{} waypoint(s) raised to hold {:.0}ft/nm",
                report.rate_limited, self.max_descent_gradient
            );
        }

        if find_marker(&waypoints, &self.tod_ident).is_none() {
            warn!("No {} waypoint in route; descent is not levelled", self.tod_ident);
        }
        report.levelled = level_after_descent(&mut waypoints, &self.tod_ident);

        if have_constraints {
            report.respeeded = rebase_speeds(&mut waypoints, &self.tod_ident);
            info!("{} waypoint speed(s) rebased", report.respeeded);
        }

        report.dropped_tod = drop_invalid_tod(&mut waypoints, &self.tod_ident);

        (waypoints, report)
    }
}
