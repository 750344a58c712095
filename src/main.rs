use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use crate::error::ProfileError;
use crate::model::constraint::ConstraintTable;
use crate::model::waypoint::{Waypoint, build_waypoints};
use crate::planner::planner::Planner;
use crate::planner::star::resolve_constraints;
use crate::preference::{MAX_DESCENT_GRADIENT_PREF, STAR_DATA_PATH, TOD_IDENT_PREF, UNITS};
use crate::util::Logger;
use crate::util::units::{AltitudeFormat, SpeedFormat};
use crate::util::{navlog_reader, prompt, route_writer, star_reader};

mod error;
mod model;
mod planner;
mod preference;
mod util;

/// Corrects the descent profile and speeds of a flight plan against its
/// arrival procedure's altitude constraints.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flight plan (OFP) XML document, optionally gzipped
    plan: PathBuf,

    /// STAR constraint table (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long)]
    stars: Option<PathBuf>,

    /// STAR code to use when the flight plan does not name one
    #[arg(long)]
    star: Option<String>,

    /// Never ask for a missing STAR code
    #[arg(long)]
    no_prompt: bool,

    /// Steepest allowed descent, in feet per nautical mile
    #[arg(long)]
    gradient: Option<f64>,

    /// Ident of the top of descent waypoint
    #[arg(long)]
    tod_ident: Option<String>,

    /// Write the corrected route here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Store --stars, --gradient and --tod-ident as the new defaults
    #[arg(long)]
    remember: bool,

    /// Log progress to the terminal
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = Logger::new(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ProfileError> {
    let pref = preference::manager();
    if args.remember {
        remember_settings(args);
    }

    let plan = navlog_reader::read_plan(&args.plan)?;

    let star = match plan.get_star_ident() {
        Some(code) => Some(code.to_string()),
        None => args.star.clone().or_else(|| ask_for_star(args.no_prompt)),
    };

    let stars_path = args
        .stars
        .clone()
        .or_else(|| pref.get::<String>(STAR_DATA_PATH).map(PathBuf::from));
    let table = stars_path.as_deref().and_then(load_table);

    let procedure = resolve_constraints(star.as_deref(), table.as_ref());
    if procedure.is_none() {
        warn!("No STAR data available; altitudes are left as planned");
    }

    let defaults = Planner::new();
    let planner = Planner::with_settings(
        args.gradient.unwrap_or(defaults.get_max_descent_gradient()),
        args.tod_ident.as_deref().unwrap_or(defaults.get_tod_ident()),
    );

    let waypoints = build_waypoints(plan.get_fixes())?;
    let (waypoints, report) = planner.adjust_profile(waypoints, procedure);
    log_profile(&waypoints);
    info!("{}: {}", plan.get_name(), report);

    match &args.output {
        Some(path) => {
            route_writer::write_route_file(&plan, star.as_deref(), &waypoints, path)?;
            eprintln!("{} written to {} ({})", plan.get_name(), path.display(), report);
        }
        None => route_writer::write_route(&plan, star.as_deref(), &waypoints, io::stdout().lock())?,
    }
    Ok(())
}

fn remember_settings(args: &Args) {
    let pref = preference::manager();
    if let Some(stars) = &args.stars {
        pref.put(STAR_DATA_PATH, stars.display());
    }
    if let Some(gradient) = args.gradient {
        pref.put(MAX_DESCENT_GRADIENT_PREF, gradient);
    }
    if let Some(tod_ident) = &args.tod_ident {
        pref.put(TOD_IDENT_PREF, tod_ident);
    }
}

fn ask_for_star(no_prompt: bool) -> Option<String> {
    if no_prompt || !io::stdin().is_terminal() {
        return None;
    }
    match prompt::ask_star_ident(&mut io::stdin().lock(), &mut io::stderr()) {
        Ok(star) => star,
        Err(e) => {
            warn!("Unable to read STAR code: {}", e);
            None
        }
    }
}

fn load_table(path: &Path) -> Option<ConstraintTable> {
    match star_reader::read_constraint_table(path) {
        Ok(table) if table.is_empty() => {
            warn!("STAR constraint table {} is empty", path.display());
            None
        }
        Ok(table) => Some(table),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn log_profile(waypoints: &[Waypoint]) {
    let units = preference::manager()
        .get::<String>(UNITS)
        .unwrap_or("Nm".to_string());
    let speed_format = SpeedFormat::new(&units);
    for wp in waypoints {
        info!(
            "{:<8} {:>8} {:>8}",
            wp.get_ident(),
            AltitudeFormat::format(wp.get_altitude_m()),
            speed_format.format(wp.get_tas())
        );
    }
}
