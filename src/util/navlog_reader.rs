use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::info;
use xmltree::Element;

use crate::error::ProfileError;
use crate::model::plan::Plan;
use crate::model::waypoint::RawFix;

/// Reads a flight plan (OFP) document from disk, decompressing `.gz` files.
pub fn read_plan(file_path: &Path) -> Result<Plan, ProfileError> {
    let file = File::open(file_path).map_err(|e| ProfileError::io(file_path, e))?;
    let is_gzip = file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    let plan = if is_gzip {
        parse_plan(BufReader::new(GzDecoder::new(file)))?
    } else {
        parse_plan(BufReader::new(file))?
    };
    info!(
        "Read {} with {} fixes from {}",
        plan.get_name(),
        plan.get_fixes().len(),
        file_path.display()
    );
    Ok(plan)
}

pub fn parse_plan<R: Read>(reader: R) -> Result<Plan, ProfileError> {
    let doc = Element::parse(reader)?;
    if doc.name != "OFP" {
        return Err(ProfileError::InvalidDocument(format!(
            "expected an OFP document, found <{}>",
            doc.name
        )));
    }

    let mut plan = Plan::new();
    plan.set_star_ident(child_text(&doc, &["general", "star_ident"]));
    plan.set_origin(
        child_text(&doc, &["origin", "icao_code"]),
        child_text(&doc, &["origin", "plan_rwy"]),
    );
    plan.set_destination(
        child_text(&doc, &["destination", "icao_code"]),
        child_text(&doc, &["destination", "plan_rwy"]),
    );

    let navlog = doc
        .get_child("navlog")
        .ok_or_else(|| ProfileError::InvalidDocument("no navlog in document".to_string()))?;
    let fixes: Vec<&Element> = navlog
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|e| e.name == "fix")
        .collect();

    // The last fix is the destination airport itself.
    let route_len = fixes.len().saturating_sub(1);
    for e in &fixes[..route_len] {
        plan.add_fix(RawFix {
            ident: field(e, "ident", "N/A"),
            latitude: field(e, "pos_lat", "0.0"),
            longitude: field(e, "pos_long", "0.0"),
            altitude_ft: field(e, "altitude_feet", "0"),
            true_airspeed_kt: field(e, "true_airspeed", "0"),
            distance_nm: field(e, "distance", "0"),
        });
    }
    Ok(plan)
}

fn child_text(root: &Element, path: &[&str]) -> Option<String> {
    let mut e = root;
    for name in path {
        e = e.get_child(*name)?;
    }
    e.get_text().map(|t| t.trim().to_string())
}

fn field(e: &Element, name: &str, default: &str) -> String {
    match e.get_child(name) {
        Some(child) => child
            .get_text()
            .map(|t| t.trim().to_string())
            .unwrap_or_default(),
        None => default.to_string(),
    }
}
