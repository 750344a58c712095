use std::fs;
use std::path::Path;

use log::info;
use yaml_rust::yaml::Hash;
use yaml_rust::{Yaml, YamlLoader};

use crate::error::ProfileError;
use crate::model::constraint::{Constraint, ConstraintTable, ProcedureConstraints};

const KEY_STAR_IDENT: &str = "star-ident";
const KEY_DATA: &str = "data";
const KEY_NAME: &str = "name";
const KEY_UPPER: &str = "upper";
const KEY_LOWER: &str = "lower";

/// Loads a STAR constraint table. `.yaml` and `.yml` files are read as
/// YAML, anything else as JSON.
pub fn read_constraint_table(path: &Path) -> Result<ConstraintTable, ProfileError> {
    let contents = fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let table = if is_yaml {
        parse_yaml_table(&contents)?
    } else {
        parse_json_table(&contents)?
    };
    info!(
        "Loaded constraints for {} STAR(s) from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

pub fn parse_json_table(contents: &str) -> Result<ConstraintTable, ProfileError> {
    let procedures: Vec<ProcedureConstraints> = serde_json::from_str(contents)
        .map_err(|e| ProfileError::ConstraintTable(e.to_string()))?;
    Ok(ConstraintTable::new(procedures))
}

pub fn parse_yaml_table(contents: &str) -> Result<ConstraintTable, ProfileError> {
    let docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ProfileError::ConstraintTable(e.to_string()))?;

    let mut procedures = Vec::new();
    for doc in docs {
        let Some(all) = doc.as_vec() else {
            return Err(ProfileError::ConstraintTable(
                "expected a list of STARs".to_string(),
            ));
        };
        for each in all.iter().filter_map(|y| y.as_hash()) {
            let constraints = match each.get(&key(KEY_DATA)).and_then(|d| d.as_vec()) {
                Some(data) => data
                    .iter()
                    .filter_map(|y| y.as_hash())
                    .map(|map| {
                        Constraint::new(
                            &get_string(map, KEY_NAME),
                            get_f64(map, KEY_UPPER),
                            get_f64(map, KEY_LOWER),
                        )
                    })
                    .collect(),
                None => Vec::new(),
            };
            procedures.push(ProcedureConstraints::new(
                &get_string(each, KEY_STAR_IDENT),
                constraints,
            ));
        }
    }
    Ok(ConstraintTable::new(procedures))
}

fn key(name: &str) -> Yaml {
    Yaml::String(name.to_string())
}

fn get_f64(map: &Hash, name: &str) -> Option<f64> {
    match map.get(&key(name)) {
        Some(Yaml::Integer(i)) => Some(*i as f64),
        Some(y) => y.as_f64(),
        None => None,
    }
}

fn get_string(map: &Hash, name: &str) -> String {
    match map.get(&key(name)) {
        Some(Yaml::String(s)) => s.clone(),
        Some(Yaml::Integer(i)) => i.to_string(),
        _ => String::new(),
    }
}
