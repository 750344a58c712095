use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Constraint {
    name: String,
    #[serde(default)]
    upper: Option<f64>,
    #[serde(default)]
    lower: Option<f64>,
}

impl Constraint {
    pub fn new(name: &str, upper: Option<f64>, lower: Option<f64>) -> Self {
        Constraint {
            name: name.to_string(),
            upper,
            lower,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_upper(&self) -> Option<f64> {
        self.upper
    }

    pub fn get_lower(&self) -> Option<f64> {
        self.lower
    }

    pub fn apply(&self, altitude_ft: f64) -> f64 {
        match (self.upper, self.lower) {
            (Some(upper), None) if altitude_ft > upper => upper,
            (None, Some(lower)) if altitude_ft < lower => lower,
            (Some(upper), Some(lower)) if altitude_ft < lower || altitude_ft > upper => {
                (upper + lower) / 2.0
            }
            _ => altitude_ft,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcedureConstraints {
    #[serde(rename = "star_ident")]
    ident: String,
    #[serde(rename = "data", default)]
    constraints: Vec<Constraint>,
}

impl ProcedureConstraints {
    pub fn new(ident: &str, constraints: Vec<Constraint>) -> Self {
        ProcedureConstraints {
            ident: ident.to_string(),
            constraints,
        }
    }

    pub fn get_ident(&self) -> &str {
        &self.ident
    }

    pub fn get_constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    // later duplicates are never consulted
    pub fn find(&self, fix: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == fix)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintTable {
    procedures: Vec<ProcedureConstraints>,
}

impl ConstraintTable {
    pub fn new(procedures: Vec<ProcedureConstraints>) -> Self {
        ConstraintTable { procedures }
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&ProcedureConstraints> {
        self.procedures.iter().find(|p| p.ident == code)
    }
}
