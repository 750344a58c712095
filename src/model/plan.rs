use super::waypoint::RawFix;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    origin: Option<String>,
    origin_runway: Option<String>,
    destination: Option<String>,
    destination_runway: Option<String>,
    star_ident: Option<String>,
    fixes: Vec<RawFix>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn set_origin(&mut self, icao: Option<String>, runway: Option<String>) {
        self.origin = icao;
        self.origin_runway = runway;
    }

    pub fn get_origin_runway(&self) -> Option<&str> {
        self.origin_runway.as_deref()
    }

    pub fn get_destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn set_destination(&mut self, icao: Option<String>, runway: Option<String>) {
        self.destination = icao;
        self.destination_runway = runway;
    }

    pub fn get_destination_runway(&self) -> Option<&str> {
        self.destination_runway.as_deref()
    }

    pub fn get_star_ident(&self) -> Option<&str> {
        self.star_ident.as_deref()
    }

    pub fn set_star_ident(&mut self, star_ident: Option<String>) {
        self.star_ident = star_ident.filter(|s| !s.trim().is_empty());
    }

    pub fn get_fixes(&self) -> &[RawFix] {
        &self.fixes
    }

    pub fn add_fix(&mut self, fix: RawFix) {
        self.fixes.push(fix);
    }

    pub fn get_name(&self) -> String {
        format!(
            "{}-{}",
            self.origin.as_deref().unwrap_or("????"),
            self.destination.as_deref().unwrap_or("????")
        )
    }
}
