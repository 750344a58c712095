use crate::error::ProfileError;
use crate::util::units::{feet_to_meters, knots_to_mps, meters_to_feet};

#[derive(Debug, Clone, PartialEq)]
pub struct RawFix {
    pub ident: String,
    pub latitude: String,
    pub longitude: String,
    pub altitude_ft: String,
    pub true_airspeed_kt: String,
    pub distance_nm: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    ident: String,
    latitude: String,
    longitude: String,
    orig_altitude_ft: f64,
    altitude_m: f64,
    orig_tas: f64,
    tas: f64,
    distance: f64,
    locked: bool,
}

impl Waypoint {
    pub fn new(
        ident: &str,
        latitude: &str,
        longitude: &str,
        altitude_ft: f64,
        true_airspeed_kt: f64,
        distance_nm: f64,
    ) -> Self {
        let tas = knots_to_mps(true_airspeed_kt);
        Waypoint {
            ident: ident.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            orig_altitude_ft: altitude_ft,
            altitude_m: feet_to_meters(altitude_ft),
            orig_tas: tas,
            tas,
            distance: distance_nm,
            locked: false,
        }
    }

    pub fn get_ident(&self) -> &str {
        &self.ident
    }

    pub fn get_lat(&self) -> &str {
        &self.latitude
    }

    pub fn get_long(&self) -> &str {
        &self.longitude
    }

    pub fn get_orig_altitude_ft(&self) -> f64 {
        self.orig_altitude_ft
    }

    pub fn get_altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn set_altitude_m(&mut self, altitude_m: f64) {
        self.altitude_m = altitude_m;
    }

    pub fn get_altitude_ft(&self) -> f64 {
        meters_to_feet(self.altitude_m)
    }

    pub fn set_altitude_ft(&mut self, altitude_ft: f64) {
        self.altitude_m = feet_to_meters(altitude_ft);
    }

    pub fn get_orig_tas(&self) -> f64 {
        self.orig_tas
    }

    // m/s
    pub fn get_tas(&self) -> f64 {
        self.tas
    }

    pub fn set_tas(&mut self, tas: f64) {
        self.tas = tas;
    }

    // nm from the previous waypoint
    pub fn get_distance(&self) -> f64 {
        self.distance
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_marker(&self, ident: &str) -> bool {
        self.ident == ident
    }
}

impl TryFrom<&RawFix> for Waypoint {
    type Error = ProfileError;

    fn try_from(raw: &RawFix) -> Result<Self, Self::Error> {
        let number = |field: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ProfileError::MalformedField {
                    ident: raw.ident.clone(),
                    field,
                    value: value.to_string(),
                })
        };

        Ok(Waypoint::new(
            &raw.ident,
            &raw.latitude,
            &raw.longitude,
            number("altitude_feet", &raw.altitude_ft)?,
            number("true_airspeed", &raw.true_airspeed_kt)?,
            number("distance", &raw.distance_nm)?,
        ))
    }
}

pub fn build_waypoints(fixes: &[RawFix]) -> Result<Vec<Waypoint>, ProfileError> {
    fixes.iter().map(Waypoint::try_from).collect()
}

#[cfg(test)]
mod tests {
    use crate::error::ProfileError;
    use crate::model::test_utils::tests::{assert_close, make_raw_fix};

    use super::{Waypoint, build_waypoints};

    #[test]
    fn test_units_on_construction() {
        let wp = Waypoint::new("TOD", "35.1", "139.2", 10000.0, 250.0, 12.0);
        assert_close(wp.get_altitude_m(), 10000.0 / 3.28084);
        assert_close(wp.get_altitude_ft(), 10000.0);
        assert_close(wp.get_tas(), 250.0 * 0.5139534884);
        assert_eq!(wp.get_orig_altitude_ft(), 10000.0);
        assert_eq!(wp.get_tas(), wp.get_orig_tas());
        assert_eq!(wp.get_distance(), 12.0);
        assert!(!wp.is_locked());
    }

    #[test]
    fn test_originals_survive_corrections() {
        let mut wp = Waypoint::new("W1", "0.0", "0.0", 6000.0, 220.0, 10.0);
        wp.set_altitude_ft(5500.0);
        wp.set_tas(100.0);
        wp.lock();
        assert_eq!(wp.get_orig_altitude_ft(), 6000.0);
        assert_close(wp.get_orig_tas(), 220.0 * 0.5139534884);
        assert_close(wp.get_altitude_ft(), 5500.0);
        assert!(wp.is_locked());
    }

    #[test]
    fn test_from_raw() {
        let raw = make_raw_fix("SPOOK", "8000", "240", "15.5");
        let wp = Waypoint::try_from(&raw).unwrap();
        assert_eq!(wp.get_ident(), "SPOOK");
        assert_close(wp.get_altitude_ft(), 8000.0);
        assert_eq!(wp.get_distance(), 15.5);
    }

    #[test]
    fn test_position_kept_as_text() {
        let mut raw = make_raw_fix("SPOOK", "8000", "240", "15.5");
        raw.latitude = "35.50".to_string();
        raw.longitude = String::new();
        let wp = Waypoint::try_from(&raw).unwrap();
        assert_eq!(wp.get_lat(), "35.50");
        assert_eq!(wp.get_long(), "");

        raw.longitude = "E139".to_string();
        let wps = build_waypoints(&[raw]).unwrap();
        assert_eq!(wps[0].get_long(), "E139");
    }

    #[test]
    fn test_malformed_field() {
        let fixes = vec![
            make_raw_fix("GOOD", "8000", "240", "10"),
            make_raw_fix("BAD", "FL080", "240", "10"),
        ];
        match build_waypoints(&fixes) {
            Err(ProfileError::MalformedField { ident, field, value }) => {
                assert_eq!(ident, "BAD");
                assert_eq!(field, "altitude_feet");
                assert_eq!(value, "FL080");
            }
            other => panic!("Expected a malformed field error, got {:?}", other),
        }
    }
}
