pub const FEET_PER_METER: f64 = 3.28084;
pub const MPS_PER_KNOT: f64 = 0.5139534884;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn knots_to_mps(knots: f64) -> f64 {
    knots * MPS_PER_KNOT
}

pub fn mps_to_knots(mps: f64) -> f64 {
    mps / MPS_PER_KNOT
}

/// Formats a speed held in meters per second in the user's chosen units.
pub struct SpeedFormat {
    conversion_factor: f64,
    speed_unit: &'static str,
}

impl SpeedFormat {
    pub fn new(unit: &str) -> Self {
        let (conversion_factor, speed_unit) = match unit {
            "Mi" => (6076.0 / 5280.0, "Mph"),
            "Km" => (1.852, "Kph"),
            _ => (1.0, "Kts"),
        };
        SpeedFormat {
            conversion_factor,
            speed_unit,
        }
    }

    pub fn format(&self, speed_mps: f64) -> String {
        let converted_speed = mps_to_knots(speed_mps) * self.conversion_factor;
        format!("{:.0}{}", converted_speed, self.speed_unit)
    }
}

pub struct AltitudeFormat;

impl AltitudeFormat {
    pub fn format(altitude_m: f64) -> String {
        format!("{:.0}ft", meters_to_feet(altitude_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_feet() {
        let ft = 12345.0;
        assert!((meters_to_feet(feet_to_meters(ft)) - ft).abs() < 1e-9);
        assert!((feet_to_meters(3.28084) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_knots() {
        assert!((knots_to_mps(250.0) - 128.4883721).abs() < 1e-6);
        assert!((mps_to_knots(knots_to_mps(180.0)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_fmt_speed() {
        let mps = knots_to_mps(250.0);
        assert_eq!(SpeedFormat::new("Nm").format(mps), "250Kts");
        assert_eq!(SpeedFormat::new("Mi").format(mps), "288Mph");
        assert_eq!(SpeedFormat::new("Km").format(mps), "463Kph");
    }

    #[test]
    fn test_fmt_altitude() {
        assert_eq!(AltitudeFormat::format(feet_to_meters(8000.0)), "8000ft");
    }
}
