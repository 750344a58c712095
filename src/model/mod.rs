pub mod constraint;
pub mod plan;
pub mod waypoint;
