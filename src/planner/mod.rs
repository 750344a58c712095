pub mod descent;
pub mod levelling;
pub mod planner;
pub mod speed;
pub mod star;
pub mod tod;
