pub mod aggregate;
pub mod working_hours;
