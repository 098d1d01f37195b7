pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6.371e6; // Mean radius of Earth (m)
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.2921150e-5; // Earth's rotation rate (rad/s)

// Exponential atmosphere defaults for Earth
pub const EARTH_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const EARTH_SCALE_HEIGHT: f64 = 8_500.0; // meters

// Math
pub const PI: f64 = std::f64::consts::PI;
