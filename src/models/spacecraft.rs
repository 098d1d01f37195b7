pub trait SpacecraftProperties {
    fn mass(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
}

/// Physical properties of a point-mass vehicle. Constant over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacecraft {
    pub mass: f64,                 // kg
    pub drag_coefficient: f64,     // dimensionless
    pub cross_sectional_area: f64, // m^2
}

impl Spacecraft {
    pub fn new(mass: f64, drag_coefficient: f64, cross_sectional_area: f64) -> Self {
        Self {
            mass,
            drag_coefficient,
            cross_sectional_area,
        }
    }
}

impl SpacecraftProperties for Spacecraft {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    fn reference_area(&self) -> f64 {
        self.cross_sectional_area
    }
}
