use nalgebra::Vector3;

/// MeV per GeV. Generator records store momenta in MeV.
pub const GEV: f64 = 1e3;

/// A Cartesian four-momentum `(px, py, pz, E)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FourMomentum {
    pub momentum: Vector3<f64>,
    pub energy: f64,
}

impl FourMomentum {
    pub fn new(px: f64, py: f64, pz: f64, energy: f64) -> Self {
        Self {
            momentum: Vector3::new(px, py, pz),
            energy,
        }
    }

    pub fn px(&self) -> f64 {
        self.momentum.x
    }

    pub fn py(&self) -> f64 {
        self.momentum.y
    }

    pub fn pz(&self) -> f64 {
        self.momentum.z
    }

    pub fn e(&self) -> f64 {
        self.energy
    }

    pub fn mass_squared(&self) -> f64 {
        self.energy * self.energy - self.momentum.norm_squared()
    }

    /// Invariant mass. Space-like vectors yield a negative value of the same magnitude,
    /// so rounding noise on massless particles stays visible instead of becoming `NaN`.
    pub fn mass(&self) -> f64 {
        let m2 = self.mass_squared();
        if m2 >= 0.0 { m2.sqrt() } else { -(-m2).sqrt() }
    }

    /// Divides every component by `unit`, e.g. `GEV` to convert MeV to GeV.
    pub fn in_units_of(&self, unit: f64) -> Self {
        Self {
            momentum: self.momentum / unit,
            energy: self.energy / unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn mass_of_particle_at_rest_equals_energy() {
        let p = FourMomentum::new(0.0, 0.0, 0.0, 172.5);
        assert!((p.mass() - 172.5).abs() < EPSILON);
    }

    #[test]
    fn mass_of_moving_particle_uses_minkowski_norm() {
        let p = FourMomentum::new(3.0, 4.0, 0.0, 13.0);
        assert!((p.mass() - 12.0).abs() < EPSILON);
    }

    #[test]
    fn space_like_vector_has_negative_mass() {
        let p = FourMomentum::new(0.0, 0.0, 5.0, 4.0);
        assert!((p.mass() + 3.0).abs() < EPSILON);
    }

    #[test]
    fn unit_conversion_scales_every_component() {
        let p = FourMomentum::new(1000.0, -2000.0, 500.0, 3000.0).in_units_of(GEV);
        assert_eq!(p, FourMomentum::new(1.0, -2.0, 0.5, 3.0));
    }
}
