use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codes at or below this magnitude are treated as quarks, codes above it as leptons.
pub const LEPTON_CODE_THRESHOLD: u32 = 10;

pub const TOP_QUARK: ParticleCode = ParticleCode(6);
pub const ANTI_TOP_QUARK: ParticleCode = ParticleCode(-6);
pub const W_BOSON: ParticleCode = ParticleCode(24);

#[rustfmt::skip]
static PARTICLE_NAMES: Map<u32, &'static str> = phf_map! {
    // --- Quarks ---
    1u32 => "d", 2u32 => "u", 3u32 => "s", 4u32 => "c", 5u32 => "b", 6u32 => "t",
    // --- Leptons ---
    11u32 => "e-", 12u32 => "nu_e", 13u32 => "mu-", 14u32 => "nu_mu", 15u32 => "tau-", 16u32 => "nu_tau",
    // --- Bosons ---
    21u32 => "g", 22u32 => "gamma", 23u32 => "Z0", 24u32 => "W+", 25u32 => "h0",
};

#[rustfmt::skip]
static ANTIPARTICLE_NAMES: Map<u32, &'static str> = phf_map! {
    11u32 => "e+", 13u32 => "mu+", 15u32 => "tau+", 24u32 => "W-",
};

/// A signed Particle Data Group code.
///
/// Negative codes denote antiparticles. The classifier only ever reasons about the
/// magnitude of a code, except when locating the top quark (+6) and antiquark (-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticleCode(pub i32);

impl ParticleCode {
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    pub const fn antiparticle(self) -> Self {
        Self(-self.0)
    }

    /// Whether the code belongs to the lepton family under the classifier's
    /// `|code| > threshold` convention. Neutrinos count as leptons.
    pub const fn is_lepton_like(self, threshold: u32) -> bool {
        self.magnitude() > threshold
    }

    pub const fn is_quark_like(self, threshold: u32) -> bool {
        self.magnitude() <= threshold
    }

    /// Human-readable name, when the code is one of the species that appear in a
    /// top-pair decay.
    pub fn name(self) -> Option<String> {
        let magnitude = self.magnitude();
        if self.0 < 0 {
            if let Some(name) = ANTIPARTICLE_NAMES.get(&magnitude) {
                return Some((*name).to_string());
            }
            return PARTICLE_NAMES
                .get(&magnitude)
                .map(|name| format!("{}~", name));
        }
        PARTICLE_NAMES.get(&magnitude).map(|name| (*name).to_string())
    }
}

impl From<i32> for ParticleCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ParticleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_ignores_sign() {
        assert_eq!(ParticleCode(-24).magnitude(), 24);
        assert_eq!(ParticleCode(6).magnitude(), 6);
        assert_eq!(TOP_QUARK.antiparticle(), ANTI_TOP_QUARK);
    }

    #[test]
    fn lepton_and_quark_convention_splits_at_threshold() {
        assert!(ParticleCode(11).is_lepton_like(LEPTON_CODE_THRESHOLD));
        assert!(ParticleCode(-12).is_lepton_like(LEPTON_CODE_THRESHOLD));
        assert!(ParticleCode(-2).is_quark_like(LEPTON_CODE_THRESHOLD));
        assert!(ParticleCode(10).is_quark_like(LEPTON_CODE_THRESHOLD));
        assert!(!ParticleCode(10).is_lepton_like(LEPTON_CODE_THRESHOLD));
    }

    #[test]
    fn names_cover_particles_and_antiparticles() {
        assert_eq!(ParticleCode(6).name().as_deref(), Some("t"));
        assert_eq!(ParticleCode(-6).name().as_deref(), Some("t~"));
        assert_eq!(ParticleCode(-24).name().as_deref(), Some("W-"));
        assert_eq!(ParticleCode(-11).name().as_deref(), Some("e+"));
        assert_eq!(ParticleCode(2212).name(), None);
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(ParticleCode(5).to_string(), "b (5)");
        assert_eq!(ParticleCode(2212).to_string(), "2212");
    }
}
