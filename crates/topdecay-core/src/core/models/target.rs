use super::assignment::DecayRole;
use super::kinematics::{FourMomentum, GEV};

/// Regression target of one particle: `(Px, Py, Pz, E, M)` in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetVector {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
    pub m: f64,
}

impl TargetVector {
    pub const COMPONENTS: [&'static str; 5] = ["Px", "Py", "Pz", "E", "M"];

    pub fn from_momentum(p4: &FourMomentum) -> Self {
        let p4 = p4.in_units_of(GEV);
        Self {
            px: p4.px(),
            py: p4.py(),
            pz: p4.pz(),
            e: p4.e(),
            m: p4.mass(),
        }
    }

    pub fn to_array(&self) -> [f64; 5] {
        [self.px, self.py, self.pz, self.e, self.m]
    }
}

/// Targets of the six resolved particles of one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecayTargets {
    vectors: [TargetVector; 6],
}

impl DecayTargets {
    /// Column order used by target tables: W, then b, then t, hadronic before leptonic.
    pub const COLUMN_ORDER: [DecayRole; 6] = [
        DecayRole::WHadronic,
        DecayRole::WLeptonic,
        DecayRole::BHadronic,
        DecayRole::BLeptonic,
        DecayRole::TopHadronic,
        DecayRole::TopLeptonic,
    ];

    pub fn get(&self, role: DecayRole) -> &TargetVector {
        &self.vectors[slot(role)]
    }

    pub fn set(&mut self, role: DecayRole, vector: TargetVector) {
        self.vectors[slot(role)] = vector;
    }

    /// Iterates in [`Self::COLUMN_ORDER`].
    pub fn iter(&self) -> impl Iterator<Item = (DecayRole, &TargetVector)> {
        Self::COLUMN_ORDER
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }

    /// `target_<role>_<component>` names in the same order as [`Self::iter`].
    pub fn column_names() -> Vec<String> {
        Self::COLUMN_ORDER
            .iter()
            .flat_map(|role| {
                TargetVector::COMPONENTS
                    .iter()
                    .map(move |component| format!("target_{}_{}", role.key(), component))
            })
            .collect()
    }
}

fn slot(role: DecayRole) -> usize {
    match role {
        DecayRole::TopHadronic => 0,
        DecayRole::WHadronic => 1,
        DecayRole::BHadronic => 2,
        DecayRole::TopLeptonic => 3,
        DecayRole::WLeptonic => 4,
        DecayRole::BLeptonic => 5,
    }
}
