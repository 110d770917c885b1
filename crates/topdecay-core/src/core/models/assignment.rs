use std::fmt;

/// Which W decay a top-quark branch went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    /// W → quark + quark.
    Hadronic,
    /// W → charged lepton + neutrino.
    Leptonic,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Branch::Hadronic => "hadronic",
            Branch::Leptonic => "leptonic",
        })
    }
}

/// One of the six named slots of a [`ResolvedDecayAssignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecayRole {
    TopHadronic,
    WHadronic,
    BHadronic,
    TopLeptonic,
    WLeptonic,
    BLeptonic,
}

impl DecayRole {
    pub const ALL: [DecayRole; 6] = [
        DecayRole::TopHadronic,
        DecayRole::WHadronic,
        DecayRole::BHadronic,
        DecayRole::TopLeptonic,
        DecayRole::WLeptonic,
        DecayRole::BLeptonic,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DecayRole::TopHadronic => "t_had",
            DecayRole::WHadronic => "W_had",
            DecayRole::BHadronic => "b_had",
            DecayRole::TopLeptonic => "t_lep",
            DecayRole::WLeptonic => "W_lep",
            DecayRole::BLeptonic => "b_lep",
        }
    }

    pub const fn branch(self) -> Branch {
        match self {
            DecayRole::TopHadronic | DecayRole::WHadronic | DecayRole::BHadronic => {
                Branch::Hadronic
            }
            DecayRole::TopLeptonic | DecayRole::WLeptonic | DecayRole::BLeptonic => {
                Branch::Leptonic
            }
        }
    }
}

impl fmt::Display for DecayRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Record indices of the three particles of one top branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchIndices {
    pub top: usize,
    pub w_boson: usize,
    pub b_quark: usize,
}

/// The six record indices resolved for a semileptonic event.
///
/// Built only by the classifier once both branches are known, and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedDecayAssignment {
    hadronic: BranchIndices,
    leptonic: BranchIndices,
}

impl ResolvedDecayAssignment {
    pub(crate) fn new(hadronic: BranchIndices, leptonic: BranchIndices) -> Self {
        Self { hadronic, leptonic }
    }

    pub fn hadronic(&self) -> &BranchIndices {
        &self.hadronic
    }

    pub fn leptonic(&self) -> &BranchIndices {
        &self.leptonic
    }

    pub fn branch(&self, branch: Branch) -> &BranchIndices {
        match branch {
            Branch::Hadronic => &self.hadronic,
            Branch::Leptonic => &self.leptonic,
        }
    }

    pub fn index(&self, role: DecayRole) -> usize {
        let branch = self.branch(role.branch());
        match role {
            DecayRole::TopHadronic | DecayRole::TopLeptonic => branch.top,
            DecayRole::WHadronic | DecayRole::WLeptonic => branch.w_boson,
            DecayRole::BHadronic | DecayRole::BLeptonic => branch.b_quark,
        }
    }

    /// Iterates over `(role, index)` pairs in the canonical `t_had .. b_lep` order.
    pub fn entries(&self) -> impl Iterator<Item = (DecayRole, usize)> + '_ {
        DecayRole::ALL.into_iter().map(|role| (role, self.index(role)))
    }
}

impl fmt::Display for ResolvedDecayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (role, index) in self.entries() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", role, index)?;
            first = false;
        }
        Ok(())
    }
}
