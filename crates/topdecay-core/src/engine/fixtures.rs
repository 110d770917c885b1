//! Synthetic decay records shared by the engine and workflow tests.

use crate::core::models::assignment::BranchIndices;
use crate::core::models::record::DecayRecord;

#[derive(Default)]
pub(crate) struct RecordBuilder {
    codes: Vec<i32>,
    daughter1: Vec<i32>,
    daughter2: Vec<i32>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: i32) -> usize {
        self.codes.push(code);
        self.daughter1.push(-1);
        self.daughter2.push(-1);
        self.codes.len() - 1
    }

    pub fn decays(&mut self, parent: usize, first: usize, second: Option<usize>) -> &mut Self {
        self.daughter1[parent] = first as i32;
        self.daughter2[parent] = second.map_or(-1, |d| d as i32);
        self
    }

    pub fn raw_daughters(&mut self, parent: usize, first: i32, second: i32) -> &mut Self {
        self.daughter1[parent] = first;
        self.daughter2[parent] = second;
        self
    }

    pub fn build(self) -> DecayRecord {
        DecayRecord::new(self.codes, self.daughter1, self.daughter2)
            .expect("builder keeps the arrays parallel")
    }
}

pub(crate) struct Expected {
    pub hadronic: BranchIndices,
    pub leptonic: BranchIndices,
}

/// `g → t t~`, `t → W+(→ u d~) b`, `t~ → W-(→ e- nu_e~) b~`.
pub(crate) fn semileptonic() -> (DecayRecord, Expected) {
    semileptonic_with(6, -6, [2, -1], [11, -12])
}

/// The same topology with the leptonic W on the top quark and the hadronic W on the antiquark.
pub(crate) fn semileptonic_leptonic_top() -> (DecayRecord, Expected) {
    semileptonic_with(-6, 6, [-2, 1], [-11, 12])
}

/// Builds `g → tA tB` where `tA` decays hadronically with W children `had_children`
/// and `tB` leptonically with W children `lep_children`.
pub(crate) fn semileptonic_with(
    hadronic_top: i32,
    leptonic_top: i32,
    had_children: [i32; 2],
    lep_children: [i32; 2],
) -> (DecayRecord, Expected) {
    let mut b = RecordBuilder::new();
    let gluon = b.add(21);
    let t_had = b.add(hadronic_top);
    let t_lep = b.add(leptonic_top);
    let w_had = b.add(24 * hadronic_top.signum());
    let b_had = b.add(5 * hadronic_top.signum());
    let w_lep = b.add(24 * leptonic_top.signum());
    let b_lep = b.add(5 * leptonic_top.signum());
    let q1 = b.add(had_children[0]);
    let q2 = b.add(had_children[1]);
    let l1 = b.add(lep_children[0]);
    let l2 = b.add(lep_children[1]);

    b.decays(gluon, t_had, Some(t_lep))
        .decays(t_had, w_had, Some(b_had))
        .decays(t_lep, w_lep, Some(b_lep))
        .decays(w_had, q1, Some(q2))
        .decays(w_lep, l1, Some(l2));

    (
        b.build(),
        Expected {
            hadronic: BranchIndices {
                top: t_had,
                w_boson: w_had,
                b_quark: b_had,
            },
            leptonic: BranchIndices {
                top: t_lep,
                w_boson: w_lep,
                b_quark: b_lep,
            },
        },
    )
}

/// A semileptonic event in which both tops, the hadronic W and the leptonic b radiate
/// before decaying, so every one of them appears more than once in the record.
///
/// The expected tops are the final copies; W and b are the final copies too.
pub(crate) fn semileptonic_with_radiation() -> (DecayRecord, Expected) {
    let mut b = RecordBuilder::new();
    let gluon = b.add(21);
    let t = b.add(6);
    let tbar = b.add(-6);
    let t_copy = b.add(6);
    let photon = b.add(22);
    let tbar_copy = b.add(-6);
    let tbar_final = b.add(-6);
    let w_plus = b.add(24);
    let b_quark = b.add(5);
    let w_plus_copy = b.add(24);
    let w_radiation = b.add(22);
    let u = b.add(2);
    let dbar = b.add(-1);
    let w_minus = b.add(-24);
    let bbar = b.add(-5);
    let bbar_copy = b.add(-5);
    let gluon_radiation = b.add(21);
    let muon = b.add(13);
    let numu = b.add(-14);

    b.decays(gluon, t, Some(tbar))
        .decays(t, t_copy, Some(photon))
        .decays(t_copy, w_plus, Some(b_quark))
        .decays(tbar, tbar_copy, None)
        .decays(tbar_copy, tbar_final, None)
        .decays(tbar_final, bbar, Some(w_minus))
        .decays(w_plus, w_plus_copy, Some(w_radiation))
        .decays(w_plus_copy, u, Some(dbar))
        .decays(bbar, bbar_copy, Some(gluon_radiation))
        .decays(w_minus, muon, Some(numu));

    (
        b.build(),
        Expected {
            hadronic: BranchIndices {
                top: t_copy,
                w_boson: w_plus_copy,
                b_quark,
            },
            leptonic: BranchIndices {
                top: tbar_final,
                w_boson: w_minus,
                b_quark: bbar_copy,
            },
        },
    )
}
