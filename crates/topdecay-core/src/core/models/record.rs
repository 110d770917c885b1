use super::pdg::ParticleCode;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Index {index} is out of range for a record of {len} particles")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(
        "Parallel arrays differ in length (codes: {codes}, daughter1: {daughter1}, daughter2: {daughter2})"
    )]
    MismatchedLengths {
        codes: usize,
        daughter1: usize,
        daughter2: usize,
    },

    #[error("Event has {particles} particles but {momenta} four-momenta")]
    MomentaLengthMismatch { particles: usize, momenta: usize },
}

/// The owned decay record of a single event.
///
/// Daughter entries follow the generator convention: a negative value means the
/// particle has no daughter in that slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecayRecord {
    codes: Vec<i32>,
    daughter1: Vec<i32>,
    daughter2: Vec<i32>,
}

impl DecayRecord {
    pub fn new(
        codes: Vec<i32>,
        daughter1: Vec<i32>,
        daughter2: Vec<i32>,
    ) -> Result<Self, RecordError> {
        check_lengths(codes.len(), daughter1.len(), daughter2.len())?;
        Ok(Self {
            codes,
            daughter1,
            daughter2,
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn view(&self) -> DecayRecordView<'_> {
        DecayRecordView {
            codes: &self.codes,
            daughter1: &self.daughter1,
            daughter2: &self.daughter2,
        }
    }

    pub(crate) fn push(&mut self, code: i32, daughter1: i32, daughter2: i32) {
        self.codes.push(code);
        self.daughter1.push(daughter1);
        self.daughter2.push(daughter2);
    }
}

/// A read-only, bounds-checked view over the parallel arrays of one event.
///
/// Every accessor validates its index against the record length, and every daughter
/// index it hands out is itself guaranteed to be a valid index into the same record.
/// The view is `Copy` and borrows the arrays, so it can be passed freely through the
/// resolution algorithms without cloning the event.
#[derive(Debug, Clone, Copy)]
pub struct DecayRecordView<'a> {
    codes: &'a [i32],
    daughter1: &'a [i32],
    daughter2: &'a [i32],
}

impl<'a> DecayRecordView<'a> {
    /// Creates a view over three parallel slices.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MismatchedLengths`] if the slices differ in length.
    pub fn new(
        codes: &'a [i32],
        daughter1: &'a [i32],
        daughter2: &'a [i32],
    ) -> Result<Self, RecordError> {
        check_lengths(codes.len(), daughter1.len(), daughter2.len())?;
        Ok(Self {
            codes,
            daughter1,
            daughter2,
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the particle code stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `index >= len`.
    pub fn code(&self, index: usize) -> Result<ParticleCode, RecordError> {
        self.check(index)?;
        Ok(ParticleCode(self.codes[index]))
    }

    /// Returns the first daughter of `index`, or `None` for a terminal slot.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::IndexOutOfRange`] if `index` is out of range, or if the
    /// stored daughter points past the end of the record.
    pub fn daughter1(&self, index: usize) -> Result<Option<usize>, RecordError> {
        self.check(index)?;
        self.daughter_at(index, self.daughter1[index])
    }

    /// Returns the second daughter of `index`, or `None` for a terminal slot.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::daughter1`].
    pub fn daughter2(&self, index: usize) -> Result<Option<usize>, RecordError> {
        self.check(index)?;
        self.daughter_at(index, self.daughter2[index])
    }

    pub fn daughters(&self, index: usize) -> Result<(Option<usize>, Option<usize>), RecordError> {
        Ok((self.daughter1(index)?, self.daughter2(index)?))
    }

    /// Iterates over the indices whose code equals `code`, in record order.
    pub fn indices_of(&self, code: ParticleCode) -> impl Iterator<Item = usize> + 'a {
        let codes = self.codes;
        (0..codes.len()).filter(move |&i| codes[i] == code.value())
    }

    fn check(&self, index: usize) -> Result<(), RecordError> {
        if index < self.codes.len() {
            Ok(())
        } else {
            Err(RecordError::IndexOutOfRange {
                index,
                len: self.codes.len(),
            })
        }
    }

    // A daughter equal to the particle itself marks a stable particle, same as a negative entry.
    fn daughter_at(&self, parent: usize, raw: i32) -> Result<Option<usize>, RecordError> {
        let Ok(daughter) = usize::try_from(raw) else {
            return Ok(None);
        };
        if daughter == parent {
            return Ok(None);
        }
        self.check(daughter)?;
        Ok(Some(daughter))
    }
}

fn check_lengths(codes: usize, daughter1: usize, daughter2: usize) -> Result<(), RecordError> {
    if codes == daughter1 && codes == daughter2 {
        Ok(())
    } else {
        Err(RecordError::MismatchedLengths {
            codes,
            daughter1,
            daughter2,
        })
    }
}
