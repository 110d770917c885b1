use crate::core::models::pdg::{LEPTON_CODE_THRESHOLD, ParticleCode, TOP_QUARK, W_BOSON};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Code of the top quark; its antiparticle is located as the second top.
    pub top_code: ParticleCode,
    /// The W boson is matched by magnitude, so the sign is irrelevant.
    pub w_boson_code: ParticleCode,
    pub lepton_threshold: u32,
    /// Upper bound on self-decay steps. `None` uses the record length, which any
    /// acyclic chain stays below.
    pub max_self_decay_steps: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            top_code: TOP_QUARK,
            w_boson_code: W_BOSON,
            lepton_threshold: LEPTON_CODE_THRESHOLD,
            max_self_decay_steps: None,
        }
    }
}

impl ResolverConfig {
    pub(crate) fn step_limit(&self, record_len: usize) -> usize {
        self.max_self_decay_steps.unwrap_or(record_len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchConfig {
    pub resolver: ResolverConfig,
    /// Stop the whole batch on the first invariant violation instead of recording it.
    pub abort_on_invariant_violation: bool,
}

#[derive(Default)]
pub struct ResolverConfigBuilder {
    top_code: Option<i32>,
    w_boson_code: Option<i32>,
    lepton_threshold: Option<u32>,
    max_self_decay_steps: Option<usize>,
}

impl ResolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_code(mut self, code: i32) -> Self {
        self.top_code = Some(code);
        self
    }
    pub fn w_boson_code(mut self, code: i32) -> Self {
        self.w_boson_code = Some(code);
        self
    }
    pub fn lepton_threshold(mut self, threshold: u32) -> Self {
        self.lepton_threshold = Some(threshold);
        self
    }
    pub fn max_self_decay_steps(mut self, steps: usize) -> Self {
        self.max_self_decay_steps = Some(steps);
        self
    }

    pub fn build(self) -> Result<ResolverConfig, ConfigError> {
        let defaults = ResolverConfig::default();

        let top_code = self.top_code.map(ParticleCode).unwrap_or(defaults.top_code);
        validate_code("top_code", top_code)?;

        let w_boson_code = self
            .w_boson_code
            .map(ParticleCode)
            .unwrap_or(defaults.w_boson_code);
        validate_code("w_boson_code", w_boson_code)?;
        if w_boson_code.magnitude() == top_code.magnitude() {
            return Err(ConfigError::InvalidParameter {
                parameter: "w_boson_code",
                reason: format!("must differ from the top code {}", top_code),
            });
        }

        if self.max_self_decay_steps == Some(0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_self_decay_steps",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ResolverConfig {
            top_code,
            w_boson_code,
            lepton_threshold: self.lepton_threshold.unwrap_or(defaults.lepton_threshold),
            max_self_decay_steps: self.max_self_decay_steps,
        })
    }
}

/// Rejects codes without a valid PDG meaning, including `i32::MIN`, which has no
/// antiparticle in `i32`.
fn validate_code(parameter: &'static str, code: ParticleCode) -> Result<(), ConfigError> {
    match code.value() {
        0 => Err(ConfigError::InvalidParameter {
            parameter,
            reason: "particle code 0 is not a valid PDG code".to_string(),
        }),
        i32::MIN => Err(ConfigError::InvalidParameter {
            parameter,
            reason: format!("particle code {} has no antiparticle", code),
        }),
        _ => Ok(()),
    }
}
