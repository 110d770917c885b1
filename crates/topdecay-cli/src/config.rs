use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use topdecay::engine::config as core_config;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialResolverConfig {
    top_code: Option<i32>,
    w_boson_code: Option<i32>,
    lepton_threshold: Option<u32>,
    max_self_decay_steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialBatchConfig {
    abort_on_invariant_violation: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialOutputConfig {
    targets: Option<PathBuf>,
}

/// Settings as read from a TOML file, before CLI arguments are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    resolver: Option<PartialResolverConfig>,
    batch: Option<PartialBatchConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully merged settings of the `resolve` command.
#[derive(Debug, Clone)]
pub struct ResolveSettings {
    pub batch: core_config::BatchConfig,
    pub targets: Option<PathBuf>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` if given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merges file values, `-S` overrides and dedicated CLI flags, in increasing order of
    /// precedence, and validates the result.
    pub fn merge_with_cli(mut self, args: &ResolveArgs) -> Result<ResolveSettings> {
        self.apply_set_values(&args.set_values)?;

        let resolver = self.resolver.take().unwrap_or_default();
        let batch = self.batch.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let resolver = Self::build_resolver(PartialResolverConfig {
            max_self_decay_steps: args.max_self_decay_steps.or(resolver.max_self_decay_steps),
            ..resolver
        })?;

        Ok(ResolveSettings {
            batch: core_config::BatchConfig {
                resolver,
                abort_on_invariant_violation: args.strict
                    || batch.abort_on_invariant_violation.unwrap_or(false),
            },
            targets: args.targets.clone().or(output.targets),
        })
    }

    /// Resolver settings only, for commands that do not run a batch.
    pub fn into_resolver_config(mut self) -> Result<core_config::ResolverConfig> {
        Self::build_resolver(self.resolver.take().unwrap_or_default())
    }

    fn build_resolver(partial: PartialResolverConfig) -> Result<core_config::ResolverConfig> {
        let mut builder = core_config::ResolverConfigBuilder::new();
        if let Some(code) = partial.top_code {
            builder = builder.top_code(code);
        }
        if let Some(code) = partial.w_boson_code {
            builder = builder.w_boson_code(code);
        }
        if let Some(threshold) = partial.lepton_threshold {
            builder = builder.lepton_threshold(threshold);
        }
        if let Some(steps) = partial.max_self_decay_steps {
            builder = builder.max_self_decay_steps(steps);
        }
        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "resolver.top-code" => {
                    self.resolver
                        .get_or_insert_with(Default::default)
                        .top_code = Some(parse_value(key, value_str)?);
                }
                "resolver.w-boson-code" => {
                    self.resolver
                        .get_or_insert_with(Default::default)
                        .w_boson_code = Some(parse_value(key, value_str)?);
                }
                "resolver.lepton-threshold" => {
                    self.resolver
                        .get_or_insert_with(Default::default)
                        .lepton_threshold = Some(parse_value(key, value_str)?);
                }
                "resolver.max-self-decay-steps" => {
                    self.resolver
                        .get_or_insert_with(Default::default)
                        .max_self_decay_steps = Some(parse_value(key, value_str)?);
                }
                "batch.abort-on-invariant-violation" => {
                    self.batch
                        .get_or_insert_with(Default::default)
                        .abort_on_invariant_violation = Some(parse_value(key, value_str)?);
                }
                "output.targets" => {
                    self.output.get_or_insert_with(Default::default).targets =
                        Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid value for {}: {}", key, value_str))
    })
}
