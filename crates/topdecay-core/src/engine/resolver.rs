use crate::core::models::assignment::ResolvedDecayAssignment;
use crate::core::models::record::DecayRecordView;
use crate::engine::classifier;
use crate::engine::config::ResolverConfig;
use crate::engine::error::DecayError;
use crate::engine::locator;

/// Resolves the six named decay indices of one event.
///
/// This is the entry point outer layers call per event. It holds only immutable
/// configuration, so a single instance can be shared across worker threads.
#[derive(Debug, Clone, Default)]
pub struct DecayIndexResolver {
    config: ResolverConfig,
}

impl DecayIndexResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Locates the top quark and antiquark, then classifies both branches.
    ///
    /// Failures from either step are returned unchanged.
    pub fn resolve_event(
        &self,
        record: &DecayRecordView,
    ) -> Result<ResolvedDecayAssignment, DecayError> {
        let top_code = self.config.top_code;
        let top = locator::locate(record, top_code, &self.config)?;
        let anti_top = locator::locate(record, top_code.antiparticle(), &self.config)?;
        classifier::classify(record, (top, anti_top), &self.config)
    }
}
