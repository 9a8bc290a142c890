//! Server module containing the ContactProfilerServer implementation

use std::sync::Arc;

use crate::analysis::PersonalityAnalyzer;
use crate::config::Config;

// Submodules
pub mod router;

/// Main contact-profiler MCP server implementation
#[derive(Clone)]
pub struct ContactProfilerServer {
    pub analyzer: Arc<PersonalityAnalyzer>,
    pub config: Arc<Config>,
}

impl ContactProfilerServer {
    pub fn new(config: &Config) -> Self {
        Self::with_analyzer(config, PersonalityAnalyzer::new())
    }

    pub fn with_analyzer(config: &Config, analyzer: PersonalityAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config: Arc::new(config.clone()),
        }
    }
}
