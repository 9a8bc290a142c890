use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from contact_profiler.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Identity reported to MCP clients
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub name: String,
    pub title: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "contact-profiler".to_string(),
            title: "Contact Profiler".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// How analysis results are presented by the tool surface
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PresentationConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Append the markdown report as an extra text block to JSON results
    #[serde(default)]
    pub include_markdown: bool,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub mcp_no_log: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "contact_profiler=info,rmcp=info".to_string(),
            mcp_no_log: false,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(level) = std::env::var("CP_LOG_LEVEL").or_else(|_| std::env::var("RUST_LOG"))
            && !level.trim().is_empty()
        {
            cfg.log_level = level;
        }

        if let Ok(v) = std::env::var("CP_MCP_NO_LOG") {
            cfg.mcp_no_log = v == "1" || v.eq_ignore_ascii_case("true");
        }

        cfg
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses CONTACT_PROFILER_CONFIG environment variable or defaults to "contact_profiler.toml"
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(env_path) = std::env::var("CP_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path = std::env::var("CONTACT_PROFILER_CONFIG")
            .unwrap_or_else(|_| "contact_profiler.toml".to_string());

        let mut config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            Self::from_toml_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        if let Ok(fmt) = std::env::var("CP_DEFAULT_FORMAT") {
            config.presentation.default_format = OutputFormat::parse(&fmt).ok_or_else(|| {
                anyhow::anyhow!("CP_DEFAULT_FORMAT must be 'json' or 'markdown', got '{fmt}'")
            })?;
            tracing::debug!("CP_DEFAULT_FORMAT env override applied");
        }

        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.name.trim().is_empty() {
            anyhow::bail!("server.name must not be empty");
        }
        if self.server.version.trim().is_empty() {
            anyhow::bail!("server.version must not be empty");
        }
        Ok(())
    }
}
