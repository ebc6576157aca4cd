use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use pasi_core::WidgetConfig;
use pasi_engine::{AnalysisMode, AnalysisSettings};
use serde::{Deserialize, Serialize};
use widget_logging::widget_info;

use super::logging::LogDestination;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub widget: WidgetConfig,
    pub analysis: AnalysisSettings,
    pub log_destination: LogDestination,
}

/// Loads the RON config at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    validate(&config)?;
    Ok(config)
}

pub fn parse(text: &str) -> anyhow::Result<AppConfig> {
    Ok(ron::from_str(text)?)
}

fn validate(config: &AppConfig) -> anyhow::Result<()> {
    if config.analysis.mode == AnalysisMode::Remote {
        let endpoint = url::Url::parse(&config.analysis.endpoint)
            .with_context(|| format!("invalid analysis endpoint {:?}", config.analysis.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("analysis endpoint must be http or https, got {endpoint}");
        }
        widget_info!("remote analysis endpoint {}", endpoint);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pasi_core::DEFAULT_UPLOADER_CAPTION;
    use pasi_engine::{AnalysisMode, SIMULATED_DELAY_MS};

    use super::{load, parse, LogDestination};

    #[test]
    fn missing_path_gives_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.analysis.mode, AnalysisMode::Simulated);
        assert_eq!(config.analysis.simulated_delay_ms, SIMULATED_DELAY_MS);
        assert_eq!(config.widget.uploader_caption, DEFAULT_UPLOADER_CAPTION);
        assert_eq!(config.log_destination, LogDestination::Terminal);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse(
            r#"(
                widget: (uploader_caption: "Drop a photo", quiz_backgrounds: ["q1.png"]),
                analysis: (mode: remote, endpoint: "https://score.example.com/api"),
            )"#,
        )
        .unwrap();
        assert_eq!(config.widget.uploader_caption, "Drop a photo");
        assert_eq!(config.widget.width, "25rem");
        assert_eq!(config.analysis.mode, AnalysisMode::Remote);
        assert_eq!(config.analysis.request_timeout_ms, None);
    }

    #[test]
    fn remote_mode_requires_http_endpoint() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"(analysis: (mode: remote, endpoint: "ftp://score.example.com"))"#).unwrap();
        file.flush().unwrap();
        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("missing.ron"))).is_err());
    }
}
