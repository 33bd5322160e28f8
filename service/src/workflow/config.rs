use anyhow::Context;
use hazardcore::models::RequestDefaults;
use hazardcore::scoring::ScorerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Thresholds used when a request omits them.
    pub defaults: RequestDefaults,
    pub scorer: ScorerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            defaults: RequestDefaults::default(),
            scorer: ScorerConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading service config {}", path_ref.display()))?;
        let config: ServiceConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing service config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating service config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(host: IpAddr, port: u16) -> Self {
        Self {
            host,
            port,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.defaults
            .validate()
            .context("invalid request defaults")?;
        self.scorer.validate().context("invalid scorer settings")?;
        Ok(())
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(contents: &str) -> tempfile::TempPath {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp.into_temp_path()
    }

    #[test]
    fn config_from_args_keeps_scoring_defaults() {
        let cfg = ServiceConfig::from_args(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9100);
        assert_eq!(cfg.bind_address().to_string(), "0.0.0.0:9100");
        assert_eq!(cfg.defaults.distance_threshold_m, 500.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_load_reads_yaml() {
        let path = write_yaml(
            "port: 8080\ndefaults:\n  velocity_threshold_ms: 30.0\nscorer:\n  levels:\n    danger: 3.0\n",
        );
        let cfg = ServiceConfig::load(&path).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(cfg.defaults.velocity_threshold_ms, 30.0);
        assert_eq!(cfg.defaults.distance_threshold_m, 500.0);
        assert_eq!(cfg.scorer.levels.danger, 3.0);
        assert_eq!(cfg.scorer.levels.caution, 1.2);
    }

    #[test]
    fn config_load_rejects_invalid_scorer() {
        let path = write_yaml("scorer:\n  weights:\n    intensity: -1.0\n");
        let err = ServiceConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("weights.intensity"));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = ServiceConfig::load("/nonexistent/hazard.yaml").unwrap_err();
        assert!(err.to_string().contains("reading service config"));
    }
}
