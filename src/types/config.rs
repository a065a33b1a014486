use crate::error::CoverScoutError;
use serde::Deserialize;

pub const REPORT_FORMATS: [&str; 2] = ["md", "json"];
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverScoutConfig {
    pub data: Option<DataConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Alternative catalog and question set, relative to the config root.
    pub reference_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub export_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl CoverScoutConfig {
    pub fn reference_file(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.reference_file.as_deref())
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn export_dir(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.export_dir.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), CoverScoutError> {
        if let Some(path) = self.reference_file() {
            if path.trim().is_empty() {
                return Err(CoverScoutError::ConfigParse(
                    "data.reference_file must be a non-empty path".to_string(),
                ));
            }
        }

        if let Some(format) = self.report_format() {
            if !REPORT_FORMATS.contains(&format) {
                return Err(CoverScoutError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected one of {})",
                    REPORT_FORMATS.join(", ")
                )));
            }
        }

        if let Some(dir) = self.export_dir() {
            if dir.trim().is_empty() {
                return Err(CoverScoutError::ConfigParse(
                    "report.export_dir must be a non-empty path".to_string(),
                ));
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(CoverScoutError::ConfigParse(format!(
                    "unsupported logging.level: {level}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let cfg: CoverScoutConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.reference_file().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: CoverScoutConfig = toml::from_str(
            r#"
[data]
reference_file = "data/products.toml"

[report]
format = "json"
export_dir = "reports"

[logging]
level = "debug"
"#,
        )
        .expect("full config should parse");
        assert_eq!(cfg.reference_file(), Some("data/products.toml"));
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.export_dir(), Some("reports"));
        assert_eq!(cfg.log_level(), Some("debug"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: CoverScoutConfig = toml::from_str(
            r#"
[report]
format = "sarif"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format: sarif"));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let cfg: CoverScoutConfig = toml::from_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported logging.level"));
    }

    #[test]
    fn validate_rejects_blank_paths() {
        let cfg: CoverScoutConfig = toml::from_str(
            r#"
[data]
reference_file = " "
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
