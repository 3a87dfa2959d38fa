//! Loading [`SelectionConfig`] from JSON
//!
//! Keys follow the option names hosts expose (`rowCheckBox`,
//! `rowStartSpinBox`, ...). Missing keys keep their defaults.

use std::{fs, path::Path};

use submat_core::SelectionConfig;

use crate::Result;

/// Parse a selection config from a JSON string
pub fn config_from_json(json: &str) -> Result<SelectionConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Read a selection config from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SelectionConfig> {
    let text = fs::read_to_string(path.as_ref())?;
    let config = config_from_json(&text)?;
    log::debug!("loaded selection config from {}: {config:?}", path.as_ref().display());
    Ok(config)
}

/// Serialize a selection config to pretty JSON
pub fn config_to_json(config: &SelectionConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_names() {
        let config = config_from_json(
            r#"{"rowCheckBox": true, "rowStartSpinBox": 1, "rowEndSpinBox": 2}"#,
        )
        .unwrap();
        assert_eq!(config, SelectionConfig::new().with_row_range(1, 2));
    }

    #[test]
    fn test_round_trip_keeps_every_option() {
        let config = SelectionConfig::new().with_row_range(0, 4).with_col_range(2, 3);
        let json = config_to_json(&config).unwrap();
        for name in submat_core::ports::OPTIONS {
            assert!(json.contains(name), "{name} missing from {json}");
        }
        assert_eq!(config_from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json() {
        let err = config_from_json(r#"{"rowCheckBox": "yes"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/selection.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
