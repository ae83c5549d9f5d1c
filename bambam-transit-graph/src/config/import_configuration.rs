use super::ErrorPolicy;
use crate::{app::TransitGraphAppError, graph::MidnightCrossingPolicy};
use serde::{Deserialize, Serialize};

/// defines behaviors for a transit survey import
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ImportConfiguration {
    pub midnight_crossing_policy: MidnightCrossingPolicy,
    pub error_policy: ErrorPolicy,
    pub parallelize: bool,
    pub overwrite: bool,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            midnight_crossing_policy: MidnightCrossingPolicy::Reject,
            error_policy: ErrorPolicy::Fail,
            parallelize: true,
            overwrite: false,
        }
    }
}

impl TryFrom<&String> for ImportConfiguration {
    type Error = TransitGraphAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TransitGraphAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TransitGraphAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TransitGraphAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TransitGraphAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TransitGraphAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::ImportConfiguration;
    use crate::{app::TransitGraphAppError, config::ErrorPolicy, graph::MidnightCrossingPolicy};

    fn write_fixture(filename: &str, contents: &str) -> String {
        let directory = std::env::temp_dir().join("bambam-transit-graph-config-test");
        std::fs::create_dir_all(&directory).expect("should create temp directory");
        let file = directory.join(filename);
        std::fs::write(&file, contents).expect("should write fixture");
        file.to_string_lossy().to_string()
    }

    #[test]
    fn test_toml_configuration_with_defaults() {
        let file = write_fixture(
            "import.toml",
            "midnight_crossing_policy = \"wrap\"\noverwrite = true\n",
        );
        let conf = ImportConfiguration::try_from(&file).expect("should read toml");
        assert_eq!(conf.midnight_crossing_policy, MidnightCrossingPolicy::Wrap);
        assert!(conf.overwrite);
        assert_eq!(conf.error_policy, ErrorPolicy::Fail);
        assert!(conf.parallelize);
    }

    #[test]
    fn test_json_configuration() {
        let file = write_fixture(
            "import.json",
            r#"{ "error_policy": "skip", "parallelize": false }"#,
        );
        let conf = ImportConfiguration::try_from(&file).expect("should read json");
        assert_eq!(conf.error_policy, ErrorPolicy::Skip);
        assert!(!conf.parallelize);
        assert_eq!(conf.midnight_crossing_policy, MidnightCrossingPolicy::Reject);
    }

    #[test]
    fn test_unsupported_configuration_file() {
        let file = String::from("import.yaml");
        assert!(matches!(
            ImportConfiguration::try_from(&file),
            Err(TransitGraphAppError::ConfigurationError(_))
        ));
    }
}
