use crate::model::graph::CoordinatePolicy;
use crate::model::CliError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// diagnostic verbosity for graph construction. a runtime option passed
/// explicitly to the assembler, replacing a compile-time debug switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// brief flow messages only
    #[default]
    Quiet,
    /// per-record dumps at debug level
    Verbose,
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "quiet"),
            Verbosity::Verbose => write!(f, "verbose"),
        }
    }
}

/// defines behaviors for a road network import
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct ImportConfiguration {
    pub coordinate_policy: CoordinatePolicy,
    pub verbosity: Verbosity,
    /// when true, each arc's endpoints are matched against junction
    /// coordinates and the pairing is inserted into both endpoint
    /// junctions' adjacency maps
    pub connect_junctions: bool,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            coordinate_policy: CoordinatePolicy::default(),
            verbosity: Verbosity::default(),
            connect_junctions: true,
        }
    }
}

impl TryFrom<&String> for ImportConfiguration {
    type Error = CliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| CliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| CliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(CliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImportConfiguration, Verbosity};
    use crate::model::graph::CoordinatePolicy;

    #[test]
    fn test_default_configuration() {
        let conf = ImportConfiguration::default();
        assert_eq!(conf.coordinate_policy, CoordinatePolicy::Raw);
        assert_eq!(conf.verbosity, Verbosity::Quiet);
        assert!(conf.connect_junctions);
    }

    #[test]
    fn test_toml_round_trip() {
        let conf = ImportConfiguration {
            coordinate_policy: CoordinatePolicy::Grid,
            verbosity: Verbosity::Verbose,
            connect_junctions: false,
        };
        let s = toml::to_string(&conf).unwrap();
        let decoded: ImportConfiguration = toml::from_str(&s).unwrap();
        assert_eq!(decoded.coordinate_policy, CoordinatePolicy::Grid);
        assert_eq!(decoded.verbosity, Verbosity::Verbose);
        assert!(!decoded.connect_junctions);
    }

    #[test]
    fn test_unsupported_configuration_file_type() {
        let result = ImportConfiguration::try_from(&String::from("params.yaml"));
        assert!(result.is_err());
    }
}
