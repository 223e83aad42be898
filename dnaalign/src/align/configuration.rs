//! Scoring configuration files.
//!
//! Any value may be omitted from a file, in which case the default scoring applies.
//! Values given on the command line take precedence over the file.

use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use lib_dnaalign::scoring::{AffineScoring, LinearScoring, ScoringScheme};
use log::{debug, info};
use serde::{Deserialize, de::DeserializeOwned};

use super::CliScoring;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfiguration {
    match_reward: Option<i64>,
    mismatch_penalty: Option<i64>,
    gap_open: Option<i64>,
    gap_extend: Option<i64>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocalConfiguration {
    match_reward: Option<i64>,
    mismatch_penalty: Option<i64>,
    indel_penalty: Option<i64>,
}

/// Reads `file_name` from the configuration directory, if any.
pub fn load_configuration<Configuration: DeserializeOwned + Default>(
    configuration_directory: Option<&Path>,
    file_name: &str,
) -> Result<Configuration> {
    let Some(configuration_directory) = configuration_directory else {
        debug!("No configuration directory given");
        return Ok(Configuration::default());
    };

    let path = configuration_directory.join(file_name);
    info!("Loading configuration file {path:?}");
    let configuration = fs::read_to_string(&path)
        .map_err(|error| anyhow!("Unable to read configuration file {path:?}: {error}"))?;
    toml::from_str(&configuration)
        .map_err(|error| anyhow!("Malformed configuration file {path:?}: {error}"))
}

impl GlobalConfiguration {
    pub fn into_scoring(self, overrides: &CliScoring) -> Result<AffineScoring> {
        let defaults = AffineScoring::default();

        Ok(AffineScoring::new(
            overrides
                .match_reward
                .or(self.match_reward)
                .unwrap_or(defaults.match_reward()),
            overrides
                .mismatch_penalty
                .or(self.mismatch_penalty)
                .unwrap_or(defaults.mismatch_penalty()),
            overrides
                .gap_open
                .or(self.gap_open)
                .unwrap_or(defaults.gap_open()),
            overrides
                .gap_extend
                .or(self.gap_extend)
                .unwrap_or(defaults.gap_extend()),
        )?)
    }
}

impl LocalConfiguration {
    pub fn into_scoring(self, overrides: &CliScoring) -> Result<LinearScoring> {
        let defaults = LinearScoring::default();

        Ok(LinearScoring::new(
            overrides
                .match_reward
                .or(self.match_reward)
                .unwrap_or(defaults.match_reward()),
            overrides
                .mismatch_penalty
                .or(self.mismatch_penalty)
                .unwrap_or(defaults.mismatch_penalty()),
            overrides
                .indel_penalty
                .or(self.indel_penalty)
                .unwrap_or(defaults.indel_penalty()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use lib_dnaalign::scoring::{AffineScoring, LinearScoring};

    use super::{CliScoring, GlobalConfiguration, LocalConfiguration};

    #[test]
    fn missing_values_use_defaults() {
        let configuration: GlobalConfiguration = toml::from_str("gap_open = 5").unwrap();
        assert_eq!(
            configuration.into_scoring(&CliScoring::default()).unwrap(),
            AffineScoring::new(1, 1, 5, 1).unwrap()
        );

        let configuration: LocalConfiguration = toml::from_str("").unwrap();
        assert_eq!(
            configuration.into_scoring(&CliScoring::default()).unwrap(),
            LinearScoring::default()
        );
    }

    #[test]
    fn command_line_overrides_file() {
        let configuration: LocalConfiguration =
            toml::from_str("match_reward = 2\nindel_penalty = 3").unwrap();
        let overrides = CliScoring {
            indel_penalty: Some(1),
            ..Default::default()
        };
        assert_eq!(
            configuration.into_scoring(&overrides).unwrap(),
            LinearScoring::new(2, 1, 1).unwrap()
        );
    }

    #[test]
    fn rejects_unknown_keys_and_invalid_values() {
        assert!(toml::from_str::<LocalConfiguration>("gap_open = 1").is_err());

        let configuration: GlobalConfiguration = toml::from_str("match_reward = 0").unwrap();
        assert!(configuration.into_scoring(&CliScoring::default()).is_err());
    }
}
