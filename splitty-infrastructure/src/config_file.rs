use serde::Deserialize;
use splitty_application::{DEFAULT_SPLIT_COLUMN_INDEX, SplitConfig};
use splitty_domain::Participant;
use std::{fs, path::Path};

use crate::error::InfraError;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    split_column_index: usize,
    payers: NameList,
    payees: NameList,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            split_column_index: DEFAULT_SPLIT_COLUMN_INDEX,
            payers: NameList::default(),
            payees: NameList::default(),
        }
    }
}

/// `"P, J ,T"` or `["P", "J", "T"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameList {
    Joined(String),
    List(Vec<String>),
}

impl Default for NameList {
    fn default() -> Self {
        NameList::List(Vec::new())
    }
}

impl NameList {
    fn into_participants(self) -> Vec<Participant> {
        let names: Vec<String> = match self {
            NameList::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
            NameList::List(names) => names,
        };
        names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(Participant::new)
            .collect()
    }
}

impl From<ConfigFile> for SplitConfig {
    fn from(file: ConfigFile) -> Self {
        SplitConfig::new(
            file.split_column_index,
            file.payers.into_participants(),
            file.payees.into_participants(),
        )
    }
}

/// Parses a JSON configuration document.
pub fn parse_config(content: &str) -> Result<SplitConfig, serde_json::Error> {
    serde_json::from_str::<ConfigFile>(content).map(SplitConfig::from)
}

/// Reads and parses the JSON configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<SplitConfig, InfraError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| {
        InfraError::io(path.to_path_buf(), err, |path| InfraError::ConfigNotFound {
            path,
        })
    })?;
    let config = parse_config(&content).map_err(|source| InfraError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        split_column_index = config.split_column_index(),
        payers = config.payers().len(),
        payees = config.payees().len(),
        "loaded configuration"
    );
    Ok(config)
}
