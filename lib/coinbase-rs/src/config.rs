use std::env::var;
use std::str::FromStr;
use crate::errors::*;

pub const UNKNOWN_ENUMS_VAR: &str = "COINBASE_UNKNOWN_ENUMS";

/**
 * What to do with a status, level, category or currency code that has no known mapping.
 */
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEnumPolicy {
    /**
     * Keep the raw code in an `Unrecognized` variant and log a warning.
     */
    Lenient,
    /**
     * Fail the whole document with `UnknownEnumValue`.
     */
    Strict,
}

impl Default for UnknownEnumPolicy {
    fn default() -> Self {
        UnknownEnumPolicy::Lenient
    }
}

impl FromStr for UnknownEnumPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(UnknownEnumPolicy::Lenient),
            "strict" => Ok(UnknownEnumPolicy::Strict),
            other => bail!("Unknown enum policy '{}', expected 'strict' or 'lenient'", other),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DecodeConfig {
    #[serde(default)]
    pub unknown_enums: UnknownEnumPolicy,
}

impl DecodeConfig {
    pub fn strict() -> Self {
        DecodeConfig { unknown_enums: UnknownEnumPolicy::Strict }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: DecodeConfig = serde_json::from_str(json)
            .chain_err(|| "Error parsing decode config")?;
        Ok(config)
    }

    /**
     * Reads the policy from `COINBASE_UNKNOWN_ENUMS`, falling back to the
     * default when the variable is unset.
     */
    pub fn from_env() -> Result<Self> {
        match var(UNKNOWN_ENUMS_VAR) {
            Ok(policy) => Ok(DecodeConfig { unknown_enums: policy.parse()? }),
            Err(_) => Ok(DecodeConfig::default()),
        }
    }
}
