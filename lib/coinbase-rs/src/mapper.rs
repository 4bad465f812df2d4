use std::any::type_name;
use serde::Serialize;
use serde_json::Value;
use crate::api::{Coded, Decode};
use crate::config::{DecodeConfig, UnknownEnumPolicy};
use crate::errors::*;
use crate::node::Node;

/**
 * Turns account API documents into typed records and back.
 *
 * Holds nothing but its configuration, so one mapper can be shared freely
 * between threads.
 */
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: DecodeConfig,
}

impl Mapper {
    pub fn new(config: DecodeConfig) -> Self {
        Mapper { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn decode<T: Decode>(&self, bytes: &[u8]) -> Result<T> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::from_kind(ErrorKind::Decode(e.to_string())))?;
        log::debug!("Decoding {} from {} bytes", type_name::<T>(), bytes.len());
        T::decode(&Node::root(&document), self)
    }

    pub fn decode_str<T: Decode>(&self, json: &str) -> Result<T> {
        self.decode(json.as_bytes())
    }

    /**
     * Writes a record back out in the wire schema it was decoded from.
     */
    pub fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(record)?)
    }

    /**
     * Maps a raw wire code, applying the unknown-enum policy when the code
     * has no known variant.
     */
    pub fn recognize<T: Coded>(&self, node: &Node, raw: String) -> Result<T> {
        if let Some(known) = T::from_code(&raw) {
            return Ok(known);
        }
        match self.config.unknown_enums {
            UnknownEnumPolicy::Strict => bail!(ErrorKind::UnknownEnumValue(node.path().to_owned(), raw)),
            UnknownEnumPolicy::Lenient => {
                log::warn!("Unrecognized value '{}' at '{}', keeping it as-is", raw, node.path());
                Ok(T::unrecognized(raw))
            }
        }
    }
}
