use serde::Serialize;
use crate::account::Account;
use crate::config::DecodeConfig;
use crate::errors::*;
use crate::mapper::Mapper;
use crate::node::Node;

pub trait Coinbase {
    fn new(config: DecodeConfig) -> Self;
}

impl Coinbase for Account {
    fn new(config: DecodeConfig) -> Self {
        Account {
            mapper: Mapper::new(config),
        }
    }
}

/**
 * A record that can be built from one node of a parsed account document.
 */
pub trait Decode: Sized {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self>;
}

/**
 * An element of a paginated collection. `COLLECTION` is the key holding the
 * array; `ELEMENT` is the single key each entry is wrapped in, if any.
 */
pub trait Listed: Decode + Serialize {
    const COLLECTION: &'static str;
    const ELEMENT: Option<&'static str>;
}

/**
 * A coded wire value. Codes without a known mapping are kept verbatim in
 * an `Unrecognized` variant when the mapper runs leniently.
 */
pub trait Coded: Sized {
    fn from_code(raw: &str) -> Option<Self>;
    fn unrecognized(raw: String) -> Self;
    fn code(&self) -> &str;
}
