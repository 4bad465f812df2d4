#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate error_chain;

pub mod model;
pub mod money;
pub mod api;
pub mod node;
pub mod mapper;
pub mod account;
pub mod config;
pub mod errors;
mod decode;
mod encode;
