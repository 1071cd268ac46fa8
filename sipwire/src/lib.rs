//! # sipwire
//!
//! A rust library that implements the SIP protocol message model:
//! construction, mutation, cloning and RFC 3261 wire-format serialization
//! of requests.
//!
//! Messages are plain owned values. A request belongs to exactly one
//! writer at a time; to hand a message to another task, clone it first
//! and transfer the clone (see [`message::Request`]).

pub mod headers;
pub mod message;

pub(crate) mod error;

pub use error::{Error, Result};
pub use message::Message;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
