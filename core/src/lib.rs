//! Generators behind the `showcase` demo: a fibonacci sequence plus
//! randomized weather, stories, robots, sales figures and an ASCII
//! pattern. Nothing here prints; every generator hands back a value
//! that formats to a block of text.

use log::warn;
use serde::Serialize;

pub mod error;
pub mod generators;
pub mod random;
pub mod sequence;

pub use crate::error::GenError;
pub use crate::random::{choose, RandomSource, SeededRandom};

/// JSON form of any generated record, for `[?]` debug dumps.
pub fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!("[!] Error serializing record to JSON: {}", err);
            String::new()
        }
    }
}
