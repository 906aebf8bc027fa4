use std::env;
use std::error::Error;

use log::{debug, info};

use showcase_core::SeededRandom;

pub const SEED_VAR: &str = "SHOWCASE_SEED";

/// Everything the environment can tell us. Only the seed, so far.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Box<dyn Error>> {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => {
                let seed = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|err| format!("{} must be an unsigned integer, got {:?}: {}", SEED_VAR, raw, err))?;
                info!("[-] {} set, output is reproducible: {}", SEED_VAR, seed);
                Some(seed)
            }
            None => {
                debug!("[-] {} not set, seeding from entropy", SEED_VAR);
                None
            }
        };

        Ok(Settings { seed })
    }

    pub fn random_source(&self) -> SeededRandom {
        match self.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        }
    }
}
