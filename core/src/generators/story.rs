use serde::Serialize;
use std::fmt;

use crate::random::{choose, RandomSource};

pub const CHARACTERS: [&str; 5] = [
    "a brave knight",
    "a curious fox",
    "a retired pirate",
    "a clumsy wizard",
    "a tiny robot",
];

pub const LOCATIONS: [&str; 5] = [
    "a crooked tower",
    "the whispering forest",
    "a floating island",
    "an abandoned lighthouse",
    "the bottom of the sea",
];

pub const OBJECTS: [&str; 5] = [
    "a glowing map",
    "a singing teapot",
    "a cracked crystal",
    "an enchanted sock",
    "a rusty key",
];

pub const ANTAGONISTS: [&str; 5] = [
    "a grumpy dragon",
    "a swarm of angry bees",
    "an evil accountant",
    "a shadowy giant",
    "a very hungry troll",
];

pub const ACTIONS: [&str; 5] = [
    "solve an ancient riddle",
    "outrun a rolling boulder",
    "bake a perfect pie",
    "win a dance battle",
    "build a hot air balloon",
];

/// One pick from each vocabulary, dropped into a fixed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub character: &'static str,
    pub location: &'static str,
    pub object: &'static str,
    pub antagonist: &'static str,
    pub action: &'static str,
}

impl Story {
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        Story {
            character: *choose(rng, &CHARACTERS),
            location: *choose(rng, &LOCATIONS),
            object: *choose(rng, &OBJECTS),
            antagonist: *choose(rng, &ANTAGONISTS),
            action: *choose(rng, &ACTIONS),
        }
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Once upon a time, {} lived in {}. One day, they found {} and had to {} to escape {}.",
            self.character, self.location, self.object, self.action, self.antagonist
        )
    }
}
