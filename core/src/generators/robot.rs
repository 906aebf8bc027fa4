use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{bounded_count, GenError};
use crate::random::{choose, RandomSource};

pub const FULL_BATTERY: u32 = 100;
pub const RECHARGE_AMOUNT: u32 = 25;
pub const MAX_ROUTINE_STEPS: usize = 10_000;

pub const NAMES: [&str; 5] = ["Bolt", "Sprocket", "Widget", "Gizmo", "Clank"];

/// What a robot knows how to do. Each one is a fixed computation over the
/// battery level; nothing is attached at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    Walk,
    Talk,
    Dance,
    Recharge,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Walk,
        Capability::Talk,
        Capability::Dance,
        Capability::Recharge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Capability::Walk => "walk",
            Capability::Talk => "talk",
            Capability::Dance => "dance",
            Capability::Recharge => "recharge",
        }
    }

    /// Battery drained by one use. Recharge costs nothing.
    pub fn cost(&self) -> u32 {
        match self {
            Capability::Walk => 10,
            Capability::Talk => 5,
            Capability::Dance => 20,
            Capability::Recharge => 0,
        }
    }
}

impl FromStr for Capability {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .find(|capability| capability.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| GenError::invalid("capability", s, "unknown capability"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robot {
    pub name: &'static str,
    pub model: u32,
    battery: u32,
}

impl Robot {
    pub fn new(name: &'static str, model: u32) -> Self {
        Robot {
            name,
            model,
            battery: FULL_BATTERY,
        }
    }

    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let name = *choose(rng, &NAMES);
        // 100..=999 always fits
        let model = rng.range_inclusive(100, 999) as u32;
        Robot::new(name, model)
    }

    pub fn battery(&self) -> u32 {
        self.battery
    }

    /// Runs one capability and describes what happened. A capability the
    /// battery can't cover is refused and leaves the battery untouched.
    pub fn perform(&mut self, capability: Capability) -> String {
        let cost = capability.cost();
        if self.battery < cost {
            debug!(
                "[!] {} refused {}: battery {} < cost {}",
                self.name,
                capability.name(),
                self.battery,
                cost
            );
            return format!(
                "{} is too tired to {} (battery {}%)",
                self.name,
                capability.name(),
                self.battery
            );
        }

        self.battery = match capability {
            Capability::Recharge => (self.battery + RECHARGE_AMOUNT).min(FULL_BATTERY),
            _ => self.battery - cost,
        };

        let line = match capability {
            Capability::Walk => format!("{} walks forward: beep boop, step step", self.name),
            Capability::Talk => format!("{} says: \"Greetings, human!\"", self.name),
            Capability::Dance => format!("{} does the robot dance", self.name),
            Capability::Recharge => format!("{} plugs in and recharges", self.name),
        };
        format!("{}. Battery: {}%", line, self.battery)
    }

    pub fn perform_named(&mut self, name: &str) -> Result<String, GenError> {
        let capability = name.parse::<Capability>()?;
        Ok(self.perform(capability))
    }

    /// `steps` capabilities picked at random, performed in order. At most
    /// [`MAX_ROUTINE_STEPS`].
    pub fn routine(
        &mut self,
        rng: &mut dyn RandomSource,
        steps: i64,
    ) -> Result<Vec<String>, GenError> {
        let steps = bounded_count("steps", steps, MAX_ROUTINE_STEPS)?;
        let lines = (0..steps)
            .map(|_| {
                let capability = *choose(rng, &Capability::ALL);
                self.perform(capability)
            })
            .collect();
        Ok(lines)
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} [battery {}%]",
            self.name, self.model, self.battery
        )
    }
}
