//! Creature stat table.

use rand::Rng;
use std::fmt;

/// Every creature type the game knows about.
///
/// Only `Standard` and `Dog` are picked by the spawn director; `Crawler` and
/// `Big` are valid and fully statted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    Standard,
    Dog,
    Crawler,
    Big,
}

/// Fixed parameters of a creature type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureStats {
    pub base_speed: f32,
    /// Upper bound of the random speed bonus rolled at spawn.
    pub speed_jitter: f32,
    pub health: i32,
}

impl CreatureKind {
    pub fn stats(self) -> CreatureStats {
        match self {
            CreatureKind::Standard => CreatureStats {
                base_speed: 4.0,
                speed_jitter: 2.0,
                health: 1,
            },
            CreatureKind::Dog => CreatureStats {
                base_speed: 8.0,
                speed_jitter: 2.0,
                health: 1,
            },
            CreatureKind::Crawler => CreatureStats {
                base_speed: 3.0,
                speed_jitter: 1.0,
                health: 1,
            },
            CreatureKind::Big => CreatureStats {
                base_speed: 2.0,
                speed_jitter: 1.0,
                health: 5,
            },
        }
    }

    /// Roll a movement speed in `[base, base + jitter)`.
    pub fn roll_speed(self, rng: &mut impl Rng) -> f32 {
        let stats = self.stats();
        stats.base_speed + rng.gen::<f32>() * stats.speed_jitter
    }

    pub fn name(self) -> &'static str {
        match self {
            CreatureKind::Standard => "standard",
            CreatureKind::Dog => "dog",
            CreatureKind::Crawler => "crawler",
            CreatureKind::Big => "big",
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
