//! Loadouts and their comparable encoding.
//!
//! A loadout is what a trick assumes the player holds: seven movement
//! abilities, two upgrade counters, and small keys. Comparing two loadouts
//! field by field is a partial order; encoding each loadout as a set of
//! monotonic predicates ("has Slide", "clings >= 3", ...) turns that order
//! into a plain submask test.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest cling level that changes what a loadout can do.
pub const MAX_CLINGS: u32 = 6;

/// Highest kick level that changes what a loadout can do.
pub const MAX_KICKS: u32 = 4;

bitflags! {
    /// One bit per monotonic capability predicate.
    ///
    /// Order: the seven abilities, `clings >= 1..=6`, `kicks >= 1..=4`,
    /// then small keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LoadoutMask: u32 {
        const DREAM_BREAKER = 1 << 0;
        const STRIKEBREAK = 1 << 1;
        const SOUL_CUTTER = 1 << 2;
        const SUNSETTER = 1 << 3;
        const SLIDE = 1 << 4;
        const SOLAR_WIND = 1 << 5;
        const ASCENDANT_LIGHT = 1 << 6;
        const CLINGS_1 = 1 << 7;
        const CLINGS_2 = 1 << 8;
        const CLINGS_3 = 1 << 9;
        const CLINGS_4 = 1 << 10;
        const CLINGS_5 = 1 << 11;
        const CLINGS_6 = 1 << 12;
        const KICKS_1 = 1 << 13;
        const KICKS_2 = 1 << 14;
        const KICKS_3 = 1 << 15;
        const KICKS_4 = 1 << 16;
        const SMALL_KEYS = 1 << 17;
    }
}

const ABILITY_NAMES: [(LoadoutMask, &str); 7] = [
    (LoadoutMask::DREAM_BREAKER, "Dream Breaker"),
    (LoadoutMask::STRIKEBREAK, "Strikebreak"),
    (LoadoutMask::SOUL_CUTTER, "Soul Cutter"),
    (LoadoutMask::SUNSETTER, "Sunsetter"),
    (LoadoutMask::SLIDE, "Slide"),
    (LoadoutMask::SOLAR_WIND, "Solar Wind"),
    (LoadoutMask::ASCENDANT_LIGHT, "Ascendant Light"),
];

const CLINGS_SHIFT: u32 = 7;
const KICKS_SHIFT: u32 = CLINGS_SHIFT + MAX_CLINGS;

impl LoadoutMask {
    /// True if every predicate set in `self` is also set in `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        other.contains(self)
    }

    /// Number of cling levels encoded in this mask.
    pub fn clings(self) -> u32 {
        ladder_level(self.bits(), CLINGS_SHIFT, MAX_CLINGS)
    }

    /// Number of kick levels encoded in this mask.
    pub fn kicks(self) -> u32 {
        ladder_level(self.bits(), KICKS_SHIFT, MAX_KICKS)
    }

    /// Human-readable list of the capabilities this mask requires.
    pub fn summary(self) -> String {
        let mut parts: Vec<String> = ABILITY_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| (*name).to_string())
            .collect();
        if self.clings() > 0 {
            parts.push(format!("Clings {}", self.clings()));
        }
        if self.kicks() > 0 {
            parts.push(format!("Kicks {}", self.kicks()));
        }
        if self.contains(Self::SMALL_KEYS) {
            parts.push("Small Keys".to_string());
        }
        if parts.is_empty() {
            "nothing".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn ladder_level(bits: u32, shift: u32, max: u32) -> u32 {
    (0..max).take_while(|k| bits & (1 << (shift + k)) != 0).count() as u32
}

fn ladder_bits(level: u32, shift: u32, max: u32) -> u32 {
    (0..level.min(max)).fold(0, |acc, k| acc | (1 << (shift + k)))
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The capabilities a trick assumes.
///
/// Serialized compactly: fields at their default are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    #[serde(default, skip_serializing_if = "is_false")]
    pub dream_breaker: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikebreak: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub soul_cutter: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub sunsetter: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub slide: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub solar_wind: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ascendant_light: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub clings: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub kicks: u32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub small_keys: bool,
}

impl Loadout {
    /// Encode this loadout as its predicate mask.
    pub fn mask(&self) -> LoadoutMask {
        let abilities = [
            self.dream_breaker,
            self.strikebreak,
            self.soul_cutter,
            self.sunsetter,
            self.slide,
            self.solar_wind,
            self.ascendant_light,
        ];
        let mut mask = LoadoutMask::empty();
        for ((flag, _), held) in ABILITY_NAMES.iter().zip(abilities) {
            mask.set(*flag, held);
        }
        mask |= LoadoutMask::from_bits_retain(ladder_bits(self.clings, CLINGS_SHIFT, MAX_CLINGS));
        mask |= LoadoutMask::from_bits_retain(ladder_bits(self.kicks, KICKS_SHIFT, MAX_KICKS));
        mask.set(LoadoutMask::SMALL_KEYS, self.small_keys);
        mask
    }

    /// True if `other` meets every requirement of `self` at an equal or
    /// higher level.
    pub fn requires_at_most(&self, other: &Loadout) -> bool {
        self.mask().is_subset_of(other.mask())
    }

    /// True if this loadout assumes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.mask().is_empty()
    }
}

impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mask().summary())
    }
}
