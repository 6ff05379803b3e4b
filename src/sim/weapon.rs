//! Weapon registry
//!
//! A closed, read-only table. Exactly one weapon is active at a time; the
//! switch command cycles through the table in declaration order.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Weapon identifiers (the closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponId {
    /// Fast, low damage
    #[default]
    Rapid,
    /// Slow, high damage
    Heavy,
}

/// Visual tag carried by bullets so the renderer can tell shots apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Blue,
    Red,
}

/// Static weapon definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weapon {
    pub id: WeaponId,
    /// Minimum seconds between shots
    pub fire_interval: f64,
    /// Health removed from an enemy per hit
    pub damage: i32,
    /// Bullet travel per tick
    pub speed: f32,
    pub tint: Tint,
}

/// Registry order is the switch order
pub static WEAPONS: [Weapon; 2] = [
    Weapon {
        id: WeaponId::Rapid,
        fire_interval: 0.15,
        damage: 10,
        speed: 10.0,
        tint: Tint::Blue,
    },
    Weapon {
        id: WeaponId::Heavy,
        fire_interval: 0.5,
        damage: 25,
        speed: 12.0,
        tint: Tint::Red,
    },
];

impl WeaponId {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponId::Rapid => "rapid",
            WeaponId::Heavy => "heavy",
        }
    }

    /// Registry entry for this id
    pub fn weapon(self) -> &'static Weapon {
        // Every variant has exactly one table row
        match self {
            WeaponId::Rapid => &WEAPONS[0],
            WeaponId::Heavy => &WEAPONS[1],
        }
    }

    /// Next weapon in registry order, wrapping around
    pub fn next(self) -> WeaponId {
        let idx = WEAPONS.iter().position(|w| w.id == self).unwrap_or(0);
        WEAPONS[(idx + 1) % WEAPONS.len()].id
    }
}

/// Look up a weapon by its string id
pub fn lookup(id: &str) -> Result<&'static Weapon> {
    WEAPONS
        .iter()
        .find(|w| w.id.as_str() == id)
        .ok_or_else(|| SimError::UnknownWeapon { id: id.to_string() })
}
