//! Item archetypes - what a listed item *is*.
//!
//! An archetype is the static template behind a listing (a dagger, a
//! ring, a pair of leather boots), as opposed to the rolled instance.
//! The kind is resolved once when the record is built, so ranking
//! never has to probe the item at sort time.

use serde::{Deserialize, Serialize};

/// Weapon kinds offered on the auction house.
///
/// The first 18 variants are ranked in declaration order. Anything
/// else lands in the "other weapon" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Sword1H,
    Sword2H,
    Axe1H,
    Axe2H,
    Dagger,
    Rapier,
    Polearm,
    Spear,
    Mace1H,
    Mace2H,
    Hammer1H,
    Hammer2H,
    Staff1H,
    Staff2H,
    Bow,
    Crossbow,
    Shield,
    OffhandAccessory,
    Unarmed,
    Thrown,
    /// Any weapon kind this crate does not know by name.
    #[serde(other)]
    Other,
}

impl WeaponType {
    /// Ranked weapon kinds, in sort order.
    pub const RANKED: [Self; 18] = [
        Self::Sword1H,
        Self::Sword2H,
        Self::Axe1H,
        Self::Axe2H,
        Self::Dagger,
        Self::Rapier,
        Self::Polearm,
        Self::Spear,
        Self::Mace1H,
        Self::Mace2H,
        Self::Hammer1H,
        Self::Hammer2H,
        Self::Staff1H,
        Self::Staff2H,
        Self::Bow,
        Self::Crossbow,
        Self::Shield,
        Self::OffhandAccessory,
    ];
}

/// Equipment slots shared by armor, clothing and jewelry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Head,
    Mask,
    ArmorShoulders,
    ArmorChest,
    ClothingChest,
    ArmorHands,
    ClothingHands,
    ArmorLegs,
    ClothingLegs,
    ArmorFeet,
    ClothingFeet,
    Waist,
    Back,
    JewelryNecklace,
    JewelryRing,
    JewelryEarring,
    #[serde(other)]
    Other,
}

impl EquipmentType {
    /// True for the three jewelry slots.
    pub const fn is_jewelry(self) -> bool {
        matches!(
            self,
            Self::JewelryNecklace | Self::JewelryRing | Self::JewelryEarring
        )
    }
}

/// The kind of item behind a listing. Exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slot")]
pub enum ItemArchetype {
    Weapon(WeaponType),
    Armor(EquipmentType),
    Jewelry(EquipmentType),
    /// Any item kind without a ranked category, including kinds this
    /// crate does not know by name.
    #[serde(other)]
    Other,
}

impl ItemArchetype {
    /// Build an archetype from a bare equipment slot.
    ///
    /// Jewelry slots become [`ItemArchetype::Jewelry`], everything else
    /// is treated as armor.
    pub const fn from_equipment(slot: EquipmentType) -> Self {
        if slot.is_jewelry() {
            Self::Jewelry(slot)
        } else {
            Self::Armor(slot)
        }
    }
}

impl std::fmt::Display for ItemArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon(w) => write!(f, "Weapon/{w:?}"),
            Self::Armor(s) => write!(f, "Armor/{s:?}"),
            Self::Jewelry(s) => write!(f, "Jewelry/{s:?}"),
            Self::Other => write!(f, "Other"),
        }
    }
}
