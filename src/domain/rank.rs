//! Category ranking for the "Type" sort.
//!
//! Each listing is assigned a category rank from a fixed, hand-authored
//! table. Lower ranks sort earlier: weapons (0–30), then armor (40–50),
//! then jewelry (60–62), then anything unresolved (999).

use serde::{Deserialize, Serialize};

use super::archetype::{EquipmentType, ItemArchetype, WeaponType};
use super::listing::ListingRecord;

/// Primary sort key for the "Type" sort.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryRank(u16);

impl CategoryRank {
    /// Weapon kinds outside the ranked list.
    pub const OTHER_WEAPON: Self = Self(30);
    /// Armor slots outside the ranked list.
    pub const OTHER_ARMOR: Self = Self(50);
    /// Nothing matched. Sorts last.
    pub const UNKNOWN: Self = Self(999);

    /// Raw rank value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// True for the reserved fallback rank.
    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }
}

impl std::fmt::Display for CategoryRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CategoryRank> for u16 {
    fn from(rank: CategoryRank) -> Self {
        rank.0
    }
}

impl WeaponType {
    /// Rank within the weapon block.
    pub const fn rank(self) -> CategoryRank {
        let value = match self {
            Self::Sword1H => 0,
            Self::Sword2H => 1,
            Self::Axe1H => 2,
            Self::Axe2H => 3,
            Self::Dagger => 4,
            Self::Rapier => 5,
            Self::Polearm => 6,
            Self::Spear => 7,
            Self::Mace1H => 8,
            Self::Mace2H => 9,
            Self::Hammer1H => 10,
            Self::Hammer2H => 11,
            Self::Staff1H => 12,
            Self::Staff2H => 13,
            Self::Bow => 14,
            Self::Crossbow => 15,
            Self::Shield => 16,
            Self::OffhandAccessory => 17,
            Self::Unarmed | Self::Thrown | Self::Other => return CategoryRank::OTHER_WEAPON,
        };
        CategoryRank(value)
    }
}

impl EquipmentType {
    /// Rank of this slot when worn as armor or clothing.
    pub const fn armor_rank(self) -> CategoryRank {
        let value = match self {
            Self::Head | Self::Mask => 40,
            Self::ArmorShoulders => 41,
            Self::ArmorChest | Self::ClothingChest => 42,
            Self::ArmorHands | Self::ClothingHands => 43,
            Self::ArmorLegs | Self::ClothingLegs => 44,
            Self::ArmorFeet | Self::ClothingFeet => 45,
            Self::Waist => 46,
            _ => return CategoryRank::OTHER_ARMOR,
        };
        CategoryRank(value)
    }

    /// Rank of this slot as jewelry. Non-jewelry slots have none.
    pub const fn jewelry_rank(self) -> CategoryRank {
        match self {
            Self::JewelryNecklace => CategoryRank(60),
            Self::JewelryRing => CategoryRank(61),
            Self::JewelryEarring => CategoryRank(62),
            _ => CategoryRank::UNKNOWN,
        }
    }
}

impl ItemArchetype {
    /// Category rank for this archetype.
    pub const fn rank(self) -> CategoryRank {
        match self {
            Self::Weapon(weapon) => weapon.rank(),
            Self::Armor(slot) => slot.armor_rank(),
            Self::Jewelry(slot) => slot.jewelry_rank(),
            Self::Other => CategoryRank::UNKNOWN,
        }
    }
}

/// Category rank of a listing.
///
/// Total over all inputs: a missing record or a missing archetype both
/// resolve to [`CategoryRank::UNKNOWN`].
pub fn rank(record: Option<&ListingRecord>) -> CategoryRank {
    record
        .and_then(|r| r.archetype)
        .map_or(CategoryRank::UNKNOWN, ItemArchetype::rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_ranks_follow_table_order() {
        for (i, weapon) in WeaponType::RANKED.iter().enumerate() {
            assert_eq!(usize::from(weapon.rank().value()), i, "{weapon:?}");
        }
    }

    #[test]
    fn test_unlisted_weapon_is_thirty() {
        assert_eq!(WeaponType::Unarmed.rank(), CategoryRank::OTHER_WEAPON);
        assert_eq!(WeaponType::Other.rank().value(), 30);
    }

    #[test]
    fn test_armor_equivalences() {
        use EquipmentType::*;
        assert_eq!(Head.armor_rank(), Mask.armor_rank());
        assert_eq!(ArmorChest.armor_rank(), ClothingChest.armor_rank());
        assert_eq!(ArmorHands.armor_rank(), ClothingHands.armor_rank());
        assert_eq!(ArmorLegs.armor_rank(), ClothingLegs.armor_rank());
        assert_eq!(ArmorFeet.armor_rank(), ClothingFeet.armor_rank());
        assert_eq!(Head.armor_rank().value(), 40);
        assert_eq!(ArmorShoulders.armor_rank().value(), 41);
        assert_eq!(ClothingChest.armor_rank().value(), 42);
        assert_eq!(ClothingHands.armor_rank().value(), 43);
        assert_eq!(ClothingLegs.armor_rank().value(), 44);
        assert_eq!(ClothingFeet.armor_rank().value(), 45);
        assert_eq!(Waist.armor_rank().value(), 46);
        assert_eq!(Back.armor_rank(), CategoryRank::OTHER_ARMOR);
    }

    #[test]
    fn test_jewelry_slot_worn_as_armor_is_other_armor() {
        let a = ItemArchetype::Armor(EquipmentType::JewelryRing);
        assert_eq!(a.rank(), CategoryRank::OTHER_ARMOR);
    }

    #[test]
    fn test_jewelry_ranks() {
        assert_eq!(ItemArchetype::Jewelry(EquipmentType::JewelryNecklace).rank().value(), 60);
        assert_eq!(ItemArchetype::Jewelry(EquipmentType::JewelryRing).rank().value(), 61);
        assert_eq!(ItemArchetype::Jewelry(EquipmentType::JewelryEarring).rank().value(), 62);
        assert!(ItemArchetype::Jewelry(EquipmentType::Waist).rank().is_unknown());
    }

    #[test]
    fn test_absent_inputs_fall_back() {
        assert_eq!(rank(None), CategoryRank::UNKNOWN);

        let record = ListingRecord::new(
            "Mystery Box",
            None,
            crate::domain::listing::expiration_from_secs(0),
        );
        assert_eq!(rank(Some(&record)), CategoryRank::UNKNOWN);
        assert!(ItemArchetype::Other.rank().is_unknown());
    }
}
