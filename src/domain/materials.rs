//! Crafting material names.
//!
//! Backs the "Material" toggle on the auction house list: when it is on,
//! only listings whose name appears here are shown.

/// Raw crafting materials: ores, ingots, wood, leather, fiber, cloth, flux.
pub const MATERIAL_NAMES: [&str; 38] = [
    // Ore
    "Copper Ore",
    "Tin Ore",
    "Iron Ore",
    "Silver Ore",
    "Gold Ore",
    "Mithril Ore",
    // Ingots
    "Copper Ingot",
    "Tin Ingot",
    "Bronze Ingot",
    "Iron Ingot",
    "Steel Ingot",
    "Silver Ingot",
    "Gold Ingot",
    "Mithril Ingot",
    // Wood
    "Ash Log",
    "Oak Log",
    "Pine Log",
    "Yew Log",
    "Ash Lumber",
    "Oak Lumber",
    "Pine Lumber",
    "Yew Lumber",
    // Leather
    "Rawhide",
    "Light Leather",
    "Medium Leather",
    "Heavy Leather",
    // Fiber
    "Flax Fiber",
    "Cotton Fiber",
    "Hemp Fiber",
    "Silk Fiber",
    // Cloth
    "Linen Cloth",
    "Cotton Cloth",
    "Hemp Cloth",
    "Silk Cloth",
    // Flux
    "Basic Flux",
    "Refined Flux",
    "Superior Flux",
    "Pristine Flux",
];

/// Whether `name` is a crafting material. Case-insensitive; surrounding
/// whitespace is ignored.
pub fn is_material(name: &str) -> bool {
    let name = name.trim();
    MATERIAL_NAMES
        .iter()
        .any(|m| m.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert!(is_material("iron ore"));
        assert!(is_material("Iron Ore"));
        assert!(is_material("IRON ORE"));
        assert!(is_material("  Silk Cloth "));
    }

    #[test]
    fn test_non_materials() {
        assert!(!is_material("Iron Sword"));
        assert!(!is_material(""));
        assert!(!is_material("Iron"));
    }

    #[test]
    fn test_table_has_no_duplicates() {
        for (i, a) in MATERIAL_NAMES.iter().enumerate() {
            for b in &MATERIAL_NAMES[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate material {a}");
            }
        }
    }
}
