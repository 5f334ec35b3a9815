//! Built-in worksheet views for Silent Gear material dumps

use super::types::{Field, ViewCatalog, ViewSpec};

// =============================================================================
// Column fills, one hue family per stat family
// =============================================================================

const FILL_NAME: &str = "#D9D9D9";
const FILL_ID: &str = "#F2F2F2";
const FILL_TYPE: &str = "#FCE4D6";
const FILL_TIER: &str = "#FFF2CC";
const FILL_RARITY: &str = "#D9E1F2";
const FILL_ENCHANTABILITY: &str = "#E4DFEC";
const FILL_TRAITS: &str = "#FFE699";

const FILL_DURABILITY: &str = "#C6EFCE";
const FILL_ARMOR_DURABILITY: &str = "#A9D08E";
const FILL_REPAIR_EFFICIENCY: &str = "#DDEBF7";

const FILL_HARVEST_LEVEL: &str = "#D6DCE4";
const FILL_HARVEST_SPEED: &str = "#ACB9CA";

const FILL_MELEE_DAMAGE: &str = "#F8CBAD";
const FILL_MAGIC_DAMAGE: &str = "#CCC0DA";
const FILL_RANGED_DAMAGE: &str = "#F4B084";
const FILL_ATTACK_SPEED: &str = "#FFD966";

const FILL_ARMOR: &str = "#BDD7EE";
const FILL_ARMOR_TOUGHNESS: &str = "#9BC2E6";
const FILL_MAGIC_ARMOR: &str = "#B4A7D6";
const FILL_KNOCKBACK_RESISTANCE: &str = "#8EAADB";

/// The default catalog: one worksheet per gear concern.
///
/// Every view leads with Name so the frozen identity column reads the same
/// across sheets.
pub fn builtin_catalog() -> ViewCatalog {
    ViewCatalog {
        views: vec![
            ViewSpec {
                name: "General".to_string(),
                fields: vec![
                    Field::new("Name", FILL_NAME),
                    Field::new("ID", FILL_ID),
                    Field::new("Type", FILL_TYPE),
                    Field::new("Tier", FILL_TIER),
                    Field::new("Rarity", FILL_RARITY),
                    Field::new("Enchantability", FILL_ENCHANTABILITY),
                    Field::new("Durability", FILL_DURABILITY),
                    Field::new("Armor Durability", FILL_ARMOR_DURABILITY),
                    Field::new("Traits", FILL_TRAITS),
                ],
            },
            ViewSpec {
                name: "Tools".to_string(),
                fields: vec![
                    Field::new("Name", FILL_NAME),
                    Field::new("Type", FILL_TYPE),
                    Field::new("Tier", FILL_TIER),
                    Field::new("Durability", FILL_DURABILITY),
                    Field::new("Harvest Level", FILL_HARVEST_LEVEL),
                    Field::new("Harvest Speed", FILL_HARVEST_SPEED),
                    Field::new("Repair Efficiency", FILL_REPAIR_EFFICIENCY),
                    Field::new("Enchantability", FILL_ENCHANTABILITY),
                    Field::new("Traits", FILL_TRAITS),
                ],
            },
            ViewSpec {
                name: "Weapons".to_string(),
                fields: vec![
                    Field::new("Name", FILL_NAME),
                    Field::new("Type", FILL_TYPE),
                    Field::new("Tier", FILL_TIER),
                    Field::new("Melee Damage", FILL_MELEE_DAMAGE),
                    Field::new("Magic Damage", FILL_MAGIC_DAMAGE),
                    Field::new("Ranged Damage", FILL_RANGED_DAMAGE),
                    Field::new("Attack Speed", FILL_ATTACK_SPEED),
                    Field::new("Durability", FILL_DURABILITY),
                    Field::new("Traits", FILL_TRAITS),
                ],
            },
            ViewSpec {
                name: "Armor".to_string(),
                fields: vec![
                    Field::new("Name", FILL_NAME),
                    Field::new("Type", FILL_TYPE),
                    Field::new("Tier", FILL_TIER),
                    Field::new("Armor", FILL_ARMOR),
                    Field::new("Armor Toughness", FILL_ARMOR_TOUGHNESS),
                    Field::new("Magic Armor", FILL_MAGIC_ARMOR),
                    Field::new("Knockback Resistance", FILL_KNOCKBACK_RESISTANCE),
                    Field::new("Armor Durability", FILL_ARMOR_DURABILITY),
                    Field::new("Traits", FILL_TRAITS),
                ],
            },
        ],
    }
}
