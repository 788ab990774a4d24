use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Currency ID to amount.
    #[serde(rename = "Balances", default)]
    pub balances: HashMap<String, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offers {
    #[serde(rename = "Offers", default)]
    pub offers: Vec<Offer>,
    #[serde(rename = "UpgradeCurrencyOffers", default)]
    pub upgrade_currency_offers: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "OfferID")]
    pub offer_id: String,
    #[serde(rename = "IsDirectPurchase", default)]
    pub is_direct_purchase: bool,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "Cost", default)]
    pub cost: HashMap<String, i64>,
    #[serde(rename = "Rewards", default)]
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "ItemTypeID")]
    pub item_type_id: String,
    #[serde(rename = "ItemID")]
    pub item_id: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storefront {
    #[serde(rename = "FeaturedBundle", default)]
    pub featured_bundle: Option<serde_json::Value>,
    #[serde(rename = "SkinsPanelLayout", default)]
    pub skins_panel: Option<SkinsPanelLayout>,
    #[serde(rename = "BonusStore", default)]
    pub bonus_store: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinsPanelLayout {
    #[serde(rename = "SingleItemOffers", default)]
    pub single_item_offers: Vec<String>,
    #[serde(rename = "SingleItemOffersRemainingDurationInSeconds", default)]
    pub remaining_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entitlements {
    #[serde(rename = "ItemTypeID", default)]
    pub item_type_id: String,
    #[serde(rename = "Entitlements", default)]
    pub entitlements: Vec<Entitlement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entitlement {
    #[serde(rename = "TypeID", default)]
    pub type_id: String,
    #[serde(rename = "ItemID")]
    pub item_id: String,
    #[serde(rename = "InstanceID", default)]
    pub instance_id: Option<String>,
}

/// Inventory categories and their fixed item-type IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Agents,
    Contracts,
    Sprays,
    GunBuddies,
    Cards,
    Skins,
    SkinVariants,
    Titles,
}

impl ItemType {
    pub const ALL: [ItemType; 8] = [
        ItemType::Agents,
        ItemType::Contracts,
        ItemType::Sprays,
        ItemType::GunBuddies,
        ItemType::Cards,
        ItemType::Skins,
        ItemType::SkinVariants,
        ItemType::Titles,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ItemType::Agents => "01bb38e1-da47-4e6a-9b3d-945fe4655707",
            ItemType::Contracts => "f85cb6f7-33e5-4dc8-b609-ec7212301948",
            ItemType::Sprays => "d5f120f8-ff8c-4aac-92ea-f2b5acbe9475",
            ItemType::GunBuddies => "dd3bf334-87f3-40bd-b043-682a57a8dc3a",
            ItemType::Cards => "3f296c07-64c3-494c-923b-fe692a4fa1bd",
            ItemType::Skins => "e7c63390-eda7-46e0-bb7a-a6abdacd2433",
            ItemType::SkinVariants => "3ad1b2b2-acdb-4524-852f-954a76ddae0a",
            ItemType::Titles => "de7caa6b-adf7-4588-bbd1-143831e786c6",
        }
    }

    /// Parse the snake_case category names (`"gun_buddies"`, `"skins"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let item = match name {
            "agents" => ItemType::Agents,
            "contracts" => ItemType::Contracts,
            "sprays" => ItemType::Sprays,
            "gun_buddies" => ItemType::GunBuddies,
            "cards" => ItemType::Cards,
            "skins" => ItemType::Skins,
            "skin_variants" => ItemType::SkinVariants,
            "titles" => ItemType::Titles,
            _ => return None,
        };
        Some(item)
    }
}
