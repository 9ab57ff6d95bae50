use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type CardId = String;

pub const RARITY_LEGENDARY: &str = "LEGENDARY";
pub const RARITY_EPIC: &str = "EPIC";
pub const RARITY_RARE: &str = "RARE";
pub const RARITY_COMMON: &str = "COMMON";
pub const RARITY_FREE: &str = "FREE";

/// One card record as served by HearthstoneJSON.
///
/// Everything except `id` and `name` is optional on the wire. Fields with an
/// unexpected JSON type decode as `None` instead of failing the whole list.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub id: CardId,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub health: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32", skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub card_class: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, deserialize_with = "lenient_strings", skip_serializing_if = "Option::is_none")]
    pub mechanics: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub collectible: Option<bool>,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn cost_or_zero(&self) -> u32 {
        self.cost.unwrap_or(0)
    }

    pub fn attack_or_zero(&self) -> u32 {
        self.attack.unwrap_or(0)
    }

    pub fn health_or_zero(&self) -> u32 {
        self.health.unwrap_or(0)
    }

    pub fn is_collectible(&self) -> bool {
        self.collectible == Some(true)
    }

    /// Class label for display; cards without a class show as neutral.
    pub fn class_label(&self) -> &str {
        self.card_class.as_deref().unwrap_or("NEUTRAL")
    }

    /// Hero portraits and skins ship in the collectible feed but are not
    /// browsable cards.
    pub fn is_hero_record(&self) -> bool {
        self.id.contains("HERO")
            || self.card_type.as_deref() == Some("HERO")
            || self.set.as_deref() == Some("HERO_SKINS")
    }
}

/// Drops records without an id and hero portraits/skins.
pub fn browsable(cards: Vec<Card>) -> Vec<Card> {
    cards
        .into_iter()
        .filter(|c| !c.id.is_empty() && !c.is_hero_record())
        .collect()
}

fn lenient_u32<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(|v| v.as_u64()).and_then(|n| u32::try_from(n).ok()))
}

fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(de)?.unwrap_or_default())
}

fn lenient_strings<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|i| match i {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_bool<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(|v| v.as_bool()))
}
