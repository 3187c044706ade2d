use crate::domain::utils::{collation_key, non_blank};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CLUB: &str = "N/A";
pub const DEFAULT_TYPE: &str = "Base";
pub const DEFAULT_POSITION: &str = "-";

/// Canonical card identifier.
///
/// Source data keys cards by `id` or, for older exports, by `number`; both
/// land here as text. Numeric identifiers serialise back as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for CardId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.numeric() {
            Some(number) if number.to_string() == self.0 => serializer.serialize_u64(number),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::Epic => 4,
            Rarity::Legendary => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Unknown or missing rarity ranks below every known tier.
#[must_use]
pub fn rarity_rank(rarity: Option<Rarity>) -> u8 {
    rarity.map_or(0, Rarity::rank)
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown rarity '{0}'")]
pub struct UnknownRarity(String);

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match collation_key(label.trim()).as_str() {
            "common" | "commune" | "commun" => Ok(Rarity::Common),
            "uncommon" | "peu commune" | "peu commun" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "epic" | "epique" => Ok(Rarity::Epic),
            "legendary" | "legendaire" => Ok(Rarity::Legendary),
            _ => Err(UnknownRarity(label.to_string())),
        }
    }
}

impl Display for Rarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Card '{0}' has neither an id nor a number")]
    MissingId(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    /// Effective price, already resolved from `price_avg` / `price`.
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Card {
    #[must_use]
    pub fn rarity_rank(&self) -> u8 {
        rarity_rank(self.rarity)
    }
}

/// 2^63; whole floats below it convert to `i64` exactly.
const I64_FLOAT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// JSON scalar as it shows up in hand-maintained catalog exports.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Scalar::Integer(number) => number.to_string(),
            Scalar::Unsigned(number) => number.to_string(),
            #[allow(clippy::cast_possible_truncation)]
            Scalar::Float(number)
                if number.fract() == 0.0 && number.abs() < I64_FLOAT_LIMIT =>
            {
                (number as i64).to_string()
            }
            Scalar::Float(number) => number.to_string(),
            Scalar::Text(text) => text.trim().to_string(),
        };

        (!text.is_empty()).then_some(text)
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Integer(number) => Some(*number as f64),
            Scalar::Unsigned(number) => Some(*number as f64),
            Scalar::Float(number) => Some(*number),
            Scalar::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Card exactly as found in the catalog document or in storage, before
/// the id and price fallbacks are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCard {
    id: Option<Scalar>,
    number: Option<Scalar>,
    name: Option<String>,
    #[serde(alias = "team")]
    club: Option<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    #[serde(alias = "pos")]
    position: Option<String>,
    rarity: Option<String>,
    price: Option<Scalar>,
    price_avg: Option<Scalar>,
    image: Option<String>,
}

impl RawCard {
    /// `price_avg` first, then `price`; zero, negative or unreadable values
    /// fall through to the next candidate.
    fn effective_price(&self) -> f64 {
        let positive = |scalar: &Option<Scalar>| {
            scalar
                .as_ref()
                .and_then(Scalar::as_number)
                .filter(|price| price.is_finite() && *price > 0.0)
        };

        positive(&self.price_avg)
            .or_else(|| positive(&self.price))
            .unwrap_or(0.0)
    }
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let price = raw.effective_price();
        let name = non_blank(raw.name).unwrap_or_default();

        let id = raw
            .id
            .and_then(Scalar::into_text)
            .or_else(|| raw.number.and_then(Scalar::into_text))
            .map(|id| CardId::from(id.as_str()))
            .ok_or_else(|| CardError::MissingId(name.clone()))?;

        Ok(Self {
            id,
            name,
            club: non_blank(raw.club),
            card_type: non_blank(raw.card_type),
            position: non_blank(raw.position),
            rarity: non_blank(raw.rarity).and_then(|label| label.parse().ok()),
            price,
            image: non_blank(raw.image),
        })
    }
}

/// User-authored card fields for the collection and sale forms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomCard {
    pub name: String,
    pub club: Option<String>,
    pub card_type: Option<String>,
    pub position: Option<String>,
    pub rarity: Option<Rarity>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl CustomCard {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn into_card(self, id: CardId) -> Card {
        Card {
            id,
            name: self.name.trim().to_string(),
            club: non_blank(self.club).or_else(|| Some(String::from(DEFAULT_CLUB))),
            card_type: non_blank(self.card_type).or_else(|| Some(String::from(DEFAULT_TYPE))),
            position: non_blank(self.position).or_else(|| Some(String::from(DEFAULT_POSITION))),
            rarity: self.rarity,
            price: self
                .price
                .filter(|price| price.is_finite() && *price > 0.0)
                .unwrap_or(0.0),
            image: non_blank(self.image),
        }
    }
}
