use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

const CARDS_JSON: &str = include_str!("../assets/cards.json");

/// Rarity tiers in ranking order: `Ord` sorts Common lowest, Secret Rare highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    #[serde(rename = "Secret Rare")]
    SecretRare,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::UltraRare,
        Rarity::SecretRare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::SecretRare => "Secret Rare",
        }
    }

    pub fn from_label(label: &str) -> Option<Rarity> {
        Rarity::ALL.iter().copied().find(|r| r.label() == label)
    }

    /// CSS hook used by the rarity badges.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Rarity::UltraRare => "badge badge-ultra-rare",
            Rarity::SecretRare => "badge badge-secret-rare",
            Rarity::Rare => "badge badge-rare",
            _ => "badge badge-plain",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Condition {
    Mint,
    #[serde(rename = "Near Mint")]
    NearMint,
    #[serde(rename = "Lightly Played")]
    LightlyPlayed,
    #[serde(rename = "Moderately Played")]
    ModeratelyPlayed,
    #[serde(rename = "Heavily Played")]
    HeavilyPlayed,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Mint,
        Condition::NearMint,
        Condition::LightlyPlayed,
        Condition::ModeratelyPlayed,
        Condition::HeavilyPlayed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::NearMint => "Near Mint",
            Condition::LightlyPlayed => "Lightly Played",
            Condition::ModeratelyPlayed => "Moderately Played",
            Condition::HeavilyPlayed => "Heavily Played",
        }
    }

    pub fn from_label(label: &str) -> Option<Condition> {
        Condition::ALL.iter().copied().find(|c| c.label() == label)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Condition::Mint => "badge badge-mint",
            Condition::NearMint => "badge badge-near-mint",
            Condition::LightlyPlayed => "badge badge-lightly-played",
            Condition::ModeratelyPlayed => "badge badge-moderately-played",
            Condition::HeavilyPlayed => "badge badge-heavily-played",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub set: String,
    pub number: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub rarity: Rarity,
    pub condition: Condition,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub for_sale: bool,
    pub for_trade: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Card {
    pub fn price_display(&self) -> String {
        format!("€{:.2}", self.price)
    }

    pub fn type_badge_class(&self) -> String {
        format!(
            "badge badge-type-{}",
            self.card_type.to_ascii_lowercase().replace(' ', "-")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Parse(String),
    Empty,
    DuplicateId(String),
    InvalidPrice(String),
}

impl CatalogError {
    fn parse<E: fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Card data is not valid JSON: {}", msg),
            CatalogError::Empty => write!(f, "Card data does not contain any cards"),
            CatalogError::DuplicateId(id) => {
                write!(f, "Card id '{}' appears more than once", id)
            }
            CatalogError::InvalidPrice(id) => {
                write!(f, "Card '{}' has a negative or non-finite price", id)
            }
        }
    }
}

/// The immutable card collection. Loaded once at mount, never mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    pub fn load() -> Result<Catalog, CatalogError> {
        Catalog::from_json(CARDS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json).map_err(CatalogError::parse)?;

        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.clone()) {
                return Err(CatalogError::DuplicateId(card.id.clone()));
            }
            if !card.price.is_finite() || card.price < 0.0 {
                return Err(CatalogError::InvalidPrice(card.id.clone()));
            }
        }

        Ok(Catalog { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exact-id lookup. Absence is the caller's "not found" page, not an error.
    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.featured)
    }
}

pub const ALL_TYPES: &str = "All Types";
pub const ALL_RARITIES: &str = "All Rarities";
pub const ALL_CONDITIONS: &str = "All Conditions";

/// Type dropdown entries for the collection filters, sentinel first.
pub const FILTER_TYPES: [&str; 10] = [
    ALL_TYPES, "Fire", "Water", "Electric", "Grass", "Psychic", "Fighting", "Dark", "Steel",
    "Fairy",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.featured().count() >= 1);
    }

    #[test]
    fn find_returns_exact_record_or_none() {
        let catalog = Catalog::load().unwrap();
        let charizard = catalog.find("1").unwrap();
        assert_eq!(charizard.name, "Charizard");
        assert_eq!(charizard.rarity, Rarity::UltraRare);
        assert!(catalog.find("no-such-card").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"x","name":"A","set":"S","number":"1","type":"Fire","rarity":"Common",
             "condition":"Mint","price":1.0,"image_url":"u","for_sale":true,"for_trade":false},
            {"id":"x","name":"B","set":"S","number":"2","type":"Fire","rarity":"Common",
             "condition":"Mint","price":1.0,"image_url":"u","for_sale":true,"for_trade":false}
        ]"#;
        assert_eq!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId("x".to_string()))
        );
    }

    #[test]
    fn negative_prices_are_rejected() {
        let json = r#"[
            {"id":"x","name":"A","set":"S","number":"1","type":"Fire","rarity":"Common",
             "condition":"Mint","price":-5.0,"image_url":"u","for_sale":true,"for_trade":false}
        ]"#;
        assert_eq!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidPrice("x".to_string()))
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::from_json("[]"), Err(CatalogError::Empty));
    }

    #[test]
    fn rarity_labels_round_trip() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::from_label(rarity.label()), Some(rarity));
        }
        assert_eq!(Rarity::from_label("All Rarities"), None);
    }

    #[test]
    fn rarity_rank_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::UltraRare);
        assert!(Rarity::UltraRare < Rarity::SecretRare);
    }
}
