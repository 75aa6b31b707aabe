// Data model shared by the recommendation client, the stores and the UI.
//
// Wire shape matches the generative-model output schema: camelCase field
// names, with `title`, `link`, `reason`, `description`, `pros`, `cons`
// required and everything else optional.

pub mod labels;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hungarian (default)
    #[default]
    Hu,
    /// English
    En,
    /// German
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hu, Language::En, Language::De];

    /// Two-letter language code as used on the wire and in the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hu => "hu",
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Next language in the cycle (for the TUI language toggle).
    pub fn next(&self) -> Language {
        match self {
            Language::Hu => Language::En,
            Language::En => Language::De,
            Language::De => Language::Hu,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hu" => Ok(Language::Hu),
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(format!("unknown language '{}' (expected hu, en or de)", other)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Sale mode of a listing that goes through the asset manager's
/// auction/tender process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleMode {
    /// Public auction
    Licit,
    /// Sealed-envelope tender
    Palyazat,
    /// Fixed-price rental, no bidding
    Fix,
}

impl SaleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleMode::Licit => "licit",
            SaleMode::Palyazat => "palyazat",
            SaleMode::Fix => "fix",
        }
    }

    /// Whether the listing carries a bidding process worth badging on a card.
    pub fn is_bidding(&self) -> bool {
        !matches!(self, SaleMode::Fix)
    }
}

/// Auction/tender details attached to a suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionInfo {
    /// Deadline as a display string (format is up to the listing source)
    pub deadline: String,
    #[serde(rename = "type")]
    pub mode: SaleMode,
    /// Deposit as a display string, currency included
    pub deposit: String,
}

/// One recommended property.
///
/// `link` doubles as the favorite identity key. It is a URL, not a
/// generated ID, so two listings sharing a link would collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySuggestion {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    /// Display string, not numeric ("240.000 Ft/hó", "€650/month")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    pub description: String,
    /// Canonical listing URL; unique favorite key
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Human-readable rationale for the recommendation
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_info: Option<AuctionInfo>,
}

/// Attribution returned by the model alongside its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// One full answer to a query. Produced wholesale per search and replaced
/// wholesale by the next one; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Natural-language summary of the result set
    pub summary: String,
    /// Ordered suggestion list; empty means "no match", not an error
    pub suggestions: Vec<PropertySuggestion>,
    #[serde(default)]
    pub sources: Vec<GroundingSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("fr".parse::<Language>().is_err());
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn language_cycle_visits_all() {
        let mut lang = Language::Hu;
        let mut seen = vec![lang];
        for _ in 0..2 {
            lang = lang.next();
            seen.push(lang);
        }
        assert_eq!(seen, vec![Language::Hu, Language::En, Language::De]);
        assert_eq!(lang.next(), Language::Hu);
    }

    #[test]
    fn suggestion_deserializes_wire_shape() {
        let json = r#"{
            "title": "Király Street Art Office",
            "link": "https://ingatlanok.pvh.hu/pvh123",
            "reason": "Prime pedestrian zone.",
            "description": "65 sqm office.",
            "pros": ["Prime location"],
            "cons": [],
            "imageUrl": "https://example.com/a.jpg",
            "auctionInfo": {"deadline": "2025.04.15", "type": "licit", "deposit": "€1500"}
        }"#;
        let s: PropertySuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.image_url.as_deref(), Some("https://example.com/a.jpg"));
        let auction = s.auction_info.unwrap();
        assert_eq!(auction.mode, SaleMode::Licit);
        assert!(auction.mode.is_bidding());
        // Optional fields absent from the wire default to empty
        assert!(s.id.is_empty());
        assert!(s.price.is_empty());
        assert!(s.tags.is_none());
    }

    #[test]
    fn suggestion_serializes_camel_case() {
        let s = PropertySuggestion {
            id: String::new(),
            title: "T".into(),
            price: String::new(),
            location: String::new(),
            description: "D".into(),
            link: "https://x".into(),
            image_url: Some("https://img".into()),
            reason: "R".into(),
            tags: None,
            pros: vec![],
            cons: vec![],
            auction_info: Some(AuctionInfo {
                deadline: "2025.05.01".into(),
                mode: SaleMode::Fix,
                deposit: "0 Ft".into(),
            }),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert!(v.get("imageUrl").is_some());
        assert_eq!(v["auctionInfo"]["type"], "fix");
        // Empty optionals are skipped entirely
        assert!(v.get("id").is_none());
        assert!(v.get("tags").is_none());
    }

    #[test]
    fn response_defaults_missing_sources() {
        let json = r#"{"summary": "ok", "suggestions": []}"#;
        let r: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert!(r.sources.is_empty());
    }
}
