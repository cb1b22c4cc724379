//! Data types for the concession dataset
//!
//! Field names follow the English vocabulary of the crate API; serde renames
//! map them onto the transliterated Bulgarian keys used by the dataset file.

use geo::Point;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One mining-concession entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    /// Unique identifier within the dataset. Ids containing the placeholder
    /// marker denote entries left unidentified by the upstream extraction.
    pub id: String,

    /// Concession holder
    #[serde(rename = "koncesioner", default)]
    pub concessionaire: String,

    /// Deposit (site) name
    #[serde(rename = "nahodishte", default)]
    pub deposit_name: String,

    /// Municipality
    #[serde(rename = "obshtina", default)]
    pub municipality: String,

    /// Region (oblast)
    #[serde(rename = "oblast", default)]
    pub region: String,

    /// Resource group (e.g. "Строителни материали")
    #[serde(rename = "grupa_bogatstvo", default)]
    pub resource_group: String,

    /// Resource type (e.g. "Варовици")
    #[serde(rename = "vid_bogatstvo", default)]
    pub resource_type: String,

    /// Concession term, free text (may be malformed or descriptive)
    #[serde(rename = "srok_koncesiya", default)]
    pub concession_term: String,

    /// Legal/administrative status
    #[serde(default)]
    pub status: String,

    /// Geocoded location, `None` when the entry could not be geocoded
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    /// Quality tier of the geocoding
    #[serde(rename = "coordinate_confidence", default)]
    pub confidence: Confidence,
}

/// Geocoded location. On disk this is the two-element array `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Converts to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.lat)?;
        tuple.serialize_element(&self.lng)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairVisitor;

        impl<'de> Visitor<'de> for PairVisitor {
            type Value = Coordinates;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [latitude, longitude] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Coordinates, A::Error> {
                let lat = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lng = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Coordinates { lat, lng })
            }
        }

        deserializer.deserialize_tuple(2, PairVisitor)
    }
}

/// Quality tier of a geocoded location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::None => "none",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            "none" => Ok(Confidence::None),
            other => Err(format!(
                "unknown confidence tier '{other}' (expected high, medium, low or none)"
            )),
        }
    }
}

/// The full dataset document: provenance metadata plus the deposit records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: Metadata,
    pub deposits: Vec<Deposit>,
}

/// Provenance metadata of the extraction run. Informational only; none of the
/// filter or aggregation logic reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub total_deposits: usize,

    #[serde(default)]
    pub geocoded_deposits: usize,

    #[serde(default)]
    pub success_rate: f64,

    #[serde(default)]
    pub confidence_distribution: ConfidenceDistribution,

    #[serde(default)]
    pub extraction_date: String,

    #[serde(default)]
    pub source_file: String,
}

/// Record counts per confidence tier, as reported by the extraction run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConfidenceDistribution {
    #[serde(default)]
    pub high: usize,
    #[serde(default)]
    pub medium: usize,
    #[serde(default)]
    pub low: usize,
    #[serde(default)]
    pub none: usize,
}

/// Closed enumeration of the string-valued record fields.
///
/// Replaces dynamic field lookup by name: every filterable field has an
/// explicit accessor, so a typo is a compile error rather than an empty
/// option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Concessionaire,
    DepositName,
    Municipality,
    Region,
    ResourceGroup,
    ResourceType,
    ConcessionTerm,
    Status,
}

impl TextField {
    /// Returns the field's value on a record.
    pub fn get<'a>(&self, deposit: &'a Deposit) -> &'a str {
        match self {
            TextField::Concessionaire => &deposit.concessionaire,
            TextField::DepositName => &deposit.deposit_name,
            TextField::Municipality => &deposit.municipality,
            TextField::Region => &deposit.region,
            TextField::ResourceGroup => &deposit.resource_group,
            TextField::ResourceType => &deposit.resource_type,
            TextField::ConcessionTerm => &deposit.concession_term,
            TextField::Status => &deposit.status,
        }
    }
}

impl std::str::FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concessionaire" => Ok(TextField::Concessionaire),
            "deposit-name" => Ok(TextField::DepositName),
            "municipality" => Ok(TextField::Municipality),
            "region" => Ok(TextField::Region),
            "resource-group" => Ok(TextField::ResourceGroup),
            "resource-type" => Ok(TextField::ResourceType),
            "concession-term" => Ok(TextField::ConcessionTerm),
            "status" => Ok(TextField::Status),
            other => Err(format!("unknown field '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_deserialize_dataset_keys() {
        let json = r#"{
            "id": "D-2001-042",
            "koncesioner": "Каолин ЕАД",
            "nahodishte": "Златна Панега",
            "obshtina": "Ябланица",
            "oblast": "Ловеч",
            "grupa_bogatstvo": "Строителни материали",
            "vid_bogatstvo": "Варовици",
            "srok_koncesiya": "25 години",
            "status": "съгласуван",
            "coordinates": [43.123, 24.181],
            "coordinate_confidence": "high"
        }"#;

        let deposit: Deposit = serde_json::from_str(json).unwrap();
        assert_eq!(deposit.concessionaire, "Каолин ЕАД");
        assert_eq!(deposit.deposit_name, "Златна Панега");
        assert_eq!(deposit.region, "Ловеч");
        assert_eq!(deposit.resource_type, "Варовици");
        assert_eq!(deposit.confidence, Confidence::High);

        let coords = deposit.coordinates.unwrap();
        assert_eq!(coords.lat, 43.123);
        assert_eq!(coords.lng, 24.181);
    }

    #[test]
    fn test_deposit_missing_fields_default_to_empty() {
        // Upstream extraction sometimes drops fields entirely
        let json = r#"{"id": "D-1", "coordinates": null}"#;
        let deposit: Deposit = serde_json::from_str(json).unwrap();

        assert_eq!(deposit.region, "");
        assert_eq!(deposit.status, "");
        assert!(deposit.coordinates.is_none());
        assert_eq!(deposit.confidence, Confidence::None);
    }

    #[test]
    fn test_coordinates_roundtrip_as_array() {
        let coords = Coordinates::new(42.7339, 25.4858);
        let json = serde_json::to_string(&coords).unwrap();
        assert_eq!(json, "[42.7339,25.4858]");

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coords);
    }

    #[test]
    fn test_coordinates_to_point_axis_order() {
        let point = Coordinates::new(42.7339, 25.4858).to_point();
        assert_eq!(point.x(), 25.4858); // longitude
        assert_eq!(point.y(), 42.7339); // latitude
    }

    #[test]
    fn test_text_field_accessor() {
        let deposit = Deposit {
            id: "D-1".to_string(),
            concessionaire: "Холсим АД".to_string(),
            deposit_name: "Пещера".to_string(),
            municipality: String::new(),
            region: "Пазарджик".to_string(),
            resource_group: String::new(),
            resource_type: "Мрамори".to_string(),
            concession_term: String::new(),
            status: "съгласуван".to_string(),
            coordinates: Some(Coordinates::new(42.0, 24.3)),
            confidence: Confidence::Medium,
        };

        assert_eq!(TextField::Region.get(&deposit), "Пазарджик");
        assert_eq!(TextField::ResourceType.get(&deposit), "Мрамори");
        assert_eq!(TextField::Municipality.get(&deposit), "");
    }

    #[test]
    fn test_text_field_from_str() {
        use std::str::FromStr;
        assert_eq!(TextField::from_str("region"), Ok(TextField::Region));
        assert_eq!(
            TextField::from_str("resource-type"),
            Ok(TextField::ResourceType)
        );
        assert!(TextField::from_str("oblast").is_err());
    }
}
