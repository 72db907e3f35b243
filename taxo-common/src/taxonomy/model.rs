//! Serde model of the taxonomy dataset document
//!
//! Field names follow the dataset's capitalised JSON keys. Optional species
//! sections deserialize to empty defaults whether absent or `null`; empty
//! strings are treated as absent by every consumer.

use serde::{Deserialize, Deserializer, Serialize};

use super::Level;

/// Explicit `null` reads the same as an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A classification node: one rank's bilingual name
///
/// The English name is the equality key used for filtering. The Arabic name
/// is display-only and may repeat across distinct nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonNode {
    #[serde(rename = "Arabic", default, deserialize_with = "null_as_default")]
    pub arabic: String,
    #[serde(rename = "English", default, deserialize_with = "null_as_default")]
    pub english: String,
}

impl TaxonNode {
    pub fn new(arabic: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            arabic: arabic.into(),
            english: english.into(),
        }
    }

    /// A node is populated when at least one of its names is non-empty
    pub fn is_populated(&self) -> bool {
        !self.arabic.is_empty() || !self.english.is_empty()
    }
}

/// Bilingual free text (descriptions, habitats, captions)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "Arabic", default, deserialize_with = "null_as_default")]
    pub arabic: String,
    #[serde(rename = "English", default, deserialize_with = "null_as_default")]
    pub english: String,
}

/// A vernacular name bound to a region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalName {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Region", default, deserialize_with = "null_as_default")]
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalNames {
    #[serde(rename = "Arabic", default, deserialize_with = "null_as_default")]
    pub arabic: Vec<String>,
    #[serde(rename = "English", default, deserialize_with = "null_as_default")]
    pub english: Vec<String>,
    #[serde(rename = "Regional", default, deserialize_with = "null_as_default")]
    pub regional: Vec<RegionalName>,
}

impl LocalNames {
    pub fn is_empty(&self) -> bool {
        self.arabic.is_empty() && self.english.is_empty() && self.regional.is_empty()
    }
}

/// External reference attached to a species
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "URL", default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "Title", default, deserialize_with = "null_as_default")]
    pub title: String,
    /// "reference" for literature; anything else is rendered as an image link
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Image or video entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "URL", default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "Caption", default)]
    pub caption: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "Images", default, deserialize_with = "null_as_default")]
    pub images: Vec<MediaItem>,
    #[serde(rename = "Videos", default, deserialize_with = "null_as_default")]
    pub videos: Vec<MediaItem>,
}

/// Terminal species leaf of a taxonomy record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    #[serde(rename = "Arabic", default, deserialize_with = "null_as_default")]
    pub arabic: String,
    #[serde(rename = "English", default, deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: LocalizedText,
    #[serde(rename = "Habitat", default, deserialize_with = "null_as_default")]
    pub habitat: LocalizedText,
    #[serde(rename = "LocalNames", default, deserialize_with = "null_as_default")]
    pub local_names: LocalNames,
    #[serde(rename = "References", default, deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
    #[serde(rename = "Media", default, deserialize_with = "null_as_default")]
    pub media: Media,
}

impl Species {
    /// Searchable fields in scoring order
    ///
    /// Positions 0 and 1 are always the primary Arabic and English names.
    /// Absent fields are kept as empty strings so positions stay stable.
    pub fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.arabic.as_str(),
            self.english.as_str(),
            self.description.arabic.as_str(),
            self.description.english.as_str(),
            self.habitat.arabic.as_str(),
            self.habitat.english.as_str(),
        ];
        fields.extend(self.local_names.arabic.iter().map(String::as_str));
        fields.extend(self.local_names.english.iter().map(String::as_str));
        fields.extend(self.local_names.regional.iter().map(|r| r.name.as_str()));
        fields
    }
}

/// Six-node classification path, Kingdom first
pub type TaxonPath = [TaxonNode; Level::COUNT];

/// One full taxonomy path plus its terminal species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    #[serde(rename = "Kingdom", deserialize_with = "null_as_default")]
    pub kingdom: TaxonNode,
    #[serde(rename = "Phylum", deserialize_with = "null_as_default")]
    pub phylum: TaxonNode,
    #[serde(rename = "Class", deserialize_with = "null_as_default")]
    pub class: TaxonNode,
    #[serde(rename = "Order", deserialize_with = "null_as_default")]
    pub order: TaxonNode,
    #[serde(rename = "Family", deserialize_with = "null_as_default")]
    pub family: TaxonNode,
    #[serde(rename = "Genus", deserialize_with = "null_as_default")]
    pub genus: TaxonNode,
    #[serde(rename = "Species", deserialize_with = "null_as_default")]
    pub species: Species,
}

impl TaxonomyRecord {
    /// Classification node at the given level
    pub fn node(&self, level: Level) -> &TaxonNode {
        match level {
            Level::Kingdom => &self.kingdom,
            Level::Phylum => &self.phylum,
            Level::Class => &self.class,
            Level::Order => &self.order,
            Level::Family => &self.family,
            Level::Genus => &self.genus,
        }
    }

    /// Owned copy of the six classification nodes
    pub fn path(&self) -> TaxonPath {
        Level::ALL.map(|level| self.node(level).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_missing_optional_sections() {
        let species: Species = serde_json::from_str(r#"{"Arabic": "نمر", "English": "Tiger"}"#)
            .expect("minimal species should parse");

        assert_eq!(species.arabic, "نمر");
        assert!(species.description.arabic.is_empty());
        assert!(species.local_names.is_empty());
        assert!(species.references.is_empty());
        assert!(species.media.images.is_empty());
    }

    #[test]
    fn test_node_missing_english_defaults_to_empty() {
        let node: TaxonNode = serde_json::from_str(r#"{"Arabic": "حيوانات"}"#).unwrap();
        assert_eq!(node.english, "");
        assert!(node.is_populated());
        assert!(!TaxonNode::default().is_populated());
    }

    #[test]
    fn test_null_sections_read_as_absent() {
        let species: Species = serde_json::from_str(
            r#"{
                "Arabic": "نمر",
                "English": null,
                "Description": null,
                "Habitat": null,
                "LocalNames": {"Arabic": null, "English": ["Tiger"], "Regional": null},
                "References": null,
                "Media": {"Images": null, "Videos": [{"URL": "https://example.org/v.mp4", "Caption": null}]}
            }"#,
        )
        .unwrap();

        assert_eq!(species.english, "");
        assert_eq!(species.description, LocalizedText::default());
        assert_eq!(species.local_names.english, vec!["Tiger".to_string()]);
        assert!(species.local_names.arabic.is_empty());
        assert!(species.references.is_empty());
        assert!(species.media.images.is_empty());
        assert!(species.media.videos[0].caption.is_none());

        let species: Species =
            serde_json::from_str(r#"{"Arabic": "نمر", "LocalNames": null, "Media": null}"#).unwrap();
        assert!(species.local_names.is_empty());
        assert_eq!(species.media, Media::default());
    }

    #[test]
    fn test_search_fields_order() {
        let species: Species = serde_json::from_str(
            r#"{
                "Arabic": "ذئب",
                "English": "Wolf",
                "Description": {"Arabic": "وصف", "English": "desc"},
                "LocalNames": {
                    "Arabic": ["سرحان"],
                    "English": ["Grey wolf"],
                    "Regional": [{"Name": "ديب", "Region": "المغرب"}]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            species.search_fields(),
            vec!["ذئب", "Wolf", "وصف", "desc", "", "", "سرحان", "Grey wolf", "ديب"]
        );
    }

    #[test]
    fn test_media_caption_is_bilingual() {
        let media: Media = serde_json::from_str(
            r#"{"Images": [{"URL": "https://example.org/a.jpg", "Caption": {"Arabic": "صورة نمر"}}]}"#,
        )
        .unwrap();

        let caption = media.images[0].caption.as_ref().unwrap();
        assert_eq!(caption.arabic, "صورة نمر");
        assert_eq!(caption.english, "");
        assert!(media.videos.is_empty());
    }
}
