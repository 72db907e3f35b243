//! Display formatting for search results and species cards
//!
//! Produces plain strings and small view models; callers decide how to
//! render them.

use serde::Serialize;

use crate::taxonomy::{Level, LocalNames, MediaItem, TaxonomyRecord};

/// Shown when a description or habitat is absent
pub const MISSING_TEXT: &str = "—";
/// Fallback label for an image without an Arabic caption
pub const IMAGE_LABEL: &str = "صورة";
/// Fallback label for a video without an Arabic caption
pub const VIDEO_LABEL: &str = "فيديو";

const PATH_SEPARATOR: &str = " > ";

/// Arabic and regional local names, each group parenthesised
///
/// # Examples
/// ```
/// use taxo_common::taxonomy::{LocalNames, RegionalName};
/// use taxo_common::display::format_local_names;
///
/// let names = LocalNames {
///     arabic: vec!["ببر".into(), "نمر مخطط".into()],
///     english: vec![],
///     regional: vec![RegionalName { name: "نمر بنغالي".into(), region: "الهند".into() }],
/// };
/// assert_eq!(format_local_names(&names), "(ببر - نمر مخطط) (نمر بنغالي (الهند))");
/// ```
pub fn format_local_names(names: &LocalNames) -> String {
    let mut parts = Vec::new();

    if !names.arabic.is_empty() {
        parts.push(format!("({})", names.arabic.join(" - ")));
    }

    if !names.regional.is_empty() {
        let regional: Vec<String> = names
            .regional
            .iter()
            .map(|r| format!("{} ({})", r.name, r.region))
            .collect();
        parts.push(format!("({})", regional.join(" - ")));
    }

    parts.join(" ")
}

/// Arabic classification path, Kingdom first
pub fn path_string(record: &TaxonomyRecord) -> String {
    Level::ALL
        .iter()
        .map(|&level| record.node(level).arabic.as_str())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Rank-labelled classification lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// "مملكة … - شعبة … - …"
    pub arabic: String,
    /// "Kingdom … - Phylum … - …"
    pub english: String,
}

pub fn classification_strings(record: &TaxonomyRecord) -> Classification {
    let arabic = Level::ALL
        .iter()
        .map(|&level| format!("{} {}", level.label_ar(), record.node(level).arabic))
        .collect::<Vec<_>>()
        .join(" - ");
    let english = Level::ALL
        .iter()
        .map(|&level| format!("{} {}", level.label_en(), record.node(level).english))
        .collect::<Vec<_>>()
        .join(" - ");
    Classification { arabic, english }
}

/// Kind of outbound link on a species card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Reference,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub label: String,
    pub kind: LinkKind,
}

/// Everything a species card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCard {
    pub name: String,
    /// Empty when the species has no Arabic or regional local names
    pub local_names: String,
    pub description: String,
    pub habitat: String,
    pub classification: Classification,
    pub links: Vec<Link>,
}

impl SpeciesCard {
    pub fn from_record(record: &TaxonomyRecord) -> Self {
        let species = &record.species;

        let mut links: Vec<Link> = species
            .references
            .iter()
            .map(|reference| Link {
                url: reference.url.clone(),
                label: reference.title.clone(),
                kind: if reference.kind == "reference" {
                    LinkKind::Reference
                } else {
                    LinkKind::Image
                },
            })
            .collect();
        links.extend(
            species
                .media
                .images
                .iter()
                .map(|item| media_link(item, LinkKind::Image, IMAGE_LABEL)),
        );
        links.extend(
            species
                .media
                .videos
                .iter()
                .map(|item| media_link(item, LinkKind::Video, VIDEO_LABEL)),
        );

        Self {
            name: species.arabic.clone(),
            local_names: format_local_names(&species.local_names),
            description: or_missing(&species.description.arabic),
            habitat: or_missing(&species.habitat.arabic),
            classification: classification_strings(record),
            links,
        }
    }
}

fn media_link(item: &MediaItem, kind: LinkKind, fallback: &str) -> Link {
    let label = item
        .caption
        .as_ref()
        .map(|caption| caption.arabic.as_str())
        .filter(|caption| !caption.is_empty())
        .unwrap_or(fallback);
    Link {
        url: item.url.clone(),
        label: label.to_string(),
        kind,
    }
}

fn or_missing(text: &str) -> String {
    if text.is_empty() {
        MISSING_TEXT.to_string()
    } else {
        text.to_string()
    }
}
