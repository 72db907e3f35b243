//! Shared test data

use super::{Species, TaxonNode, TaxonomyRecord};

/// Record whose classification nodes carry the same Arabic and English name
pub(crate) fn record(path: [&str; 6], species_ar: &str, species_en: &str) -> TaxonomyRecord {
    record_with(
        path.map(|name| TaxonNode::new(name, name)),
        Species {
            arabic: species_ar.to_string(),
            english: species_en.to_string(),
            ..Default::default()
        },
    )
}

pub(crate) fn record_with(path: [TaxonNode; 6], species: Species) -> TaxonomyRecord {
    let [kingdom, phylum, class, order, family, genus] = path;
    TaxonomyRecord {
        kingdom,
        phylum,
        class,
        order,
        family,
        genus,
        species,
    }
}

pub(crate) const SAMPLE_JSON: &str = r#"{
  "taxonomy": [
    {
      "Kingdom": {"Arabic": "الحيوانات", "English": "Animalia"},
      "Phylum": {"Arabic": "الحبليات", "English": "Chordata"},
      "Class": {"Arabic": "الثدييات", "English": "Mammalia"},
      "Order": {"Arabic": "آكلات اللحوم", "English": "Carnivora"},
      "Family": {"Arabic": "السنوريات", "English": "Felidae"},
      "Genus": {"Arabic": "النمر", "English": "Panthera"},
      "Species": {
        "Arabic": "نمر",
        "English": "Tiger",
        "Description": {"Arabic": "قط كبير مخطط", "English": "Large striped cat"},
        "Habitat": {"Arabic": "الغابات", "English": "Forests"},
        "LocalNames": {
          "Arabic": ["ببر"],
          "English": ["Bengal tiger"],
          "Regional": [{"Name": "نمر بنغالي", "Region": "الهند"}]
        },
        "References": [
          {"URL": "https://example.org/tiger", "Title": "Tiger facts", "Type": "reference"},
          {"URL": "https://example.org/tiger.jpg", "Title": "Tiger photo", "Type": "image"}
        ],
        "Media": {
          "Images": [{"URL": "https://example.org/t1.jpg", "Caption": {"Arabic": "نمر في الغابة", "English": "Tiger in forest"}}],
          "Videos": [{"URL": "https://example.org/t.mp4"}]
        }
      }
    },
    {
      "Kingdom": {"Arabic": "الحيوانات", "English": "Animalia"},
      "Phylum": {"Arabic": "الحبليات", "English": "Chordata"},
      "Class": {"Arabic": "الثدييات", "English": "Mammalia"},
      "Order": {"Arabic": "آكلات اللحوم", "English": "Carnivora"},
      "Family": {"Arabic": "السنوريات", "English": "Felidae"},
      "Genus": {"Arabic": "النمر", "English": "Panthera"},
      "Species": {
        "Arabic": "أسد",
        "English": "Lion",
        "Description": {"Arabic": "يعيش في السافانا ويتنافس مع النمر", "English": "Lives in the savanna"}
      }
    },
    {
      "Kingdom": {"Arabic": "الحيوانات", "English": "Animalia"},
      "Phylum": {"Arabic": "مفصليات الأرجل", "English": "Arthropoda"},
      "Class": {"Arabic": "الحشرات", "English": "Insecta"},
      "Order": {"Arabic": "حرشفيات الأجنحة", "English": "Lepidoptera"},
      "Family": {"Arabic": "الحورية", "English": "Nymphalidae"},
      "Genus": {"Arabic": "دانوس", "English": "Danaus"},
      "Species": {
        "Arabic": "فراشة الملك",
        "English": "Monarch butterfly",
        "Description": {"Arabic": "فراشة مهاجرة", "English": "Migratory butterfly"}
      }
    }
  ]
}"#;
