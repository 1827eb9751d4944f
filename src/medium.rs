// src/medium.rs
use serde::{Serialize, Serializer};
use std::fmt;

/// Normalised category for the free-text medium of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    Watercolour,
    Oil,
    Acrylic,
    SyntheticPolymer,
    NaturalPigments,
    Gouache,
    Ink,
    MixedMedia,
    Bronze,
    Ceramic,
    Marble,
    Metal,
    Wood,
    WorksOnPaper,
    Enamel,
    Resin,
    Concrete,
}

/// Keyword rules, tested top to bottom; the first rule with any matching
/// keyword decides the category.
const RULES: &[(&[&str], Medium)] = &[
    (&["watercolour", "watercolor"], Medium::Watercolour),
    (&["oil"], Medium::Oil),
    (&["acrylic"], Medium::Acrylic),
    (&["synthetic polymer"], Medium::SyntheticPolymer),
    (
        &["natural pigment", "earth pigment", "ochre"],
        Medium::NaturalPigments,
    ),
    (&["gouache"], Medium::Gouache),
    (&["ink"], Medium::Ink),
    (&["mixed media"], Medium::MixedMedia),
    (&["bronze"], Medium::Bronze),
    (
        &["ceramic", "earthenware", "stoneware", "terracotta", "porcelain"],
        Medium::Ceramic,
    ),
    (&["marble"], Medium::Marble),
    (&["steel", "aluminium", "copper"], Medium::Metal),
    (&["wood", "cedar", "hardwood"], Medium::Wood),
    (&["charcoal", "pencil"], Medium::WorksOnPaper),
    (&["enamel"], Medium::Enamel),
    (&["resin"], Medium::Resin),
    (&["concrete"], Medium::Concrete),
    // neon works are grouped with installations
    (&["neon"], Medium::MixedMedia),
];

impl Medium {
    pub const ALL: [Medium; 17] = [
        Medium::Watercolour,
        Medium::Oil,
        Medium::Acrylic,
        Medium::SyntheticPolymer,
        Medium::NaturalPigments,
        Medium::Gouache,
        Medium::Ink,
        Medium::MixedMedia,
        Medium::Bronze,
        Medium::Ceramic,
        Medium::Marble,
        Medium::Metal,
        Medium::Wood,
        Medium::WorksOnPaper,
        Medium::Enamel,
        Medium::Resin,
        Medium::Concrete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Watercolour => "watercolour",
            Medium::Oil => "oil",
            Medium::Acrylic => "acrylic",
            Medium::SyntheticPolymer => "synthetic polymer",
            Medium::NaturalPigments => "natural pigments",
            Medium::Gouache => "gouache",
            Medium::Ink => "ink",
            Medium::MixedMedia => "mixed media",
            Medium::Bronze => "bronze",
            Medium::Ceramic => "ceramic",
            Medium::Marble => "marble",
            Medium::Metal => "metal",
            Medium::Wood => "wood",
            Medium::WorksOnPaper => "works on paper",
            Medium::Enamel => "enamel",
            Medium::Resin => "resin",
            Medium::Concrete => "concrete",
        }
    }

    /// Case-insensitive substring match against the keyword rules.
    /// Returns `None` when nothing matches.
    pub fn classify(raw: &str) -> Option<Medium> {
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, medium)| *medium)
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Medium {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// String form of [`Medium::classify`]: the category name, or `""` when the
/// text is absent or unrecognised.
pub fn simplify_medium(raw: Option<&str>) -> &'static str {
    raw.and_then(Medium::classify)
        .map(|m| m.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_category() {
        let cases = [
            ("Watercolour on paper", "watercolour"),
            ("watercolor and pencil", "watercolour"),
            ("oil on linen", "oil"),
            ("acrylic on board", "acrylic"),
            ("synthetic polymer paint on canvas", "synthetic polymer"),
            ("natural pigments on bark", "natural pigments"),
            ("earth pigments on canvas", "natural pigments"),
            ("Ochre on board", "natural pigments"),
            ("gouache", "gouache"),
            ("ink on rice paper", "ink"),
            ("mixed media installation", "mixed media"),
            ("cast bronze", "bronze"),
            ("glazed stoneware", "ceramic"),
            ("terracotta", "ceramic"),
            ("Carrara marble", "marble"),
            ("stainless steel", "metal"),
            ("copper sheet", "metal"),
            ("carved cedar", "wood"),
            ("charcoal on paper", "works on paper"),
            ("graphite pencil", "works on paper"),
            ("vitreous enamel", "enamel"),
            ("cast resin", "resin"),
            ("polished concrete", "concrete"),
            ("Neon tubing", "mixed media"),
        ];
        for (raw, expected) in cases {
            assert_eq!(simplify_medium(Some(raw)), expected, "raw medium {raw:?}");
        }
    }

    #[test]
    fn test_priority_first_match_wins() {
        // watercolour beats ink, oil beats acrylic, ink beats mixed media
        assert_eq!(Medium::classify("ink and watercolour"), Some(Medium::Watercolour));
        assert_eq!(Medium::classify("acrylic and oil"), Some(Medium::Oil));
        assert_eq!(Medium::classify("mixed media with ink"), Some(Medium::Ink));
        // plain substring match: "pink" contains "ink"
        assert_eq!(Medium::classify("pink pigment on paper"), Some(Medium::Ink));
        // "hardwood" is already caught by "wood"
        assert_eq!(Medium::classify("HARDWOOD"), Some(Medium::Wood));
        assert_eq!(Medium::classify("bronze and steel"), Some(Medium::Bronze));
    }

    #[test]
    fn test_oil_regardless_of_case() {
        for raw in ["OIL ON CANVAS", "Oil", "linseed oil paint", "oils"] {
            assert_eq!(Medium::classify(raw), Some(Medium::Oil), "{raw}");
        }
    }

    #[test]
    fn test_unrecognised_and_absent_are_empty() {
        assert_eq!(simplify_medium(Some("granite")), "");
        assert_eq!(simplify_medium(Some("")), "");
        assert_eq!(simplify_medium(None), "");
        assert_eq!(Medium::classify("photograph"), None);
    }

    #[test]
    fn test_all_names_are_distinct_and_non_empty() {
        let mut names: Vec<&str> = Medium::ALL.iter().map(|m| m.as_str()).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Medium::ALL.len());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Medium::WorksOnPaper).unwrap();
        assert_eq!(json, "\"works on paper\"");
        assert_eq!(Medium::NaturalPigments.to_string(), "natural pigments");
    }
}
