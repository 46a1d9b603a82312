//! Filter presets: named baselines layered under the live sliders.
//!
//! A preset overrides none, some, or all of brightness, contrast, and
//! saturation, and may carry a flat [`TintColor`] overlay. Absent fields
//! contribute no change (brightness 0, contrast 1, saturation 1). Presets
//! never define temperature or tint; those come only from the sliders.
//!
//! The built-in catalog is created once on first use and is read-only
//! afterwards. Listing and searching by category is a convenience for
//! hosts; the composer only ever sees a single `Option<&FilterPreset>`.

use crate::color::TintColor;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const POPULAR: &str = "Popular";
pub const VINTAGE: &str = "Vintage";
pub const MODERN: &str = "Modern";
pub const BLACK_AND_WHITE: &str = "Black & White";
pub const WARM: &str = "Warm";
pub const COOL: &str = "Cool";
pub const VIBRANT: &str = "Vibrant";
pub const MUTED: &str = "Muted";
pub const CINEMATIC: &str = "Cinematic";
pub const PORTRAIT: &str = "Portrait";
pub const LANDSCAPE: &str = "Landscape";
pub const FOOD: &str = "Food";
pub const URBAN: &str = "Urban";
pub const NATURE: &str = "Nature";
pub const ARTISTIC: &str = "Artistic";

/// Category labels in catalog order.
pub const CATEGORIES: &[&str] = &[
    POPULAR,
    VINTAGE,
    MODERN,
    BLACK_AND_WHITE,
    WARM,
    COOL,
    VIBRANT,
    MUTED,
    CINEMATIC,
    PORTRAIT,
    LANDSCAPE,
    FOOD,
    URBAN,
    NATURE,
    ARTISTIC,
];

/// Id of the identity preset.
pub const ORIGINAL_ID: &str = "none";

/// A named bundle of optional baseline overrides plus display metadata.
///
/// Serialized in camelCase (`tintColor`) so presets saved or shared by
/// other clients round-trip. Unknown fields are ignored on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<TintColor>,
}

impl FilterPreset {
    /// A preset with no overrides.
    pub fn new(id: &str, name: &str, category: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
            brightness: None,
            contrast: None,
            saturation: None,
            tint_color: None,
        }
    }

    pub fn brightness(mut self, value: f64) -> Self {
        self.brightness = Some(value);
        self
    }

    pub fn contrast(mut self, value: f64) -> Self {
        self.contrast = Some(value);
        self
    }

    pub fn saturation(mut self, value: f64) -> Self {
        self.saturation = Some(value);
        self
    }

    pub fn tint(mut self, color: TintColor) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// True when the preset changes nothing: no overrides, no overlay.
    pub fn is_identity(&self) -> bool {
        self.brightness.is_none()
            && self.contrast.is_none()
            && self.saturation.is_none()
            && self.tint_color.is_none()
    }
}

static CATALOG: LazyLock<Vec<FilterPreset>> = LazyLock::new(|| {
    vec![
        // Popular
        FilterPreset::new("none", "Original", POPULAR, "⚪"),
        FilterPreset::new("vivid", "Vivid", POPULAR, "🌈")
            .brightness(0.05)
            .contrast(1.15)
            .saturation(1.4),
        FilterPreset::new("dramatic", "Dramatic", POPULAR, "⚡")
            .brightness(-0.1)
            .contrast(1.5)
            .saturation(1.2),
        FilterPreset::new("natural", "Natural", POPULAR, "🍃")
            .brightness(0.02)
            .contrast(1.05)
            .saturation(0.95),
        FilterPreset::new("classic", "Classic", POPULAR, "📷")
            .contrast(1.2)
            .saturation(0.9),
        FilterPreset::new("soft", "Soft", POPULAR, "☁️")
            .brightness(0.1)
            .contrast(0.85)
            .saturation(0.9),
        // Vintage
        FilterPreset::new("vintage", "Vintage", VINTAGE, "📸")
            .brightness(0.05)
            .contrast(0.95)
            .saturation(0.8)
            .tint(TintColor::new(255, 230, 200, 0.08)),
        FilterPreset::new("retro", "Retro", VINTAGE, "🎞️")
            .contrast(1.15)
            .saturation(1.2)
            .tint(TintColor::new(255, 200, 150, 0.06)),
        FilterPreset::new("sepia", "Sepia", VINTAGE, "🟤")
            .brightness(0.05)
            .saturation(0.4)
            .tint(TintColor::new(112, 66, 20, 0.25)),
        FilterPreset::new("faded", "Faded", VINTAGE, "🌫️")
            .brightness(0.15)
            .contrast(0.8)
            .saturation(0.7),
        FilterPreset::new("oldfilm", "Old Film", VINTAGE, "🎬")
            .contrast(1.1)
            .saturation(0.6)
            .tint(TintColor::new(230, 220, 180, 0.1)),
        FilterPreset::new("polaroid", "Polaroid", VINTAGE, "📷")
            .brightness(0.08)
            .contrast(1.05)
            .saturation(0.85)
            .tint(TintColor::new(255, 240, 220, 0.07)),
        FilterPreset::new("kodachrome", "Kodachrome", VINTAGE, "🎨")
            .brightness(-0.05)
            .contrast(1.2)
            .saturation(1.3),
        FilterPreset::new("1977", "1977", VINTAGE, "✨")
            .brightness(0.1)
            .contrast(1.05)
            .saturation(1.1)
            .tint(TintColor::new(255, 180, 180, 0.08)),
        // Modern
        FilterPreset::new("modern", "Modern", MODERN, "💎")
            .brightness(0.03)
            .contrast(1.25)
            .saturation(1.1),
        FilterPreset::new("crisp", "Crisp", MODERN, "✨")
            .brightness(0.05)
            .contrast(1.35)
            .saturation(1.05),
        FilterPreset::new("clean", "Clean", MODERN, "⚪")
            .brightness(0.08)
            .contrast(1.1)
            .saturation(0.95),
        FilterPreset::new("bright", "Bright", MODERN, "☀️")
            .brightness(0.2)
            .contrast(1.05)
            .saturation(1.15),
        FilterPreset::new("airy", "Airy", MODERN, "🤍")
            .brightness(0.15)
            .contrast(0.9)
            .saturation(0.85),
        FilterPreset::new("minimalist", "Minimalist", MODERN, "⬜")
            .brightness(0.1)
            .contrast(1.15)
            .saturation(0.7),
        // Black & White
        FilterPreset::new("bw", "B&W", BLACK_AND_WHITE, "⚫")
            .contrast(1.1)
            .saturation(0.0),
        FilterPreset::new("noir", "Noir", BLACK_AND_WHITE, "🎭")
            .brightness(-0.1)
            .contrast(1.5)
            .saturation(0.0),
        FilterPreset::new("mono", "Mono", BLACK_AND_WHITE, "⬛")
            .contrast(1.2)
            .saturation(0.0),
        FilterPreset::new("grayscale", "Grayscale", BLACK_AND_WHITE, "🌑")
            .saturation(0.0),
        FilterPreset::new("stark", "Stark", BLACK_AND_WHITE, "⚪")
            .brightness(0.05)
            .contrast(1.8)
            .saturation(0.0),
        FilterPreset::new("soft-bw", "Soft B&W", BLACK_AND_WHITE, "🌫️")
            .brightness(0.1)
            .contrast(0.9)
            .saturation(0.0),
        FilterPreset::new("high-contrast", "High Contrast", BLACK_AND_WHITE, "⚡")
            .contrast(2.0)
            .saturation(0.0),
        FilterPreset::new("vintage-bw", "Vintage B&W", BLACK_AND_WHITE, "📷")
            .brightness(-0.05)
            .contrast(0.95)
            .saturation(0.0)
            .tint(TintColor::new(80, 70, 60, 0.15)),
        // Warm
        FilterPreset::new("warm", "Warm", WARM, "🔥")
            .saturation(1.1)
            .tint(TintColor::new(255, 200, 100, 0.08)),
        FilterPreset::new("golden", "Golden", WARM, "✨")
            .contrast(1.1)
            .saturation(1.15)
            .tint(TintColor::new(255, 215, 0, 0.1)),
        FilterPreset::new("sunset", "Sunset", WARM, "🌅")
            .brightness(0.05)
            .saturation(1.2)
            .tint(TintColor::new(255, 140, 80, 0.12)),
        FilterPreset::new("amber", "Amber", WARM, "🟠")
            .saturation(1.05)
            .tint(TintColor::new(255, 180, 0, 0.09)),
        FilterPreset::new("autumn", "Autumn", WARM, "🍂")
            .contrast(1.1)
            .saturation(1.25)
            .tint(TintColor::new(200, 100, 50, 0.1)),
        FilterPreset::new("honey", "Honey", WARM, "🍯")
            .brightness(0.05)
            .saturation(1.15)
            .tint(TintColor::new(255, 200, 100, 0.11)),
        FilterPreset::new("copper", "Copper", WARM, "🟤")
            .contrast(1.15)
            .tint(TintColor::new(184, 115, 51, 0.13)),
        FilterPreset::new("sunrise", "Sunrise", WARM, "🌄")
            .brightness(0.1)
            .saturation(1.2)
            .tint(TintColor::new(255, 165, 100, 0.1)),
        // Cool
        FilterPreset::new("cool", "Cool", COOL, "❄️")
            .saturation(1.05)
            .tint(TintColor::new(100, 150, 255, 0.08)),
        FilterPreset::new("arctic", "Arctic", COOL, "🧊")
            .brightness(0.1)
            .saturation(0.9)
            .tint(TintColor::new(150, 200, 255, 0.1)),
        FilterPreset::new("ocean", "Ocean", COOL, "🌊")
            .saturation(1.15)
            .tint(TintColor::new(0, 150, 200, 0.1)),
        FilterPreset::new("midnight", "Midnight", COOL, "🌙")
            .brightness(-0.15)
            .contrast(1.2)
            .tint(TintColor::new(50, 80, 150, 0.15)),
        FilterPreset::new("frosted", "Frosted", COOL, "❄️")
            .brightness(0.15)
            .saturation(0.85)
            .tint(TintColor::new(180, 220, 255, 0.12)),
        FilterPreset::new("winter", "Winter", COOL, "⛄")
            .brightness(0.1)
            .tint(TintColor::new(200, 220, 255, 0.09)),
        FilterPreset::new("steel", "Steel", COOL, "⚙️")
            .contrast(1.2)
            .saturation(0.8)
            .tint(TintColor::new(100, 120, 140, 0.1)),
        FilterPreset::new("nordic", "Nordic", COOL, "🏔️")
            .brightness(0.05)
            .saturation(0.95)
            .tint(TintColor::new(150, 180, 220, 0.08)),
        // Vibrant
        FilterPreset::new("vibrant", "Vibrant", VIBRANT, "🌈")
            .contrast(1.2)
            .saturation(1.6),
        FilterPreset::new("pop", "Pop", VIBRANT, "💥")
            .brightness(0.05)
            .contrast(1.3)
            .saturation(1.8),
        FilterPreset::new("neon", "Neon", VIBRANT, "🌟")
            .brightness(0.1)
            .contrast(1.4)
            .saturation(2.0),
        FilterPreset::new("electric", "Electric", VIBRANT, "⚡")
            .contrast(1.35)
            .saturation(1.7),
        FilterPreset::new("candy", "Candy", VIBRANT, "🍭")
            .brightness(0.15)
            .saturation(1.5)
            .tint(TintColor::new(255, 150, 200, 0.05)),
        FilterPreset::new("tropical", "Tropical", VIBRANT, "🌺")
            .brightness(0.08)
            .contrast(1.15)
            .saturation(1.65),
        FilterPreset::new("rainbow", "Rainbow", VIBRANT, "🌈")
            .brightness(0.1)
            .saturation(1.9),
        // Muted
        FilterPreset::new("muted", "Muted", MUTED, "🎨")
            .contrast(0.95)
            .saturation(0.6),
        FilterPreset::new("pastel", "Pastel", MUTED, "🌸")
            .brightness(0.15)
            .contrast(0.9)
            .saturation(0.7),
        FilterPreset::new("dusty", "Dusty", MUTED, "🏜️")
            .contrast(0.9)
            .saturation(0.65)
            .tint(TintColor::new(200, 180, 160, 0.05)),
        FilterPreset::new("earthy", "Earthy", MUTED, "🌿")
            .saturation(0.75)
            .tint(TintColor::new(140, 120, 100, 0.08)),
        FilterPreset::new("subdued", "Subdued", MUTED, "🤎")
            .brightness(-0.05)
            .contrast(0.95)
            .saturation(0.55),
        FilterPreset::new("haze", "Haze", MUTED, "🌫️")
            .brightness(0.12)
            .contrast(0.8)
            .saturation(0.6),
        // Cinematic
        FilterPreset::new("cinematic", "Cinematic", CINEMATIC, "🎬")
            .brightness(-0.05)
            .contrast(1.3)
            .saturation(1.1)
            .tint(TintColor::new(20, 30, 60, 0.05)),
        FilterPreset::new("film", "Film", CINEMATIC, "🎞️")
            .contrast(1.25)
            .saturation(1.05)
            .tint(TintColor::new(40, 40, 80, 0.04)),
        FilterPreset::new("blockbuster", "Blockbuster", CINEMATIC, "🍿")
            .contrast(1.4)
            .saturation(1.2)
            .tint(TintColor::new(30, 60, 100, 0.06)),
        FilterPreset::new("teal-orange", "Teal & Orange", CINEMATIC, "🎨")
            .contrast(1.2)
            .saturation(1.3)
            .tint(TintColor::new(20, 100, 120, 0.05)),
        FilterPreset::new("noir-film", "Film Noir", CINEMATIC, "🎭")
            .brightness(-0.2)
            .contrast(1.6)
            .saturation(0.3),
        FilterPreset::new("hollywood", "Hollywood", CINEMATIC, "⭐")
            .brightness(0.05)
            .contrast(1.3)
            .saturation(1.25),
        // Portrait
        FilterPreset::new("portrait", "Portrait", PORTRAIT, "👤")
            .contrast(1.1)
            .saturation(1.05)
            .tint(TintColor::new(255, 220, 200, 0.04)),
        FilterPreset::new("skin-tone", "Skin Tone", PORTRAIT, "✨")
            .brightness(0.05)
            .saturation(1.02)
            .tint(TintColor::new(255, 210, 180, 0.05)),
        FilterPreset::new("beauty", "Beauty", PORTRAIT, "💄")
            .brightness(0.08)
            .contrast(1.05)
            .saturation(1.1),
        FilterPreset::new("studio", "Studio", PORTRAIT, "💡")
            .brightness(0.1)
            .contrast(1.15)
            .saturation(1.05),
        FilterPreset::new("fashion", "Fashion", PORTRAIT, "👗")
            .brightness(0.05)
            .contrast(1.2)
            .saturation(1.25),
        // Landscape
        FilterPreset::new("landscape", "Landscape", LANDSCAPE, "🏞️")
            .contrast(1.15)
            .saturation(1.3),
        FilterPreset::new("scenic", "Scenic", LANDSCAPE, "🌄")
            .brightness(0.05)
            .contrast(1.2)
            .saturation(1.25),
        FilterPreset::new("mountain", "Mountain", LANDSCAPE, "⛰️")
            .contrast(1.3)
            .saturation(1.2)
            .tint(TintColor::new(100, 120, 150, 0.04)),
        FilterPreset::new("desert", "Desert", LANDSCAPE, "🏜️")
            .saturation(1.15)
            .tint(TintColor::new(220, 180, 120, 0.08)),
        FilterPreset::new("forest", "Forest", LANDSCAPE, "🌲")
            .saturation(1.35)
            .tint(TintColor::new(80, 140, 80, 0.05)),
        // Food
        FilterPreset::new("food", "Food", FOOD, "🍽️")
            .brightness(0.08)
            .contrast(1.15)
            .saturation(1.4),
        FilterPreset::new("delicious", "Delicious", FOOD, "😋")
            .brightness(0.1)
            .contrast(1.2)
            .saturation(1.5),
        FilterPreset::new("fresh", "Fresh", FOOD, "🥗")
            .brightness(0.15)
            .saturation(1.35),
        FilterPreset::new("gourmet", "Gourmet", FOOD, "👨‍🍳")
            .contrast(1.25)
            .saturation(1.3)
            .tint(TintColor::new(255, 200, 150, 0.04)),
        // Urban
        FilterPreset::new("urban", "Urban", URBAN, "🏙️")
            .contrast(1.25)
            .saturation(1.1)
            .tint(TintColor::new(80, 90, 110, 0.05)),
        FilterPreset::new("street", "Street", URBAN, "🛣️")
            .brightness(-0.05)
            .contrast(1.3)
            .saturation(0.95),
        FilterPreset::new("grunge", "Grunge", URBAN, "🎸")
            .brightness(-0.1)
            .contrast(1.4)
            .saturation(0.8),
        FilterPreset::new("metro", "Metro", URBAN, "🚇")
            .contrast(1.2)
            .saturation(0.85)
            .tint(TintColor::new(60, 70, 90, 0.08)),
        // Nature
        FilterPreset::new("nature", "Nature", NATURE, "🌿")
            .contrast(1.1)
            .saturation(1.35),
        FilterPreset::new("bloom", "Bloom", NATURE, "🌺")
            .brightness(0.1)
            .saturation(1.45),
        FilterPreset::new("spring", "Spring", NATURE, "🌸")
            .brightness(0.12)
            .saturation(1.3)
            .tint(TintColor::new(150, 220, 150, 0.05)),
        FilterPreset::new("summer", "Summer", NATURE, "☀️")
            .brightness(0.15)
            .contrast(1.1)
            .saturation(1.4),
        // Artistic
        FilterPreset::new("artistic", "Artistic", ARTISTIC, "🎨")
            .contrast(1.25)
            .saturation(1.3),
        FilterPreset::new("painting", "Painting", ARTISTIC, "🖼️")
            .brightness(0.05)
            .contrast(1.3)
            .saturation(1.4),
        FilterPreset::new("sketch", "Sketch", ARTISTIC, "✏️")
            .contrast(1.6)
            .saturation(0.3),
        FilterPreset::new("watercolor", "Watercolor", ARTISTIC, "💧")
            .brightness(0.1)
            .contrast(0.9)
            .saturation(1.2),
        FilterPreset::new("dream", "Dream", ARTISTIC, "💭")
            .brightness(0.15)
            .contrast(0.85)
            .saturation(1.25),
        FilterPreset::new("fantasy", "Fantasy", ARTISTIC, "✨")
            .brightness(0.12)
            .saturation(1.5)
            .tint(TintColor::new(200, 150, 255, 0.05)),
    ]
});

/// Every built-in preset in display order.
pub fn catalog() -> &'static [FilterPreset] {
    &CATALOG
}

/// The identity preset ("Original").
pub fn original() -> &'static FilterPreset {
    &CATALOG[0]
}

/// Look up a built-in preset by id.
pub fn find(id: &str) -> Option<&'static FilterPreset> {
    CATALOG.iter().find(|f| f.id == id)
}

/// Presets whose category equals `category` exactly.
pub fn by_category(category: &str) -> Vec<&'static FilterPreset> {
    CATALOG.iter().filter(|f| f.category == category).collect()
}

/// Case-insensitive substring match against name or category.
pub fn search(query: &str) -> Vec<&'static FilterPreset> {
    let query = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&query) || f.category.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn popular() -> Vec<&'static FilterPreset> {
    by_category(POPULAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for preset in catalog() {
            assert!(seen.insert(&preset.id), "duplicate id {}", preset.id);
        }
        assert_eq!(seen.len(), 91);
    }

    #[test]
    fn original_is_first_and_identity() {
        let original = original();
        assert_eq!(original.id, ORIGINAL_ID);
        assert_eq!(original.name, "Original");
        assert!(original.is_identity());
    }

    #[test]
    fn only_original_is_identity() {
        let identities: Vec<&str> = catalog()
            .iter()
            .filter(|f| f.is_identity())
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(identities, vec![ORIGINAL_ID]);
    }

    #[test]
    fn every_preset_has_a_known_category() {
        for preset in catalog() {
            assert!(
                CATEGORIES.contains(&preset.category.as_str()),
                "{} has unknown category {}",
                preset.id,
                preset.category
            );
        }
    }

    #[test]
    fn every_category_is_populated() {
        for category in CATEGORIES {
            assert!(!by_category(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn find_returns_catalog_values() {
        let sepia = find("sepia").unwrap();
        assert_eq!(sepia.category, VINTAGE);
        assert_eq!(sepia.saturation, Some(0.4));
        assert_eq!(sepia.brightness, Some(0.05));
        assert_eq!(sepia.contrast, None);
        assert_eq!(sepia.tint_color, Some(TintColor::new(112, 66, 20, 0.25)));
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn black_and_white_presets_fully_desaturate() {
        for preset in by_category(BLACK_AND_WHITE) {
            assert_eq!(preset.saturation, Some(0.0), "{}", preset.id);
        }
    }

    #[test]
    fn popular_has_six_presets_starting_with_original() {
        let popular = popular();
        assert_eq!(popular.len(), 6);
        assert_eq!(popular[0].id, ORIGINAL_ID);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let ids: Vec<&str> = search("NOIR").iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["noir", "noir-film"]);
    }

    #[test]
    fn search_matches_category() {
        assert_eq!(search("cinematic").len(), by_category(CINEMATIC).len());
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn serde_uses_camel_case_and_skips_absent_fields() {
        let json = serde_json::to_value(find("warm").unwrap()).unwrap();
        assert_eq!(json["tintColor"], "rgba(255, 200, 100, 0.08)");
        assert_eq!(json["saturation"], 1.1);
        assert!(json.get("brightness").is_none());
        assert!(json.get("contrast").is_none());
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let preset: FilterPreset = serde_json::from_str(
            r#"{"id":"x","name":"X","category":"Warm","icon":"*","blur":2,"contrast":1.2}"#,
        )
        .unwrap();
        assert_eq!(preset.contrast, Some(1.2));
        assert_eq!(preset.brightness, None);
    }

    #[test]
    fn deserialize_rejects_bad_tint() {
        let result: Result<FilterPreset, _> = serde_json::from_str(
            r##"{"id":"x","name":"X","category":"Warm","icon":"*","tintColor":"#ff0000"}"##,
        );
        assert!(result.is_err());
    }
}
