//! Immutable run configuration: branding and the feature-icon set.
//!
//! Everything here is materialized once at process start and passed
//! explicitly into the pipeline components. Nothing is mutated after
//! creation; the only mutable state in a run is the output tree itself.

use serde::{Deserialize, Serialize};

/// A single feature icon: a named glyph on a colored badge.
///
/// The set of feature icons is fixed for a run, and its order is significant:
/// every derived output (asset files, the framework asset snippet, the pack
/// README) enumerates features in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureIcon {
    /// Identifier used in file names (`<name>_icon.png`).
    pub name: String,

    /// The glyph rendered at the badge center.
    pub glyph: String,

    /// Badge color as a hex string, e.g. `#F44336`.
    pub color: String,

    /// Human-readable label, used in documentation and the promo graphic.
    pub description: String,
}

impl FeatureIcon {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

/// Application identity fed into the templates, manifest, and docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    /// Full application name (web manifest `name`).
    pub name: String,

    /// Short name shown inside the icon's speech bubble and the manifest.
    pub short_name: String,

    /// One-line description (manifest `description`, store listings).
    pub description: String,

    /// Tagline rendered at the bottom of the main icon.
    pub tagline: String,

    /// Primary brand color, hex.
    pub primary_color: String,

    /// Darker variant of the primary color, hex.
    pub primary_dark: String,

    /// Accent color used for the globe motif, hex.
    pub accent_color: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "Umoja Community Assistant".into(),
            short_name: "Umoja".into(),
            description: "Offline-first assistant for rural communities".into(),
            tagline: "AI for communities".into(),
            primary_color: "#2E7D32".into(),
            primary_dark: "#1B5E20".into(),
            accent_color: "#0277BD".into(),
        }
    }
}

/// The complete, read-only configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub branding: Branding,
    pub features: Vec<FeatureIcon>,
}

impl GeneratorConfig {
    pub fn new(branding: Branding, features: Vec<FeatureIcon>) -> Self {
        Self { branding, features }
    }

    /// Deserializes a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            branding: Branding::default(),
            features: default_features(),
        }
    }
}

/// The reference deployment's eight feature icons, in canonical order.
pub fn default_features() -> Vec<FeatureIcon> {
    vec![
        FeatureIcon::new("medical", "🏥", "#F44336", "First aid"),
        FeatureIcon::new("education", "📚", "#2196F3", "Education"),
        FeatureIcon::new("agriculture", "🌱", "#4CAF50", "Agriculture"),
        FeatureIcon::new("wellness", "🧘", "#9C27B0", "Wellness"),
        FeatureIcon::new("environmental", "🌍", "#009688", "Environment"),
        FeatureIcon::new("emergency", "🚨", "#FF5722", "Emergency"),
        FeatureIcon::new("translate", "🗣️", "#FF9800", "Translation"),
        FeatureIcon::new("camera", "📷", "#607D8B", "Camera"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feature_set_has_eight_entries_in_order() {
        let features = default_features();
        assert_eq!(features.len(), 8);
        assert_eq!(features[0].name, "medical");
        assert_eq!(features[7].name, "camera");
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = GeneratorConfig::default();
        let json = config.to_json().unwrap();
        let restored = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn feature_colors_are_hex_strings() {
        for feature in default_features() {
            assert!(feature.color.starts_with('#'), "{}", feature.name);
            assert_eq!(feature.color.len(), 7, "{}", feature.name);
        }
    }
}
