//! Derived integration artifacts: web manifest, framework asset snippet,
//! and the asset-pack README.
//!
//! Everything here is a pure function of the branding and feature-icon data,
//! so the emitted artifacts can never drift from the files the asset writer
//! produces, and reruns yield byte-identical output.

use serde::Serialize;

use crate::config::{Branding, FeatureIcon};

// ============================================================================
// Web App Manifest
// ============================================================================

/// One entry of the manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// The Web App Manifest descriptor written next to the PWA icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl WebManifest {
    /// Serializes the manifest to pretty-printed JSON.
    ///
    /// Field order is fixed by the struct definition, so the same inputs
    /// always produce the same bytes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the web manifest from branding metadata and the PWA size list.
///
/// Emits exactly one icon entry per size, in list order, each referencing
/// the `pwa-icon-<n>x<n>.png` file the writer generates alongside it.
pub fn web_manifest(branding: &Branding, pwa_sizes: &[u32]) -> WebManifest {
    WebManifest {
        name: branding.name.clone(),
        short_name: branding.short_name.clone(),
        description: branding.description.clone(),
        start_url: "/".into(),
        display: "standalone".into(),
        background_color: branding.primary_color.clone(),
        theme_color: branding.primary_dark.clone(),
        icons: pwa_sizes
            .iter()
            .map(|&size| ManifestIcon {
                src: format!("pwa-icon-{size}x{size}.png"),
                sizes: format!("{size}x{size}"),
                mime_type: "image/png".into(),
            })
            .collect(),
    }
}

// ============================================================================
// Framework Asset Snippet
// ============================================================================

/// Builds the Flutter `pubspec.yaml` asset-declaration snippet.
///
/// One path entry per feature icon, in input order, matching the paths the
/// asset writer uses for the framework asset directory.
pub fn flutter_assets_snippet(features: &[FeatureIcon]) -> String {
    let mut out = String::from("# Add to pubspec.yaml\n\nflutter:\n  assets:\n    - assets/icons/\n");
    for feature in features {
        out.push_str(&format!("    - assets/icons/{}_icon.png\n", feature.name));
    }
    if let Some(first) = features.first() {
        out.push_str(&format!(
            "\n# Usage:\n# Image.asset('assets/icons/{}_icon.png', width: 24, height: 24)\n",
            first.name
        ));
    }
    out
}

// ============================================================================
// Pack Documentation
// ============================================================================

/// Builds the README describing the generated asset pack.
pub fn asset_pack_readme(branding: &Branding, features: &[FeatureIcon]) -> String {
    let feature_list = features
        .iter()
        .map(|f| format!("- {} **{}**: {}", f.glyph, f.name, f.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "# {name} Icon Pack

## Generated assets

### Android
- `android/app/src/main/res/mipmap-*/ic_launcher.png`: launcher icons
- `android/app/src/main/res/drawable/ic_launcher_{{foreground,background}}.xml`: adaptive icons (Android 8+)

### iOS
- `ios/icon-*.png`: every size the App Store requires, 20 up to 1024

### Web/PWA
- `web/favicon-*.png`: 16, 32, 48
- `web/pwa-icon-*.png`: 72 up to 512
- `web/manifest.json`: Web App Manifest

### Features
{feature_list}

## Colors
- Primary: {primary}
- Primary dark: {dark}
- Accent: {accent}

## Integration
- **Flutter**: copy `flutter/assets/icons/` into your project and merge
  `flutter/flutter_assets.yaml` into `pubspec.yaml`.
- **Android**: copy the `res/` tree into `android/app/src/main/`.
- **iOS**: add the `ios/` PNGs to `Assets.xcassets/AppIcon.appiconset/`.
- **Web**: serve the `web/` directory and reference `manifest.json` from
  `index.html`.
",
        name = branding.name,
        feature_list = feature_list,
        primary = branding.primary_color,
        dark = branding.primary_dark,
        accent = branding.accent_color,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_features;
    use crate::matrix::PWA_SIZES;

    #[test]
    fn manifest_has_one_icon_entry_per_pwa_size() {
        let manifest = web_manifest(&Branding::default(), PWA_SIZES);
        assert_eq!(manifest.icons.len(), PWA_SIZES.len());
        for (icon, &size) in manifest.icons.iter().zip(PWA_SIZES) {
            assert_eq!(icon.sizes, format!("{size}x{size}"));
            assert_eq!(icon.src, format!("pwa-icon-{size}x{size}.png"));
            assert_eq!(icon.mime_type, "image/png");
        }
    }

    #[test]
    fn manifest_carries_fixed_top_level_fields() {
        let branding = Branding::default();
        let json = web_manifest(&branding, PWA_SIZES).to_json().unwrap();
        assert!(json.contains(r#""short_name": "Umoja""#));
        assert!(json.contains(r#""start_url": "/""#));
        assert!(json.contains(r#""display": "standalone""#));
        assert!(json.contains(r#""type": "image/png""#));
        assert!(json.contains(&branding.primary_dark));
    }

    #[test]
    fn manifest_serialization_is_byte_stable() {
        let branding = Branding::default();
        let first = web_manifest(&branding, PWA_SIZES).to_json().unwrap();
        let second = web_manifest(&branding, PWA_SIZES).to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn snippet_lists_every_feature_in_order() {
        let features = default_features();
        let snippet = flutter_assets_snippet(&features);
        let entries: Vec<&str> = snippet
            .lines()
            .filter_map(|l| l.trim().strip_prefix("- assets/icons/"))
            .filter(|l| l.ends_with("_icon.png"))
            .collect();
        assert_eq!(entries.len(), 8);
        for (entry, feature) in entries.iter().zip(&features) {
            assert_eq!(*entry, format!("{}_icon.png", feature.name));
        }
    }

    #[test]
    fn readme_mentions_every_feature() {
        let features = default_features();
        let readme = asset_pack_readme(&Branding::default(), &features);
        for feature in &features {
            assert!(readme.contains(&feature.name));
        }
    }
}
