//! Vector template composer.
//!
//! Pure functions producing self-contained markup: the main launcher icon,
//! one badge per feature icon, the store promo graphic, and the Android
//! adaptive-icon vector drawables. No I/O, no failure modes; pixel size is
//! applied later, at rasterization time.

use palette::{Hsl, IntoColor, Srgb};

use crate::config::{Branding, FeatureIcon};

/// Composes the main launcher icon as a 512-unit square SVG.
///
/// The template is size-independent: the same markup is rasterized at every
/// size in the platform matrices.
pub fn main_icon(branding: &Branding) -> String {
    let globe_light = shift_lightness(&branding.accent_color, 0.18);
    format!(
        r##"<svg width="512" height="512" viewBox="0 0 512 512" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg_gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="100%" stop-color="{dark}"/>
    </linearGradient>
    <linearGradient id="globe_gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{globe_light}"/>
      <stop offset="100%" stop-color="{accent}"/>
    </linearGradient>
    <filter id="drop_shadow">
      <feDropShadow dx="2" dy="4" stdDeviation="4" flood-color="#000000" flood-opacity="0.3"/>
    </filter>
  </defs>
  <circle cx="256" cy="256" r="240" fill="url(#bg_gradient)" stroke="{dark}" stroke-width="8" filter="url(#drop_shadow)"/>
  <circle cx="256" cy="204" r="84" fill="url(#globe_gradient)" stroke="{accent}" stroke-width="3"/>
  <path d="M198 184 Q222 160 246 182 Q268 170 290 192 Q276 212 252 202 Q228 222 206 202 Z" fill="{primary}" opacity="0.85"/>
  <path d="M222 212 Q244 198 266 210 Q286 204 304 222 Q290 240 268 230 Q248 248 228 230 Z" fill="{primary}" opacity="0.85"/>
  <g filter="url(#drop_shadow)">
    <ellipse cx="346" cy="136" rx="64" ry="34" fill="#FFFFFF" stroke="{dark}" stroke-width="3"/>
    <path d="M306 162 L322 152 L330 170 Z" fill="#FFFFFF" stroke="{dark}" stroke-width="3"/>
    <text x="346" y="144" text-anchor="middle" font-family="Arial, sans-serif" font-size="26" font-weight="bold" fill="{dark}">{short_name}</text>
  </g>
  <rect x="146" y="308" width="220" height="96" rx="24" fill="#FFFFFF" opacity="0.12"/>
  <circle cx="196" cy="356" r="28" fill="#FFFFFF" opacity="0.9"/>
  <rect x="190" y="340" width="12" height="32" rx="3" fill="{primary}"/>
  <rect x="180" y="350" width="32" height="12" rx="3" fill="{primary}"/>
  <circle cx="316" cy="356" r="28" fill="#FFFFFF" opacity="0.9"/>
  <path d="M316 372 Q302 358 300 340 Q314 346 316 358 Q318 346 332 340 Q330 358 316 372 Z" fill="{primary}"/>
  <text x="256" y="456" text-anchor="middle" font-family="Arial, sans-serif" font-size="22" font-weight="500" fill="#FFFFFF" opacity="0.9">{tagline}</text>
</svg>
"##,
        primary = branding.primary_color,
        dark = branding.primary_dark,
        accent = branding.accent_color,
        globe_light = globe_light,
        short_name = xml_escape(&branding.short_name),
        tagline = xml_escape(&branding.tagline),
    )
}

/// Composes the badge SVG for one feature icon.
///
/// Gradient and filter ids are scoped by the feature name so that markup for
/// several features can be inlined into one document without collisions.
pub fn feature_icon(feature: &FeatureIcon) -> String {
    let top_stop = shift_lightness(&feature.color, 0.12);
    format!(
        r##"<svg width="64" height="64" viewBox="0 0 64 64" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad_{name}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{top_stop}"/>
      <stop offset="100%" stop-color="{color}"/>
    </linearGradient>
    <filter id="shadow_{name}">
      <feDropShadow dx="1" dy="2" stdDeviation="2" flood-color="#000000" flood-opacity="0.2"/>
    </filter>
  </defs>
  <circle cx="32" cy="32" r="28" fill="url(#grad_{name})" stroke="{color}" stroke-width="2" filter="url(#shadow_{name})"/>
  <circle cx="32" cy="32" r="20" fill="{color}" opacity="0.1"/>
  <text x="32" y="40" text-anchor="middle" font-family="Arial, sans-serif" font-size="18" font-weight="bold" fill="#FFFFFF">{glyph}</text>
</svg>
"##,
        name = feature.name,
        color = feature.color,
        top_stop = top_stop,
        glyph = xml_escape(&feature.glyph),
    )
}

/// Composes the 1024x500 store promo graphic.
///
/// Fixed-aspect, non-square; lists the feature set in order on the strip
/// beneath the title.
pub fn promo_graphic(branding: &Branding, features: &[FeatureIcon]) -> String {
    let strip = features
        .iter()
        .map(|f| format!("{} {}", f.glyph, f.description))
        .collect::<Vec<_>>()
        .join("  •  ");
    let dots = features
        .iter()
        .take(4)
        .enumerate()
        .map(|(i, f)| {
            let (cx, cy) = [(760, 160), (880, 160), (760, 280), (880, 280)][i];
            format!(r##"  <circle cx="{cx}" cy="{cy}" r="24" fill="{}"/>"##, f.color)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r##"<svg width="1024" height="500" viewBox="0 0 1024 500" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="promo_gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="100%" stop-color="{dark}"/>
    </linearGradient>
  </defs>
  <rect width="1024" height="500" fill="url(#promo_gradient)"/>
  <circle cx="150" cy="250" r="88" fill="{accent}"/>
  <path d="M110 230 Q134 206 158 228 Q180 216 202 238 Q188 258 164 248 Q140 268 118 248 Z" fill="{dark}"/>
  <text x="280" y="210" font-family="Arial, sans-serif" font-size="52" font-weight="bold" fill="#FFFFFF">{name}</text>
  <text x="280" y="254" font-family="Arial, sans-serif" font-size="26" fill="#FFFFFF" opacity="0.9">{description}</text>
  <text x="280" y="310" font-family="Arial, sans-serif" font-size="19" fill="#FFFFFF">{strip}</text>
  <circle cx="820" cy="220" r="120" fill="{accent}" opacity="0.25"/>
{dots}
</svg>
"##,
        primary = branding.primary_color,
        dark = branding.primary_dark,
        accent = branding.accent_color,
        name = xml_escape(&branding.name),
        description = xml_escape(&branding.description),
        strip = xml_escape(&strip),
        dots = dots,
    )
}

/// Composes the Android adaptive-icon foreground vector drawable.
pub fn adaptive_foreground(branding: &Branding) -> String {
    format!(
        r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <group android:scaleX="0.6" android:scaleY="0.6" android:pivotX="54" android:pivotY="54">
        <path android:fillColor="{accent}"
              android:pathData="M54,30 C66,30 76,40 76,52 C76,64 66,74 54,74 C42,74 32,64 32,52 C32,40 42,30 54,30 Z"/>
        <path android:fillColor="{primary}"
              android:pathData="M45,45 Q50,40 55,45 Q60,42 65,48 Q60,54 55,52 Q50,58 45,54 Q40,50 45,45 Z"/>
        <path android:fillColor="#FFFFFF"
              android:pathData="M50,62 L54,62 L54,74 L50,74 Z M46,66 L58,66 L58,70 L46,70 Z"/>
    </group>
</vector>
"##,
        accent = branding.accent_color,
        primary = branding.primary_color,
    )
}

/// Composes the Android adaptive-icon background vector drawable.
pub fn adaptive_background(branding: &Branding) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <path android:fillColor="{dark}"
          android:pathData="M0,0h108v108h-108z"/>
    <path android:fillColor="{primary}"
          android:pathData="M54,54m-50,0a50,50 0,1 1,100 0a50,50 0,1 1,-100 0"/>
</vector>
"#,
        dark = branding.primary_dark,
        primary = branding.primary_color,
    )
}

// ============================================================================
// Color and Markup Helpers
// ============================================================================

/// Shifts the lightness of a hex color, clamped to the valid range.
///
/// Unparseable input is returned unchanged; composition cannot fail.
fn shift_lightness(hex: &str, delta: f32) -> String {
    let Ok(rgb) = hex.trim_start_matches('#').parse::<Srgb<u8>>() else {
        return hex.to_string();
    };
    let mut hsl: Hsl = rgb.into_format::<f32>().into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    let out = out.into_format::<u8>();
    format!("#{:02x}{:02x}{:02x}", out.red, out.green, out.blue)
}

/// Escapes the XML text/attribute metacharacters.
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ============================================================================
// Tests
// ============================================================================
