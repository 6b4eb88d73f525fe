//! Platform size-matrix registry.
//!
//! A static, ordered table of generation strategies: each [`PlatformSpec`]
//! bundles its resolution buckets, a path template, and a hook for the
//! platform's non-matrix extras (adaptive drawables, manifest, feature
//! assets, store graphics). Nothing outside this module branches on platform
//! identity: supporting a new platform is a new row here, not a new branch
//! elsewhere.

use std::path::PathBuf;

use crate::compose;
use crate::config::GeneratorConfig;
use crate::emit;
use crate::error::GenerateError;
use crate::writer::AssetJob;

/// Web favicon sizes.
pub const FAVICON_SIZES: &[u32] = &[16, 32, 48];

/// PWA icon sizes. The web manifest derives its `icons` array from this same
/// list, so the two cannot drift.
pub const PWA_SIZES: &[u32] = &[72, 96, 128, 144, 152, 192, 384, 512];

/// A named resolution tier and the pixel sizes it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSpec {
    pub name: &'static str,
    pub sizes: &'static [u32],
}

/// A platform's complete generation strategy.
#[derive(Debug, Clone, Copy)]
pub struct PlatformSpec {
    /// Identifier accepted on the command line.
    pub id: &'static str,

    /// Human-readable label for logs.
    pub label: &'static str,

    /// Raster buckets, iterated in order. May be empty for platforms whose
    /// output is defined entirely by `extras`.
    pub buckets: &'static [BucketSpec],

    /// Path template: `(bucket, size)` to a path relative to the output root.
    pub path: fn(&BucketSpec, u32) -> PathBuf,

    /// Non-matrix assets for this platform, in write order.
    pub extras: fn(&GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError>,
}

/// The registry, in generation order.
pub static PLATFORMS: &[PlatformSpec] = &[
    PlatformSpec {
        id: "android",
        label: "Android",
        buckets: &[
            BucketSpec { name: "mipmap-mdpi", sizes: &[48] },
            BucketSpec { name: "mipmap-hdpi", sizes: &[72] },
            BucketSpec { name: "mipmap-xhdpi", sizes: &[96] },
            BucketSpec { name: "mipmap-xxhdpi", sizes: &[144] },
            BucketSpec { name: "mipmap-xxxhdpi", sizes: &[192] },
            BucketSpec { name: "drawable-mdpi", sizes: &[24, 32] },
            BucketSpec { name: "drawable-hdpi", sizes: &[36, 48] },
            BucketSpec { name: "drawable-xhdpi", sizes: &[48, 64] },
            BucketSpec { name: "drawable-xxhdpi", sizes: &[72, 96] },
            BucketSpec { name: "drawable-xxxhdpi", sizes: &[96, 128] },
        ],
        path: android_path,
        extras: android_extras,
    },
    PlatformSpec {
        id: "ios",
        label: "iOS",
        buckets: &[
            BucketSpec { name: "icon-20", sizes: &[20] },
            BucketSpec { name: "icon-29", sizes: &[29] },
            BucketSpec { name: "icon-40", sizes: &[40] },
            BucketSpec { name: "icon-58", sizes: &[58] },
            BucketSpec { name: "icon-60", sizes: &[60] },
            BucketSpec { name: "icon-80", sizes: &[80] },
            BucketSpec { name: "icon-87", sizes: &[87] },
            BucketSpec { name: "icon-120", sizes: &[120] },
            BucketSpec { name: "icon-180", sizes: &[180] },
            BucketSpec { name: "icon-1024", sizes: &[1024] },
        ],
        path: ios_path,
        extras: no_extras,
    },
    PlatformSpec {
        id: "web",
        label: "Web/PWA",
        buckets: &[
            BucketSpec { name: "favicon", sizes: FAVICON_SIZES },
            BucketSpec { name: "pwa-icon", sizes: PWA_SIZES },
        ],
        path: web_path,
        extras: web_extras,
    },
    PlatformSpec {
        id: "flutter",
        label: "Flutter assets",
        buckets: &[],
        path: no_path,
        extras: flutter_extras,
    },
    PlatformSpec {
        id: "store",
        label: "Store listings",
        buckets: &[],
        path: no_path,
        extras: store_extras,
    },
];

/// Looks up a platform by identifier.
///
/// An unknown identifier is a configuration error; callers resolve every
/// requested platform through this before performing any I/O.
pub fn lookup(id: &str) -> Result<&'static PlatformSpec, GenerateError> {
    PLATFORMS
        .iter()
        .find(|spec| spec.id == id)
        .ok_or_else(|| GenerateError::UnknownPlatform(id.to_string()))
}

// ============================================================================
// Path Templates
// ============================================================================

fn android_path(bucket: &BucketSpec, size: u32) -> PathBuf {
    // Multi-size buckets suffix the stem so no two sizes share a path.
    let file = if bucket.sizes.len() > 1 {
        format!("ic_launcher_{size}.png")
    } else {
        "ic_launcher.png".to_string()
    };
    ["android", "app", "src", "main", "res", bucket.name, file.as_str()]
        .iter()
        .collect()
}

fn ios_path(bucket: &BucketSpec, _size: u32) -> PathBuf {
    let file = format!("{}.png", bucket.name);
    ["ios", file.as_str()].iter().collect()
}

fn web_path(bucket: &BucketSpec, size: u32) -> PathBuf {
    let file = format!("{}-{size}x{size}.png", bucket.name);
    ["web", file.as_str()].iter().collect()
}

fn no_path(bucket: &BucketSpec, _size: u32) -> PathBuf {
    unreachable!("platform `{}` declares no raster buckets", bucket.name)
}

// ============================================================================
// Platform Extras
// ============================================================================

fn no_extras(_cfg: &GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError> {
    Ok(Vec::new())
}

fn android_extras(cfg: &GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError> {
    let drawable: PathBuf = ["android", "app", "src", "main", "res", "drawable"]
        .iter()
        .collect();
    Ok(vec![
        AssetJob::text(
            drawable.join("ic_launcher_foreground.xml"),
            compose::adaptive_foreground(&cfg.branding),
        ),
        AssetJob::text(
            drawable.join("ic_launcher_background.xml"),
            compose::adaptive_background(&cfg.branding),
        ),
    ])
}

fn web_extras(cfg: &GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError> {
    let manifest = emit::web_manifest(&cfg.branding, PWA_SIZES).to_json()?;
    Ok(vec![AssetJob::text(
        ["web", "manifest.json"].iter().collect::<PathBuf>(),
        manifest,
    )])
}

fn flutter_extras(cfg: &GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError> {
    let icons_dir: PathBuf = ["flutter", "assets", "icons"].iter().collect();
    let mut jobs = Vec::with_capacity(cfg.features.len() * 2 + 1);
    for feature in &cfg.features {
        let markup = compose::feature_icon(feature);
        jobs.push(AssetJob::text(
            icons_dir.join(format!("{}_icon.svg", feature.name)),
            markup.clone(),
        ));
        jobs.push(AssetJob::raster(
            icons_dir.join(format!("{}_icon.png", feature.name)),
            markup,
            64,
            64,
        ));
    }
    jobs.push(AssetJob::text(
        ["flutter", "flutter_assets.yaml"].iter().collect::<PathBuf>(),
        emit::flutter_assets_snippet(&cfg.features),
    ));
    Ok(jobs)
}

fn store_extras(cfg: &GeneratorConfig) -> Result<Vec<AssetJob>, GenerateError> {
    let main = compose::main_icon(&cfg.branding);
    let play_store: PathBuf = ["store", "play_store"].iter().collect();
    let app_store: PathBuf = ["store", "app_store"].iter().collect();
    Ok(vec![
        AssetJob::raster(play_store.join("ic_launcher_512.png"), main.clone(), 512, 512),
        AssetJob::raster(
            play_store.join("feature_graphic.png"),
            compose::promo_graphic(&cfg.branding, &cfg.features),
            1024,
            500,
        ),
        AssetJob::raster(app_store.join("app_store_icon_1024.png"), main, 1024, 1024),
    ])
}

// ============================================================================
// Tests
// ============================================================================
