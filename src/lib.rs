//! iconforge: size-matrix-driven platform icon asset pipeline.
//!
//! This crate turns built-in vector templates into the full family of icon
//! assets each platform mandates (Android launcher densities, the iOS app
//! icon set, web favicons and PWA icons) plus the derived artifacts that
//! must stay in sync with them: web manifest, framework asset snippet, pack
//! README, store graphics.
//!
//! The pipeline is data-driven: a static registry maps each platform to its
//! resolution buckets, path template, and extras, so adding a platform is a
//! table row, not a new code path. Rasterization is injected through the
//! [`Renderer`] trait, and generation is idempotent; rerunning into the
//! same directory reproduces derived artifacts byte for byte.
//!
//! # Example
//!
//! ```no_run
//! use iconforge::{GeneratorConfig, IconGenerator, SvgRenderer};
//!
//! let generator = IconGenerator::new(GeneratorConfig::default(), SvgRenderer::new());
//!
//! // Everything: all platform passes plus root artifacts.
//! let summary = generator.generate_all("./icon_pack".as_ref())?;
//! println!("wrote {} files", summary.total_files());
//!
//! // Or a scoped pass; unknown identifiers fail before any file is written.
//! generator.generate("./icon_pack".as_ref(), &["android", "web"])?;
//! # Ok::<(), iconforge::GenerateError>(())
//! ```

mod compose;
mod config;
mod emit;
mod error;
mod generator;
mod matrix;
mod render;
mod writer;

pub use compose::{adaptive_background, adaptive_foreground, feature_icon, main_icon, promo_graphic};
pub use config::{Branding, FeatureIcon, GeneratorConfig, default_features};
pub use emit::{ManifestIcon, WebManifest, asset_pack_readme, flutter_assets_snippet, web_manifest};
pub use error::{GenerateError, RenderError};
pub use generator::{IconGenerator, RunSummary};
pub use matrix::{BucketSpec, FAVICON_SIZES, PLATFORMS, PWA_SIZES, PlatformSpec, lookup};
pub use render::{PlaceholderRenderer, Renderer, SvgRenderer};
pub use writer::{AssetContent, AssetJob, AssetWriter, PlatformReport, plan_platform};
