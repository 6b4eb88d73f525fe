//! Asset planning and writing.
//!
//! A platform pass is planned first (every `(bucket, size)` triple from the
//! registry becomes an [`AssetJob`], followed by the platform's extras) and
//! then executed in order: idempotent directory creation, rasterization where
//! needed, file write. Existing files are overwritten unconditionally (last
//! write wins) and nothing outside the planned paths is ever touched, so a
//! stale asset from a since-removed feature icon stays on disk until removed
//! by hand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compose;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::matrix::PlatformSpec;
use crate::render::Renderer;

/// The payload of one planned asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetContent {
    /// Vector markup to rasterize at the given dimensions.
    Raster {
        markup: String,
        width: u32,
        height: u32,
    },

    /// Literal file body, written as UTF-8.
    Text(String),
}

/// One asset the writer will produce: destination path plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetJob {
    /// Destination, relative to the output root.
    pub path: PathBuf,
    pub content: AssetContent,
}

impl AssetJob {
    pub fn raster(path: impl Into<PathBuf>, markup: String, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            content: AssetContent::Raster {
                markup,
                width,
                height,
            },
        }
    }

    pub fn text(path: impl Into<PathBuf>, body: String) -> Self {
        Self {
            path: path.into(),
            content: AssetContent::Text(body),
        }
    }
}

/// Plans every asset a platform pass will produce, in write order.
///
/// Pure with respect to the filesystem: planning performs no I/O, so a
/// failure here leaves no partial output behind.
pub fn plan_platform(
    spec: &PlatformSpec,
    cfg: &GeneratorConfig,
) -> Result<Vec<AssetJob>, GenerateError> {
    let main = compose::main_icon(&cfg.branding);
    let mut jobs = Vec::new();
    for bucket in spec.buckets {
        for &size in bucket.sizes {
            jobs.push(AssetJob::raster(
                (spec.path)(bucket, size),
                main.clone(),
                size,
                size,
            ));
        }
    }
    jobs.extend((spec.extras)(cfg)?);
    Ok(jobs)
}

/// Outcome of one platform pass.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    pub platform: &'static str,
    /// Absolute destination paths, in write order.
    pub files: Vec<PathBuf>,
}

/// Writes planned assets beneath an output root.
pub struct AssetWriter<'a, R: Renderer> {
    renderer: &'a R,
    out_root: &'a Path,
}

impl<'a, R: Renderer> AssetWriter<'a, R> {
    pub fn new(renderer: &'a R, out_root: &'a Path) -> Self {
        Self { renderer, out_root }
    }

    /// Runs one platform pass: plan, then write each asset in order.
    pub fn write_platform(
        &self,
        spec: &PlatformSpec,
        cfg: &GeneratorConfig,
    ) -> Result<PlatformReport, GenerateError> {
        let jobs = plan_platform(spec, cfg)?;
        let mut files = Vec::with_capacity(jobs.len());
        for job in jobs {
            files.push(self.write_job(job)?);
        }
        tracing::info!(platform = spec.label, files = files.len(), "pass complete");
        Ok(PlatformReport {
            platform: spec.id,
            files,
        })
    }

    /// Writes a single asset, creating its parent directory if needed.
    pub fn write_job(&self, job: AssetJob) -> Result<PathBuf, GenerateError> {
        let dest = self.out_root.join(&job.path);
        if let Some(parent) = dest.parent() {
            // create_dir_all succeeds whether or not the directory exists.
            fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let bytes = match job.content {
            AssetContent::Raster {
                markup,
                width,
                height,
            } => self
                .renderer
                .render(&markup, width, height)
                .map_err(|source| GenerateError::Render {
                    path: dest.clone(),
                    source,
                })?,
            AssetContent::Text(body) => body.into_bytes(),
        };

        fs::write(&dest, bytes).map_err(|source| GenerateError::WriteFile {
            path: dest.clone(),
            source,
        })?;
        tracing::debug!(path = %dest.display(), "wrote asset");
        Ok(dest)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::matrix::{self, PLATFORMS};
    use crate::render::PlaceholderRenderer;

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn plan_covers_every_bucket_size_pair() {
        let android = matrix::lookup("android").unwrap();
        let jobs = plan_platform(android, &config()).unwrap();
        let raster_count = jobs
            .iter()
            .filter(|j| matches!(j.content, AssetContent::Raster { .. }))
            .count();
        // 5 mipmap sizes + 10 drawable sizes.
        assert_eq!(raster_count, 15);
        // Plus the two adaptive-icon drawables.
        assert_eq!(jobs.len(), 17);
    }

    #[test]
    fn planned_paths_are_unique_across_each_platform() {
        for spec in PLATFORMS {
            let jobs = plan_platform(spec, &config()).unwrap();
            let mut seen = HashSet::new();
            for job in &jobs {
                assert!(
                    seen.insert(job.path.clone()),
                    "{}: duplicate {}",
                    spec.id,
                    job.path.display()
                );
            }
        }
    }

    #[test]
    fn bucket_jobs_are_square_and_in_matrix_order() {
        let web = matrix::lookup("web").unwrap();
        let jobs = plan_platform(web, &config()).unwrap();
        let sizes: Vec<u32> = jobs
            .iter()
            .filter_map(|j| match &j.content {
                AssetContent::Raster { width, height, .. } => {
                    assert_eq!(width, height, "{}", j.path.display());
                    Some(*width)
                }
                AssetContent::Text(_) => None,
            })
            .collect();
        assert_eq!(sizes, [16, 32, 48, 72, 96, 128, 144, 152, 192, 384, 512]);
    }

    #[test]
    fn write_platform_creates_the_expected_tree() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PlaceholderRenderer;
        let writer = AssetWriter::new(&renderer, dir.path());

        let web = matrix::lookup("web").unwrap();
        let report = writer.write_platform(web, &config()).unwrap();

        // 3 favicons + 8 PWA icons + manifest.json.
        assert_eq!(report.files.len(), 12);
        assert!(dir.path().join("web/favicon-16x16.png").is_file());
        assert!(dir.path().join("web/pwa-icon-512x512.png").is_file());
        assert!(dir.path().join("web/manifest.json").is_file());
    }

    #[test]
    fn rasterized_files_decode_to_the_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PlaceholderRenderer;
        let writer = AssetWriter::new(&renderer, dir.path());

        let ios = matrix::lookup("ios").unwrap();
        writer.write_platform(ios, &config()).unwrap();

        let bytes = fs::read(dir.path().join("ios/icon-1024.png")).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (1024, 1024));
    }

    #[test]
    fn overwrite_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PlaceholderRenderer;
        let writer = AssetWriter::new(&renderer, dir.path());
        let web = matrix::lookup("web").unwrap();

        writer.write_platform(web, &config()).unwrap();
        let first = fs::read(dir.path().join("web/manifest.json")).unwrap();
        writer.write_platform(web, &config()).unwrap();
        let second = fs::read(dir.path().join("web/manifest.json")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unrelated_files_survive_a_pass() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("web/pwa-icon-9999x9999.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"stale").unwrap();

        let renderer = PlaceholderRenderer;
        let writer = AssetWriter::new(&renderer, dir.path());
        writer
            .write_platform(matrix::lookup("web").unwrap(), &config())
            .unwrap();

        assert_eq!(fs::read(&stale).unwrap(), b"stale");
    }

    #[test]
    fn flutter_pass_writes_svg_png_pairs_and_snippet() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = PlaceholderRenderer;
        let writer = AssetWriter::new(&renderer, dir.path());

        let report = writer
            .write_platform(matrix::lookup("flutter").unwrap(), &config())
            .unwrap();

        // 8 features x (svg + png) + flutter_assets.yaml.
        assert_eq!(report.files.len(), 17);
        let icons = dir.path().join("flutter/assets/icons");
        assert!(icons.join("medical_icon.svg").is_file());
        assert!(icons.join("medical_icon.png").is_file());
        assert!(dir.path().join("flutter/flutter_assets.yaml").is_file());
    }
}
