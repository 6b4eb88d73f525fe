//! Pipeline orchestration.
//!
//! One linear pass per platform: registry -> composer -> rasterize -> write,
//! with derived artifacts emitted from the same data. Platforms run in
//! registry order on a single logical thread; the first failure aborts the
//! remainder of the run.

use std::path::{Path, PathBuf};

use crate::compose;
use crate::config::GeneratorConfig;
use crate::emit;
use crate::error::GenerateError;
use crate::matrix::{self, PlatformSpec};
use crate::render::Renderer;
use crate::writer::{AssetJob, AssetWriter, PlatformReport};

/// What a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Root-level artifacts (template SVG, 512px preview, pack README).
    pub root_files: Vec<PathBuf>,
    pub platforms: Vec<PlatformReport>,
}

impl RunSummary {
    /// Total number of files written.
    pub fn total_files(&self) -> usize {
        self.root_files.len() + self.platforms.iter().map(|p| p.files.len()).sum::<usize>()
    }
}

/// The generation engine: immutable configuration plus an injected renderer.
pub struct IconGenerator<R: Renderer> {
    config: GeneratorConfig,
    renderer: R,
}

impl<R: Renderer> IconGenerator<R> {
    pub fn new(config: GeneratorConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates every platform in the registry, plus the root artifacts.
    pub fn generate_all(&self, out_dir: &Path) -> Result<RunSummary, GenerateError> {
        self.run(out_dir, matrix::PLATFORMS.iter().collect())
    }

    /// Generates the named platforms, plus the root artifacts.
    ///
    /// Every identifier is resolved against the registry up front, so an
    /// unknown platform aborts the invocation before any file is written.
    pub fn generate(&self, out_dir: &Path, platforms: &[&str]) -> Result<RunSummary, GenerateError> {
        let specs = platforms
            .iter()
            .map(|id| matrix::lookup(id))
            .collect::<Result<Vec<_>, _>>()?;
        self.run(out_dir, specs)
    }

    fn run(
        &self,
        out_dir: &Path,
        specs: Vec<&'static PlatformSpec>,
    ) -> Result<RunSummary, GenerateError> {
        let writer = AssetWriter::new(&self.renderer, out_dir);
        let mut summary = RunSummary::default();

        for job in self.root_jobs() {
            summary.root_files.push(writer.write_job(job)?);
        }
        for spec in specs {
            summary.platforms.push(writer.write_platform(spec, &self.config)?);
        }

        tracing::info!(
            files = summary.total_files(),
            out = %out_dir.display(),
            "generation complete"
        );
        Ok(summary)
    }

    /// Platform-independent artifacts written at the output root.
    fn root_jobs(&self) -> Vec<AssetJob> {
        let main = compose::main_icon(&self.config.branding);
        vec![
            AssetJob::text(PathBuf::from("app_icon.svg"), main.clone()),
            AssetJob::raster(PathBuf::from("app_icon.png"), main, 512, 512),
            AssetJob::text(
                PathBuf::from("README.md"),
                emit::asset_pack_readme(&self.config.branding, &self.config.features),
            ),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
