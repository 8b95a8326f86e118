//! Sync orchestration
//!
//! One run moves through `Cleaning → Fetching → Emitting(i) → Done`, or to
//! `Failed` from any of them. A failed run removes everything it wrote, so
//! the output directories are either fully regenerated or absent.

use figsync_codegen::{ComponentEmitter, FontAssetEmitter, clean_dir};
use figsync_core::{Error, IconNaming, Result};
use figsync_figma::{DesignSource, fetch_icon_contents, list_icons};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Settings of one sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Page whose frames hold the icons
    pub page_name: String,
    /// Root of the generated component tree
    pub components_dir: PathBuf,
    /// File and component naming rules
    pub naming: IconNaming,
    /// Font staging directory; font mode is enabled when set
    pub font_staging_dir: Option<PathBuf>,
}

impl SyncOptions {
    /// Directories owned by this run, removed on clean and on rollback
    fn output_dirs(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.components_dir.as_path()).chain(self.font_staging_dir.as_deref())
    }
}

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Removing previous output
    Cleaning,
    /// Reading the document and downloading artwork
    Fetching,
    /// Writing the component at this position
    Emitting(usize),
    /// All components written
    Done,
    /// Rolled back after an error
    Failed,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleaning => write!(f, "cleaning"),
            Self::Fetching => write!(f, "fetching"),
            Self::Emitting(index) => write!(f, "emitting({index})"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a sync run
#[derive(Debug)]
pub enum SyncOutcome {
    /// Every icon was emitted
    Done {
        /// Number of component files written
        emitted: usize,
        /// Number of SVGs staged for the icon font
        staged: usize,
    },
    /// The run failed and its output was removed
    Failed(Error),
}

impl SyncOutcome {
    /// Whether the run completed
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }

    /// The originating error of a failed run
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Done { .. } => None,
        }
    }
}

/// Run one sync against `source`.
///
/// Never returns an error: failures roll the output back and are reported as
/// [`SyncOutcome::Failed`].
#[instrument(name = "sync", skip(source, options), fields(page = %options.page_name))]
pub async fn run(source: &dyn DesignSource, options: &SyncOptions) -> SyncOutcome {
    match sync(source, options).await {
        Ok((emitted, staged)) => {
            enter(SyncState::Done);
            if options.font_staging_dir.is_some() {
                info!(emitted, staged, "Icon sync complete");
            } else {
                info!(emitted, "Icon sync complete");
            }
            SyncOutcome::Done { emitted, staged }
        }
        Err(err) => {
            enter(SyncState::Failed);
            rollback(options);
            error!(error = %err, "Icon sync failed");
            SyncOutcome::Failed(err)
        }
    }
}

async fn sync(source: &dyn DesignSource, options: &SyncOptions) -> Result<(usize, usize)> {
    enter(SyncState::Cleaning);
    for dir in options.output_dirs() {
        if clean_dir(dir)? {
            debug!(path = %dir.display(), "Removed previous output");
        }
    }

    enter(SyncState::Fetching);
    let icons = list_icons(source, &options.page_name, &options.naming).await?;
    info!(count = icons.len(), "Found icons");
    let contents = fetch_icon_contents(source, icons).await?;

    let components = ComponentEmitter::new(&options.components_dir);
    let font = options.font_staging_dir.as_ref().map(FontAssetEmitter::new);
    let mut staged = 0;

    for (index, icon) in contents.iter().enumerate() {
        enter(SyncState::Emitting(index));
        components.emit(icon)?;
        if let Some(font) = &font
            && font.stage(icon)?.is_some()
        {
            staged += 1;
        }
    }

    Ok((contents.len(), staged))
}

fn enter(state: SyncState) {
    debug!(%state, "Sync state changed");
}

/// Best-effort removal of everything the run may have written
fn rollback(options: &SyncOptions) {
    for dir in options.output_dirs() {
        match clean_dir(dir) {
            Ok(_) => debug!(path = %dir.display(), "Rolled back output"),
            Err(err) => warn!(path = %dir.display(), error = %err, "Rollback could not remove output"),
        }
    }
}
