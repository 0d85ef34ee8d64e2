//! Media catalog and startup existence probe

use crate::core::error::{JudoError, Result};
use crate::game::summary::{hourglass_asset, Grade, PROGRESS_STAGES};
use crate::tasks::catalog::TaskDatabase;
use std::path::{Path, PathBuf};

/// Every media path the game may load, relative to the media directory
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    paths: Vec<PathBuf>,
}

impl AssetCatalog {
    /// Collect task media, the accomplishment sound, hourglass stages and medals
    pub fn from_database(db: &TaskDatabase) -> Self {
        let mut paths: Vec<PathBuf> = db
            .all_tasks()
            .flat_map(|task| task.assets())
            .map(Path::to_path_buf)
            .collect();

        paths.push(db.accomplishment().to_path_buf());
        paths.extend((0..PROGRESS_STAGES).map(hourglass_asset));
        paths.extend(Grade::ALL.iter().map(|g| g.medal_asset()));

        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Verify that every path resolves to an existing file under `root`
    ///
    /// Reports the first missing file with its full path.
    pub fn check_all_files_exist(&self, root: &Path) -> Result<()> {
        for relative in &self.paths {
            let path = root.join(relative);
            if !path.is_file() {
                return Err(JudoError::MissingAsset { path });
            }
        }
        tracing::debug!(
            "All {} media files present under {}",
            self.paths.len(),
            root.display()
        );
        Ok(())
    }
}
