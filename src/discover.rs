use ignore::WalkBuilder;
use std::path::PathBuf;

use crate::error::Result;

/// Finds TS catalogs under a directory, honoring gitignore rules.
pub struct CatalogFinder {
    base_dir: PathBuf,
    include_hidden: bool,
}

impl CatalogFinder {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            include_hidden: false,
        }
    }

    pub fn include_hidden(mut self, value: bool) -> Self {
        self.include_hidden = value;
        self
    }

    /// Collect every `*.ts` catalog below the base directory, sorted for
    /// deterministic output.
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkBuilder::new(&self.base_dir)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .hidden(!self.include_hidden)
            .build();

        let mut catalogs = Vec::new();
        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }
            let path = entry.path();
            if path.extension().map(|ext| ext == "ts").unwrap_or(false) {
                catalogs.push(path.to_path_buf());
            }
        }
        catalogs.sort();
        Ok(catalogs)
    }
}
