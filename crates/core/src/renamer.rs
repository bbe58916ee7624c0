use crate::collision::free_target_path;
use crate::error::RenameError;
use crate::filters::FilterSet;
use crate::timestamp::capture_timestamp;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub enum RenameOutcome {
    Success,
    Skipped,
    Error(RenameError),
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunTotals {
    pub total: usize,
    pub renamed: usize,
}

impl RunTotals {
    pub fn all_renamed(&self) -> bool {
        self.renamed == self.total
    }
}

#[derive(Debug)]
pub struct FileRenamer {
    filters: FilterSet,
    totals: RunTotals,
}

impl FileRenamer {
    pub fn new(filters: FilterSet) -> Self {
        Self {
            filters,
            totals: RunTotals::default(),
        }
    }

    pub fn totals(&self) -> RunTotals {
        self.totals
    }

    pub fn process_file(&mut self, path: &Path) -> RenameOutcome {
        let Some(file_name) = path.file_name().and_then(|v| v.to_str()).map(str::to_string)
        else {
            return RenameOutcome::Skipped;
        };

        debug!("対象ファイル: {file_name}");

        if !self.filters.matches(&file_name) {
            debug!("どのフィルタにも一致しないためスキップします: {file_name}");
            return RenameOutcome::Skipped;
        }

        self.totals.total += 1;

        match self.rename_matched(path, &file_name) {
            Ok(target) => {
                self.totals.renamed += 1;
                debug!("リネーム先: {}", target.display());
                debug!("リネーム済み: {}/{}件", self.totals.renamed, self.totals.total);
                RenameOutcome::Success
            }
            Err(err) => RenameOutcome::Error(err),
        }
    }

    fn rename_matched(&self, path: &Path, file_name: &str) -> Result<PathBuf, RenameError> {
        let timestamp = capture_timestamp(path)?;
        debug!("撮影日時: {timestamp}");

        let suffix = complete_suffix(file_name);
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let target = free_target_path(directory, &timestamp, suffix)?;

        fs::rename(path, &target).map_err(|source| RenameError::Filesystem {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;

        Ok(target)
    }

    pub fn process_directory(&mut self, directory: &Path) -> Result<()> {
        debug!("ディレクトリ: {}", directory.display());
        for path in list_files_sorted(directory)? {
            self.process_reporting(&path);
        }
        Ok(())
    }

    pub fn process_files(&mut self, files: &[PathBuf]) {
        for path in files {
            self.process_reporting(path);
        }
    }

    fn process_reporting(&mut self, path: &Path) {
        if let RenameOutcome::Error(err) = self.process_file(path) {
            warn!("リネームできませんでした: {}: {err}", path.display());
        }
    }
}

// 元ファイル名の最初のドット以降をそのまま引き継ぐ。大文字小文字も保持する。
fn complete_suffix(file_name: &str) -> &str {
    file_name.splitn(2, '.').nth(1).unwrap_or_default()
}

fn list_files_sorted(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("ディレクトリを読めませんでした: {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("エントリ読み取り失敗: {}", directory.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn run_batch(
    directories: &[PathBuf],
    files: &[PathBuf],
    extra_patterns: &[String],
) -> Result<RunTotals> {
    let filters = FilterSet::with_extra_patterns(extra_patterns)?;
    let mut renamer = FileRenamer::new(filters);

    for directory in directories {
        renamer.process_directory(directory)?;
    }
    renamer.process_files(files);

    let totals = renamer.totals();
    debug!("リネーム済み: {}/{}件", totals.renamed, totals.total);
    Ok(totals)
}
