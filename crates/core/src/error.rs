use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("画像メタデータを読めませんでした: {}: {reason}", .path.display())]
    Metadata { path: PathBuf, reason: String },
    #[error("空きファイル名が見つかりませんでした: {}", .path.display())]
    Collision { path: PathBuf },
    #[error("リネームに失敗しました: {} -> {}: {source}", .from.display(), .to.display())]
    Filesystem {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    pub fn metadata(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
