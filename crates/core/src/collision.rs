use crate::error::RenameError;
use crate::timestamp::TIMESTAMP_FORMAT;
use chrono::{Duration, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::debug;

// 1秒刻みで最大1分先まで探す。それ以上の連続衝突は異常として呼び出し側へ返す。
const MAX_PROBES: u32 = 60;

pub fn free_target_path(
    directory: &Path,
    timestamp: &str,
    suffix: &str,
) -> Result<PathBuf, RenameError> {
    let candidate = directory.join(format!("{timestamp}.{suffix}"));
    if !candidate.exists() {
        return Ok(candidate);
    }

    debug!(
        "既存ファイルと衝突しました、後続のタイムスタンプを試します: {}",
        candidate.display()
    );

    let base = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|err| {
        RenameError::metadata(
            &candidate,
            format!("タイムスタンプを解析できませんでした: {err}"),
        )
    })?;

    let mut probe = base;
    for _ in 0..MAX_PROBES {
        probe += Duration::seconds(1);
        let next = directory.join(format!("{}.{}", probe.format(TIMESTAMP_FORMAT), suffix));
        if !next.exists() {
            return Ok(next);
        }
    }

    Err(RenameError::Collision { path: candidate })
}
