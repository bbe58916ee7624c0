use crate::error::RenameError;
use chrono::{DateTime, Local};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H.%M.%S";

pub fn capture_timestamp(path: &Path) -> Result<String, RenameError> {
    let file = File::open(path).map_err(|err| RenameError::metadata(path, err.to_string()))?;
    let mut reader = BufReader::new(file);

    match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => match exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) {
            Some(field) => canonicalize_tag_value(&tag_value_text(field), path),
            None => modified_timestamp(path),
        },
        // 画像としては読めるがEXIFを持たないケース。ファイル属性へフォールバックする。
        Err(exif::Error::NotFound(_)) | Err(exif::Error::NotSupported(_)) => {
            modified_timestamp(path)
        }
        Err(err) => Err(RenameError::metadata(path, err.to_string())),
    }
}

fn tag_value_text(field: &exif::Field) -> String {
    match &field.value {
        Value::Ascii(chunks) if !chunks.is_empty() => {
            String::from_utf8_lossy(&chunks[0]).trim().to_string()
        }
        _ => field.display_value().to_string(),
    }
}

fn canonicalize_tag_value(raw: &str, path: &Path) -> Result<String, RenameError> {
    let mut parts = raw.split_whitespace();
    let (Some(date), Some(time)) = (parts.next(), parts.next()) else {
        return Err(RenameError::metadata(
            path,
            format!("不正な撮影日時です: {raw}"),
        ));
    };

    Ok(format!("{} {}", date.replace(':', "-"), time.replace(':', ".")))
}

fn modified_timestamp(path: &Path) -> Result<String, RenameError> {
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|err| RenameError::metadata(path, err.to_string()))?;
    let local: DateTime<Local> = DateTime::from(modified);
    Ok(local.format(TIMESTAMP_FORMAT).to_string())
}
