use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use std::fs;
use std::io::Cursor;
use std::path::Path;

// 1x1の透過PNG。EXIFチャンクを持たない。
pub const MINIMAL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

// DateTimeOriginalだけを持つ最小構成のJPEGを書き出す。
pub fn write_jpeg_with_datetime(path: &Path, datetime: &str) {
    let field = Field {
        tag: Tag::DateTimeOriginal,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![datetime.as_bytes().to_vec()]),
    };

    let mut writer = Writer::new();
    writer.push_field(&field);
    let mut cursor = Cursor::new(Vec::new());
    writer
        .write(&mut cursor, false)
        .expect("EXIF payload must be writable");
    let exif_payload = cursor.into_inner();

    let mut jpeg = Vec::with_capacity(exif_payload.len() + 16);
    jpeg.extend_from_slice(&[0xFF, 0xD8]);
    jpeg.extend_from_slice(&[0xFF, 0xE1]);
    jpeg.extend_from_slice(&((exif_payload.len() + 8) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&exif_payload);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);

    fs::write(path, jpeg).expect("JPEG fixture must be writable");
}
