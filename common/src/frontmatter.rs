//! フロントマター文書の生成

use crate::record::ImageRecord;
use chrono::SecondsFormat;
use std::path::Path;

/// 出力Markdownのファイル名（拡張子を `.md` に置換）
pub fn markdown_file_name(image_path: &Path) -> String {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}.md", stem)
}

/// フロントマターを生成
///
/// ```text
/// ---
/// image: "IMG_0001.jpg"
/// latitude: 37.123456
/// longitude: -122.654321
/// datetime: "2021-05-04T10:00:00Z"
/// ---
/// ```
pub fn render_front_matter(record: &ImageRecord, image_path: &Path) -> String {
    let image_name = image_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    format!(
        "---\nimage: \"{}\"\nlatitude: {:.6}\nlongitude: {:.6}\ndatetime: \"{}\"\n---\n",
        image_name,
        record.latitude,
        record.longitude,
        record
            .capture_time
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}
