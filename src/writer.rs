//! Markdownファイルの書き込み

use crate::error::Result;
use photo_geo_common::{markdown_file_name, render_front_matter, ImageRecord};
use std::path::{Path, PathBuf};

/// 出力先パス（`<output_dir>/<画像名>.md`）
pub fn markdown_path(image_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(markdown_file_name(image_path))
}

/// フロントマターを書き込む（既存ファイルは上書き）
pub fn write_markdown(record: &ImageRecord, image_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let md_path = markdown_path(image_path, output_dir);
    let content = render_front_matter(record, image_path);

    std::fs::create_dir_all(output_dir)?;
    std::fs::write(&md_path, content)?;

    Ok(md_path)
}
