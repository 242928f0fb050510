//! メタデータ取得元
//!
//! 画像1枚ごとにGPSタグのマップを返す外部コラボレータ。
//! バッチ開始時に一度だけ生成し、終了時に `close` で解放する。

mod exif;
mod exiftool;

pub use self::exif::ExifReader;
pub use self::exiftool::ExifTool;

use crate::error::Result;
use clap::ValueEnum;
use photo_geo_common::TagMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// メタデータ取得方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// exiftool（stay_openプロセス）
    #[value(name = "exiftool")]
    ExifTool,
    /// kamadak-exif（プロセス内）
    Exif,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::ExifTool => write!(f, "exiftool"),
            SourceKind::Exif => write!(f, "exif"),
        }
    }
}

pub trait MetadataSource {
    /// 画像のGPSタグを読み込む
    fn read_tags(&mut self, path: &Path) -> Result<TagMap>;

    /// 取得元を解放
    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// 取得元を初期化
pub fn open_source(kind: SourceKind, exiftool_path: &str) -> Result<Box<dyn MetadataSource>> {
    match kind {
        SourceKind::ExifTool => Ok(Box::new(ExifTool::spawn(exiftool_path)?)),
        SourceKind::Exif => Ok(Box::new(ExifReader::new())),
    }
}
