use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoGeoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("exiftoolエラー: {0}")]
    ExifTool(String),

    #[error("EXIF読み込みエラー: {0}")]
    ExifRead(String),

    #[error("フォルダ走査エラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_geo_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoGeoError>;
