use crate::error::{PhotoGeoError, Result};
use crate::metadata::SourceKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 写真フォルダ
    pub input_dir: PathBuf,
    /// Markdown出力先（未設定なら写真フォルダと同じ）
    pub output_dir: Option<PathBuf>,
    /// exiftool 実行ファイル
    pub exiftool_path: String,
    /// メタデータ取得方式
    pub source: SourceKind,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 設定を読み込む。壊れている場合は警告を出してデフォルト値を返す
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        match Self::load_from(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!(
                    "⚠ 設定ファイルを読み込めません（デフォルト値を使用）: {}: {}",
                    config_path.display(),
                    e
                );
                Self::default_config()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoGeoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-geo").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            input_dir: PathBuf::from("./content/images"),
            output_dir: None,
            exiftool_path: "exiftool".into(),
            source: SourceKind::ExifTool,
        }
    }

    /// 出力先（未設定なら入力フォルダ）
    pub fn resolve_output_dir(&self, input: &Path, output: Option<&Path>) -> PathBuf {
        output
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| input.to_path_buf())
    }
}
