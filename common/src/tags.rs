//! メタデータタグの型付きルックアップ
//!
//! 外部ツールが返す未型付けのフィールドマップ（JSONオブジェクト）を包み、
//! 必要な4タグだけを文字列として取り出す

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 使用するGPSタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsTag {
    Latitude,
    Longitude,
    Altitude,
    DateTime,
}

impl GpsTag {
    pub const ALL: [GpsTag; 4] = [
        GpsTag::Latitude,
        GpsTag::Longitude,
        GpsTag::Altitude,
        GpsTag::DateTime,
    ];

    /// exiftool のタグ名
    pub fn name(&self) -> &'static str {
        match self {
            GpsTag::Latitude => "GPSLatitude",
            GpsTag::Longitude => "GPSLongitude",
            GpsTag::Altitude => "GPSAltitude",
            GpsTag::DateTime => "GPSDateTime",
        }
    }
}

/// 1画像分のタグマップ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap {
    fields: Map<String, Value>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSONオブジェクトから作成（オブジェクト以外は None）
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// 文字列値を設定
    pub fn insert_text(&mut self, tag: GpsTag, value: impl Into<String>) {
        self.fields
            .insert(tag.name().to_string(), Value::String(value.into()));
    }

    /// タグの文字列値を取得
    ///
    /// 文字列以外の値（数値など）は存在しないものとして扱う
    pub fn text(&self, tag: GpsTag) -> Option<&str> {
        self.fields.get(tag.name()).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_present() {
        let mut tags = TagMap::new();
        tags.insert_text(GpsTag::Latitude, "35 deg 0' 0\" N");
        assert_eq!(tags.text(GpsTag::Latitude), Some("35 deg 0' 0\" N"));
        assert_eq!(tags.text(GpsTag::Longitude), None);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_non_string_value_is_absent() {
        let tags = TagMap::from_json(json!({
            "SourceFile": "a.jpg",
            "GPSAltitude": 12.3,
            "GPSDateTime": "2021:05:04 10:00:00Z"
        }))
        .unwrap();

        assert_eq!(tags.text(GpsTag::Altitude), None);
        assert_eq!(tags.text(GpsTag::DateTime), Some("2021:05:04 10:00:00Z"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(TagMap::from_json(json!(["GPSLatitude"])).is_none());
        assert!(TagMap::from_json(json!("text")).is_none());
    }

    #[test]
    fn test_tag_names() {
        let names: Vec<&str> = GpsTag::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["GPSLatitude", "GPSLongitude", "GPSAltitude", "GPSDateTime"]
        );
    }
}
