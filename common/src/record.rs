//! 画像メタデータ抽出
//!
//! タグマップを検証し、十進度の座標と撮影日時を持つ `ImageRecord` を作る

use crate::dms::dms_to_decimal;
use crate::error::{Axis, Error, Result};
use crate::tags::{GpsTag, TagMap};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

/// GPSDateTime の書式（UTC、コロン区切りの日付、小数秒は任意）
const GPS_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S%.fZ";

/// 1画像分の位置・日時情報
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// 単位付きの生文字列（例: "12.3 m"）
    pub altitude: Option<String>,
    pub capture_time: DateTime<Utc>,
}

/// 処理は続行される警告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractWarning {
    MissingGeolocation,
    MissingAltitude,
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::MissingGeolocation => write!(f, "missing geolocation data"),
            ExtractWarning::MissingAltitude => write!(f, "missing altitude data"),
        }
    }
}

/// タグマップから `ImageRecord` を抽出
///
/// 警告は `warnings` に追加される。抽出が失敗した場合も、
/// 失敗前に検出した警告は残る。
///
/// # Errors
/// * `Error::MissingData` - GPSDateTime、緯度、経度のいずれかがない
/// * `Error::Conversion` - 緯度・経度のDMS変換に失敗
/// * `Error::Parse` - GPSDateTime の書式が不正
pub fn extract_record(tags: &TagMap, warnings: &mut Vec<ExtractWarning>) -> Result<ImageRecord> {
    let latitude = tags.text(GpsTag::Latitude);
    let longitude = tags.text(GpsTag::Longitude);
    let altitude = tags.text(GpsTag::Altitude);
    let date_time = tags.text(GpsTag::DateTime);

    if latitude.is_none() || longitude.is_none() {
        warnings.push(ExtractWarning::MissingGeolocation);
    }

    if altitude.is_none() {
        warnings.push(ExtractWarning::MissingAltitude);
    }

    let date_time = date_time.ok_or_else(|| Error::MissingData(GpsTag::DateTime.name().into()))?;

    let latitude = convert_axis(latitude, GpsTag::Latitude, Axis::Latitude)?;
    let longitude = convert_axis(longitude, GpsTag::Longitude, Axis::Longitude)?;
    let capture_time = parse_gps_datetime(date_time)?;

    Ok(ImageRecord {
        latitude,
        longitude,
        altitude: altitude.map(str::to_string),
        capture_time,
    })
}

fn convert_axis(value: Option<&str>, tag: GpsTag, axis: Axis) -> Result<f64> {
    let dms = value.ok_or_else(|| Error::MissingData(tag.name().into()))?;
    dms_to_decimal(dms).map_err(|e| Error::Conversion {
        axis,
        source: Box::new(e),
    })
}

/// `YYYY:MM:DD HH:MM:SS[.fff]Z` をUTC日時としてパース
pub fn parse_gps_datetime(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, GPS_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::Parse(format!("{} ({})", value, e)))
}
