//! kamadak-exif によるプロセス内の読み込み
//!
//! GPS IFD のフィールドを exiftool と同じ表記の文字列に整形する

use super::MetadataSource;
use crate::error::{PhotoGeoError, Result};
use photo_geo_common::{GpsTag, TagMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct ExifReader {
    reader: exif::Reader,
}

impl ExifReader {
    pub fn new() -> Self {
        Self {
            reader: exif::Reader::new(),
        }
    }
}

impl Default for ExifReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for ExifReader {
    fn read_tags(&mut self, path: &Path) -> Result<TagMap> {
        let file = File::open(path)?;
        let mut bufreader = BufReader::new(file);
        let exif = self
            .reader
            .read_from_container(&mut bufreader)
            .map_err(|e| PhotoGeoError::ExifRead(e.to_string()))?;

        Ok(tags_from_exif(&exif))
    }
}

fn tags_from_exif(exif: &exif::Exif) -> TagMap {
    let mut tags = TagMap::new();

    if let Some(lat) = coordinate(exif, exif::Tag::GPSLatitude, exif::Tag::GPSLatitudeRef) {
        tags.insert_text(GpsTag::Latitude, lat);
    }

    if let Some(lon) = coordinate(exif, exif::Tag::GPSLongitude, exif::Tag::GPSLongitudeRef) {
        tags.insert_text(GpsTag::Longitude, lon);
    }

    if let Some(field) = exif.get_field(exif::Tag::GPSAltitude, exif::In::PRIMARY) {
        if let Some(altitude) = first_rational(&field.value) {
            let below = exif
                .get_field(exif::Tag::GPSAltitudeRef, exif::In::PRIMARY)
                .and_then(|f| f.value.get_uint(0))
                == Some(1);
            tags.insert_text(GpsTag::Altitude, format_altitude(altitude, below));
        }
    }

    // GPSDateTime は GPSDateStamp + GPSTimeStamp の合成
    let date = exif
        .get_field(exif::Tag::GPSDateStamp, exif::In::PRIMARY)
        .and_then(|f| ascii(&f.value));
    let time = exif
        .get_field(exif::Tag::GPSTimeStamp, exif::In::PRIMARY)
        .and_then(|f| rationals(&f.value));
    if let (Some(date), Some(time)) = (date, time) {
        tags.insert_text(GpsTag::DateTime, format_gps_datetime(&date, &time));
    }

    tags
}

fn coordinate(exif: &exif::Exif, tag: exif::Tag, ref_tag: exif::Tag) -> Option<String> {
    let field = exif.get_field(tag, exif::In::PRIMARY)?;
    let dms = rationals(&field.value)?;
    let direction = exif
        .get_field(ref_tag, exif::In::PRIMARY)
        .and_then(|f| ascii(&f.value));

    Some(format_dms(dms[0], dms[1], dms[2], direction.as_deref()))
}

/// 3要素以上の有理数配列
fn rationals(value: &exif::Value) -> Option<[f64; 3]> {
    match value {
        exif::Value::Rational(r) if r.len() >= 3 => {
            Some([r[0].to_f64(), r[1].to_f64(), r[2].to_f64()])
        }
        _ => None,
    }
}

fn first_rational(value: &exif::Value) -> Option<f64> {
    match value {
        exif::Value::Rational(r) => r.first().map(|v| v.to_f64()),
        _ => None,
    }
}

fn ascii(value: &exif::Value) -> Option<String> {
    match value {
        exif::Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// `37 deg 7' 24.44" N` 形式
fn format_dms(degrees: f64, minutes: f64, seconds: f64, direction: Option<&str>) -> String {
    let mut dms = format!("{} deg {}' {:.2}\"", degrees, minutes, seconds);
    if let Some(direction) = direction {
        dms.push(' ');
        dms.push_str(direction);
    }
    dms
}

fn format_altitude(meters: f64, below_sea_level: bool) -> String {
    let reference = if below_sea_level { "Below" } else { "Above" };
    format!("{:.1} m {} Sea Level", meters, reference)
}

/// `2021:05:04 10:00:00Z` 形式
fn format_gps_datetime(date: &str, time: &[f64; 3]) -> String {
    format!(
        "{} {:02}:{:02}:{:02}Z",
        date,
        time[0] as u32,
        time[1] as u32,
        time[2].floor() as u32
    )
}
