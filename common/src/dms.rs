//! 度分秒（DMS）→ 十進度 変換
//!
//! exiftool が出力する `37 deg 7' 24.44" N` 形式を対象とする

use crate::error::{Error, Result};
use std::str::FromStr;

/// 方位（N/S/E/W）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// 南緯・西経は負の値
    pub fn is_negative(&self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Direction::North),
            "S" => Ok(Direction::South),
            "E" => Ok(Direction::East),
            "W" => Ok(Direction::West),
            _ => Err(Error::Format(format!("unknown direction: {}", s))),
        }
    }
}

/// DMS文字列を十進度に変換
///
/// `decimal = degrees + minutes/60 + seconds/3600`、方位が S/W なら符号反転。
///
/// # Arguments
/// * `dms` - `"<deg> deg <min>' <sec>\" <dir>"` 形式の文字列
///
/// # Returns
/// * `Ok(f64)` - 十進度
/// * `Err(Error::Format)` - トークン数が4未満、数値が不正、方位が不明な場合
///
/// # Examples
/// ```
/// use photo_geo_common::dms_to_decimal;
///
/// let lat = dms_to_decimal("37 deg 30' 0.00\" S").unwrap();
/// assert!((lat + 37.5).abs() < 1e-9);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let parts: Vec<&str> = dms.split(' ').collect();
    if parts.len() < 4 {
        return Err(Error::Format(dms.to_string()));
    }

    let degrees = parse_number(parts[0], dms)?;
    let minutes = parse_number(parts[2].trim_end_matches('\''), dms)?;
    let seconds = parse_number(parts[3].trim_end_matches('"'), dms)?;

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    // 方位トークンなし（4トークン）は符号なしとして扱う
    match parts.get(4) {
        Some(token) => {
            let direction: Direction = token.parse()?;
            Ok(if direction.is_negative() { -decimal } else { decimal })
        }
        None => Ok(decimal),
    }
}

fn parse_number(token: &str, dms: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| Error::Format(format!("{} ({}: {})", dms, token, e)))
}
