//! エラー型定義

use std::fmt;
use thiserror::Error;

/// 変換対象の座標軸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid DMS format: {0}")]
    Format(String),

    #[error("missing metadata: {0}")]
    MissingData(String),

    #[error("failed to parse datetime: {0}")]
    Parse(String),

    #[error("failed to convert {axis}: {source}")]
    Conversion {
        axis: Axis,
        #[source]
        source: Box<Error>,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_format() {
        let error = Error::Format("12 deg".to_string());
        assert_eq!(format!("{}", error), "invalid DMS format: 12 deg");
    }

    #[test]
    fn test_error_display_conversion() {
        let error = Error::Conversion {
            axis: Axis::Longitude,
            source: Box::new(Error::Format("x".to_string())),
        };
        let display = format!("{}", error);
        assert!(display.contains("longitude"));
        assert!(display.contains("invalid DMS format: x"));
    }

    #[test]
    fn test_conversion_error_source() {
        use std::error::Error as _;

        let error = Error::Conversion {
            axis: Axis::Latitude,
            source: Box::new(Error::Format("bad".to_string())),
        };
        let source = error.source().expect("source missing");
        assert!(source.to_string().contains("bad"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MissingData("GPSDateTime".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingData"));
        assert!(debug.contains("GPSDateTime"));
    }
}
