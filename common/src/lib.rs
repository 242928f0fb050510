//! Photo Geo Common Library
//!
//! 座標変換・メタデータ抽出・フロントマター生成（ファイルI/Oなし）

pub mod dms;
pub mod error;
pub mod frontmatter;
pub mod record;
pub mod tags;

pub use dms::{dms_to_decimal, Direction};
pub use error::{Axis, Error, Result};
pub use frontmatter::{markdown_file_name, render_front_matter};
pub use record::{extract_record, ExtractWarning, ImageRecord};
pub use tags::{GpsTag, TagMap};
