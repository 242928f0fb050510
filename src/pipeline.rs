//! バッチ処理
//!
//! 走査 → タグ読み込み → レコード抽出 → Markdown出力 を1枚ずつ順に実行する。
//! 画像単位のエラーはログに出してスキップし、バッチは継続する。

use crate::error::Result;
use crate::metadata::MetadataSource;
use crate::scanner;
use crate::writer;
use photo_geo_common::{extract_record, render_front_matter, ExtractWarning, ImageRecord};
use std::path::{Path, PathBuf};

/// バッチ実行オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

/// バッチ結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// 取得元を使ってバッチを実行し、終了時に必ず取得元を解放する
pub fn run_batch(mut source: Box<dyn MetadataSource>, options: &RunOptions) -> Result<BatchSummary> {
    let result = process_folder(source.as_mut(), options);
    let closed = source.close();

    let summary = result?;
    closed?;
    Ok(summary)
}

/// フォルダ内のJPEGを順に処理
///
/// 走査自体の失敗のみエラーとして返す
pub fn process_folder(source: &mut dyn MetadataSource, options: &RunOptions) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    if options.verbose {
        println!(
            "  開始: {} ({})",
            options.input_dir.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }

    for path in scanner::walk_jpegs(&options.input_dir)? {
        let path = path?;

        let record = match read_record(source, &path, options.verbose) {
            Ok(record) => record,
            Err(e) => {
                println!("✘ 処理失敗 {}: {}", path.display(), e);
                summary.failed += 1;
                continue;
            }
        };

        if options.dry_run {
            let md_path = writer::markdown_path(&path, &options.output_dir);
            println!("✔ (ドライラン) {} → {}", path.display(), md_path.display());
            if options.verbose {
                print!("{}", render_front_matter(&record, &path));
            }
            summary.processed += 1;
            continue;
        }

        match writer::write_markdown(&record, &path, &options.output_dir) {
            Ok(md_path) => {
                if options.verbose {
                    println!("  出力: {}", md_path.display());
                }
                println!("✔ 処理完了: {}", path.display());
                summary.processed += 1;
            }
            Err(e) => {
                println!("✘ Markdown生成失敗 {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// 1枚分のタグを読み込み、警告を出力してレコードを抽出
pub fn read_record(source: &mut dyn MetadataSource, path: &Path, verbose: bool) -> Result<ImageRecord> {
    let tags = source.read_tags(path)?;
    if verbose {
        println!("  タグ: {} ({}件)", path.display(), tags.len());
    }

    let mut warnings = Vec::new();
    let result = extract_record(&tags, &mut warnings);

    for warning in &warnings {
        let label = match warning {
            ExtractWarning::MissingGeolocation => "位置情報がありません",
            ExtractWarning::MissingAltitude => "高度情報がありません",
        };
        println!("⚠ 警告: {}: {}", label, path.display());
    }

    Ok(result?)
}
