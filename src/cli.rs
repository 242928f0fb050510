use clap::{Parser, Subcommand};
use crate::metadata::SourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-geo")]
#[command(about = "写真のGPSメタデータからMarkdownフロントマターを生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダを走査してMarkdownを出力
    Run {
        /// 写真フォルダのパス（省略時は設定値）
        folder: Option<PathBuf>,

        /// 出力フォルダ（デフォルト: 写真フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// メタデータ取得方式 (exiftool/exif)
        #[arg(long)]
        source: Option<SourceKind>,

        /// exiftool 実行ファイルのパス
        #[arg(long)]
        exiftool: Option<String>,

        /// ドライラン（ファイルを書き込まずプレビュー）
        #[arg(long)]
        dry_run: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 写真フォルダを設定
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 出力フォルダを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// exiftool のパスを設定
        #[arg(long)]
        set_exiftool: Option<String>,

        /// メタデータ取得方式を設定
        #[arg(long)]
        set_source: Option<SourceKind>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["photo-geo", "run"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Run { folder, output, source, exiftool, dry_run } => {
                assert!(folder.is_none());
                assert!(output.is_none());
                assert!(source.is_none());
                assert!(exiftool.is_none());
                assert!(!dry_run);
            }
            _ => panic!("Run以外がパースされた"),
        }
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = Cli::try_parse_from([
            "photo-geo", "run", "./photos", "-o", "./notes", "--source", "exif", "--dry-run", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Run { folder, output, source, dry_run, .. } => {
                assert_eq!(folder, Some(PathBuf::from("./photos")));
                assert_eq!(output, Some(PathBuf::from("./notes")));
                assert_eq!(source, Some(SourceKind::Exif));
                assert!(dry_run);
            }
            _ => panic!("Run以外がパースされた"),
        }
    }

    #[test]
    fn test_parse_unknown_source() {
        let result = Cli::try_parse_from(["photo-geo", "run", "--source", "magic"]);
        assert!(result.is_err());
    }
}
