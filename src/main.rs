use clap::Parser;
use photo_geo_rust::{cli, config, error, metadata, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { folder, output, source, exiftool, dry_run } => {
            println!("📍 photo-geo - GPSメタデータ変換\n");

            let config = Config::load()?;

            let input_dir = folder.unwrap_or_else(|| config.input_dir.clone());
            let output_dir = config.resolve_output_dir(&input_dir, output.as_deref());
            let source_kind = source.unwrap_or(config.source);
            let exiftool_path = exiftool.unwrap_or_else(|| config.exiftool_path.clone());

            // 取得元はバッチ全体で1つだけ保持する
            let metadata_source = metadata::open_source(source_kind, &exiftool_path)?;
            if cli.verbose {
                println!("  取得元: {}", source_kind);
                println!("  出力先: {}", output_dir.display());
            }

            let options = pipeline::RunOptions {
                input_dir,
                output_dir,
                dry_run,
                verbose: cli.verbose,
            };
            let summary = pipeline::run_batch(metadata_source, &options)?;

            println!(
                "\n✅ 完了: {}件処理、{}件失敗",
                summary.processed, summary.failed
            );
        }

        Commands::Config { set_input, set_output, set_exiftool, set_source, show } => {
            // 壊れた設定ファイルはデフォルト値から上書きされる
            let mut config = Config::load_or_default()?;
            let changed = set_input.is_some()
                || set_output.is_some()
                || set_exiftool.is_some()
                || set_source.is_some();

            if let Some(dir) = set_input {
                config.input_dir = dir;
            }
            if let Some(dir) = set_output {
                config.output_dir = Some(dir);
            }
            if let Some(path) = set_exiftool {
                config.exiftool_path = path;
            }
            if let Some(kind) = set_source {
                config.source = kind;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  写真フォルダ: {}", config.input_dir.display());
                println!(
                    "  出力フォルダ: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "(写真フォルダと同じ)".into())
                );
                println!("  exiftool: {}", config.exiftool_path);
                println!("  取得方式: {}", config.source);
            }
        }
    }

    Ok(())
}
