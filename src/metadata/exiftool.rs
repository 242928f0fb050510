//! exiftool 連携
//!
//! `exiftool -stay_open True -@ -` を起動したまま、標準入力に引数を1行ずつ送り
//! `{ready}` 行までの出力を1回分のレスポンスとして読む。

use super::MetadataSource;
use crate::error::{PhotoGeoError, Result};
use photo_geo_common::{GpsTag, TagMap};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

const READY_MARKER: &str = "{ready}";

pub struct ExifTool {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    closed: bool,
}

impl ExifTool {
    /// exiftool プロセスを起動
    pub fn spawn(program: &str) -> Result<Self> {
        let mut child = Command::new(program)
            .args(["-stay_open", "True", "-@", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PhotoGeoError::ExifTool(format!("{} の起動に失敗: {}", program, e)))?;

        let stdin = child.stdin.take();
        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PhotoGeoError::ExifTool("標準出力を取得できません".into()));
            }
        };

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            closed: false,
        })
    }

    /// 引数を送って `-execute` し、`{ready}` までの出力を返す
    fn execute(&mut self, args: &[&str]) -> Result<String> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| PhotoGeoError::ExifTool("exiftool は終了済みです".into()))?;

        for arg in args {
            writeln!(stdin, "{}", arg)?;
        }
        writeln!(stdin, "-execute")?;
        stdin.flush()?;

        let mut output = String::new();
        loop {
            let mut line = String::new();
            if self.stdout.read_line(&mut line)? == 0 {
                return Err(PhotoGeoError::ExifTool("exiftool が予期せず終了しました".into()));
            }
            if line.trim_end() == READY_MARKER {
                break;
            }
            output.push_str(&line);
        }

        Ok(output)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.closed = true;

        if let Some(mut stdin) = self.stdin.take() {
            writeln!(stdin, "-stay_open")?;
            writeln!(stdin, "False")?;
            stdin.flush()?;
        }

        self.child.wait()?;
        Ok(())
    }

    /// 正常終了できなければプロセスを強制終了
    fn release(&mut self) -> Result<()> {
        let result = self.shutdown();
        if result.is_err() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
        result
    }
}

impl MetadataSource for ExifTool {
    fn read_tags(&mut self, path: &Path) -> Result<TagMap> {
        let path = path.to_string_lossy();
        let mut args = vec!["-json"];
        let selectors: Vec<String> = GpsTag::ALL.iter().map(|t| format!("-{}", t.name())).collect();
        args.extend(selectors.iter().map(String::as_str));
        args.push(path.as_ref());

        let output = self.execute(&args)?;
        parse_response(&output)
    }

    fn close(mut self: Box<Self>) -> Result<()> {
        self.release()
    }
}

impl Drop for ExifTool {
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.release();
        }
    }
}

/// `-json` 出力の先頭オブジェクトをタグマップに変換
fn parse_response(output: &str) -> Result<TagMap> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(PhotoGeoError::ExifTool("メタデータが見つかりません".into()));
    }

    let entries: Vec<serde_json::Value> = serde_json::from_str(trimmed)?;
    entries
        .into_iter()
        .next()
        .and_then(TagMap::from_json)
        .ok_or_else(|| PhotoGeoError::ExifTool("メタデータが見つかりません".into()))
}
