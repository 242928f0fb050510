//! JPEG ファイルの再帰走査

use crate::error::{PhotoGeoError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// 拡張子が jpg/jpeg（大文字小文字を区別しない）か判定
pub fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            JPEG_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// フォルダ以下のJPEGファイルを順に返す
///
/// 走査は遅延評価で、1件ずつ処理してから次のエントリを読む。
/// ファイルを指すシンボリックリンクは対象に含めるが、
/// ディレクトリへのリンクはたどらない。
/// 走査中のエラーは `PhotoGeoError::Walk` として返る。
pub fn walk_jpegs(folder: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    if !folder.exists() {
        return Err(PhotoGeoError::FolderNotFound(folder.display().to_string()));
    }

    let iter = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                if is_regular_file(&entry) && is_jpeg(entry.path()) {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(PhotoGeoError::Walk(e))),
        });

    Ok(iter)
}

fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect(folder: &Path) -> Vec<String> {
        walk_jpegs(folder)
            .unwrap()
            .map(|p| p.unwrap())
            .map(|p| p.strip_prefix(folder).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_is_jpeg() {
        assert!(is_jpeg(Path::new("a.jpg")));
        assert!(is_jpeg(Path::new("a.JPG")));
        assert!(is_jpeg(Path::new("a.jpeg")));
        assert!(is_jpeg(Path::new("a.JpEg")));
        assert!(!is_jpeg(Path::new("a.png")));
        assert!(!is_jpeg(Path::new("a.txt")));
        assert!(!is_jpeg(Path::new("jpg")));
        assert!(!is_jpeg(Path::new("a.jpg.md")));
    }

    #[test]
    fn test_walk_folder_not_found() {
        let result = walk_jpegs(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(PhotoGeoError::FolderNotFound(_))));
    }

    #[test]
    fn test_walk_empty_folder() {
        let dir = tempdir().unwrap();
        assert!(collect(dir.path()).is_empty());
    }

    #[test]
    fn test_walk_recursive_and_filtered() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("2021").join("may");
        fs::create_dir_all(&sub).unwrap();

        fs::write(dir.path().join("b.JPG"), b"dummy").unwrap();
        fs::write(dir.path().join("a.jpeg"), b"dummy").unwrap();
        fs::write(dir.path().join("c.png"), b"dummy").unwrap();
        fs::write(dir.path().join("notes.txt"), b"text").unwrap();
        fs::write(sub.join("d.jpg"), b"dummy").unwrap();
        fs::write(sub.join("d.md"), b"---").unwrap();
        // 拡張子付きのディレクトリは対象外
        fs::create_dir_all(dir.path().join("album.jpg")).unwrap();

        let found = collect(dir.path());
        assert_eq!(found, vec!["2021/may/d.jpg", "a.jpeg", "b.JPG"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_includes_symlinked_files() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let photos = dir.path().join("photos");
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir_all(&photos).unwrap();
        fs::create_dir_all(elsewhere.join("album")).unwrap();

        fs::write(elsewhere.join("real.jpg"), b"dummy").unwrap();
        fs::write(elsewhere.join("album").join("inner.jpg"), b"dummy").unwrap();
        symlink(elsewhere.join("real.jpg"), photos.join("linked.jpg")).unwrap();
        symlink(elsewhere.join("album"), photos.join("album")).unwrap();
        symlink(dir.path().join("missing.jpg"), photos.join("dangling.jpg")).unwrap();

        let found = collect(&photos);
        assert_eq!(found, vec!["linked.jpg"]);
    }
}
