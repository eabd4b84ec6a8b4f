//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// パス文字列をキーにファイル内容をメモリ上に保持する。
/// 親ディレクトリの追跡はしない（exists は登録済みパスのみ true）。
pub struct MockFs {
    entries: RwLock<HashMap<String, MockEntry>>,
}

struct MockEntry {
    content: Vec<u8>,
    is_dir: bool,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.entries.write().unwrap().insert(
            path.to_string(),
            MockEntry {
                content: content.as_bytes().to_vec(),
                is_dir: false,
            },
        );
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.entries.write().unwrap().insert(
            path.to_string(),
            MockEntry {
                content: Vec::new(),
                is_dir: true,
            },
        );
    }

    /// ファイル内容を取得（テストのアサーション用）
    pub fn contents(&self, path: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap()
            .get(path)
            .filter(|e| !e.is_dir)
            .map(|e| String::from_utf8_lossy(&e.content).to_string())
    }

    /// 登録済みファイルパスの一覧（ソート済み）
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|(_, e)| !e.is_dir)
            .map(|(p, _)| p.clone())
            .collect();
        paths.sort();
        paths
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.entries
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(path.to_string_lossy().as_ref());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.read().unwrap();
        let entry = entries
            .get(path.to_string_lossy().as_ref())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))?;
        if entry.is_dir {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "is a directory",
            )
            .into());
        }
        Ok(String::from_utf8_lossy(&entry.content).to_string())
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.entries.write().unwrap().insert(
            path.to_string_lossy().to_string(),
            MockEntry {
                content: content.to_vec(),
                is_dir: false,
            },
        );
        Ok(())
    }
}
