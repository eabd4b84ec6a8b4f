//! バレルファイル更新
//!
//! components/index.ts に `export * from "./<name>";` を追記する。
//! バレル更新はベストエフォート: 失敗してもインストール自体は
//! 成功として扱い、結果は ExportOutcome で呼び出し側に返す。

use crate::fs::FileSystem;
use std::path::Path;

/// バレル更新の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// エクスポート行を追記した
    Added,
    /// 既に同じエクスポートがあり、何もしなかった
    AlreadyExported,
    /// 読み書きに失敗し、バレルを変更できなかった
    Skipped(String),
}

/// エクスポート行（正規形）
fn export_line(name: &str) -> String {
    format!("export * from \"./{}\";", name)
}

/// 既存本文に識別子のエクスポートが含まれるか
///
/// 引用符の種別は問わないが、`./<name>` の完全一致のみ認める。
fn has_export(content: &str, name: &str) -> bool {
    let double = format!("\"./{}\"", name);
    let single = format!("'./{}'", name);
    content.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("export") && (line.contains(&double) || line.contains(&single))
    })
}

/// バレルにエクスポート行を冪等に追記する
///
/// - ファイルが無ければ新規作成
/// - 既存本文の末尾に改行が無ければ補ってから追記
/// - 同じ識別子のエクスポートが既にあれば何もしない
pub fn ensure_export(fs: &dyn FileSystem, barrel: &Path, name: &str) -> ExportOutcome {
    let current = if fs.exists(barrel) {
        match fs.read_to_string(barrel) {
            Ok(content) => content,
            Err(err) => return ExportOutcome::Skipped(err.to_string()),
        }
    } else {
        String::new()
    };

    if has_export(&current, name) {
        return ExportOutcome::AlreadyExported;
    }

    let mut next = current;
    if !next.is_empty() && !next.ends_with('\n') {
        next.push('\n');
    }
    next.push_str(&export_line(name));
    next.push('\n');

    match fs.write(barrel, next.as_bytes()) {
        Ok(()) => ExportOutcome::Added,
        Err(err) => ExportOutcome::Skipped(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VesperError};
    use crate::fs::mock::MockFs;
    use std::path::PathBuf;

    const BARREL: &str = "/app/components/index.ts";

    #[test]
    fn test_creates_barrel_when_missing() {
        let fs = MockFs::new();

        let outcome = ensure_export(&fs, &PathBuf::from(BARREL), "button");

        assert_eq!(outcome, ExportOutcome::Added);
        assert_eq!(
            fs.contents(BARREL).unwrap(),
            "export * from \"./button\";\n"
        );
    }

    #[test]
    fn test_appends_to_existing_barrel() {
        let fs = MockFs::new();
        fs.add_file(BARREL, "export * from \"./button\";\n");

        let outcome = ensure_export(&fs, &PathBuf::from(BARREL), "card");

        assert_eq!(outcome, ExportOutcome::Added);
        assert_eq!(
            fs.contents(BARREL).unwrap(),
            "export * from \"./button\";\nexport * from \"./card\";\n"
        );
    }

    #[test]
    fn test_second_call_is_noop() {
        let fs = MockFs::new();

        assert_eq!(
            ensure_export(&fs, &PathBuf::from(BARREL), "button"),
            ExportOutcome::Added
        );
        assert_eq!(
            ensure_export(&fs, &PathBuf::from(BARREL), "button"),
            ExportOutcome::AlreadyExported
        );
        assert_eq!(
            fs.contents(BARREL).unwrap(),
            "export * from \"./button\";\n"
        );
    }

    #[test]
    fn test_single_quoted_export_counts_as_present() {
        let fs = MockFs::new();
        fs.add_file(BARREL, "export * from './button';\n");

        assert_eq!(
            ensure_export(&fs, &PathBuf::from(BARREL), "button"),
            ExportOutcome::AlreadyExported
        );
    }

    #[test]
    fn test_prefix_names_do_not_collide() {
        let fs = MockFs::new();
        fs.add_file(BARREL, "export * from \"./button-group\";\n");

        // button-group のエクスポートは button のエクスポートではない
        let outcome = ensure_export(&fs, &PathBuf::from(BARREL), "button");

        assert_eq!(outcome, ExportOutcome::Added);
        assert!(fs
            .contents(BARREL)
            .unwrap()
            .contains("export * from \"./button\";"));
    }

    #[test]
    fn test_missing_trailing_newline_is_normalized() {
        let fs = MockFs::new();
        fs.add_file(BARREL, "export * from \"./button\";");

        ensure_export(&fs, &PathBuf::from(BARREL), "card");

        assert_eq!(
            fs.contents(BARREL).unwrap(),
            "export * from \"./button\";\nexport * from \"./card\";\n"
        );
    }

    /// 常に失敗するファイルシステム（エラー伝播の確認用）
    struct FailingFs;

    impl FileSystem for FailingFs {
        fn exists(&self, _path: &Path) -> bool {
            true
        }
        fn create_dir_all(&self, _path: &Path) -> Result<()> {
            Err(io_denied())
        }
        fn read_to_string(&self, _path: &Path) -> Result<String> {
            Err(io_denied())
        }
        fn write(&self, _path: &Path, _content: &[u8]) -> Result<()> {
            Err(io_denied())
        }
    }

    fn io_denied() -> VesperError {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into()
    }

    #[test]
    fn test_io_failure_becomes_skipped() {
        let fs = FailingFs;

        match ensure_export(&fs, &PathBuf::from(BARREL), "button") {
            ExportOutcome::Skipped(reason) => assert!(reason.contains("denied")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
