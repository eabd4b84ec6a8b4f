//! vesper-ui init コマンド
//!
//! 既存の TypeScript プロジェクトにコンポーネント受け入れの下地を作る。
//! - 必須 npm パッケージの導入
//! - lib/utils.ts / tailwind.config.js / styles/globals.css の雛形出力
//! - tsconfig.json への `@/*` エイリアス追加

use crate::fs::{FileSystem, RealFs};
use crate::pm::{self, PackageManager};
use crate::project::ProjectPaths;
use crate::templates;
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::{Map, Value};
use std::env;
use std::process::Command;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args) -> Result<(), String> {
    let root = env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    let paths = ProjectPaths::new(root);
    let fs = RealFs;

    // 1. プロジェクトマーカー確認（無ければ案内して正常終了）
    if !fs.exists(&paths.package_json()) || !fs.exists(&paths.tsconfig()) {
        println!(
            "{} package.json and tsconfig.json not found.",
            "•".yellow()
        );
        println!("  Run this command at the root of an existing TypeScript project.");
        return Ok(());
    }

    // 2. 必須パッケージの導入（不足が無ければ何もしない）
    install_required_packages(&fs, &paths)?;

    // 3. lib/utils.ts
    write_if_absent(&fs, &paths, "lib/utils.ts", templates::UTILS_TS)?;

    // 4. tailwind.config.js（既存の設定には触らない）
    if fs.exists(&paths.tailwind_config()) {
        println!(
            "{} tailwind.config.js already exists, leaving it untouched",
            "•".yellow()
        );
    } else {
        write_if_absent(&fs, &paths, "tailwind.config.js", templates::TAILWIND_CONFIG)?;
    }

    // 5. tsconfig.json に @/* エイリアスを追加（ベストエフォート）
    merge_tsconfig_alias(&fs, &paths);

    // 6. styles/globals.css
    write_if_absent(&fs, &paths, "styles/globals.css", templates::GLOBALS_CSS)?;

    // 7. 次の一歩を案内
    println!();
    println!("{} Project is ready.", "✓".green());
    println!("  Import styles/globals.css in your app entry, then run:");
    println!("    vesper-ui add button");
    Ok(())
}

/// 不足している必須パッケージを検出してインストールする
fn install_required_packages(fs: &RealFs, paths: &ProjectPaths) -> Result<(), String> {
    let manifest = fs
        .read_to_string(&paths.package_json())
        .map_err(|e| format!("Failed to read package.json: {}", e))?;
    let missing = pm::missing_packages(&manifest);

    if missing.is_empty() {
        println!("{} required packages already declared", "✓".green());
        return Ok(());
    }

    let manager = PackageManager::detect(fs, paths.root());
    println!(
        "Installing {} package(s) with {}...",
        missing.len(),
        manager
    );

    let status = Command::new(manager.program())
        .args(manager.install_args(&missing))
        .current_dir(paths.root())
        .status()
        .map_err(|e| format!("Failed to run {}: {}", manager.program(), e))?;

    if !status.success() {
        return Err(format!(
            "{} exited with {} while installing {}",
            manager.program(),
            status,
            missing.join(", ")
        ));
    }
    Ok(())
}

/// 相対パス指定で雛形を書き出す（既存ファイルはそのまま）
fn write_if_absent(
    fs: &RealFs,
    paths: &ProjectPaths,
    relative: &str,
    contents: &str,
) -> Result<(), String> {
    let path = paths.root().join(relative);
    if fs.exists(&path) {
        println!("{} {} already exists", "•".yellow(), relative);
        return Ok(());
    }

    fs.write(&path, contents.as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", relative, e))?;
    println!("{} wrote {}", "✓".green(), relative);
    Ok(())
}

/// tsconfig.json に `compilerOptions.paths["@/*"] = ["./*"]` を保証する
///
/// 他のフィールドは保持する（Value のまま編集して書き戻す）。
/// パースできない tsconfig は警告だけ出して手を付けない。
fn merge_tsconfig_alias(fs: &RealFs, paths: &ProjectPaths) {
    let tsconfig_path = paths.tsconfig();
    let raw = match fs.read_to_string(&tsconfig_path) {
        Ok(raw) => raw,
        Err(err) => {
            println!(
                "{} could not read tsconfig.json ({}), skipping alias setup",
                "!".yellow(),
                err
            );
            return;
        }
    };

    match with_alias_paths(&raw) {
        Ok(AliasUpdate::AlreadyMapped) => {
            println!("{} tsconfig.json already maps @/*", "✓".green());
        }
        Ok(AliasUpdate::NotAnObject(key)) => {
            println!(
                "{} tsconfig.json has a non-object {}, add \"@/*\": [\"./*\"] manually",
                "!".yellow(),
                key
            );
        }
        Ok(AliasUpdate::Updated(updated)) => match fs.write(&tsconfig_path, updated.as_bytes()) {
            Ok(()) => println!("{} added @/* alias to tsconfig.json", "✓".green()),
            Err(err) => println!(
                "{} could not update tsconfig.json ({}), add \"@/*\": [\"./*\"] manually",
                "!".yellow(),
                err
            ),
        },
        Err(_) => {
            println!(
                "{} tsconfig.json is not valid JSON, add \"@/*\": [\"./*\"] to compilerOptions.paths manually",
                "!".yellow()
            );
        }
    }
}

/// tsconfig への @/* エイリアス組み込みの結果
#[derive(Debug, PartialEq)]
enum AliasUpdate {
    /// 既に @/* が定義されている
    AlreadyMapped,
    /// 該当キーがオブジェクトでないため手を付けない
    NotAnObject(&'static str),
    /// 追記済みの本文（書き込みは呼び出し側が行う）
    Updated(String),
}

/// tsconfig 本文に @/* エイリアスを組み込む
///
/// 既存フィールドは値も並び順も保持する（serde_json の preserve_order）。
fn with_alias_paths(raw: &str) -> serde_json::Result<AliasUpdate> {
    let mut root: Map<String, Value> = serde_json::from_str(raw)?;

    let compiler = root
        .entry("compilerOptions".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(compiler) = compiler.as_object_mut() else {
        return Ok(AliasUpdate::NotAnObject("compilerOptions"));
    };

    let paths = compiler
        .entry("paths".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(paths) = paths.as_object_mut() else {
        return Ok(AliasUpdate::NotAnObject("compilerOptions.paths"));
    };

    if paths.contains_key("@/*") {
        return Ok(AliasUpdate::AlreadyMapped);
    }

    paths.insert(
        "@/*".to_string(),
        Value::Array(vec![Value::String("./*".to_string())]),
    );

    let mut updated = serde_json::to_string_pretty(&Value::Object(root))?;
    updated.push('\n');
    Ok(AliasUpdate::Updated(updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updated_body(raw: &str) -> String {
        match with_alias_paths(raw).unwrap() {
            AliasUpdate::Updated(updated) => updated,
            other => panic!("expected an update, got {other:?}"),
        }
    }

    #[test]
    fn test_alias_added_to_minimal_tsconfig() {
        let updated = updated_body("{}");

        let parsed: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(
            parsed["compilerOptions"]["paths"]["@/*"],
            serde_json::json!(["./*"])
        );
    }

    #[test]
    fn test_existing_fields_are_preserved() {
        let raw = r#"{
            "compilerOptions": {
                "strict": true,
                "paths": {"~/*": ["./src/*"]}
            },
            "include": ["src"]
        }"#;

        let updated = updated_body(raw);

        let parsed: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(parsed["compilerOptions"]["strict"], serde_json::json!(true));
        assert_eq!(
            parsed["compilerOptions"]["paths"]["~/*"],
            serde_json::json!(["./src/*"])
        );
        assert_eq!(
            parsed["compilerOptions"]["paths"]["@/*"],
            serde_json::json!(["./*"])
        );
        assert_eq!(parsed["include"], serde_json::json!(["src"]));
    }

    #[test]
    fn test_key_order_is_preserved() {
        // 辞書順なら compilerOptions が include より前に来てしまう
        let raw = r#"{
            "include": ["src"],
            "compilerOptions": {"strict": true}
        }"#;

        let updated = updated_body(raw);

        let include_at = updated.find("\"include\"").unwrap();
        let compiler_at = updated.find("\"compilerOptions\"").unwrap();
        assert!(include_at < compiler_at, "key order changed: {updated}");
    }

    #[test]
    fn test_existing_alias_is_not_clobbered() {
        let raw = r#"{"compilerOptions": {"paths": {"@/*": ["./app/*"]}}}"#;

        assert_eq!(with_alias_paths(raw).unwrap(), AliasUpdate::AlreadyMapped);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(with_alias_paths("{oops").is_err());
    }

    #[test]
    fn test_non_object_compiler_options_left_alone() {
        let raw = r#"{"compilerOptions": "broken"}"#;

        assert_eq!(
            with_alias_paths(raw).unwrap(),
            AliasUpdate::NotAnObject("compilerOptions")
        );
    }

    #[test]
    fn test_non_object_paths_left_alone() {
        let raw = r#"{"compilerOptions": {"paths": 3}}"#;

        assert_eq!(
            with_alias_paths(raw).unwrap(),
            AliasUpdate::NotAnObject("compilerOptions.paths")
        );
    }
}
