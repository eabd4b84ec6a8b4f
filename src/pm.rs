//! パッケージマネージャ連携
//!
//! init がランタイム依存を導入するときに使う。ロックファイルから
//! 利用中のパッケージマネージャを推定し、インストール引数を組み立てる。

use crate::fs::FileSystem;
use std::path::Path;

/// コンポーネントが前提とする npm パッケージ
pub const REQUIRED_PACKAGES: &[&str] = &[
    "clsx",
    "tailwind-merge",
    "class-variance-authority",
    "tailwindcss-animate",
];

/// 検出対象のパッケージマネージャ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// ロックファイルからパッケージマネージャを推定
    ///
    /// どのロックファイルも無ければ npm にフォールバックする。
    pub fn detect(fs: &dyn FileSystem, root: &Path) -> Self {
        if fs.exists(&root.join("bun.lockb")) || fs.exists(&root.join("bun.lock")) {
            return Self::Bun;
        }
        if fs.exists(&root.join("pnpm-lock.yaml")) {
            return Self::Pnpm;
        }
        if fs.exists(&root.join("yarn.lock")) {
            return Self::Yarn;
        }
        Self::Npm
    }

    /// 実行するコマンド名
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// 開発依存としてインストールする引数列
    pub fn install_args(&self, packages: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Self::Npm => vec!["install".to_string(), "-D".to_string()],
            Self::Pnpm | Self::Yarn => vec!["add".to_string(), "-D".to_string()],
            Self::Bun => vec!["add".to_string(), "-d".to_string()],
        };
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// package.json に宣言されていない必須パッケージを返す
///
/// dependencies / devDependencies の両セクションを見る。
/// パースできない場合は全件を返し、インストール側に委ねる。
pub fn missing_packages(package_json: &str) -> Vec<&'static str> {
    let manifest: serde_json::Value = match serde_json::from_str(package_json) {
        Ok(value) => value,
        Err(_) => return REQUIRED_PACKAGES.to_vec(),
    };

    REQUIRED_PACKAGES
        .iter()
        .copied()
        .filter(|package| !has_dependency(&manifest, package))
        .collect()
}

fn has_dependency(manifest: &serde_json::Value, package: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| manifest[*section].get(package).is_some())
}
