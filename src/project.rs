//! 利用側プロジェクトのパスレイアウト
//!
//! コンポーネントの配置先やテンプレートの出力先はすべてここで決める。
//! - components/<name>/  コンポーネント本体
//! - components/index.ts 再エクスポート用バレル
//! - lib/utils.ts        cn() ヘルパー
//! - styles/globals.css  ベーススタイル
//! - tailwind.config.js  Tailwind 設定

use std::path::{Path, PathBuf};

/// コンポーネント配置ディレクトリ名
pub const COMPONENTS_DIR: &str = "components";

/// プロジェクトルートからの各種パスを解決する
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// コンポーネント配置先ルート
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR)
    }

    /// 個別コンポーネントのディレクトリ
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.components_dir().join(name)
    }

    /// 再エクスポート用バレルファイル
    pub fn barrel_file(&self) -> PathBuf {
        self.components_dir().join("index.ts")
    }

    pub fn utils_file(&self) -> PathBuf {
        self.root.join("lib").join("utils.ts")
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.root.join("styles").join("globals.css")
    }

    pub fn tailwind_config(&self) -> PathBuf {
        self.root.join("tailwind.config.js")
    }

    pub fn tsconfig(&self) -> PathBuf {
        self.root.join("tsconfig.json")
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }
}
