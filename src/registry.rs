//! コンポーネントレジストリ
//!
//! 配布可能なコンポーネントの台帳。バイナリに埋め込んだ JSON を
//! 起動時に一度読み込み、以降は参照で引き回す。

use crate::error::{Result, VesperError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 埋め込みレジストリデータ
const REGISTRY_JSON: &str = include_str!("registry/components.json");

/// レジストリ上の1コンポーネント
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// 小文字ケバブケースの識別子（CLI 引数・配置ディレクトリ名）
    pub name: String,
    /// 表示名
    pub label: String,
    pub description: String,
    /// 同時に導入を推奨する他コンポーネントの識別子
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// 取得対象ファイル。先頭が衝突判定に使うプライマリファイル
    pub files: Vec<String>,
}

impl ComponentDescriptor {
    /// 上書き確認の判定に使うプライマリファイル
    ///
    /// files が空でないことは Registry::load() が保証する。
    pub fn primary_file(&self) -> &str {
        &self.files[0]
    }
}

/// コンポーネント台帳
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentDescriptor>,
}

impl Registry {
    /// 埋め込み JSON からレジストリを構築する
    pub fn load() -> Result<Self> {
        let components: Vec<ComponentDescriptor> = serde_json::from_str(REGISTRY_JSON)?;
        Self::validate(components)
    }

    /// 識別子の重複と空ファイルリストを拒否する
    fn validate(components: Vec<ComponentDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for component in &components {
            if component.name.is_empty() {
                return Err(VesperError::Registry(
                    "component with empty name".to_string(),
                ));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(VesperError::Registry(format!(
                    "duplicate component: {}",
                    component.name
                )));
            }
            if component.files.is_empty() {
                return Err(VesperError::Registry(format!(
                    "component '{}' has no files",
                    component.name
                )));
            }
        }
        Ok(Self { components })
    }

    /// 識別子で検索（完全一致）
    pub fn lookup(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    /// 登録順のまま全件を返す
    pub fn all(&self) -> &[ComponentDescriptor] {
        &self.components
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
