//! インポートパス書き換え
//!
//! 上流モノレポのファイルは相対パスで共有コードを参照している。
//! 配置先プロジェクトではレイアウトが異なるため、既知のインポート形を
//! 固定の正規表現で消費側の形に置き換える。
//!
//! - `../../utils`            -> `@/lib/utils`（エイリアス参照）
//! - `../../composables/<x>`  -> `./<x>`（同ディレクトリに同梱）
//! - `../../components/<x>`   -> `../<x>`（兄弟コンポーネント）
//!
//! 対象は `from` 句の文字列リテラルのみ。構文解析はせず、
//! 未知の形のインポートはそのまま残す。

use regex::Regex;

struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

/// 固定ルールによるインポート書き換え器
pub struct ImportRewriter {
    rules: Vec<RewriteRule>,
}

impl ImportRewriter {
    pub fn new() -> Self {
        // パターンは固定文字列なのでコンパイル失敗はあり得ない
        let rules = vec![
            RewriteRule {
                pattern: Regex::new(r#"from\s+["'](?:\.\./){2,}utils(?:/index)?(?:\.ts)?["']"#)
                    .unwrap(),
                replacement: r#"from "@/lib/utils""#,
            },
            RewriteRule {
                pattern: Regex::new(
                    r#"from\s+["'](?:\.\./){2,}composables/([A-Za-z][A-Za-z0-9-]*)["']"#,
                )
                .unwrap(),
                replacement: r#"from "./${1}""#,
            },
            RewriteRule {
                pattern: Regex::new(
                    r#"from\s+["'](?:\.\./){2,}components/([A-Za-z][A-Za-z0-9-]*)["']"#,
                )
                .unwrap(),
                replacement: r#"from "../${1}""#,
            },
        ];

        Self { rules }
    }

    /// すべてのルールを順に適用した本文を返す
    ///
    /// どのルールの出力も他ルールの入力形に一致しないため、
    /// 2回適用しても結果は変わらない（rewrite_proptests.rs で検証）。
    pub fn rewrite(&self, source: &str) -> String {
        let mut output = source.to_string();
        for rule in &self.rules {
            output = rule.pattern.replace_all(&output, rule.replacement).into_owned();
        }
        output
    }

    #[cfg(test)]
    fn patterns(&self) -> impl Iterator<Item = &Regex> {
        self.rules.iter().map(|r| &r.pattern)
    }
}

impl Default for ImportRewriter {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "rewrite_proptests.rs"]
mod proptests;
