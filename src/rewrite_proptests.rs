use super::*;
use proptest::prelude::*;

/// コンポーネント/コンポーザブル識別子に使える文字列
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,19}".prop_map(|s| s)
}

/// 上流形のインポート文を生成
fn upstream_import_strategy() -> impl Strategy<Value = String> {
    (ident_strategy(), 2usize..5, prop::bool::ANY).prop_flat_map(|(name, depth, single)| {
        let dots = "../".repeat(depth);
        let quote = if single { '\'' } else { '"' };
        prop_oneof![
            Just(format!("import {{ cn }} from {q}{d}utils{q};", q = quote, d = dots)),
            Just(format!(
                "import {{ x }} from {q}{d}composables/{n}{q};",
                q = quote,
                d = dots,
                n = name
            )),
            Just(format!(
                "import {{ X }} from {q}{d}components/{n}{q};",
                q = quote,
                d = dots,
                n = name
            )),
        ]
    })
}

proptest! {
    /// 2回適用しても結果は変わらない
    #[test]
    fn prop_rewrite_is_idempotent(source in ".{0,400}") {
        let rewriter = ImportRewriter::new();

        let once = rewriter.rewrite(&source);
        let twice = rewriter.rewrite(&once);

        prop_assert_eq!(once, twice);
    }

    /// 書き換え後の本文にはどのルールの入力形も残らない
    #[test]
    fn prop_output_matches_no_rule(source in ".{0,400}") {
        let rewriter = ImportRewriter::new();

        let output = rewriter.rewrite(&source);
        for pattern in rewriter.patterns() {
            prop_assert!(
                !pattern.is_match(&output),
                "pattern {} still matches: {}",
                pattern,
                output
            );
        }
    }

    /// from 句を含まない本文は変更されない
    #[test]
    fn prop_text_without_from_is_unchanged(source in "[^f]{0,400}") {
        let rewriter = ImportRewriter::new();

        prop_assert_eq!(rewriter.rewrite(&source), source);
    }

    /// 上流形のインポートは必ず書き換えられ、相対の深い参照が消える
    #[test]
    fn prop_upstream_imports_are_rewritten(import in upstream_import_strategy()) {
        let rewriter = ImportRewriter::new();

        let output = rewriter.rewrite(&import);
        prop_assert_ne!(&output, &import);
        prop_assert!(!output.contains("../../"), "output: {}", output);
    }
}
