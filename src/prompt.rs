//! 対話確認プロンプト
//!
//! 上書き確認など、ユーザーへの [y/N] 問い合わせを抽象化する。
//! テスト時は ScriptedPrompt を注入して応答を固定できる。

use crate::error::Result;
use std::io::{self, Write};

/// [y/N] 確認プロンプト
pub trait ConfirmPrompt: Send + Sync {
    /// ユーザーに確認を求める
    ///
    /// - y / yes（大文字小文字不問）のみ true
    /// - 空入力やそれ以外は false
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// 標準入力から応答を読む本番用プロンプト
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        print!("{} [y/N]: ", message);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
    }
}

#[cfg(test)]
pub mod mock;
