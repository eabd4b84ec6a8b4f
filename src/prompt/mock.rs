//! テスト用スクリプト化プロンプト

use super::*;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 事前に用意した応答を順に返すプロンプト
///
/// 応答が尽きた場合は false（拒否）を返す。
/// 問い合わせ内容は記録され、テストから参照できる。
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// 実際に問い合わせられたメッセージの一覧
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.lock().unwrap().push(message.to_string());
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}
