//! テスト用モックソース

use super::*;
use std::collections::HashMap;

/// 事前登録したファイル本文を返すソース
///
/// 未登録の (component, file) への要求は 404 相当の Fetch エラーになる。
pub struct MockSource {
    files: HashMap<(String, String), String>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// ファイル本文を登録
    pub fn add_file(&mut self, component: &str, file: &str, body: &str) {
        self.files
            .insert((component.to_string(), file.to_string()), body.to_string());
    }

    /// コンポーネントの全ファイルを同一の雛形本文で登録
    pub fn add_component(&mut self, component: &str, files: &[&str]) {
        for file in files {
            let body = format!("// {}/{}\nexport {{}};\n", component, file);
            self.add_file(component, file, &body);
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceClient for MockSource {
    fn fetch_file<'a>(
        &'a self,
        component: &'a str,
        file: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let key = (component.to_string(), file.to_string());
            match self.files.get(&key) {
                Some(body) => Ok(body.clone()),
                None => Err(VesperError::Fetch {
                    status: 404,
                    url: format!("mock://{}/{}", component, file),
                }),
            }
        })
    }
}
