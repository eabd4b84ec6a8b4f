//! コンポーネントインストーラ
//!
//! add コマンドの中核。要求されたコンポーネントを1件ずつ処理し、
//! 取得・書き換え・配置・バレル更新まで行う。1件の失敗は記録して
//! 次のコンポーネントへ進む（部分失敗を許容する）。

use crate::barrel::{self, ExportOutcome};
use crate::fs::FileSystem;
use crate::project::ProjectPaths;
use crate::prompt::ConfirmPrompt;
use crate::registry::{ComponentDescriptor, Registry};
use crate::rewrite::ImportRewriter;
use crate::source::SourceClient;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::collections::HashSet;

/// add コマンド1回分の要求
#[derive(Debug, Clone)]
pub struct InstallRequest {
    components: Vec<String>,
    pub force: bool,
    pub all: bool,
}

impl InstallRequest {
    /// 識別子を正規化して要求を作る
    ///
    /// - 前後空白を除去し小文字化
    /// - 空になった識別子は捨てる
    /// - 重複は初出のみ残す（指定順は保持）
    pub fn new(components: Vec<String>, force: bool, all: bool) -> Self {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for raw in components {
            let name = raw.trim().to_ascii_lowercase();
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.clone()) {
                normalized.push(name);
            }
        }
        Self {
            components: normalized,
            force,
            all,
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }
}

/// ファイル単位の取得・書き込み失敗
#[derive(Debug, Clone)]
pub struct FileWarning {
    pub file: String,
    pub reason: String,
}

/// インストールに成功した1コンポーネントの記録
#[derive(Debug)]
pub struct InstalledComponent {
    pub name: String,
    /// 解決済みのレジストリ記述子（レポート表示用）
    pub descriptor: ComponentDescriptor,
    /// 実際に書き込めたファイル
    pub files_written: Vec<String>,
    /// 取得や書き込みに失敗したファイル（成功扱いのまま警告として残す）
    pub warnings: Vec<FileWarning>,
    pub export: ExportOutcome,
}

/// インストールできなかった1コンポーネントの記録
#[derive(Debug)]
pub struct InstallFailure {
    pub name: String,
    pub reason: String,
}

/// add コマンド1回分の結果
#[derive(Debug, Default)]
pub struct InstallReport {
    pub succeeded: Vec<InstalledComponent>,
    pub skipped: Vec<String>,
    pub failed: Vec<InstallFailure>,
}

impl InstallReport {
    /// 1件も成功せず、かつ失敗があるときのみ true（終了コードの判定に使う）
    pub fn is_hard_failure(&self) -> bool {
        self.succeeded.is_empty() && !self.failed.is_empty()
    }

    /// 成功コンポーネントに残った警告の総数
    pub fn warning_count(&self) -> usize {
        self.succeeded.iter().map(|c| c.warnings.len()).sum()
    }
}

enum ComponentOutcome {
    Installed(InstalledComponent),
    Skipped,
    Failed(String),
}

/// コンポーネントインストーラ
pub struct Installer<'a> {
    registry: &'a Registry,
    source: &'a dyn SourceClient,
    prompt: &'a dyn ConfirmPrompt,
    fs: &'a dyn FileSystem,
    paths: ProjectPaths,
    rewriter: ImportRewriter,
}

impl<'a> Installer<'a> {
    pub fn new(
        registry: &'a Registry,
        source: &'a dyn SourceClient,
        prompt: &'a dyn ConfirmPrompt,
        fs: &'a dyn FileSystem,
        paths: ProjectPaths,
    ) -> Self {
        Self {
            registry,
            source,
            prompt,
            fs,
            paths,
            rewriter: ImportRewriter::new(),
        }
    }

    /// 要求されたコンポーネントを順に処理する
    ///
    /// --all 指定時はレジストリ全件を登録順に処理する。
    /// 各コンポーネントの結果行はその場で出力し、集計は report に積む。
    pub async fn install(&self, request: &InstallRequest) -> InstallReport {
        let names: Vec<String> = if request.all {
            self.registry.all().iter().map(|c| c.name.clone()).collect()
        } else {
            request.components().to_vec()
        };

        let mut report = InstallReport::default();
        for name in &names {
            match self.install_component(name, request).await {
                ComponentOutcome::Installed(record) => {
                    print_installed(&record);
                    report.succeeded.push(record);
                }
                ComponentOutcome::Skipped => {
                    println!("{} {} skipped", "•".yellow(), name);
                    report.skipped.push(name.clone());
                }
                ComponentOutcome::Failed(reason) => {
                    println!("{} {}: {}", "✗".red(), name, reason);
                    report.failed.push(InstallFailure {
                        name: name.clone(),
                        reason,
                    });
                }
            }
        }
        report
    }

    async fn install_component(
        &self,
        name: &str,
        request: &InstallRequest,
    ) -> ComponentOutcome {
        // 1. レジストリ解決（未知の識別子はここで失敗、ディレクトリも作らない）
        let Some(descriptor) = self.registry.lookup(name) else {
            return ComponentOutcome::Failed("not found in registry".to_string());
        };

        // 2. 配置先ディレクトリを作成
        let component_dir = self.paths.component_dir(name);
        if let Err(err) = self.fs.create_dir_all(&component_dir) {
            return ComponentOutcome::Failed(format!(
                "failed to create {}: {}",
                component_dir.display(),
                err
            ));
        }

        // 3. 上書き確認（プライマリファイルが既にある場合のみ。--force/--all でスキップ）
        let primary = component_dir.join(descriptor.primary_file());
        if self.fs.exists(&primary) && !request.force && !request.all {
            let question = format!("Component '{}' already exists. Overwrite?", name);
            match self.prompt.confirm(&question) {
                Ok(true) => {}
                Ok(false) => return ComponentOutcome::Skipped,
                Err(err) => {
                    return ComponentOutcome::Failed(format!("prompt failed: {}", err))
                }
            }
        }

        // 4. ファイルごとに取得・書き換え・書き込み（失敗は警告に落として続行）
        let pb = spinner();
        let mut files_written = Vec::new();
        let mut warnings = Vec::new();
        for file in &descriptor.files {
            pb.set_message(format!("{}: fetching {}", name, file));
            match self.source.fetch_file(name, file).await {
                Ok(body) => {
                    let rewritten = self.rewriter.rewrite(&body);
                    match self.fs.write(&component_dir.join(file), rewritten.as_bytes()) {
                        Ok(()) => files_written.push(file.clone()),
                        Err(err) => warnings.push(FileWarning {
                            file: file.clone(),
                            reason: err.to_string(),
                        }),
                    }
                }
                Err(err) => warnings.push(FileWarning {
                    file: file.clone(),
                    reason: err.to_string(),
                }),
            }
        }
        pb.finish_and_clear();

        // 5. バレル更新（ベストエフォート）
        let export = barrel::ensure_export(self.fs, &self.paths.barrel_file(), name);

        ComponentOutcome::Installed(InstalledComponent {
            name: name.to_string(),
            descriptor: descriptor.clone(),
            files_written,
            warnings,
            export,
        })
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb
}

fn print_installed(record: &InstalledComponent) {
    if record.warnings.is_empty() {
        println!(
            "{} {} ({} file(s))",
            "✓".green(),
            record.name,
            record.files_written.len()
        );
    } else {
        println!(
            "{} {} ({} written, {} skipped)",
            "!".yellow(),
            record.name,
            record.files_written.len(),
            record.warnings.len()
        );
        for warning in &record.warnings {
            println!("    {} {}: {}", "!".yellow(), warning.file, warning.reason);
        }
    }
    if let ExportOutcome::Skipped(reason) = &record.export {
        println!(
            "    {} could not update components/index.ts: {}",
            "!".yellow(),
            reason
        );
    }
}

#[cfg(test)]
#[path = "installer_test.rs"]
mod tests;
