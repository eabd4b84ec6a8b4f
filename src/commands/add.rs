//! vesper-ui add コマンド
//!
//! レジストリのコンポーネントを現在のプロジェクトに取り込む。

use crate::commands::list::registry_table;
use crate::fs::RealFs;
use crate::installer::{InstallReport, InstallRequest, Installer};
use crate::output::CommandSummary;
use crate::project::ProjectPaths;
use crate::prompt::StdinPrompt;
use crate::registry::Registry;
use crate::source::GitHubSource;
use clap::Parser;
use std::collections::HashSet;
use std::env;

#[derive(Debug, Parser)]
pub struct Args {
    /// Component identifiers to install (see `vesper-ui list`)
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub components: Vec<String>,

    /// Overwrite existing files without prompting
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Install every component in the registry
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let root = env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;

    let registry = Registry::load().map_err(|e| e.to_string())?;
    let source = GitHubSource::new();
    let prompt = StdinPrompt;
    let fs = RealFs;
    let installer = Installer::new(&registry, &source, &prompt, &fs, ProjectPaths::new(root));

    let request = InstallRequest::new(args.components, args.force, args.all);
    let report = installer.install(&request).await;

    print_summary(&report);

    if report.is_hard_failure() {
        println!();
        println!("Available components:");
        let all: Vec<_> = registry.all().iter().collect();
        println!("{}", registry_table(&all));
        return Err("no components could be installed".to_string());
    }
    Ok(())
}

/// 成功・スキップ・失敗の内訳を表示する
fn print_summary(report: &InstallReport) {
    println!();
    let summary = CommandSummary::format(
        report.succeeded.len(),
        report.skipped.len(),
        report.failed.len(),
    );
    println!("{} {}", summary.prefix, summary.message);

    if !report.succeeded.is_empty() {
        let names: Vec<&str> = report.succeeded.iter().map(|c| c.name.as_str()).collect();
        println!("  installed: {}", names.join(", "));
    }
    if report.warning_count() > 0 {
        println!(
            "  {} file(s) could not be fetched (see warnings above)",
            report.warning_count()
        );
    }
    if !report.skipped.is_empty() {
        println!("  skipped: {}", report.skipped.join(", "));
    }
    if !report.failed.is_empty() {
        let names: Vec<&str> = report.failed.iter().map(|f| f.name.as_str()).collect();
        println!("  failed: {}", names.join(", "));
    }

    // 記述子の dependencies は推奨の同梱コンポーネント。
    // この実行で扱わなかったものだけ案内する（自動解決はしない）。
    let attempted: HashSet<&str> = report
        .succeeded
        .iter()
        .map(|c| c.name.as_str())
        .chain(report.skipped.iter().map(String::as_str))
        .chain(report.failed.iter().map(|f| f.name.as_str()))
        .collect();
    let mut suggested: Vec<&str> = Vec::new();
    for component in &report.succeeded {
        for dep in &component.descriptor.dependencies {
            if !attempted.contains(dep.as_str()) && !suggested.contains(&dep.as_str()) {
                suggested.push(dep);
            }
        }
    }
    if !suggested.is_empty() {
        println!("  consider also: {}", suggested.join(", "));
    }
}
