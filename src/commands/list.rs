//! vesper-ui list コマンド
//!
//! 配布可能なコンポーネントをカテゴリごとに表示する。

use crate::registry::{ComponentDescriptor, Registry};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use std::collections::HashSet;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 表示用カテゴリ（手動管理。レジストリのデータからは導出しない）
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Form",
        &[
            "button",
            "checkbox",
            "input",
            "label",
            "radio-group",
            "select",
            "slider",
            "switch",
            "textarea",
            "toggle",
        ],
    ),
    (
        "Layout",
        &["accordion", "card", "collapsible", "separator", "table", "tabs"],
    ),
    (
        "Overlay",
        &[
            "alert-dialog",
            "dialog",
            "dropdown-menu",
            "menubar",
            "popover",
            "sheet",
            "tooltip",
        ],
    ),
    ("Feedback", &["alert", "progress", "skeleton", "toast"]),
    ("Display", &["avatar", "badge", "calendar", "carousel"]),
];

pub async fn run(args: Args) -> Result<(), String> {
    let registry = Registry::load().map_err(|e| e.to_string())?;

    if args.json {
        return print_json(registry.all());
    }

    print_categories(&registry);
    println!("{} component(s) available", registry.all().len());
    println!();
    print_usage();
    Ok(())
}

fn print_json(components: &[ComponentDescriptor]) -> Result<(), String> {
    serde_json::to_string_pretty(components)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize registry: {}", e))
}

fn print_categories(registry: &Registry) {
    for (category, names) in CATEGORIES {
        let components: Vec<&ComponentDescriptor> =
            names.iter().filter_map(|name| registry.lookup(name)).collect();
        if components.is_empty() {
            continue;
        }
        println!("{}", category.bold());
        println!("{}", registry_table(&components));
    }

    // カテゴリ表に未掲載の登録コンポーネントも漏らさず表示する
    let categorized: HashSet<&str> = CATEGORIES
        .iter()
        .flat_map(|(_, names)| names.iter().copied())
        .collect();
    let others: Vec<&ComponentDescriptor> = registry
        .all()
        .iter()
        .filter(|c| !categorized.contains(c.name.as_str()))
        .collect();
    if !others.is_empty() {
        println!("{}", "Other".bold());
        println!("{}", registry_table(&others));
    }
}

/// レジストリ内容のテーブル（add の失敗時ヒントと共用）
pub fn registry_table(components: &[&ComponentDescriptor]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Description"]);

    for component in components {
        table.add_row(vec![
            component.name.as_str(),
            component.description.as_str(),
        ]);
    }
    table
}

fn print_usage() {
    println!("Usage:");
    println!("  vesper-ui add <component>   install a component");
    println!("  vesper-ui add --all         install every component");
    println!("  vesper-ui init              prepare a project");
}
