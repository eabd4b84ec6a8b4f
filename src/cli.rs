use clap::{Parser, Subcommand};

use crate::commands::{add, init, list};

#[derive(Debug, Parser)]
#[command(name = "vesper-ui")]
#[command(about = "Vesper UI component CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// プロジェクトにコンポーネント受け入れの下地を作る
    Init(init::Args),

    /// コンポーネントをプロジェクトに追加
    Add(add::Args),

    /// 配布可能なコンポーネント一覧
    List(list::Args),
}
