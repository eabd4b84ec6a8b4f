//! Vesper UI CLI
//!
//! Vue 3 + Tailwind のコンポーネントキット「Vesper UI」の配布ツール。
//! コンポーネントのソースを取得して利用側プロジェクトに直接配置する。

pub mod barrel;
pub mod cli;
pub mod commands;
pub mod error;
pub mod fs;
pub mod installer;
pub mod output;
pub mod pm;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod rewrite;
pub mod source;
pub mod templates;
