use crate::cli::Command;

pub mod add;
pub mod init;
pub mod list;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Init(args) => init::run(args).await,
        Command::Add(args) => add::run(args).await,
        Command::List(args) => list::run(args).await,
    }
}
