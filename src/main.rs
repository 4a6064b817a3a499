use clap::Parser;
use velocityiq::errors::ErrorHandler;
use velocityiq::structs::cli::Cli;
use velocityiq::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }
    Ok(())
}
