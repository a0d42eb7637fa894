use clap::{Parser, Subcommand};
use lcms_cleaning::{config::ServerConfigCli, server::LcmsServer};

/// Main entry point for the leisure centre cleaning service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Arguments {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run the HTTP server.
    Serve(ServerConfigCli),
    /// Apply database migrations and exit.
    Migrate(ServerConfigCli),
}

fn main() -> std::io::Result<()> {
    let args = Arguments::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    match args.mode {
        Mode::Serve(server_cli) => runtime.block_on(async {
            LcmsServer::main(server_cli).await;
        }),
        Mode::Migrate(server_cli) => runtime.block_on(async {
            LcmsServer::migrate(server_cli).await;
        }),
    }
    Ok(())
}
