//! Main application entry point.

use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("Starting Pixart");

    let cli = pixart_app::Cli::parse();
    if let Err(e) = pixart_app::run(cli) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
