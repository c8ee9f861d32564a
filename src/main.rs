mod app;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = app::Cli::parse();
    let result: Result<(), app::AppError> = app::run_app(cli);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e.into());
    }
    Ok(())
}
