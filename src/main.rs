use clap::Parser;
use sidenav::cli::Args;
use sidenav::config::Settings;
use sidenav::errors::AppError;
use sidenav::render::create_renderer;
use sidenav::sidebar::Sidebar;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(&args);
    debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, AppError> {
    let settings = Settings::load(args)?;
    let sidebar = Sidebar::build(&settings.sidebar)?;
    create_renderer(&settings.render).render(&sidebar)
}

fn setup_tracing(args: &Args) {
    if let Some(level) = args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
