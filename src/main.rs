use clap::Parser;
use checklist::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = checklist::tui::run(cli.store()) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
