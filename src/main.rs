use artbox::cli::{self, Args};
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
