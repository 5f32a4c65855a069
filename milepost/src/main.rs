use clap::Parser;
use log::error;
use milepost::app::cli::run;
use milepost::app::cli::CliArgs;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run::command_line_runner(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
