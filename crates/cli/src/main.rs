use std::env;
use std::io;
use std::process::ExitCode;

use crossterm::tty::IsTty;
use log::debug;
use slugi_cli::Slugi;
use slugi_core::options::TransformOptions;
use slugi_core::slug::slugify;

fn main() -> ExitCode {
    env_logger::init();

    let argv: Vec<_> = env::args_os().collect();
    debug!("Arguments: {argv:?}");

    let slugi = Slugi::new(TransformOptions::default(), slugify).with_color(io::stderr().is_tty());

    match slugi.get_slug_from_arguments(argv) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        }
    }
}
