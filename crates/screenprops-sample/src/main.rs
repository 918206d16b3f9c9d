use std::process::ExitCode;

use clap::Parser;
use screenprops::{Screen, ScreenError};

/// Print the properties of the main screen.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Also present the properties through the platform's message service.
    #[arg(long)]
    show: bool,
    /// Print the properties as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let screen = Screen::platform();
    let properties = screen.properties()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
    } else {
        println!("{properties}");
    }

    if args.show {
        match screen.show_properties() {
            Ok(()) => {}
            // Printing already happened, a missing message service isn't fatal.
            Err(ScreenError::PresentationUnsupported) => {
                log::warn!("`{}` cannot present messages", screen.target());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
