pub mod commands;
pub mod script;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::script::ScriptArgs;

#[derive(Debug, Parser)]
#[command(
    name = "skyfit",
    about = "Skylight configuration and quoting CLI",
    long_about = "Resolve skylight, roof window and sun tunnel selections against the built-in catalog and price the result.",
    after_help = "Examples:\n  skyfit catalog\n  skyfit options --category skylight --pitch pitched --material tiled-corrugated --opening manual --spacing 600\n  skyfit quote --category skylight --pitch pitched --material tiled-corrugated --opening manual --spacing 600 --size C04 --product vs --blind fsch"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Validate the built-in catalog and report what it contains")]
    Catalog,
    #[command(about = "Replay a partial selection and list the options at the step it reaches")]
    Options {
        #[command(flatten)]
        script: ScriptArgs,
    },
    #[command(about = "Replay a complete selection and print the itemized quote")]
    Quote {
        #[command(flatten)]
        script: ScriptArgs,
        #[arg(long, default_value = "AUD", help = "Currency code shown on the summary")]
        currency: String,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog => commands::catalog::run(),
        Command::Options { script } => commands::options::run(&script),
        Command::Quote { script, currency } => commands::quote::run(&script, &currency),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
