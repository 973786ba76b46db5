use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{generate, tag, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(version = VERSION)]
#[command(about = "Generate deployment workflow definitions from Terraform outputs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate workflow files from provisioning outputs
    Generate(generate::GenerateArgs),
    /// Show what would be generated without writing files
    Plan(generate::PlanArgs),
    /// Derive the image tag set for a revision
    Tag(tag::TagArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (result, exit_code) = match cli.command {
        Commands::Generate(args) => output::map_cmd_result_to_json(generate::run(args, &global)),
        Commands::Plan(args) => output::map_cmd_result_to_json(generate::run_plan(args, &global)),
        Commands::Tag(args) => output::map_cmd_result_to_json(tag::run(args, &global)),
    };

    output::print_result(&result);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
