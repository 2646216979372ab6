use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{launch, queues, unfold, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "qdispatch")]
#[command(version = VERSION)]
#[command(about = "Unfold templated commands into per-job invocations for cluster schedulers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a templated command into its concrete commands
    Unfold(unfold::UnfoldArgs),
    /// Prepare jobs (unfold, resolve {UID}, generate names) for submission
    Launch(launch::LaunchArgs),
    /// List available queues on the current or named cluster
    Queues(queues::QueuesArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let exit_code = match cli.command {
        Commands::Unfold(args) => output::print_result(unfold::run(args, &global)),
        Commands::Launch(args) => output::print_result(launch::run(args, &global)),
        Commands::Queues(args) => output::print_result(queues::run(args, &global)),
    };

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
