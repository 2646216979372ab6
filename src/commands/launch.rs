use clap::Args;
use qdispatch::log_status;
use qdispatch::{
    commands_from_str, generate_name_from_command, replace_uid_tag, CommandUnfolder, Error,
};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Read templated commands from a file, one per line
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "command")]
    pub commands_file: Option<PathBuf>,

    /// Templated command to launch
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Keep only the last N characters of each name token
    #[arg(long, value_name = "N")]
    pub max_arg_length: Option<usize>,

    /// Truncate generated job names to N characters
    #[arg(long, value_name = "N")]
    pub max_name_length: Option<usize>,
}

/// One concrete invocation ready for submission.
#[derive(Serialize)]
pub struct Job {
    pub name: String,
    pub command: String,
}

#[derive(Serialize)]
pub struct LaunchOutput {
    pub total: usize,
    pub jobs: Vec<Job>,
}

pub fn run(args: LaunchArgs, _global: &super::GlobalArgs) -> CmdResult<LaunchOutput> {
    let templated = read_templated_commands(&args)?;
    let unfolder = CommandUnfolder::new()?;

    let mut jobs = Vec::new();
    for command in &templated {
        let unfolded = replace_uid_tag(&unfolder.unfold(command)?);
        for concrete in unfolded {
            let name = generate_name_from_command(
                &concrete,
                args.max_arg_length,
                args.max_name_length,
            );
            jobs.push(Job {
                name,
                command: concrete,
            });
        }
    }

    log_status!("launch", "Prepared {} jobs", jobs.len());

    Ok((
        LaunchOutput {
            total: jobs.len(),
            jobs,
        },
        0,
    ))
}

fn read_templated_commands(args: &LaunchArgs) -> qdispatch::Result<Vec<String>> {
    if let Some(path) = &args.commands_file {
        let content = fs::read_to_string(path)?;
        return Ok(commands_from_str(&content));
    }

    if args.command.is_empty() {
        return Err(Error::Other(
            "Provide a command or --commands-file".to_string(),
        ));
    }

    Ok(vec![args.command.join(" ")])
}
