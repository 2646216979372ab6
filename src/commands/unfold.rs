use clap::Args;
use qdispatch::{replace_uid_tag, CommandUnfolder};
use serde::Serialize;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct UnfoldArgs {
    /// Templated command, e.g. 'echo [a b] [1:3]'
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,

    /// Leave {UID} placeholders unresolved
    #[arg(long)]
    pub keep_uid_tag: bool,
}

#[derive(Serialize)]
pub struct UnfoldOutput {
    pub command: String,
    pub total: usize,
    pub commands: Vec<String>,
}

pub fn run(args: UnfoldArgs, _global: &super::GlobalArgs) -> CmdResult<UnfoldOutput> {
    let command = args.command.join(" ");

    let unfolder = CommandUnfolder::new()?;
    let mut commands = unfolder.unfold(&command)?;
    if !args.keep_uid_tag {
        commands = replace_uid_tag(&commands);
    }

    Ok((
        UnfoldOutput {
            command,
            total: commands.len(),
            commands,
        },
        0,
    ))
}
