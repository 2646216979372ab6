use clap::Args;
use qdispatch::{detect_cluster, get_available_queues, QueueCatalog};
use serde::Serialize;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct QueuesArgs {
    /// Cluster to list queues for (default: detected from this machine)
    #[arg(long, value_name = "NAME")]
    pub cluster: Option<String>,
}

#[derive(Serialize)]
pub struct QueuesOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    pub queues: QueueCatalog,
}

pub fn run(args: QueuesArgs, _global: &super::GlobalArgs) -> CmdResult<QueuesOutput> {
    let cluster = args.cluster.or_else(detect_cluster);
    let queues = get_available_queues(cluster.as_deref())?;

    Ok((QueuesOutput { cluster, queues }, 0))
}
