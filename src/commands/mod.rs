pub type CmdResult<T> = qdispatch::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod launch;
pub mod queues;
pub mod unfold;
