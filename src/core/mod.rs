// Public modules
pub mod cluster;
pub mod error;
pub mod escape;
pub mod job;
pub mod template;
pub mod uid;
pub mod unfold;

// Internal modules - not part of public API
pub(crate) mod paths;
pub(crate) mod slugify;

// Re-export common types for convenience
pub use cluster::{detect_cluster, get_available_queues, QueueCatalog, QueueInfo};
pub use error::{Error, Result};
pub use job::{commands_from_str, generate_name_from_command, replace_uid_tag, UID_TAG};
pub use template::{ArgumentTemplate, ListTemplate, RangeTemplate, TemplateRegistry};
pub use unfold::CommandUnfolder;
