pub mod google_docs_read;
mod node_id;

pub use google_docs_read::GoogleDocsReadConfig;
pub use node_id::FlowNodeId;
