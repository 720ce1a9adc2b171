pub mod flow_node_store;
pub mod form_state;

pub use flow_node_store::FlowNodeStore;
pub use form_state::{FormState, FormWatcher};
