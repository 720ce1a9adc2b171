use contracts::flow::FlowNodeId;
use serde_json::Value;
use std::collections::HashMap;

/// FlowNodeStore holds the saved configuration of every node in the open flow
/// Configurations live in memory for the lifetime of the editor session
#[derive(Clone, Debug)]
pub struct FlowNodeStore {
    configs: HashMap<FlowNodeId, Value>,
}

impl FlowNodeStore {
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Get the saved configuration of a node
    pub fn get_config(&self, node_id: &FlowNodeId) -> Option<&Value> {
        self.configs.get(node_id)
    }

    /// Set the configuration of a node
    pub fn set_config(&mut self, node_id: FlowNodeId, config: Value) {
        self.configs.insert(node_id, config);
    }

    /// Remove the configuration of a node
    pub fn remove_config(&mut self, node_id: &FlowNodeId) {
        self.configs.remove(node_id);
    }

    /// Clear all configurations
    pub fn clear_all(&mut self) {
        self.configs.clear();
    }
}

impl Default for FlowNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let node_id = FlowNodeId::new_v4();
        let mut store = FlowNodeStore::new();
        assert!(store.get_config(&node_id).is_none());

        store.set_config(node_id, json!({"service_account_json": "{}"}));
        assert_eq!(
            store.get_config(&node_id),
            Some(&json!({"service_account_json": "{}"}))
        );
    }

    #[test]
    fn test_set_overwrites() {
        let node_id = FlowNodeId::new_v4();
        let mut store = FlowNodeStore::new();
        store.set_config(node_id, json!({"service_account_json": "a"}));
        store.set_config(node_id, json!({"service_account_json": "b"}));
        assert_eq!(
            store.get_config(&node_id),
            Some(&json!({"service_account_json": "b"}))
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let node_id = FlowNodeId::new_v4();
        let mut store = FlowNodeStore::new();
        store.set_config(node_id, json!({}));
        store.remove_config(&node_id);
        assert!(store.get_config(&node_id).is_none());

        store.set_config(node_id, json!({}));
        store.clear_all();
        assert!(store.get_config(&node_id).is_none());
    }
}
