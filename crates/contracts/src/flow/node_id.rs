use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для узла агентного сценария
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowNodeId(pub Uuid);

impl FlowNodeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FlowNodeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}
