use serde::{Deserialize, Serialize};

use crate::action_types::ActionTypes;

/// Root configuration container.
///
/// ```toml
/// action_types = ["TODO_ADDED", "TODO_REMOVED"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStateConfig {
    /// Action types to map state for. Absent or empty maps every action.
    #[serde(default)]
    pub action_types: Option<Vec<String>>,
}

impl MapStateConfig {
    /// Allow-list described by this configuration.
    pub fn action_filter(&self) -> ActionTypes {
        ActionTypes::from_list(self.action_types.as_ref())
    }
}
