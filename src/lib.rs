//! Reducer combinator that maps state before and after a reducer, only for
//! a chosen set of action types.
//!
//! ```
//! use map_state_reducer::{Action, Reducer, WithMapState};
//!
//! enum Todo {
//!     Add(String),
//!     Clear,
//! }
//!
//! impl Action for Todo {
//!     fn action_type(&self) -> &str {
//!         match self {
//!             Todo::Add(_) => "ADD",
//!             Todo::Clear => "CLEAR",
//!         }
//!     }
//! }
//!
//! fn todos(mut list: Vec<String>, action: Todo) -> Vec<String> {
//!     match action {
//!         Todo::Add(item) => list.push(item),
//!         Todo::Clear => list.clear(),
//!     }
//!     list
//! }
//!
//! // Keep the list sorted, but only after additions.
//! let reducer = WithMapState::new()
//!     .after(|mut list: Vec<String>| {
//!         list.sort();
//!         list
//!     })
//!     .only(["ADD"])
//!     .wrap(todos);
//!
//! let list = reducer.reduce(vec!["b".into()], Todo::Add("a".into()));
//! assert_eq!(list, ["a", "b"]);
//! assert!(reducer.reduce(list, Todo::Clear).is_empty());
//! ```

pub mod action_types;
pub mod config;
pub mod json;
pub mod logging;
pub mod map_state;
pub mod mvi;

pub use action_types::{ActionSet, ActionTypes};
pub use config::{ConfigError, MapStateConfig};
pub use json::{ActionError, JsonAction};
pub use map_state::{with_map_state_reducer, MapStateReducer, WithMapState};
pub use mvi::{Action, Identity, NullReducer, Reducer, StateMapper};
