//! Allow-list of action types eligible for state mapping.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Set of action types for which state mapping applies.
///
/// `ActionTypes::All` admits every action. `ActionTypes::Only` admits the
/// listed types and nothing else. The set is built once and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionTypes {
    #[default]
    All,
    Only(ActionSet),
}

/// Non-empty set of action type identifiers.
///
/// Only built through [`ActionTypes::from_list`], so an `Only` allow-list
/// always names at least one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet(HashSet<String>);

impl ActionSet {
    pub fn contains(&self, action_type: &str) -> bool {
        self.0.contains(action_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl ActionTypes {
    /// Builds an allow-list from an optional sequence of identifiers.
    ///
    /// `None` and an empty sequence both mean "every action type".
    /// Duplicate identifiers collapse into one entry.
    pub fn from_list<I>(types: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let Some(types) = types else {
            return ActionTypes::All;
        };

        let set: HashSet<String> = types.into_iter().map(Into::into).collect();
        if set.is_empty() {
            // An empty list is treated as absent, not as "map nothing".
            tracing::debug!("empty action type list, mapping applies to all actions");
            return ActionTypes::All;
        }

        ActionTypes::Only(ActionSet(set))
    }

    /// Allow-list restricted to the given identifiers.
    ///
    /// Same empty-list rule as [`ActionTypes::from_list`].
    pub fn only<I>(types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_list(Some(types))
    }

    /// Whether mapping applies to actions of this type.
    pub fn allows(&self, action_type: &str) -> bool {
        match self {
            ActionTypes::All => true,
            ActionTypes::Only(set) => set.contains(action_type),
        }
    }

    /// Whether every action type is eligible.
    pub fn is_all(&self) -> bool {
        matches!(self, ActionTypes::All)
    }

    /// Number of listed identifiers; `None` when every type is allowed.
    pub fn count(&self) -> Option<usize> {
        match self {
            ActionTypes::All => None,
            ActionTypes::Only(set) => Some(set.len()),
        }
    }

    /// Listed identifiers in sorted order; empty when every type is allowed.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        match self {
            ActionTypes::All => Vec::new(),
            ActionTypes::Only(set) => {
                let mut types: Vec<String> = set.iter().map(str::to_owned).collect();
                types.sort();
                types
            }
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ActionTypes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::only(iter)
    }
}

impl fmt::Display for ActionTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionTypes::All => write!(f, "*"),
            ActionTypes::Only(_) => write!(f, "{}", self.to_sorted_vec().join(",")),
        }
    }
}

/// Serialized as an optional list: `None` for [`ActionTypes::All`].
impl Serialize for ActionTypes {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            ActionTypes::All => serializer.serialize_none(),
            ActionTypes::Only(_) => serializer.serialize_some(&self.to_sorted_vec()),
        }
    }
}

impl<'de> Deserialize<'de> for ActionTypes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let types = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(Self::from_list(types))
    }
}
