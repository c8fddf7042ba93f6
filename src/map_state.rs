//! Reducer wrapper that maps state before and after the wrapped reducer,
//! only for the configured action types.
//!
//! ```text
//!                 allowed type?
//! (state, action) ──── no ───→ reducer(state, action)
//!        │
//!       yes ──→ after(reducer(before(state), action))
//! ```

use std::fmt;
use std::sync::Arc;

use crate::action_types::ActionTypes;
use crate::config::MapStateConfig;
use crate::mvi::{Action, Identity, NullReducer, Reducer, StateMapper};

/// Creates a reducer configurator which maps state before and after the
/// wrapped reducer, but only for the given action types.
///
/// `action_types` of `None` or an empty list means every action is mapped.
/// Pass [`Identity`] for a mapper that should leave state untouched.
///
/// ```
/// use map_state_reducer::{with_map_state_reducer, Identity, Reducer};
///
/// struct Act(&'static str);
/// impl map_state_reducer::Action for Act {
///     fn action_type(&self) -> &str {
///         self.0
///     }
/// }
///
/// let reducer = with_map_state_reducer(|s: i32| s * 10, Identity, Some(["SCALE"]))
///     .wrap(|s: i32, _a: Act| s + 1);
///
/// assert_eq!(reducer.reduce(1, Act("SCALE")), 11);
/// assert_eq!(reducer.reduce(1, Act("OTHER")), 2);
/// ```
pub fn with_map_state_reducer<B, F, I>(
    map_state_before: B,
    map_state_after: F,
    action_types: Option<I>,
) -> WithMapState<B, F>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    WithMapState::new()
        .before(map_state_before)
        .after(map_state_after)
        .with_action_types(ActionTypes::from_list(action_types))
}

/// Configurator produced by [`with_map_state_reducer`].
///
/// Holds the mappers and the allow-list. The same configurator can wrap
/// any number of reducers; the configuration is shared, not copied.
pub struct WithMapState<B = Identity, F = Identity> {
    before: Arc<B>,
    after: Arc<F>,
    action_types: Arc<ActionTypes>,
}

impl WithMapState {
    /// Identity mappers, every action type allowed.
    pub fn new() -> Self {
        Self {
            before: Arc::new(Identity),
            after: Arc::new(Identity),
            action_types: Arc::new(ActionTypes::All),
        }
    }

    /// Identity mappers with the allow-list taken from configuration.
    pub fn from_config(config: &MapStateConfig) -> Self {
        Self::new().with_action_types(config.action_filter())
    }
}

impl Default for WithMapState {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, F> WithMapState<B, F> {
    /// Sets the mapper applied to state before it reaches the reducer.
    pub fn before<G>(self, map_state_before: G) -> WithMapState<G, F> {
        WithMapState {
            before: Arc::new(map_state_before),
            after: self.after,
            action_types: self.action_types,
        }
    }

    /// Sets the mapper applied to the reducer's result.
    pub fn after<G>(self, map_state_after: G) -> WithMapState<B, G> {
        WithMapState {
            before: self.before,
            after: Arc::new(map_state_after),
            action_types: self.action_types,
        }
    }

    /// Restricts mapping to the given action types.
    pub fn only<I>(self, action_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.with_action_types(ActionTypes::only(action_types))
    }

    /// Applies mapping to every action type.
    pub fn all_actions(self) -> Self {
        self.with_action_types(ActionTypes::All)
    }

    /// Replaces the allow-list.
    pub fn with_action_types(self, action_types: ActionTypes) -> Self {
        tracing::debug!(action_types = %action_types, "configured state mapping");
        Self {
            action_types: Arc::new(action_types),
            ..self
        }
    }

    /// Allow-list shared by every reducer this configurator wraps.
    pub fn action_types(&self) -> &ActionTypes {
        &self.action_types
    }

    /// Wraps `reducer`, producing a reducer with the same signature.
    pub fn wrap<R>(&self, reducer: R) -> MapStateReducer<R, B, F> {
        MapStateReducer {
            reducer,
            before: Arc::clone(&self.before),
            after: Arc::clone(&self.after),
            action_types: Arc::clone(&self.action_types),
        }
    }

    /// Wraps the [`NullReducer`], for use when no reducer is supplied.
    pub fn wrap_default(&self) -> MapStateReducer<NullReducer, B, F> {
        self.wrap(NullReducer)
    }
}

impl<B, F> Clone for WithMapState<B, F> {
    fn clone(&self) -> Self {
        Self {
            before: Arc::clone(&self.before),
            after: Arc::clone(&self.after),
            action_types: Arc::clone(&self.action_types),
        }
    }
}

impl<B, F> fmt::Debug for WithMapState<B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithMapState")
            .field("action_types", &self.action_types)
            .finish_non_exhaustive()
    }
}

/// Reducer returned by [`WithMapState::wrap`].
pub struct MapStateReducer<R, B = Identity, F = Identity> {
    reducer: R,
    before: Arc<B>,
    after: Arc<F>,
    action_types: Arc<ActionTypes>,
}

impl<R, B, F> MapStateReducer<R, B, F> {
    /// The wrapped reducer.
    pub fn inner(&self) -> &R {
        &self.reducer
    }

    /// Unwraps, dropping the mappers.
    pub fn into_inner(self) -> R {
        self.reducer
    }

    /// Allow-list this reducer maps state for.
    pub fn action_types(&self) -> &ActionTypes {
        &self.action_types
    }
}

impl<S, A, R, B, F> Reducer<S, A> for MapStateReducer<R, B, F>
where
    A: Action,
    R: Reducer<S, A>,
    B: StateMapper<S>,
    F: StateMapper<S>,
{
    fn reduce(&self, state: S, action: A) -> S {
        if !self.action_types.allows(action.action_type()) {
            tracing::trace!(
                action_type = action.action_type(),
                "action type not listed, skipping state mapping"
            );
            return self.reducer.reduce(state, action);
        }

        tracing::trace!(action_type = action.action_type(), "mapping state");
        let mapped = self.before.map(state);
        let reduced = self.reducer.reduce(mapped, action);
        self.after.map(reduced)
    }
}

impl<R: Clone, B, F> Clone for MapStateReducer<R, B, F> {
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            before: Arc::clone(&self.before),
            after: Arc::clone(&self.after),
            action_types: Arc::clone(&self.action_types),
        }
    }
}

impl<R: fmt::Debug, B, F> fmt::Debug for MapStateReducer<R, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapStateReducer")
            .field("reducer", &self.reducer)
            .field("action_types", &self.action_types)
            .finish_non_exhaustive()
    }
}
