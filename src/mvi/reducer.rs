//! Reducer trait for MVI architecture.

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
///
/// Any `Fn(S, A) -> S` closure is a reducer.
pub trait Reducer<S, A> {
    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: S, action: A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, A) -> S,
{
    fn reduce(&self, state: S, action: A) -> S {
        self(state, action)
    }
}

/// Reducer used when no reducer is supplied.
///
/// Absent state stays absent (`None`), present state is returned as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullReducer;

impl<T, A> Reducer<Option<T>, A> for NullReducer {
    fn reduce(&self, state: Option<T>, _action: A) -> Option<T> {
        state
    }
}
