//! State mapping functions applied around a reducer.

/// Maps a state value to a new state value.
///
/// Any `Fn(S) -> S` closure is a mapper.
pub trait StateMapper<S> {
    fn map(&self, state: S) -> S;
}

impl<S, F> StateMapper<S> for F
where
    F: Fn(S) -> S,
{
    fn map(&self, state: S) -> S {
        self(state)
    }
}

/// Mapper that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<S> StateMapper<S> for Identity {
    fn map(&self, state: S) -> S {
        state
    }
}
