//! Base trait for actions (user/system events) in MVI architecture.

/// An action that a reducer can consume.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
///
/// Every action carries a type identifier. That identifier is what the
/// action-type allow-list is tested against.
pub trait Action {
    /// The identifier naming this kind of action, e.g. `"TODO_ADDED"`.
    fn action_type(&self) -> &str;
}

impl<A: Action + ?Sized> Action for &A {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn action_type(&self) -> &str {
        (**self).action_type()
    }
}
