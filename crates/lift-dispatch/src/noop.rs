//! A dispatcher that never assigns.

use crate::{DispatchContext, Dispatcher};

/// A [`Dispatcher`] that leaves every passenger unassigned.
///
/// Useful in tests, and when an external controller steers the cars purely
/// through per-car target commands and only reads hall calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

impl Dispatcher for NoopDispatcher {
    fn assign(&self, _ctx: &mut DispatchContext<'_>) {}
}
