//! The `Dispatcher` trait: the extension point for assignment policies.

use crate::DispatchContext;

/// Pluggable assignment policy.
///
/// Implementations decide, for each pending passenger, which non-full car
/// should pick them up, and record the decision with
/// [`DispatchContext::assign`].  Passengers a policy cannot place stay
/// unassigned and are offered again next second.
///
/// Policies are consulted once per second from a single thread, but must be
/// `Send + Sync` so independent simulations can live on different threads.
///
/// # Example
///
/// ```rust,ignore
/// /// Always send the first car.
/// struct FirstCar;
///
/// impl Dispatcher for FirstCar {
///     fn assign(&self, ctx: &mut DispatchContext<'_>) {
///         for &p in ctx.pending() {
///             ctx.assign(p, ElevatorId(0));
///         }
///     }
/// }
/// ```
pub trait Dispatcher: Send + Sync + 'static {
    /// Place pending passengers on cars.
    fn assign(&self, ctx: &mut DispatchContext<'_>);
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn assign(&self, ctx: &mut DispatchContext<'_>) {
        (**self).assign(ctx)
    }
}
