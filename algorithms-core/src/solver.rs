use crate::ValidationError;

/// An engine following the `initialize → solve → format` lifecycle.
///
/// Implementations validate their typed request in [`Solver::initialize`],
/// returning [`ValidationError`] rather than panicking. [`Solver::solve`] is
/// infallible and idempotent: calling it again on the same instance produces
/// the same state. [`Solver::format_result`] builds an immutable result that
/// owns no references back into the engine.
///
/// Engines are plain owned values without interior locking; callers create a
/// fresh instance per request instead of sharing one.
///
/// # Examples
/// ```rust
/// use algorithms_core::{Solver, ValidationError, run};
///
/// struct Doubler {
///     input: u32,
///     output: u32,
/// }
///
/// impl Solver for Doubler {
///     type Request = u32;
///     type Solution = u32;
///
///     fn initialize(request: &u32) -> Result<Self, ValidationError> {
///         Ok(Self { input: *request, output: 0 })
///     }
///
///     fn solve(&mut self) {
///         self.output = self.input * 2;
///     }
///
///     fn format_result(&self) -> u32 {
///         self.output
///     }
/// }
///
/// assert_eq!(run::<Doubler>(&21), Ok(42));
/// ```
pub trait Solver: Sized {
    /// Typed parameters decoded by the caller.
    type Request;
    /// Immutable result produced once solving finishes.
    type Solution;

    /// Validate a request and build a ready-to-solve instance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first violated precondition.
    fn initialize(request: &Self::Request) -> Result<Self, ValidationError>;

    /// Run the engine's algorithm to completion.
    fn solve(&mut self);

    /// Capture the current solution as a result value.
    fn format_result(&self) -> Self::Solution;
}

/// Run one full lifecycle for `request` on a fresh engine instance.
///
/// # Errors
///
/// Propagates the [`ValidationError`] raised by [`Solver::initialize`]; no
/// partial result is produced in that case.
pub fn run<S: Solver>(request: &S::Request) -> Result<S::Solution, ValidationError> {
    let mut solver = S::initialize(request)?;
    solver.solve();
    log::debug!("{} finished solving", std::any::type_name::<S>());
    Ok(solver.format_result())
}
