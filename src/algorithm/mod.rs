/// Per-cell assignment and completed solutions
pub mod assignment;
/// Direct-neighbor admissibility checks
pub mod constraint;
/// Search event reporting
pub mod observer;
/// Backtracking search driver
pub mod search;
/// Cancellation by flag or deadline
pub mod stop;
