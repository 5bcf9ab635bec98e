//! `runner` crate — the `SubprocessRunner` trait and its implementations.
//!
//! The renderer never spawns processes directly; it goes through
//! [`SubprocessRunner`] so tests can swap in [`mock::MockRunner`] for the
//! real [`SystemRunner`].

pub mod error;
pub mod traits;
pub mod system;
pub mod mock;

pub use error::RunnerError;
pub use system::SystemRunner;
pub use traits::{ProcessOutput, SubprocessRunner};
