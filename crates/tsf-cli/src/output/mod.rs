//! Output helpers shared by the CLI commands.

mod diagnostic;
pub mod table;

pub use diagnostic::TsDiagnostic;
