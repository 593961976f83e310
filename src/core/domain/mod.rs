//! Domain types.

mod env;
pub mod line;
mod plan;
mod reference;

pub use env::{unquote, Env};
pub use line::{EnvLine, LineKind};
pub use plan::MigrationPlan;
pub use reference::{Naming, VaultReference};
