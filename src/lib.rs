/// Test Toggle
///
/// Maps a Ruby source file to its spec/test file and back, using the
/// project's layout (gem or application) and test convention (RSpec or
/// Minitest) to decide where to look.
pub mod cli;
pub mod editor;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod output;
pub mod project;
pub mod resolver;

pub use error::{Error, Result};
pub use project::ProjectConvention;
pub use resolver::{AlternateResolver, FileKind};
