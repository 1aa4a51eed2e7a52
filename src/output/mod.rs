mod formatter;

pub use formatter::{LookupOutput, OutputFormatter};
