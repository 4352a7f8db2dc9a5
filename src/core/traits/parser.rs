use crate::core::errors::Result;
use crate::core::models::env_file::EnvFile;

/// Port for parsing environment files.
///
/// Only `DotenvParser` ships today; the trait keeps the loader
/// independent of the concrete syntax.
pub trait EnvParser {
    /// Parse raw file content into an ordered `EnvFile`.
    fn parse(&self, content: &str) -> Result<EnvFile>;
}
