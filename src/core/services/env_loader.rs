use std::path::Path;

use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::core::errors::{EnvRenderError, Result};
use crate::core::models::env_file::EnvFile;
use crate::core::traits::parser::EnvParser;

/// Reads the `-env-file` into an `EnvFile`.
pub struct EnvLoader;

impl EnvLoader {
    /// Load and parse the env file at `path`.
    ///
    /// An empty path means the flag was never given. The file must be
    /// valid UTF-8; the first invalid byte is reported with its line.
    pub fn load(&self, path: &str) -> Result<EnvFile> {
        if path.is_empty() {
            return Err(EnvRenderError::MissingFlag { flag: "env-file" });
        }

        let path = Path::new(path);
        if !path.exists() {
            return Err(EnvRenderError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(EnvRenderError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let content = decode(&bytes, path)?;
        DotenvParser::for_file(path).parse(content)
    }
}

fn decode<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
        EnvRenderError::ParseError {
            file: path.to_path_buf(),
            detail: format!("line {line}: invalid UTF-8 at byte {}", e.valid_up_to()),
        }
    })
}
