//! Filename parsing for the `YYYY-MM-DD-slug` post convention.
//!
//! A post's target directory comes from the leading hyphen-delimited tokens
//! of its filename. Nothing checks that the tokens are actually a date:
//! - `2023-05-01-hello.md` → `2023/05/01`
//! - `2023-05.md` → `2023/05.md` (two levels)
//! - `2023` → `2023` (one level)

use std::path::PathBuf;
use thiserror::Error;

/// Default number of tokens that make up a prefix (year, month, day).
pub const DEFAULT_DEPTH: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum NamingError {
    #[error("Empty filename")]
    Empty,
    #[error("Token {token:?} in {filename:?} cannot be used as a directory name")]
    BadToken { filename: String, token: String },
}

/// The leading tokens of a post filename, one per nesting level.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePrefix {
    tokens: Vec<String>,
}

impl DatePrefix {
    /// Split `filename` on `-` and keep at most `depth` tokens.
    ///
    /// Tokens that would escape or alias the base directory (empty, `.`, `..`)
    /// are rejected, as is anything containing a path separator.
    pub fn parse(filename: &str, depth: usize) -> Result<Self, NamingError> {
        if filename.is_empty() {
            return Err(NamingError::Empty);
        }
        let tokens: Vec<String> = filename
            .split('-')
            .take(depth.max(1))
            .map(str::to_string)
            .collect();

        if let Some(bad) = tokens.iter().find(|t| !is_dir_token(t)) {
            return Err(NamingError::BadToken {
                filename: filename.to_string(),
                token: bad.clone(),
            });
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    /// Relative path of the deepest level (`2023/05/01`).
    pub fn relative_dir(&self) -> PathBuf {
        self.tokens.iter().collect()
    }

    /// Relative path of every level, shallowest first.
    pub fn levels(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.tokens.len()).map(|i| self.tokens[..i].iter().collect())
    }
}

fn is_dir_token(token: &str) -> bool {
    !token.is_empty()
        && token != "."
        && token != ".."
        && !token.contains(['/', '\\'])
}
