//! # blog-nest
//!
//! Moves flat, date-prefixed blog posts into a nested year/month/day section
//! tree and writes a placeholder `_index.md` at every level.
//!
//! ```text
//! content/blog/2023-05-01-hello.md  →  content/blog/2023/05/01/2023-05-01-hello.md
//! ```
//!
//! The generated indexes mark each new section as non-rendering and
//! transparent, so posts still list under `/blog/` and the intermediate
//! section URLs redirect there.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`nest`] | The single pass: list, derive prefix, create dirs, write indexes, move |
//! | [`naming`] | `YYYY-MM-DD-slug` filename prefix parsing |
//! | [`front_matter`] | The placeholder document written into each index |
//! | [`config`] | Optional `blog-nest.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting for progress events and the summary |
//!
//! The pass is not transactional: the first filesystem error stops it and
//! anything already moved stays where it is. Running it again picks up only
//! the posts still sitting flat in the base directory.

pub mod config;
pub mod front_matter;
pub mod naming;
pub mod nest;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
