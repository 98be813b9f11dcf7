//! The placeholder section document written at every nesting level.
//!
//! Each generated `_index.md` is front matter only: the section itself does
//! not render, its pages bubble up to the parent (`transparent`), and a
//! visitor landing on `/blog/2023/` is redirected to the blog root.
//!
//! ```text
//! ---
//! render: false
//! transparent: true
//! redirect_to: "/blog/"
//! ---
//! ```

/// Redirect target used when the config does not override it.
pub const DEFAULT_REDIRECT: &str = "/blog/";

/// Render the placeholder document for the given redirect target.
pub fn placeholder(redirect_to: &str) -> String {
    format!(
        "---\nrender: false\ntransparent: true\nredirect_to: \"{}\"\n---\n",
        redirect_to.replace('\\', "\\\\").replace('"', "\\\"")
    )
}
