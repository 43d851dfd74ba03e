//! Shorthand reference expansion
//!
//! Rewrites compact `%domain` / `%domain%section` references into the
//! canonical `@domains/...` form consumed by downstream renderers. A
//! stateless text pass, independent of the resolver.

use std::sync::OnceLock;

use regex::Regex;

/// Canonical reference prefix
const REFERENCE_PREFIX: &str = "@domains";

/// Candidate pattern: `%domain` with an optional `%section`. Escape and
/// boundary handling lives in [`expand_shorthand`], since the regex engine
/// has no lookaround.
fn shorthand_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"%([A-Za-z_-]+)(?:%([A-Za-z0-9_-]+))?")
            .expect("shorthand pattern is a valid regex")
    })
}

/// Expand shorthand domain references.
///
/// - `%writing` becomes `@domains/writing/core.md`
/// - `%writing%pr-summaries` becomes `@domains/writing/pr-summaries.md`
///
/// Escaped or malformed markers (`%%`, `%name%%`) are left untouched, as
/// is text with no markers at all.
pub fn expand_shorthand(content: &str) -> String {
    let pattern = shorthand_pattern();
    let mut expanded = String::with_capacity(content.len());
    let mut pos = 0;

    while let Some(caps) = pattern.captures_at(content, pos) {
        let matched = caps.get(0).expect("group 0 always participates");
        expanded.push_str(&content[pos..matched.start()]);

        if is_escaped(content, matched.start()) || has_bad_boundary(content, matched.end()) {
            // Keep the marker character and rescan just past it, so a
            // later reference inside the rejected span still expands.
            expanded.push('%');
            pos = matched.start() + 1;
            continue;
        }

        let domain = &caps[1];
        match caps.get(2) {
            Some(section) => {
                expanded.push_str(&format!(
                    "{REFERENCE_PREFIX}/{domain}/{}.md",
                    section.as_str()
                ));
            }
            None => {
                expanded.push_str(&format!("{REFERENCE_PREFIX}/{domain}/core.md"));
            }
        }
        pos = matched.end();
    }

    expanded.push_str(&content[pos..]);
    expanded
}

/// `%%name` is an escape, not a reference.
fn is_escaped(content: &str, start: usize) -> bool {
    content[..start].ends_with('%')
}

/// A candidate immediately followed by `%` or a word character is
/// malformed (`%name%%`) or a partial token (`%name2`); leave it alone.
fn has_bad_boundary(content: &str, end: usize) -> bool {
    content[end..]
        .chars()
        .next()
        .is_some_and(|c| c == '%' || c.is_alphanumeric() || c == '_')
}
