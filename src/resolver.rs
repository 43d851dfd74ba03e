//! Domain inheritance resolution
//!
//! The core of Weft: composes a domain's full text by recursively
//! resolving its parents (in declared order) ahead of its own body,
//! detecting cycles and caching per-domain results for the lifetime of
//! the resolver instance.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::error::{WeftError, WeftResult};
use crate::locator::DomainLocator;
use crate::models::Domain;
use crate::parser::parse_document;

/// Separator between composed content sections
pub const CONTENT_SEPARATOR: &str = "\n\n---\n\n";

/// Ordered set of domain names on the current resolution stack.
///
/// Each recursion branch extends its own copy: two sibling parents may
/// legitimately share a distant ancestor, which a single mutable set
/// passed down every branch would misreport as a cycle.
#[derive(Debug, Clone, Default)]
struct ResolutionPath(Vec<String>);

impl ResolutionPath {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// New path with `name` appended.
    fn descend(&self, name: &str) -> Self {
        let mut names = self.0.clone();
        names.push(name.to_string());
        Self(names)
    }

    /// The cycle chain for diagnostics: every name on the path, then the
    /// repeated one.
    fn chain_through(&self, name: &str) -> Vec<String> {
        let mut chain = self.0.clone();
        chain.push(name.to_string());
        chain
    }
}

/// Resolves domains into composed text.
///
/// ```no_run
/// use weft::InheritanceResolver;
///
/// let mut resolver = InheritanceResolver::new("domains");
/// let composed = resolver.resolve("pytest")?;
/// # Ok::<(), weft::WeftError>(())
/// ```
///
/// Results are cached per domain name for the lifetime of the instance.
/// The cache never observes file changes: callers that mutate domain
/// documents mid-session (watch tooling and the like) must call
/// [`clear_cache`](Self::clear_cache) themselves. The resolver is not
/// designed for shared mutation across threads; use one instance per
/// thread instead.
pub struct InheritanceResolver {
    locator: DomainLocator,
    cache: HashMap<String, String>,
}

impl InheritanceResolver {
    /// Create a resolver over the given domains directory.
    pub fn new(domains_root: impl Into<PathBuf>) -> Self {
        Self::with_locator(DomainLocator::new(domains_root))
    }

    /// Create a resolver with a preconfigured locator.
    pub fn with_locator(locator: DomainLocator) -> Self {
        Self {
            locator,
            cache: HashMap::new(),
        }
    }

    /// Resolve `name` into its fully composed content: every ancestor's
    /// resolved content in declared order, then the domain's own body,
    /// joined by [`CONTENT_SEPARATOR`].
    ///
    /// A missing document degrades to a placeholder body. A cycle in the
    /// `extends` graph is a hard error carrying the full chain.
    pub fn resolve(&mut self, name: &str) -> WeftResult<String> {
        self.resolve_with_path(name, &ResolutionPath::default())
    }

    /// Drop all cached results.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn resolve_with_path(&mut self, name: &str, path: &ResolutionPath) -> WeftResult<String> {
        if path.contains(name) {
            return Err(WeftError::CircularInheritance {
                chain: path.chain_through(name),
            });
        }

        if let Some(cached) = self.cache.get(name) {
            trace!(domain = %name, "cache hit");
            return Ok(cached.clone());
        }

        let domain = self.load_domain(name)?;
        let parents = domain.meta.parent_names().to_vec();

        if parents.is_empty() {
            self.cache.insert(name.to_string(), domain.body.clone());
            return Ok(domain.body);
        }

        debug!(domain = %name, parents = ?parents, "resolving parents");

        let branch = path.descend(name);
        let mut sections = Vec::with_capacity(parents.len() + 1);
        for parent in &parents {
            sections.push(self.resolve_with_path(parent, &branch)?);
        }
        sections.push(domain.body);

        let resolved = sections.join(CONTENT_SEPARATOR);
        self.cache.insert(name.to_string(), resolved.clone());

        Ok(resolved)
    }

    fn load_domain(&self, name: &str) -> WeftResult<Domain> {
        let Some(source) = self.locator.locate(name) else {
            warn!(domain = %name, "domain document not found, using placeholder");
            return Ok(Domain::placeholder(name));
        };

        let content = fs::read_to_string(&source)?;
        let (meta, body) = parse_document(&content, &source);

        Ok(Domain::new(name, source, meta, body))
    }
}
