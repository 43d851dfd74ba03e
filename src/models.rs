//! Core data models for Weft
//!
//! Defines the structures the resolver works over:
//! - `Extends`: a domain's parent declaration (single name or ordered list)
//! - `DomainMeta`: the metadata block extracted from a domain document
//! - `Domain`: a loaded domain document

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parent declaration in a domain's metadata block.
///
/// Authors may write either a single name or an ordered list:
///
/// ```yaml
/// extends: testing
/// ```
///
/// ```yaml
/// extends:
///   - testing
///   - api
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extends {
    /// A single parent domain
    One(String),
    /// An ordered list of parent domains
    Many(Vec<String>),
}

impl Extends {
    /// Parent names in declared order.
    pub fn names(&self) -> &[String] {
        match self {
            Extends::One(name) => std::slice::from_ref(name),
            Extends::Many(names) => names,
        }
    }
}

/// Metadata block of a domain document.
///
/// Only `extends` is interpreted; any other keys authors put in the block
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainMeta {
    /// Parent domains whose resolved content precedes this domain's body
    #[serde(default)]
    pub extends: Option<Extends>,
}

impl DomainMeta {
    /// Declared parent names, empty when the domain extends nothing.
    pub fn parent_names(&self) -> &[String] {
        self.extends.as_ref().map(Extends::names).unwrap_or(&[])
    }
}

/// A loaded domain document
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// Domain name (unique within a resolution scope)
    pub name: String,

    /// Backing document path, `None` for placeholder domains
    pub source: Option<PathBuf>,

    /// Parsed metadata
    pub meta: DomainMeta,

    /// Document body with the metadata block removed
    pub body: String,
}

impl Domain {
    /// Create a domain backed by a document on disk
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        meta: DomainMeta,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: Some(source.into()),
            meta,
            body: body.into(),
        }
    }

    /// Stand-in for a domain whose document could not be located.
    ///
    /// Resolution degrades to this placeholder instead of failing, so one
    /// dangling reference does not abort composition of everything else.
    pub fn placeholder(name: impl Into<String>) -> Self {
        let name = name.into();
        let body = format!("# {name} domain\n\n(Domain file not found)");
        Self {
            name,
            source: None,
            meta: DomainMeta::default(),
            body,
        }
    }
}
