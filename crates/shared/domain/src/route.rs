//! Route table rows and the validated descriptors built from them.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A hard-coded route table. `None` marks an empty slot, which the registry rejects.
pub type RouteTable<'a> = &'a [Option<RouteEntry>];

/// Raw, unvalidated row of a route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub id: u32,
    pub path: &'static str,
    pub name: &'static str,
    pub content: &'static str,
}

impl RouteEntry {
    #[must_use]
    pub const fn new(
        id: u32,
        path: &'static str,
        name: &'static str,
        content: &'static str,
    ) -> Self {
        Self { id, path, name, content }
    }
}

/// Opaque key naming the renderable payload of a route.
///
/// The registry never interprets it; a page catalog maps keys to views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentKey(Cow<'static, str>);

impl ContentKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ContentKey {
    fn from(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }
}

impl From<String> for ContentKey {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

impl AsRef<str> for ContentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated route: binds a URL path to a menu label and a content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Rendering key only, never used for lookup.
    pub id: u32,
    pub path: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub content: ContentKey,
}

impl From<RouteEntry> for RouteDescriptor {
    fn from(entry: RouteEntry) -> Self {
        Self {
            id: entry.id,
            path: Cow::Borrowed(entry.path),
            name: Cow::Borrowed(entry.name),
            content: ContentKey::from(entry.content),
        }
    }
}
