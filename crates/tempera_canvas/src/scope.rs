//! Per-render-tree state.

use std::fmt;
use std::sync::Arc;

use tempera_carton::FxHashSet;

use crate::component::{Component, NopComponent};

/// Set of identifiers already emitted during one render tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSet {
    items: FxHashSet<String>,
}

impl StringSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item`, returning `true` when it was not present yet.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// All items, sorted.
    pub fn all(&self) -> Vec<String> {
        let mut all: Vec<String> = self.items.iter().cloned().collect();
        all.sort_unstable();
        all
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// State shared by one root render and every nested render below it.
///
/// Holds the two dedup registries: component CSS class ids whose style block
/// has been written, and script names whose function has been written. Each
/// registry is created on first access.
///
/// A scope can also carry children: a component a layout renders in its
/// body without taking it as a parameter.
#[derive(Clone, Default)]
pub struct RenderScope {
    css_classes: Option<StringSet>,
    scripts: Option<StringSet>,
    children: Option<Children>,
}

/// Children attached to a [`RenderScope`].
pub type Children = Arc<dyn Component + Send + Sync>;

impl RenderScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope whose CSS registry already contains `ids`, so their style blocks
    /// are never written inline.
    pub fn with_css_classes<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            css_classes: Some(ids.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Attach `children` to the scope.
    pub fn with_children<C>(mut self, children: C) -> Self
    where
        C: Component + Send + Sync + 'static,
    {
        self.children = Some(Arc::new(children));
        self
    }

    /// Attached children, or a [`NopComponent`] when there are none.
    pub fn children(&self) -> Children {
        self.children
            .clone()
            .unwrap_or_else(|| Arc::new(NopComponent))
    }

    /// Detach the children, so components rendered below see none.
    pub fn clear_children(&mut self) -> Option<Children> {
        self.children.take()
    }

    /// Registry of rendered CSS class ids, created if missing.
    pub fn rendered_css_classes(&mut self) -> &mut StringSet {
        self.css_classes.get_or_insert_with(StringSet::new)
    }

    /// Registry of rendered script names, created if missing.
    pub fn rendered_scripts(&mut self) -> &mut StringSet {
        self.scripts.get_or_insert_with(StringSet::new)
    }

    /// CSS registry, if it has been created.
    pub fn css_classes(&self) -> Option<&StringSet> {
        self.css_classes.as_ref()
    }

    /// Script registry, if it has been created.
    pub fn scripts(&self) -> Option<&StringSet> {
        self.scripts.as_ref()
    }
}

impl fmt::Debug for RenderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScope")
            .field("css_classes", &self.css_classes)
            .field("scripts", &self.scripts)
            .field("children", &self.children.is_some())
            .finish()
    }
}
