//! CSS class values, the render-time CSS sanitizer and style dedup.

use std::fmt;
use std::io;

use tempera_carton::{css_id, is_safe_class_name, sanitize_css_property};

use crate::scope::RenderScope;

/// Class name substituted for a name that fails validation.
pub const SAFE_CLASS_NAME_FALLBACK: &str = "--tempera-css-class-safe-name";

// ============================================================================
// Safe CSS
// ============================================================================

/// CSS text that has passed the sanitizer or was produced from trusted input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeCss(String);

impl SafeCss {
    /// Wrap CSS text without sanitizing it.
    pub fn trusted(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitize one declaration computed at render time, returning `name:value;`.
pub fn sanitize_css(property: &str, value: impl fmt::Display) -> SafeCss {
    SafeCss(sanitize_css_property(property, &value.to_string()))
}

// ============================================================================
// Classes
// ============================================================================

/// Class produced by a CSS template: a generated id plus its style rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCssClass {
    /// Class name, `<template name>_<digest>`.
    pub id: String,
    /// Complete rule, `.<id>{<declarations>}`.
    pub class: SafeCss,
}

/// A single entry of a `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssClass {
    /// Plain class name, no style block.
    Constant(String),
    /// Class generated from a CSS template.
    Component(ComponentCssClass),
}

impl CssClass {
    /// Name as it appears in the `class` attribute.
    pub fn class_name(&self) -> &str {
        match self {
            CssClass::Constant(name) => name.as_str(),
            CssClass::Component(c) => c.id.as_str(),
        }
    }
}

/// Validated constant class; an invalid name is replaced by a fixed fallback.
pub fn class(name: &str) -> CssClass {
    if is_safe_class_name(name) {
        CssClass::Constant(name.to_string())
    } else {
        tracing::debug!(class = name, "replacing unsafe CSS class name");
        CssClass::Constant(SAFE_CLASS_NAME_FALLBACK.to_string())
    }
}

/// Constant class taken as is.
pub fn safe_class(name: impl Into<String>) -> CssClass {
    CssClass::Constant(name.into())
}

impl From<ComponentCssClass> for CssClass {
    fn from(c: ComponentCssClass) -> Self {
        CssClass::Component(c)
    }
}

impl From<&str> for CssClass {
    fn from(name: &str) -> Self {
        CssClass::Constant(name.to_string())
    }
}

impl From<String> for CssClass {
    fn from(name: String) -> Self {
        CssClass::Constant(name)
    }
}

/// Ordered list of classes for one `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssClasses(Vec<CssClass>);

impl CssClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, class: impl Into<CssClass>) {
        self.0.push(class.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CssClass> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Collect classes from anything convertible.
pub fn classes<I, C>(items: I) -> CssClasses
where
    I: IntoIterator<Item = C>,
    C: Into<CssClass>,
{
    CssClasses(items.into_iter().map(Into::into).collect())
}

impl fmt::Display for CssClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class.class_name())?;
        }
        Ok(())
    }
}

impl<C: Into<CssClass>> FromIterator<C> for CssClasses {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<CssClass> for CssClasses {
    fn from(class: CssClass) -> Self {
        Self(vec![class])
    }
}

impl From<ComponentCssClass> for CssClasses {
    fn from(class: ComponentCssClass) -> Self {
        Self(vec![CssClass::Component(class)])
    }
}

impl From<Vec<CssClass>> for CssClasses {
    fn from(classes: Vec<CssClass>) -> Self {
        Self(classes)
    }
}

impl From<&str> for CssClasses {
    fn from(name: &str) -> Self {
        Self(vec![CssClass::from(name)])
    }
}

impl From<String> for CssClasses {
    fn from(name: String) -> Self {
        Self(vec![CssClass::from(name)])
    }
}

impl From<&String> for CssClasses {
    fn from(name: &String) -> Self {
        Self(vec![CssClass::from(name.as_str())])
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates the declarations of one CSS template.
#[derive(Debug, Default)]
pub struct CssBuilder {
    css: String,
}

impl CssBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append declarations that were sanitized at generation time.
    #[inline]
    pub fn push_str(&mut self, css: &str) {
        self.css.push_str(css);
    }

    /// Append a declaration sanitized at render time.
    #[inline]
    pub fn push_css(&mut self, css: SafeCss) {
        self.css.push_str(css.as_str());
    }

    /// Derive the class id from the accumulated declarations.
    pub fn finish(self, name: &str) -> ComponentCssClass {
        let id = css_id(name, &self.css);
        let class = SafeCss(format!(".{}{{{}}}", id, self.css));
        ComponentCssClass { id, class }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Write one `<style>` block holding every component class in `classes` that
/// this render tree has not written yet.
pub fn render_css(
    scope: &mut RenderScope,
    w: &mut dyn io::Write,
    classes: &CssClasses,
) -> io::Result<()> {
    let rendered = scope.rendered_css_classes();
    let mut css = String::new();
    for class in classes.iter() {
        if let CssClass::Component(c) = class {
            if rendered.add(c.id.as_str()) {
                css.push_str(c.class.as_str());
            }
        }
    }
    if css.is_empty() {
        return Ok(());
    }
    w.write_all(b"<style type=\"text/css\">")?;
    w.write_all(css.as_bytes())?;
    w.write_all(b"</style>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ComponentCssClass {
        let mut css = CssBuilder::new();
        css.push_str("color:red;");
        css.finish("red")
    }

    #[test]
    fn test_builder_id() {
        let class = red();
        assert!(class.id.starts_with("red_"));
        assert_eq!(class.id.len(), "red_".len() + 4);
        assert_eq!(class.class.as_str(), format!(".{}{{color:red;}}", class.id));
        // Same declarations, same id.
        assert_eq!(red(), class);
    }

    #[test]
    fn test_builder_dynamic_declaration() {
        let mut css = CssBuilder::new();
        css.push_str("color:red;");
        css.push_css(sanitize_css("width", "10px"));
        css.push_css(sanitize_css("background", "url(evil)"));
        let class = css.finish("box");
        assert!(class.class.as_str().ends_with(
            "{color:red;width:10px;background:zTemperaUnsafeCssPropertyValue;}"
        ));
    }

    #[test]
    fn test_class_validation() {
        assert_eq!(class("btn"), CssClass::Constant("btn".into()));
        assert_eq!(
            class("x\" onclick=\"alert(1)"),
            CssClass::Constant(SAFE_CLASS_NAME_FALLBACK.into())
        );
        assert_eq!(safe_class("1col"), CssClass::Constant("1col".into()));
    }

    #[test]
    fn test_classes_display() {
        let red = red();
        let list = classes([class("a"), CssClass::from(red.clone()), "b".into()]);
        assert_eq!(list.to_string(), format!("a {} b", red.id));
        assert_eq!(CssClasses::from("single").to_string(), "single");
        assert_eq!(CssClasses::new().to_string(), "");
    }

    #[test]
    fn test_render_css_once() {
        let mut scope = RenderScope::new();
        let list = CssClasses::from(vec![CssClass::from("plain"), red().into()]);

        let mut out = Vec::new();
        render_css(&mut scope, &mut out, &list).unwrap();
        render_css(&mut scope, &mut out, &list).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            format!("<style type=\"text/css\">{}</style>", red().class)
        );
    }

    #[test]
    fn test_render_css_skips_preregistered() {
        let mut scope = RenderScope::with_css_classes([red().id]);
        let mut out = Vec::new();
        render_css(&mut scope, &mut out, &red().into()).unwrap();
        assert!(out.is_empty());
    }
}
