//! Renderable units.

use std::io;
use std::sync::Arc;

use crate::scope::RenderScope;
use crate::writer::StringWriter;

/// A value that renders itself into a byte sink.
///
/// Every compiled HTML template returns `impl Component`. Nested templates
/// receive the caller's scope and the caller's [`StringWriter`], so the whole
/// render tree shares one set of dedup registries and one buffer.
pub trait Component {
    /// Render into the buffer of an enclosing render.
    fn render_buffered(&self, scope: &mut RenderScope, w: &mut StringWriter<'_>)
        -> io::Result<()>;

    /// Render into any sink. The sink is wrapped in a [`StringWriter`] that
    /// is flushed before returning.
    fn render(&self, scope: &mut RenderScope, w: &mut dyn io::Write) -> io::Result<()> {
        let mut w = StringWriter::new(w);
        self.render_buffered(scope, &mut w)?;
        w.finish()
    }
}

/// Component backed by a closure.
pub struct ComponentFn<F>(F);

/// Wrap a render closure as a [`Component`].
pub fn component<F>(f: F) -> ComponentFn<F>
where
    F: Fn(&mut RenderScope, &mut StringWriter<'_>) -> io::Result<()>,
{
    ComponentFn(f)
}

impl<F> Component for ComponentFn<F>
where
    F: Fn(&mut RenderScope, &mut StringWriter<'_>) -> io::Result<()>,
{
    #[inline]
    fn render_buffered(
        &self,
        scope: &mut RenderScope,
        w: &mut StringWriter<'_>,
    ) -> io::Result<()> {
        (self.0)(scope, w)
    }
}

impl<F> std::fmt::Debug for ComponentFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ComponentFn")
    }
}

/// Component that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopComponent;

impl Component for NopComponent {
    fn render_buffered(
        &self,
        _scope: &mut RenderScope,
        _w: &mut StringWriter<'_>,
    ) -> io::Result<()> {
        Ok(())
    }

    fn render(&self, _scope: &mut RenderScope, _w: &mut dyn io::Write) -> io::Result<()> {
        Ok(())
    }
}

impl<C: Component + ?Sized> Component for &C {
    #[inline]
    fn render_buffered(
        &self,
        scope: &mut RenderScope,
        w: &mut StringWriter<'_>,
    ) -> io::Result<()> {
        (**self).render_buffered(scope, w)
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    #[inline]
    fn render_buffered(
        &self,
        scope: &mut RenderScope,
        w: &mut StringWriter<'_>,
    ) -> io::Result<()> {
        (**self).render_buffered(scope, w)
    }
}

impl<C: Component + ?Sized> Component for Arc<C> {
    #[inline]
    fn render_buffered(
        &self,
        scope: &mut RenderScope,
        w: &mut StringWriter<'_>,
    ) -> io::Result<()> {
        (**self).render_buffered(scope, w)
    }
}

/// Render `component` as the root of a new render tree.
pub fn render<C: Component + ?Sized>(component: &C, w: &mut dyn io::Write) -> io::Result<()> {
    let mut scope = RenderScope::new();
    component.render(&mut scope, w)
}

/// Render `component` as a root into a `String`.
pub fn render_to_string<C: Component + ?Sized>(component: &C) -> io::Result<String> {
    let mut buf = Vec::new();
    render(component, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
