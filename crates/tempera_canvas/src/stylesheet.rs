//! Stylesheet endpoint and middleware.
//!
//! Component classes are normally written inline, once per render tree.
//! Applications can instead serve them as one global stylesheet; the
//! middleware then tells every render that those classes are already present.

use http::header::{self, HeaderValue};
use http::{Request, Response};

use crate::css::ComponentCssClass;
use crate::handler::{Body, Handler};
use crate::scope::RenderScope;

/// Path the middleware serves the stylesheet on unless configured otherwise.
pub const DEFAULT_STYLESHEET_PATH: &str = "/styles/templ.css";

/// Serves the rules of a fixed set of component classes as `text/css`.
#[derive(Debug, Clone, Default)]
pub struct CssHandler {
    classes: Vec<ComponentCssClass>,
}

impl CssHandler {
    pub fn new(classes: impl IntoIterator<Item = ComponentCssClass>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
        }
    }

    pub fn classes(&self) -> &[ComponentCssClass] {
        &self.classes
    }

    /// Concatenated rules, in registration order.
    pub fn stylesheet(&self) -> String {
        self.classes.iter().map(|c| c.class.as_str()).collect()
    }
}

impl Handler for CssHandler {
    fn handle(&self, _request: Request<Body>) -> Response<Body> {
        let mut response = Response::new(self.stylesheet().into_bytes());
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/css"));
        response
    }
}

/// Serves the stylesheet on its path and marks its classes as rendered for
/// every other request.
pub struct CssMiddleware<H> {
    path: String,
    css: CssHandler,
    next: H,
}

impl<H: Handler> CssMiddleware<H> {
    pub fn new(next: H, classes: impl IntoIterator<Item = ComponentCssClass>) -> Self {
        Self {
            path: DEFAULT_STYLESHEET_PATH.to_string(),
            css: CssHandler::new(classes),
            next,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<H: Handler> Handler for CssMiddleware<H> {
    fn handle(&self, mut request: Request<Body>) -> Response<Body> {
        if request.uri().path() == self.path {
            return self.css.handle(request);
        }

        let mut scope = request
            .extensions_mut()
            .remove::<RenderScope>()
            .unwrap_or_default();
        let rendered = scope.rendered_css_classes();
        for class in self.css.classes() {
            rendered.add(class.id.as_str());
        }
        request.extensions_mut().insert(scope);

        self.next.handle(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::component;
    use crate::css::{render_css, CssBuilder};
    use crate::writer::StringWriter;
    use crate::handler::ComponentHandler;
    use std::io::{self, Write};

    fn class(name: &str, css: &str) -> ComponentCssClass {
        let mut builder = CssBuilder::new();
        builder.push_str(css);
        builder.finish(name)
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Vec::new()).unwrap()
    }

    #[test]
    fn test_css_handler() {
        let red = class("red", "color:red;");
        let blue = class("blue", "color:blue;");
        let handler = CssHandler::new([red.clone(), blue.clone()]);

        let response = handler.handle(request("/any"));
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert_eq!(
            String::from_utf8(response.into_body()).unwrap(),
            format!("{}{}", red.class, blue.class)
        );
    }

    fn middleware() -> (CssMiddleware<ComponentHandler<impl crate::Component>>, ComponentCssClass) {
        let red = class("red", "color:red;");
        let used = red.clone();
        let page = component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            render_css(scope, w, &used.clone().into())?;
            w.write_all(b"<main></main>")
        });
        (
            CssMiddleware::new(ComponentHandler::new(page), [red.clone()]),
            red,
        )
    }

    #[test]
    fn test_middleware_serves_stylesheet() {
        let (middleware, red) = middleware();
        assert_eq!(middleware.path(), DEFAULT_STYLESHEET_PATH);
        let response = middleware.handle(request(DEFAULT_STYLESHEET_PATH));
        assert_eq!(response.body(), red.class.as_str().as_bytes());
    }

    #[test]
    fn test_middleware_suppresses_inline_styles() {
        let (middleware, _) = middleware();
        let response = middleware.handle(request("/page"));
        assert_eq!(response.body(), b"<main></main>");
    }

    #[test]
    fn test_middleware_custom_path() {
        let (middleware, red) = middleware();
        let middleware = middleware.with_path("/app.css");
        let response = middleware.handle(request("/app.css"));
        assert_eq!(response.body(), red.class.as_str().as_bytes());
        let response = middleware.handle(request(DEFAULT_STYLESHEET_PATH));
        assert_eq!(response.body(), b"<main></main>");
    }
}
