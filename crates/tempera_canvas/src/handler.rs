//! Adapter exposing a component as an HTTP request handler.
//!
//! Built on the `http` crate's request and response types so it can sit
//! behind any server that speaks them. Bodies are fully buffered.

use std::io;

use http::header::{self, HeaderValue};
use http::{Request, Response, StatusCode};

use crate::component::Component;
use crate::scope::RenderScope;

/// Request and response body.
pub type Body = Vec<u8>;

/// Body sent when rendering fails and no error handler is installed.
pub const RENDER_ERROR_MESSAGE: &str = "tempera: failed to render template";

/// Something that turns a request into a response.
pub trait Handler {
    fn handle(&self, request: Request<Body>) -> Response<Body>;
}

impl<F> Handler for F
where
    F: Fn(Request<Body>) -> Response<Body>,
{
    fn handle(&self, request: Request<Body>) -> Response<Body> {
        self(request)
    }
}

/// Callback building the response for a failed render.
pub type ErrorHandler = Box<dyn Fn(&Request<Body>, &io::Error) -> Response<Body> + Send + Sync>;

/// Serves a component.
///
/// Each request is rendered as a new render tree. When the request carries a
/// [`RenderScope`] extension (see [`crate::stylesheet::CssMiddleware`]) that
/// scope is used as the root scope.
pub struct ComponentHandler<C> {
    component: C,
    status: StatusCode,
    content_type: HeaderValue,
    error_handler: Option<ErrorHandler>,
}

impl<C: Component> ComponentHandler<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            status: StatusCode::OK,
            content_type: HeaderValue::from_static("text/html"),
            error_handler: None,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_content_type(mut self, content_type: HeaderValue) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Request<Body>, &io::Error) -> Response<Body> + Send + Sync + 'static,
    {
        self.error_handler = Some(Box::new(handler));
        self
    }
}

impl<C: Component> Handler for ComponentHandler<C> {
    fn handle(&self, mut request: Request<Body>) -> Response<Body> {
        let mut scope = request
            .extensions_mut()
            .remove::<RenderScope>()
            .unwrap_or_default();

        let mut body = Vec::new();
        match self.component.render(&mut scope, &mut body) {
            Ok(()) => {
                let mut response = Response::new(body);
                *response.status_mut() = self.status;
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, self.content_type.clone());
                response
            }
            Err(err) => {
                tracing::error!(error = %err, uri = %request.uri(), "failed to render component");
                match &self.error_handler {
                    Some(handler) => handler(&request, &err),
                    None => render_error_response(),
                }
            }
        }
    }
}

fn render_error_response() -> Response<Body> {
    let mut response = Response::new(RENDER_ERROR_MESSAGE.as_bytes().to_vec());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::component;
    use crate::css::{render_css, CssBuilder};
    use crate::writer::StringWriter;
    use std::io::Write;

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Vec::new()).unwrap()
    }

    fn hello() -> impl Component {
        component(|_scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            w.write_all(b"<p>hello</p>")
        })
    }

    #[test]
    fn test_renders_component() {
        let response = ComponentHandler::new(hello()).handle(request("/"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(response.body(), b"<p>hello</p>");
    }

    #[test]
    fn test_status_and_content_type() {
        let response = ComponentHandler::new(hello())
            .with_status(StatusCode::NOT_FOUND)
            .with_content_type(HeaderValue::from_static("text/html; charset=utf-8"))
            .handle(request("/missing"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    fn failing() -> impl Component {
        component(|_scope: &mut RenderScope, _w: &mut StringWriter<'_>| -> io::Result<()> {
            Err(io::Error::other("boom"))
        })
    }

    #[test]
    fn test_render_error_default() {
        let response = ComponentHandler::new(failing()).handle(request("/"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body(), RENDER_ERROR_MESSAGE.as_bytes());
    }

    #[test]
    fn test_render_error_custom() {
        let response = ComponentHandler::new(failing())
            .with_error_handler(|req, err| {
                let mut response = Response::new(format!("{} {}", req.uri(), err).into_bytes());
                *response.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
                response
            })
            .handle(request("/page"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body(), b"/page boom");
    }

    #[test]
    fn test_scope_from_extension() {
        let mut css = CssBuilder::new();
        css.push_str("color:red;");
        let red = css.finish("red");
        let id = red.id.clone();

        let page = component(move |scope: &mut RenderScope, w: &mut StringWriter<'_>| -> io::Result<()> {
            render_css(scope, w, &red.clone().into())?;
            w.write_all(b"<p></p>")
        });
        let handler = ComponentHandler::new(page);

        let with_style = handler.handle(request("/"));
        assert!(with_style.body().starts_with(b"<style"));

        let mut req = request("/");
        req.extensions_mut().insert(RenderScope::with_css_classes([id]));
        let without_style = handler.handle(req);
        assert_eq!(without_style.body(), b"<p></p>");
    }

    #[test]
    fn test_closure_handler() {
        let handler = |req: Request<Body>| Response::new(req.uri().path().as_bytes().to_vec());
        assert_eq!(handler.handle(request("/echo")).body(), b"/echo");
    }
}
