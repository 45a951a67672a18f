/// A response ready to be serialized.
///
/// The status line is always `200 OK`: sensor failures are reported inside
/// the page body, never through the status code.
#[derive(Debug)]
pub struct Response {
    /// Headers in write order.
    pub headers: Vec<(&'static str, String)>,
    /// Response body as bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Builds the standard HTML response for the rendered page.
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self {
            headers: vec![
                ("Content-Type", "text/html".to_string()),
                ("Content-Length", body.len().to_string()),
                ("Connection", "close".to_string()),
            ],
            body,
        }
    }
}
