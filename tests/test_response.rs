use plantwatch::http::response::Response;
use plantwatch::http::writer::serialize_response;

#[test]
fn test_html_response_headers() {
    let resp = Response::html("<html></html>");

    let headers: Vec<_> = resp.headers.iter().map(|(k, _)| *k).collect();
    assert!(headers.contains(&"Content-Type"));
    assert!(headers.contains(&"Content-Length"));
    assert!(headers.contains(&"Connection"));

    let content_length = resp
        .headers
        .iter()
        .find(|(k, _)| *k == "Content-Length")
        .map(|(_, v)| v.clone())
        .unwrap();
    assert_eq!(content_length, "13");
}

#[test]
fn test_serialized_form() {
    let resp = Response::html("body");
    let raw = serialize_response(&resp);
    let text = String::from_utf8(raw).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("Connection: close\r\n"));
    assert!(text.ends_with("\r\n\r\nbody"));
}

#[test]
fn test_content_length_matches_body() {
    let page = "x".repeat(1234);
    let resp = Response::html(page.clone());

    let content_length = resp
        .headers
        .iter()
        .find(|(k, _)| *k == "Content-Length")
        .map(|(_, v)| v.clone())
        .unwrap();
    assert_eq!(content_length, "1234");
    assert_eq!(resp.body.len(), 1234);
}
