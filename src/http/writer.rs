use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const STATUS_LINE: &str = "HTTP/1.1 200 OK\r\n";

/// Serializes the status line, headers, separator, and body into one buffer.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(resp.body.len() + 128);

    buf.extend_from_slice(STATUS_LINE.as_bytes());

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes the full response to the client.
pub async fn write_response<W>(stream: &mut W, resp: &Response) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let buf = serialize_response(resp);
    stream.write_all(&buf).await?;
    stream.flush().await?;
    Ok(())
}
