use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Upper bound on a request head; anything longer is a protocol error.
pub const MAX_HEAD_BYTES: usize = 8192;

/// Reads and discards the request head: everything up to and including the
/// first blank line (bare CRLF).
///
/// Method, path, and headers are intentionally not parsed; all requests get
/// the same response. A client that closes before sending the blank line is
/// treated as done. The caller is responsible for bounding this with a
/// timeout, since a silent client would otherwise block forever.
pub async fn drain_request_head<R>(stream: &mut R) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buf = BytesMut::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        if head_complete(&buf) {
            return Ok(());
        }

        if buf.len() > MAX_HEAD_BYTES {
            anyhow::bail!("request head exceeds {} bytes", MAX_HEAD_BYTES);
        }

        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            // Client closed early; serve the page anyway.
            return Ok(());
        }

        buf.extend_from_slice(&chunk[..n]);
    }
}

fn head_complete(buf: &[u8]) -> bool {
    // A request consisting of a lone CRLF counts as terminated too.
    buf.starts_with(b"\r\n") || buf.windows(4).any(|w| w == b"\r\n\r\n")
}
