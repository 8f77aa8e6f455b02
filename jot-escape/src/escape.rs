//! JSON string escaping per RFC 4627 section 2.5

use crate::sink::Sink;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Escape a byte range for use inside a JSON string literal.
///
/// Escapes control characters (0x00 through 0x1F) as `\u00XX` with uppercase
/// hex digits, backslashes and quotation marks as two-character escapes, and
/// passes every other byte through unchanged. Bytes >= 0x80 are not validated
/// or re-encoded; the input is assumed to already be the encoding the caller
/// wants on the wire.
///
/// Returns the sink reference for chaining. The transform itself cannot
/// fail; any error comes from the sink and is propagated untouched.
pub fn write_escaped<'a, S: Sink>(sink: &'a mut S, bytes: &[u8]) -> Result<&'a mut S, S::Error> {
    for &ch in bytes {
        if ch < 0x20 {
            // Always the \u00XX form, never the \n/\t shorthands.
            sink.write(b"\\u00")?;
            sink.put(HEX[(ch >> 4) as usize])?;
            sink.put(HEX[(ch & 0x0F) as usize])?;
        } else if ch == b'\\' || ch == b'"' {
            sink.put(b'\\')?;
            sink.put(ch)?;
        } else {
            sink.put(ch)?;
        }
    }

    Ok(sink)
}

/// Escape a NUL-terminated byte range.
///
/// Consumes bytes until the first 0x00 byte or the end of the slice,
/// whichever comes first; the terminator itself is not written. Otherwise
/// identical to [`write_escaped`].
pub fn write_escaped_nul<'a, S: Sink>(
    sink: &'a mut S,
    bytes: &[u8],
) -> Result<&'a mut S, S::Error> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    write_escaped(sink, &bytes[..end])
}

/// Escape into a freshly allocated buffer.
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    match write_escaped(&mut out, bytes) {
        Ok(_) => out,
        Err(never) => match never {},
    }
}
