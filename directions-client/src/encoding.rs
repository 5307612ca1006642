//! Percent-encoding for query parameter values.
//!
//! Only the unreserved URL characters (`A-Z a-z 0-9 - . _ ~`) pass through
//! untouched. Everything else, including the `:` `|` `,` delimiters the
//! request builder inserts itself, is escaped as `%XX` over the UTF-8 bytes.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if `b` may appear unescaped inside a query value.
fn is_unreserved(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~')
}

/// Percent-encode `input` for use as a query parameter value.
///
/// # Examples
///
/// ```
/// use directions_client::encoding::encode;
///
/// assert_eq!(encode("London"), "London");
/// assert_eq!(encode("place_id:ChIJ"), "place_id%3AChIJ");
/// assert_eq!(encode("bus|tram"), "bus%7Ctram");
/// ```
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    encode_into(&mut out, input);
    out
}

/// Percent-encode `input`, appending the result to `buffer`.
pub fn encode_into(buffer: &mut String, input: &str) {
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            buffer.push(b as char);
        } else {
            buffer.push('%');
            buffer.push(HEX[usize::from(b >> 4)] as char);
            buffer.push(HEX[usize::from(b & 0x0F)] as char);
        }
    }
}

/// Reverse of [`encode`]. Returns `None` for truncated escapes, non-hex
/// digits, or byte sequences that are not valid UTF-8.
#[cfg(test)]
pub(crate) fn decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding an encoded string recovers it exactly
        #[test]
        fn roundtrip(s in any::<String>()) {
            prop_assert_eq!(decode(&encode(&s)), Some(s));
        }

        /// Output only ever contains unreserved characters and escapes
        #[test]
        fn output_is_query_safe(s in any::<String>()) {
            let encoded = encode(&s);
            prop_assert!(encoded.bytes().all(|b| is_unreserved(b) || b == b'%'));
        }

        /// Strings of unreserved characters are left alone
        #[test]
        fn unreserved_identity(s in "[A-Za-z0-9._~-]{0,40}") {
            prop_assert_eq!(encode(&s), s);
        }
    }
}
