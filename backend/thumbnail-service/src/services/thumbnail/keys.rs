//! Object key handling

pub const THUMBNAIL_KEY_PREFIX: &str = "thumb-";

/// Decode a key as it appears in an S3 notification.
///
/// `+` becomes a space before percent-decoding, so `%2B` still yields a
/// literal `+`. Malformed escapes are kept verbatim and invalid UTF-8 is
/// replaced with U+FFFD.
pub fn decode_source_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Destination key for an already decoded source key
pub fn destination_key(decoded_source_key: &str) -> String {
    format!("{THUMBNAIL_KEY_PREFIX}{decoded_source_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_and_escaped_plus() {
        let decoded = decode_source_key("a%2Bb+c.png");
        assert_eq!(decoded, "a+b c.png");
        assert_eq!(destination_key(&decoded), "thumb-a+b c.png");
    }

    #[test]
    fn test_nested_path_and_utf8() {
        assert_eq!(
            decode_source_key("albums/2024/%E6%97%A5%E6%9C%AC+trip.jpg"),
            "albums/2024/日本 trip.jpg"
        );
    }

    #[test]
    fn test_plain_key_unchanged() {
        assert_eq!(decode_source_key("cat.png"), "cat.png");
    }

    #[test]
    fn test_malformed_escape_kept() {
        assert_eq!(decode_source_key("100%+off.gif"), "100% off.gif");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(decode_source_key("bad%FF.png"), "bad\u{FFFD}.png");
    }

    #[test]
    fn test_destination_keeps_directories() {
        assert_eq!(destination_key("a/b/c.jpg"), "thumb-a/b/c.jpg");
    }
}
