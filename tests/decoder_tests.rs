#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Decoder behavior tests
///
/// This test suite covers:
/// - Triplet decoding and multi-byte reassembly
/// - Recovery from malformed escapes and invalid UTF-8 sequences
/// - Re-escaping of unsafe, ignored and query-string characters
use std::borrow::Cow;
use urlquote::{CodecError, DecoderOptions, PercentDecoder};

fn decode(options: DecoderOptions<'_>, input: &str) -> String {
    PercentDecoder::new(options).decode(input).into_owned()
}

#[test]
fn test_empty_input() {
    let decoder = PercentDecoder::default();
    assert!(matches!(decoder.decode(""), Cow::Borrowed("")));
}

#[test]
fn test_hex_case_insensitive() {
    let options = DecoderOptions::new();
    assert_eq!(decode(options, "%2a"), decode(options, "%2A"));
    assert_eq!(decode(options, "%2a"), "*");
    assert_eq!(decode(options, "%c3%A9"), "\u{e9}");
}

#[test]
fn test_text_between_escapes() {
    assert_eq!(
        decode(DecoderOptions::new(), "/path%20with/%E6%97%A5%E6%9C%AC/"),
        "/path with/\u{65e5}\u{672c}/"
    );
}

#[test]
fn test_broken_multi_byte_sequence() {
    // E2 expects two continuation bytes, 28 is '('
    let decoded = decode(DecoderOptions::new(), "%E2%28%A1");
    assert!(decoded.starts_with("%E2"));
    assert_eq!(decoded, "%E2(%A1");
}

#[test]
fn test_interrupted_sequence_is_flushed() {
    let options = DecoderOptions::new();
    assert_eq!(decode(options, "%E6%97x%A5"), "%E6%97x%A5");
    assert_eq!(decode(options, "%E6%97%%A5"), "%E6%97%%A5");
    assert_eq!(decode(options, "%E6%97"), "%E6%97");
}

#[test]
fn test_recovery_preserves_source_case() {
    let options = DecoderOptions::new();
    assert_eq!(decode(options, "%e2%28"), "%e2(");
    assert_eq!(decode(options, "%fe%Fe"), "%fe%Fe");
}

#[test]
fn test_restart_after_invalid_byte() {
    // A new lead byte after an unfinished sequence starts over
    assert_eq!(
        decode(DecoderOptions::new(), "%E6%E6%97%A5"),
        "%E6\u{65e5}"
    );
}

#[test]
fn test_stray_percent() {
    let options = DecoderOptions::new();
    assert_eq!(decode(options, "100%"), "100%");
    assert_eq!(decode(options, "%x1"), "%x1");
    assert_eq!(decode(options, "%4"), "%4");
    assert_eq!(decode(options, "%\u{e9}9"), "%\u{e9}9");
}

#[test]
fn test_unsafe_literal_characters_escaped() {
    let options = DecoderOptions::new().unsafe_chars("/?");
    assert_eq!(decode(options, "a/b?c"), "a%2Fb%3Fc");
    assert_eq!(decode(options, "%2F%3f"), "%2F%3F");
}

#[test]
fn test_ignore_only_applies_to_escapes() {
    let options = DecoderOptions::new().ignore("/");
    assert_eq!(decode(options, "a/b%2Fc"), "a/b%2Fc");
}

#[test]
fn test_query_plus() {
    let options = DecoderOptions::new().qs(true);
    assert_eq!(decode(options, "+"), " ");
    assert_eq!(decode(options.unsafe_chars("+"), "+"), "+");
    assert_eq!(decode(DecoderOptions::new(), "+"), "+");
}

#[test]
fn test_query_delimiters_stay_escaped() {
    let options = DecoderOptions::new().qs(true);
    assert_eq!(decode(options, "k%3Dv%26x%3By%2Bz"), "k%3Dv%26x%3By%2Bz");
    assert_eq!(decode(options, "k%3dv"), "k%3Dv");
    assert_eq!(decode(options, "a=b&c=d"), "a=b&c=d");
}

#[test]
fn test_identity_fast_path() {
    let decoder = PercentDecoder::new(DecoderOptions::new().qs(true));
    let input = "nothing/to-decode";
    assert!(matches!(decoder.decode(input), Cow::Borrowed(s) if std::ptr::eq(s, input)));
    assert!(matches!(decoder.decode("stray%"), Cow::Borrowed(_)));
    assert!(matches!(decoder.decode("a+b"), Cow::Owned(_)));
}

#[test]
fn test_absent_value() {
    let decoder = PercentDecoder::default();
    assert_eq!(decoder.decode_opt(None), None);
    assert_eq!(decoder.decode_opt(Some("a%20b")).unwrap(), "a b");
}

#[test]
fn test_non_text_input() {
    let decoder = PercentDecoder::default();
    assert_eq!(
        decoder.try_decode(b"%20\xff").unwrap_err(),
        CodecError::InvalidInputType
    );
    assert_eq!(decoder.try_decode(b"%20").unwrap(), " ");
}

#[test]
fn test_decoder_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PercentDecoder>();

    let decoder = PercentDecoder::new(DecoderOptions::new().qs(true));
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(decoder.decode("a+b%C3%A9"), "a b\u{e9}");
                }
            });
        }
    });
}

#[test]
fn test_unsafe_non_ascii_escaped_per_utf8_byte() {
    let options = DecoderOptions::new().unsafe_chars("\u{e9}\u{20ac}");
    let escaped = decode(options, "\u{e9}\u{20ac}");
    assert_eq!(escaped, "%C3%A9%E2%82%AC");
    assert_eq!(decode(DecoderOptions::new(), &escaped), "\u{e9}\u{20ac}");
}
