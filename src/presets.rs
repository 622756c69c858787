//! Codec options for the individual URL components.
//!
//! `*_QUOTER` options escape raw values (a literal `%` becomes `%25`);
//! `*_REQUOTER` options normalize values that may already contain escapes.

use crate::decoder::DecoderOptions;
use crate::encoder::EncoderOptions;

/// Generic component, literal `%`
pub const QUOTER: EncoderOptions<'static> = EncoderOptions::new().requote(false);
/// Generic component, existing escapes
pub const REQUOTER: EncoderOptions<'static> = EncoderOptions::new();

/// Path: `@` and `:` stay raw, escaped `/` and `+` are never unescaped
pub const PATH_QUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("@:")
    .protected("/+")
    .requote(false);
pub const PATH_REQUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("@:")
    .protected("/+");

/// Whole query string: pair separators written by the caller survive
pub const QUERY_QUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("?/:@")
    .protected("=+&;")
    .qs(true)
    .requote(false);
pub const QUERY_REQUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("?/:@")
    .protected("=+&;")
    .qs(true);

/// Single query key or value: separators inside it are escaped
pub const QUERY_PART_QUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("?/:@")
    .qs(true)
    .requote(false);

pub const FRAGMENT_QUOTER: EncoderOptions<'static> = EncoderOptions::new()
    .safe("?/:@")
    .requote(false);
pub const FRAGMENT_REQUOTER: EncoderOptions<'static> = EncoderOptions::new().safe("?/:@");

/// Generic and path components: a decoded `+` stays escaped
pub const UNQUOTER: DecoderOptions<'static> = DecoderOptions::new().unsafe_chars("+");
/// Path whose segments must not change: `/` and `%` stay escaped too
pub const PATH_SAFE_UNQUOTER: DecoderOptions<'static> =
    DecoderOptions::new().ignore("/%").unsafe_chars("+");
pub const QS_UNQUOTER: DecoderOptions<'static> = DecoderOptions::new().qs(true);
