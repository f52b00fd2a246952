use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in sigv4 signing.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

/// The only signing algorithm this crate implements.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Payload hash token for query signing, where the body cannot be known when
/// the URL is produced.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Header names bound into the signature in header-signing mode.
///
/// Must stay lexicographically sorted: the canonical request lists signed
/// headers in sorted order.
pub const HEADER_SIGNED_HEADERS: [&str; 3] = ["host", X_AMZ_CONTENT_SHA_256, X_AMZ_DATE];

/// Header names bound into the signature in query-signing (presigned URL)
/// mode. A presigned URL must be usable without any extra headers, so only
/// `host` is covered.
pub const QUERY_SIGNED_HEADERS: [&str; 1] = ["host"];

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
