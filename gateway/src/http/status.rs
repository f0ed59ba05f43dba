//! HTTP status code reason phrases
//!
//! Covers the RFC 2616 / RFC 7231 registry plus the 520-530 block of
//! CDN-specific extension codes. `-1` is the explicit "no response received"
//! marker used by callers that log a placeholder status.

/// Reason phrase for a numeric status code.
///
/// Unknown codes degrade to their decimal string form; this never fails.
pub fn reason_phrase(code: i32) -> String {
    let phrase = match code {
        -1 => "Invalid Response Code",
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        306 => "(Unused)",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        // Cloudflare status codes
        520 => "(CDN) Web Server Returns An Unknown Error",
        521 => "(CDN) Web Server Is Down",
        522 => "(CDN) Connection Timed Out",
        523 => "(CDN) Origin Is Unreachable",
        524 => "(CDN) A Timeout Occurred",
        525 => "(CDN) SSL Handshake Failed",
        526 => "(CDN) Invalid SSL Certificate",
        527 => "(CDN) Railgun Listener To Origin Error",
        530 => "(CDN) 1XXX Internal Error",
        other => return other.to_string(),
    };
    phrase.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(200, "OK")]
    #[test_case(204, "No Content")]
    #[test_case(404, "Not Found")]
    #[test_case(429, "Too Many Requests")]
    #[test_case(500, "Internal Server Error")]
    #[test_case(523, "(CDN) Origin Is Unreachable")]
    #[test_case(530, "(CDN) 1XXX Internal Error")]
    fn test_known_codes_map_to_documented_phrases(code: i32, expected: &str) {
        assert_eq!(reason_phrase(code), expected);
    }

    #[test]
    fn test_minus_one_is_the_no_response_marker() {
        assert_eq!(reason_phrase(-1), "Invalid Response Code");
    }

    #[test]
    fn test_unknown_codes_degrade_to_decimal_string() {
        assert_eq!(reason_phrase(696969), "696969");
        assert_eq!(reason_phrase(0), "0");
        assert_eq!(reason_phrase(-42), "-42");
    }
}
