//! HTTP vocabulary rules used to categorize concept values

use phf::phf_set;

use crate::error::{Error, Result};

/// Request headers a user agent controls, besides the `Proxy-` and `Sec-`
/// prefixes. Matched case-sensitively against the capitalized header name.
static FORBIDDEN_REQUEST_HEADERS: phf::Set<&'static str> = phf_set! {
    "Accept-Charset",
    "Accept-Encoding",
    "Access-Control-Request-Headers",
    "Access-Control-Request-Method",
    "Connection",
    "Content-Length",
    "Cookie",
    "DNT",
    "Date",
    "Expect",
    "Feature-Policy",
    "Host",
    "Keep-Alive",
    "Origin",
    "Referer",
    "TE",
    "Trailer",
    "Transfer-Encoding",
    "Upgrade",
    "Via",
};

/// Response headers scripts may not read.
pub const FORBIDDEN_RESPONSE_HEADERS: [&str; 2] = ["Set-Cookie", "Set-Cookie2"];

pub fn is_forbidden_request_header(header: &str) -> bool {
    header.starts_with("Proxy")
        || header.starts_with("Sec")
        || FORBIDDEN_REQUEST_HEADERS.contains(header)
}

pub fn is_forbidden_response_header(header: &str) -> bool {
    FORBIDDEN_RESPONSE_HEADERS.contains(&header)
}

/// Status code class, named after the first digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Success,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    /// Classify a three-digit status code such as `"404"`.
    pub fn of(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidStatusCode(code.to_string()));
        }

        match bytes[0] {
            b'1' => Ok(StatusClass::Informational),
            b'2' => Ok(StatusClass::Success),
            b'3' => Ok(StatusClass::Redirection),
            b'4' => Ok(StatusClass::ClientError),
            b'5' => Ok(StatusClass::ServerError),
            _ => Err(Error::InvalidStatusCode(code.to_string())),
        }
    }

    /// Position in [`StatusClass::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the generated union type for this class
    pub fn type_name(self) -> &'static str {
        match self {
            StatusClass::Informational => "HttpInfoStatusCode",
            StatusClass::Success => "HttpSuccessStatusCode",
            StatusClass::Redirection => "HttpRedirectStatusCode",
            StatusClass::ClientError => "HttpClientErrorStatusCode",
            StatusClass::ServerError => "HttpServerErrorStatusCode",
        }
    }
}
