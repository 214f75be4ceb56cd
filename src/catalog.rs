//! Predefined error templates.
//!
//! # The template pattern
//!
//! Each entry here is a package-level base error: created once, lazily, and
//! then reused as a derivation base across the whole application. Deriving
//! (`with_message`, `with_code`, `with_detail`, ...) copies the template and
//! keeps its identity, so a context-specific child still `is()` its template
//! no matter how it was reshaped or how deeply it was later wrapped:
//!
//! ```rust
//! use facade_errors::catalog::ERR_USER_NOT_FOUND;
//!
//! let err = ERR_USER_NOT_FOUND
//!     .with_message("user 42 not found")
//!     .with_detail("user_id: 42");
//!
//! assert!(err.matches(&ERR_USER_NOT_FOUND));
//! ```
//!
//! Templates are plain statics behind `LazyLock`; identity allocation happens
//! on first access and templates may be derived from concurrently without
//! locking.
//!
//! # Governance
//!
//! Codes follow HTTP status semantics and are grouped by domain below. Add
//! new templates to the matching group; the `tests` module at the bottom
//! keeps the table free of identity collisions and stray codes.

/// Define a group of lazily-constructed error templates.
///
/// Each entry becomes a `pub static` [`ErrorValue`](crate::ErrorValue) behind
/// a [`LazyLock`](std::sync::LazyLock), with its identity allocated on first
/// access.
///
/// # Example
///
/// ```rust
/// use facade_errors::define_error_templates;
///
/// define_error_templates! {
///     ERR_TEAPOT = (418, "short and stout"),
/// }
///
/// assert_eq!(ERR_TEAPOT.code(), 418);
/// ```
#[macro_export]
macro_rules! define_error_templates {
    ($($name:ident = ($code:literal, $message:literal)),+ $(,)?) => {
        $(
            #[doc = concat!("Template: `", $message, "` (code ", $code, ").")]
            pub static $name: ::std::sync::LazyLock<$crate::ErrorValue> =
                ::std::sync::LazyLock::new(|| $crate::ErrorValue::new($code, $message));
        )+
    };
}

// -----------------------------------------------------------------------------
// Validation (400 Bad Request)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_VALIDATION_REQUIRED = (400, "field is required"),
    ERR_VALIDATION_INVALID  = (400, "field value is invalid"),
    ERR_VALIDATION_FORMAT   = (400, "field format is invalid"),
    ERR_VALIDATION_LENGTH   = (400, "field length is invalid"),
    ERR_VALIDATION_RANGE    = (400, "field value out of range"),
    ERR_VALIDATION_EMAIL    = (400, "invalid email format"),
    ERR_VALIDATION_PHONE    = (400, "invalid phone format"),
    ERR_VALIDATION_URL      = (400, "invalid url format"),
    ERR_VALIDATION_PASSWORD = (400, "password does not meet requirements"),
    ERR_VALIDATION_CONFIRM  = (400, "confirmation does not match"),
}

// -----------------------------------------------------------------------------
// Authentication & authorization (401 / 403)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_AUTH_REQUIRED      = (401, "authentication required"),
    ERR_AUTH_INVALID       = (401, "invalid credentials"),
    ERR_AUTH_EXPIRED       = (401, "authentication expired"),
    ERR_AUTH_TOKEN_INVALID = (401, "invalid token"),
    ERR_AUTH_TOKEN_EXPIRED = (401, "token expired"),
    ERR_AUTH_PERMISSIONS   = (403, "insufficient permissions"),
    ERR_AUTH_BLOCKED       = (403, "account blocked"),
    ERR_AUTH_SUSPENDED     = (403, "account suspended"),
}

// -----------------------------------------------------------------------------
// Not found (404 Not Found)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_NOT_FOUND          = (404, "resource not found"),
    ERR_USER_NOT_FOUND     = (404, "user not found"),
    ERR_FILE_NOT_FOUND     = (404, "file not found"),
    ERR_PAGE_NOT_FOUND     = (404, "page not found"),
    ERR_RECORD_NOT_FOUND   = (404, "record not found"),
    ERR_ENDPOINT_NOT_FOUND = (404, "endpoint not found"),
}

// -----------------------------------------------------------------------------
// Conflicts (409 Conflict)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_CONFLICT         = (409, "resource conflict"),
    ERR_ALREADY_EXISTS   = (409, "resource already exists"),
    ERR_USER_EXISTS      = (409, "user already exists"),
    ERR_EMAIL_TAKEN      = (409, "email already taken"),
    ERR_DUPLICATE_ENTRY  = (409, "duplicate entry"),
    ERR_VERSION_CONFLICT = (409, "version conflict"),
}

// -----------------------------------------------------------------------------
// Business logic (422 Unprocessable Entity)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_UNPROCESSABLE_ENTITY  = (422, "unprocessable entity"),
    ERR_BUSINESS_RULE         = (422, "business rule violation"),
    ERR_INSUFFICIENT_FUNDS    = (422, "insufficient funds"),
    ERR_OPERATION_NOT_ALLOWED = (422, "operation not allowed"),
    ERR_LIMIT_EXCEEDED        = (422, "limit exceeded"),
    ERR_EXPIRED_RESOURCE      = (422, "resource expired"),
    ERR_WORKFLOW_ERROR        = (422, "workflow error"),
}

// -----------------------------------------------------------------------------
// Rate limiting (429 Too Many Requests)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_RATE_LIMITED      = (429, "rate limit exceeded"),
    ERR_TOO_MANY_REQUESTS = (429, "too many requests"),
    ERR_QUOTA_EXCEEDED    = (429, "quota exceeded"),
    ERR_API_LIMIT_REACHED = (429, "api limit reached"),
}

// -----------------------------------------------------------------------------
// File operations
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_FILE_TOO_LARGE      = (413, "file too large"),
    ERR_FILE_FORMAT_INVALID = (415, "invalid file format"),
    ERR_FILE_UPLOAD_FAILED  = (400, "file upload failed"),
    ERR_FILE_PROCESSING     = (422, "file processing error"),
    ERR_STORAGE_FULL        = (507, "storage full"),
}

// -----------------------------------------------------------------------------
// Server (5xx)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_INTERNAL_ERROR      = (500, "internal server error"),
    ERR_DATABASE_ERROR      = (500, "database error"),
    ERR_TIMEOUT_ERROR       = (504, "operation timeout"),
    ERR_SERVICE_UNAVAILABLE = (503, "service unavailable"),
    ERR_MAINTENANCE_MODE    = (503, "service under maintenance"),
    ERR_EXTERNAL_SERVICE    = (502, "external service error"),
}

// -----------------------------------------------------------------------------
// Network
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_NETWORK_ERROR      = (500, "network error"),
    ERR_CONNECTION_REFUSED = (503, "connection refused"),
    ERR_DNS_ERROR          = (502, "dns resolution error"),
    ERR_SSL_ERROR          = (502, "ssl/tls error"),
    ERR_PROXY_ERROR        = (502, "proxy error"),
}

// -----------------------------------------------------------------------------
// Parsing (400 Bad Request)
// -----------------------------------------------------------------------------
define_error_templates! {
    ERR_PARSE_ERROR        = (400, "parsing error"),
    ERR_JSON_INVALID       = (400, "invalid json"),
    ERR_XML_INVALID        = (400, "invalid xml"),
    ERR_FORMAT_UNSUPPORTED = (415, "unsupported format"),
    ERR_ENCODING_ERROR     = (400, "encoding error"),
}
