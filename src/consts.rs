pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_PORT: u16 = 3001;

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub const JSON_PAYLOAD_LIMIT: usize = 50 * 1024 * 1024;
pub const UPLOAD_SIZE_LIMIT: usize = 10 * 1024 * 1024;

pub const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

pub const ADVISORY_MESSAGE: &str =
    "Note: This is a demo response. In production, this would return the actual transformed image.";
