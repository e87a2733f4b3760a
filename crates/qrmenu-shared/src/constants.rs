//! Application-wide constants

pub const AUTH_COOKIE_NAME: &str = "auth_token";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60 * 60;
pub const SESSION_TOKEN_BYTES: usize = 32;

pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_SLUG_LENGTH: usize = 100;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_THEME: &str = "default";
pub const ROLE_RESTAURANT_OWNER: &str = "RESTAURANT_OWNER";

pub const DEFAULT_QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 300;
