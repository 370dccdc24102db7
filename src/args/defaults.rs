pub const DEFAULT_SUCCESS_CODE: u16 = 200;
pub const DEFAULT_ERROR_CODE: u16 = 429;

pub const DEFAULT_USER_AGENT: &str = concat!("limitprobe/", env!("CARGO_PKG_VERSION"));
