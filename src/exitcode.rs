//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line could not be parsed or a required value is missing
pub const ARGS: i32 = 1;

/// Data format error (malformed JSON from the API)
pub const DATAERR: i32 = 65;

/// Service unavailable (request could not be completed)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;
