// Exit code registry (single source of truth).
//
// Stable contract for scripts wrapping the CLI; clap itself exits 2 on
// argument errors, which matches EXIT_USAGE.

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// AI search requested but no API key is configured
pub const EXIT_AI_MISSING_KEY: u8 = 50;
