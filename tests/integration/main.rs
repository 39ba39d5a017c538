//! Integration tests for typewriter
//!
//! Single test binary; shared helpers live in `helpers`.

mod helpers;

mod cli_test;
mod script_test;
mod session_test;
