//! CLI commands accepted by the command gate.

pub const HELLO_COMMAND: &str = "hello";
pub const HELLO_RESPONSE: &str = "Hello World";
pub const UNRECOGNIZED_RESPONSE: &str = "Command not recognized";

/// The fixed reply for a command. Matching is exact and case-sensitive.
pub fn respond_to(command: &str) -> &'static str {
    match command {
        HELLO_COMMAND => HELLO_RESPONSE,
        _ => UNRECOGNIZED_RESPONSE,
    }
}
