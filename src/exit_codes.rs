//! Exit code constants for the tbox CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing template/alias, cancelled prompt)
//! - 2: Configuration failure (config file failed schema validation)
//! - 3: Editor failure (could not launch or editor exited non-zero)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing template or alias, cancelled prompt.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: config file failed schema validation.
pub const CONFIG_FAILURE: i32 = 2;

/// Editor failure: editor could not be launched or exited non-zero.
pub const EDITOR_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, EDITOR_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
