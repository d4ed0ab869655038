//! Error codes and exit status for autodiagctl

use autodiag_shared::DiagError;
use std::io;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the config file is missing or malformed
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Exit code when stdin closes in the middle of the interview
pub const EXIT_INPUT_CLOSED: i32 = 66;

/// Map a failed run to its exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(diag) = err.downcast_ref::<DiagError>() {
        if diag.is_config_error() {
            return EXIT_CONFIG_ERROR;
        }
    }
    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        if io_err.kind() == io::ErrorKind::UnexpectedEof {
            return EXIT_INPUT_CLOSED;
        }
    }
    EXIT_GENERAL_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_config_error_code() {
        let err: anyhow::Error = DiagError::ConfigNotFound(PathBuf::from("/nope.toml")).into();
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_eof_code_through_context() {
        let result: Result<(), io::Error> = Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        let err = result.context("interview aborted").unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INPUT_CLOSED);
    }

    #[test]
    fn test_other_errors_general() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&err), EXIT_GENERAL_ERROR);
    }
}
