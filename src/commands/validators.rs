//! Command-line usage validation
//!
//! Argument lists are validated by hand rather than by clap because the
//! first token may be an arbitrary shell command. Violations are reported as
//! [`UsageError`] values that the entry point turns into a message and exit
//! code 1.

/// A problem with the way alfred was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No command token was given
    MissingCommand,
    /// A command that needs an extra argument was given without it
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    /// No repository selector followed the command
    MissingRepository,
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::MissingCommand => write!(f, "I need a command to run"),
            UsageError::MissingArgument { command, argument } => {
                write!(f, "I need a {argument} to execute the '{command}' command")
            }
            UsageError::MissingRepository => {
                write!(f, "I need at least one repository to work with")
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Token at `index`, treating an empty string the same as an absent one
pub fn token_at(tokens: &[String], index: usize) -> Option<&str> {
    tokens
        .get(index)
        .map(String::as_str)
        .filter(|token| !token.is_empty())
}

/// The argument following `command`, or a usage error naming what is missing
pub fn required_argument<'a>(
    tokens: &'a [String],
    command: &str,
    argument: &'static str,
) -> Result<&'a str, UsageError> {
    token_at(tokens, 1).ok_or_else(|| UsageError::MissingArgument {
        command: command.to_string(),
        argument,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_token_at_treats_empty_as_missing() {
        let args = tokens(&["pull", ""]);
        assert_eq!(token_at(&args, 0), Some("pull"));
        assert_eq!(token_at(&args, 1), None);
        assert_eq!(token_at(&args, 2), None);
    }

    #[test]
    fn test_required_argument_present() {
        let args = tokens(&["checkout", "main"]);
        assert_eq!(
            required_argument(&args, "checkout", "branch name"),
            Ok("main")
        );
    }

    #[test]
    fn test_required_argument_missing_names_the_piece() {
        let args = tokens(&["commit"]);
        let error = required_argument(&args, "commit", "commit message").unwrap_err();

        assert_eq!(
            error.to_string(),
            "I need a commit message to execute the 'commit' command"
        );
    }

    #[test]
    fn test_usage_error_messages() {
        assert_eq!(
            UsageError::MissingCommand.to_string(),
            "I need a command to run"
        );
        assert_eq!(
            UsageError::MissingRepository.to_string(),
            "I need at least one repository to work with"
        );
    }
}
