//! Resolution of the repository selector into friendly names

use crate::commands::validators::{UsageError, token_at};
use crate::config::Config;
use crate::constants;

/// Names of the repositories the remaining tokens select
///
/// `all` as the first token selects every registered repository. Anything
/// else is taken verbatim; names are not checked against the configuration
/// here, an unknown name fails when its command is run.
pub fn select_repositories(tokens: &[String], config: &Config) -> Result<Vec<String>, UsageError> {
    let first = token_at(tokens, 0).ok_or(UsageError::MissingRepository)?;

    if first == constants::selector::ALL {
        return Ok(config.repository_names());
    }

    Ok(tokens.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::new();
        config.repos.insert("a".to_string(), "/p/a".to_string());
        config.repos.insert("b".to_string(), "/p/b".to_string());
        config
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_select_all() {
        assert_eq!(
            select_repositories(&tokens(&["all"]), &config()),
            Ok(tokens(&["a", "b"]))
        );
    }

    #[test]
    fn test_select_all_on_empty_config() {
        assert_eq!(
            select_repositories(&tokens(&["all"]), &Config::new()),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_select_explicit_names_verbatim() {
        assert_eq!(
            select_repositories(&tokens(&["a", "c"]), &config()),
            Ok(tokens(&["a", "c"]))
        );
    }

    #[test]
    fn test_select_all_only_as_first_token() {
        assert_eq!(
            select_repositories(&tokens(&["a", "all"]), &config()),
            Ok(tokens(&["a", "all"]))
        );
    }

    #[test]
    fn test_select_nothing_is_usage_error() {
        assert_eq!(
            select_repositories(&[], &config()),
            Err(UsageError::MissingRepository)
        );
        assert_eq!(
            select_repositories(&tokens(&[""]), &config()),
            Err(UsageError::MissingRepository)
        );
    }
}
