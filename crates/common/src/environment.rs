use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing::debug;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] if a value is successfully retrieved from either environment variable;
/// returns [Result::Err()] otherwise. Surrounding whitespace is trimmed from the value.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).with_context(|| {
            format!(
                "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
                name, name, e
            )
        })?,
    };
    Ok(value.trim().to_string())
}

/// Like [get_env_var()], but falls back to `default` when neither variable is set.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    match get_env_var(name) {
        Ok(v) => v,
        Err(_) => {
            debug!("No value found for {}, using the default value {}.", name, default);
            String::from(default)
        }
    }
}

/// Reads a boolean switch. `true`, `yes`, `on` and `1` (any case) enable it; anything
/// else, including an unset variable, leaves it disabled.
pub fn get_env_flag(name: &str) -> bool {
    match get_env_var(name) {
        Ok(v) => matches!(
            v.to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        ),
        Err(_) => false,
    }
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    Ok(fs::read_to_string(path)?)
}

pub mod variables {
    pub use crate::environment_variables::*;
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_env_var_trims_value() {
        // Arrange
        env::set_var("CATALOG_TEST_TRIMMED", "  8081 \n");

        // Act
        let actual = get_env_var("CATALOG_TEST_TRIMMED");

        // Assert
        assert_eq!("8081", actual.unwrap());
    }

    #[test]
    fn get_env_var_reads_value_from_file() {
        // Arrange
        let path = env::temp_dir().join("catalog_test_file_value.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "postgres://catalog@localhost/catalog").unwrap();
        env::set_var("CATALOG_TEST_FROM_FILE_FILE", &path);

        // Act
        let actual = get_env_var("CATALOG_TEST_FROM_FILE");

        // Assert
        assert_eq!("postgres://catalog@localhost/catalog", actual.unwrap());
    }

    #[test]
    fn get_env_var_returns_error_given_no_value() {
        // Act
        let actual = get_env_var("CATALOG_TEST_DEFINITELY_UNSET");

        // Assert
        assert!(actual.is_err());
    }

    #[test]
    fn get_env_var_or_returns_default_given_no_value() {
        // Act
        let actual = get_env_var_or("CATALOG_TEST_UNSET_WITH_DEFAULT", "8080");

        // Assert
        assert_eq!("8080", actual);
    }

    #[test]
    fn get_env_flag_recognizes_truthy_values() {
        // Arrange
        env::set_var("CATALOG_TEST_FLAG_TRUE", "TRUE");
        env::set_var("CATALOG_TEST_FLAG_YES", "yes");
        env::set_var("CATALOG_TEST_FLAG_ON", "On");
        env::set_var("CATALOG_TEST_FLAG_ONE", "1");
        env::set_var("CATALOG_TEST_FLAG_OFF", "nope");
        env::set_var("CATALOG_TEST_FLAG_ZERO", "0");

        // Act / Assert
        assert!(get_env_flag("CATALOG_TEST_FLAG_TRUE"));
        assert!(get_env_flag("CATALOG_TEST_FLAG_YES"));
        assert!(get_env_flag("CATALOG_TEST_FLAG_ON"));
        assert!(get_env_flag("CATALOG_TEST_FLAG_ONE"));
        assert!(!get_env_flag("CATALOG_TEST_FLAG_OFF"));
        assert!(!get_env_flag("CATALOG_TEST_FLAG_ZERO"));
        assert!(!get_env_flag("CATALOG_TEST_FLAG_UNSET"));
    }
}
