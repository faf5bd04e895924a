pub mod add;
pub mod preview;

use anyhow::{Result, anyhow};

use crate::color::Color;

/// Why a project name is unacceptable, or `None` when it is fine.
/// Valid names follow package-name rules: lowercase letters, digits,
/// hyphens and underscores, starting with a letter.
pub fn project_name_error(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Project name cannot be empty".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Some("Only lowercase letters, digits, '-' and '_' are allowed".to_string());
    }
    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
    {
        return Some("Project name must start with a lowercase letter".to_string());
    }
    None
}

/// Parses a seed color, naming the offending option on failure. Everything
/// downstream of this assumes a valid color.
pub fn parse_seed(which: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| {
        anyhow!("{which} color '{value}' is not a 3- or 6-digit hex color (expected e.g. #3f51b5)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_rules() {
        assert!(project_name_error("demo").is_none());
        assert!(project_name_error("my-app_2").is_none());
        assert!(project_name_error("").is_some());
        assert!(project_name_error("My-App").is_some());
        assert!(project_name_error("2fast").is_some());
        assert!(project_name_error("has space").is_some());
    }

    #[test]
    fn test_parse_seed_names_the_failing_color() {
        let error = parse_seed("primary", "red").unwrap_err().to_string();
        assert!(error.contains("primary"));
        assert!(error.contains("'red'"));
        assert!(parse_seed("accent", "#ff4081").is_ok());
    }
}
