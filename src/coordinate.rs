//! Maven-style coordinate identifying a JitPack artifact

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated group/artifact pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Group id (e.g., "com.github.acme")
    pub group: String,
    /// Artifact id within the group
    pub artifact: String,
}

impl Coordinate {
    /// Create a coordinate, validating both parts
    ///
    /// Rejected coordinates never reach the network: validation runs
    /// before any request URL is constructed.
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Result<Self, FetchError> {
        let group = group.into();
        let artifact = artifact.into();
        let display = format!("{}:{}", group, artifact);

        validate_part(&group, "group", &display)?;
        validate_part(&artifact, "artifact", &display)?;

        Ok(Self { group, artifact })
    }
}

/// Reject parts that are empty or would corrupt the request path
fn validate_part(value: &str, what: &str, coordinate: &str) -> Result<(), FetchError> {
    if value.trim().is_empty() {
        return Err(FetchError::invalid_coordinate(
            coordinate,
            format!("{} must not be empty", what),
        ));
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
    {
        return Err(FetchError::invalid_coordinate(
            coordinate,
            format!("{} contains characters not allowed in a URL path", what),
        ));
    }
    Ok(())
}

impl FromStr for Coordinate {
    type Err = FetchError;

    /// Parse the combined "group:artifact" form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(FetchError::invalid_coordinate(
                s,
                "expected format 'group:artifact'",
            ));
        }
        Coordinate::new(parts[0], parts[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let coord = Coordinate::new("com.github.acme", "widget").unwrap();
        assert_eq!(coord.group, "com.github.acme");
        assert_eq!(coord.artifact, "widget");
    }

    #[test]
    fn test_new_empty_group() {
        let result = Coordinate::new("", "widget");
        assert!(matches!(
            result,
            Err(FetchError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_new_blank_artifact() {
        let result = Coordinate::new("acme", "   ");
        assert!(matches!(
            result,
            Err(FetchError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_path_separators() {
        assert!(Coordinate::new("acme/evil", "widget").is_err());
        assert!(Coordinate::new("acme", "widget/latest").is_err());
        assert!(Coordinate::new("acme", "wid get").is_err());
        assert!(Coordinate::new("acme", "widget?x=1").is_err());
        assert!(Coordinate::new("acme", "widget#frag").is_err());
    }

    #[test]
    fn test_from_str_combined() {
        let coord: Coordinate = "com.github.acme:widget".parse().unwrap();
        assert_eq!(coord.group, "com.github.acme");
        assert_eq!(coord.artifact, "widget");
    }

    #[test]
    fn test_from_str_missing_artifact() {
        let result = "com.github.acme".parse::<Coordinate>();
        assert!(matches!(
            result,
            Err(FetchError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_from_str_too_many_parts() {
        let result = "a:b:c".parse::<Coordinate>();
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::new("acme", "widget").unwrap();
        assert_eq!(coord.to_string(), "acme:widget");
    }

    #[test]
    fn test_serialize() {
        let coord = Coordinate::new("acme", "widget").unwrap();
        let json = serde_json::to_string(&coord).unwrap();
        assert!(json.contains("\"group\":\"acme\""));
        assert!(json.contains("\"artifact\":\"widget\""));
    }
}
