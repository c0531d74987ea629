//! A walk configuration names an index space and how to traverse it.

use anyhow::{Context, Result, bail};
use ndspace_cursor::Extents;
use serde::Deserialize;

use crate::{Walk, WalkDirection};

#[derive(Debug)]
pub struct WalkConfiguration {
    pub extents: Extents,
    pub walk: Walk,
}

impl WalkConfiguration {
    /// Load a configuration from TOML. `name` identifies the source in error messages.
    pub fn from_toml(toml: &str, name: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(toml)
            .with_context(|| format!("Failed to parse TOML configuration {name}"))?;

        let extents = config
            .extents
            .into_extents()
            .with_context(|| format!("Invalid extents in {name}"))?;

        Ok(Self {
            extents,
            walk: config.walk.into(),
        })
    }
}

/// Intermediate representation for deserializing TOML configuration files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    extents: ExtentsSection,
    #[serde(default)]
    walk: WalkSection,
}

/// Either `sizes`, or both `min` and `max`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExtentsSection {
    sizes: Option<Vec<i64>>,
    min: Option<Vec<i64>>,
    max: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct WalkSection {
    #[serde(default)]
    direction: WalkDirection,
    start: Option<i64>,
    limit: Option<u64>,
}

impl ExtentsSection {
    fn into_extents(self) -> Result<Extents> {
        let extents = match (self.sizes, self.min, self.max) {
            (Some(sizes), None, None) => Extents::new_from_sizes(&sizes)?,
            (None, Some(min), Some(max)) => Extents::new_from_bounds(&min, &max)?,
            (Some(_), _, _) => bail!("`sizes` can not be combined with `min` or `max`"),
            (None, _, _) => bail!("Expected `sizes`, or both `min` and `max`"),
        };
        Ok(extents)
    }
}

impl From<WalkSection> for Walk {
    fn from(section: WalkSection) -> Self {
        Self {
            direction: section.direction,
            start: section.start,
            limit: section.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use ndspace_cursor::SpaceError;

    use super::*;

    #[test]
    fn parse_sizes_with_default_walk() {
        let toml = r#"
[extents]
sizes = [2, 3, 4]
        "#;

        let config = WalkConfiguration::from_toml(toml, "test").unwrap();
        assert_eq!(config.extents, Extents::new_from_sizes(&[2, 3, 4]).unwrap());
        assert_eq!(config.walk, Walk::default());
    }

    #[test]
    fn parse_bounds_and_walk() {
        let toml = r#"
[extents]
min = [4, 3]
max = [8, 6]

[walk]
direction = "backward"
start = 7
limit = 3
        "#;

        let config = WalkConfiguration::from_toml(toml, "test").unwrap();
        assert_eq!(config.extents.num_elements(), 20);
        assert_eq!(
            config.walk,
            Walk {
                direction: WalkDirection::Backward,
                start: Some(7),
                limit: Some(3),
            }
        );
    }

    #[test]
    fn sizes_and_bounds_are_exclusive() {
        let toml = r#"
[extents]
sizes = [2]
min = [0]
max = [1]
        "#;
        assert!(WalkConfiguration::from_toml(toml, "test").is_err());

        let toml = r#"
[extents]
min = [0]
        "#;
        assert!(WalkConfiguration::from_toml(toml, "test").is_err());
    }

    #[test]
    fn invalid_extents_keep_their_cause() {
        let toml = r#"
[extents]
min = [3]
max = [1]
        "#;
        let error = WalkConfiguration::from_toml(toml, "test").unwrap_err();
        assert_eq!(error.to_string(), "Invalid extents in test");
        assert_eq!(
            error.downcast_ref::<SpaceError>(),
            Some(&SpaceError::InvalidBounds {
                dimension: 0,
                min: 3,
                max: 1
            })
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"
[extents]
sizes = [2]

[walk]
speed = 3
        "#;
        assert!(WalkConfiguration::from_toml(toml, "test").is_err());
    }
}
