use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Which element wraps an accordion toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    H1,
    H2,
    #[default]
    H3,
    H4,
    H5,
    H6,
    DefinitionList,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 7] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
        HeadingLevel::DefinitionList,
    ];

    /// Tag wrapping the toggle button.
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
            HeadingLevel::DefinitionList => "dt",
        }
    }

    /// Tag of the accordion container.
    pub fn container_tag(&self) -> &'static str {
        match self {
            HeadingLevel::DefinitionList => "dl",
            _ => "div",
        }
    }

    /// Tag of an expanded-content panel inside the container.
    pub fn content_tag(&self) -> &'static str {
        match self {
            HeadingLevel::DefinitionList => "dd",
            _ => "div",
        }
    }
}

impl FromStr for HeadingLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "h1" => Ok(HeadingLevel::H1),
            "h2" => Ok(HeadingLevel::H2),
            "h3" => Ok(HeadingLevel::H3),
            "h4" => Ok(HeadingLevel::H4),
            "h5" => Ok(HeadingLevel::H5),
            "h6" => Ok(HeadingLevel::H6),
            "dl" | "definition_list" => Ok(HeadingLevel::DefinitionList),
            _ => Err(ParseError::HeadingLevel(s.to_string())),
        }
    }
}
