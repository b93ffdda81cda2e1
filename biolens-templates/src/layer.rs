//! Architectural layers of the generated solution.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Layer of the BioLens solution a template belongs to.
///
/// Only used to group progress output; the declaration order is the
/// generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Entities, value objects, events and repository contracts
    Domain,
    /// AI agents and their DI wiring
    Agents,
    /// Commands and handlers
    Application,
    /// AI service client and persistence
    Infrastructure,
    /// Runnable usage example
    Examples,
    /// Unit test projects
    Tests,
}

impl Layer {
    /// All layers in generation order.
    pub const ALL: [Layer; 6] = [
        Layer::Domain,
        Layer::Agents,
        Layer::Application,
        Layer::Infrastructure,
        Layer::Examples,
        Layer::Tests,
    ];

    /// Returns the layer identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Agents => "agents",
            Layer::Application => "application",
            Layer::Infrastructure => "infrastructure",
            Layer::Examples => "examples",
            Layer::Tests => "tests",
        }
    }

    /// Display label used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Domain => "Domain",
            Layer::Agents => "Agents",
            Layer::Application => "Application",
            Layer::Infrastructure => "Infrastructure",
            Layer::Examples => "Examples",
            Layer::Tests => "Tests",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Layer::ALL
            .into_iter()
            .find(|layer| layer.as_str() == lowered)
            .ok_or_else(|| {
                let expected: Vec<_> = Layer::ALL.iter().map(|l| l.as_str()).collect();
                format!(
                    "unknown layer '{}', expected one of: {}",
                    s,
                    expected.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Layer::from_str("domain").unwrap(), Layer::Domain);
        assert_eq!(Layer::from_str("Agents").unwrap(), Layer::Agents);
        assert_eq!(
            Layer::from_str("INFRASTRUCTURE").unwrap(),
            Layer::Infrastructure
        );
        assert_eq!(Layer::from_str("tests").unwrap(), Layer::Tests);

        let err = Layer::from_str("web").unwrap_err();
        assert!(err.contains("unknown layer 'web'"));
        assert!(err.contains("application"));
    }

    #[test]
    fn test_display_round_trips() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_str(&layer.to_string()).unwrap(), layer);
        }
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = Layer::ALL;
        sorted.sort();
        assert_eq!(sorted, Layer::ALL);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Layer::Application).unwrap();
        assert_eq!(json, r#""application""#);
    }
}
