use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative hazard classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Safe,
    Caution,
    Danger,
}

impl HazardLevel {
    pub const ALL: [HazardLevel; 3] = [Self::Safe, Self::Caution, Self::Danger];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for HazardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order() {
        assert!(HazardLevel::Safe < HazardLevel::Caution);
        assert!(HazardLevel::Caution < HazardLevel::Danger);
        assert_eq!(HazardLevel::ALL.iter().max(), Some(&HazardLevel::Danger));
    }

    #[test]
    fn wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&HazardLevel::Caution).unwrap(),
            "\"caution\""
        );
        let parsed: HazardLevel = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(parsed, HazardLevel::Danger);
        assert_eq!(HazardLevel::Safe.to_string(), "safe");
    }
}
