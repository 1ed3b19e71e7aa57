//! Policy configuration: which flag each max target level maps to, and from
//! which level public alternatives become mandatory.

use indexmap::IndexMap;

use crate::hir::DEFAULT_MIN_LEVEL_REQUIRING_ALTERNATIVES;

/// Flag for members accessible at every target level.
pub const FLAG_UNSUPPORTED: &str = "unsupported";

/// Explicit policy passed to the checker; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Members restricted at or above this level must document alternatives.
    pub min_level_requiring_alternatives: u32,
    /// Flag for members without a max target level.
    pub unrestricted_flag: String,
    /// Max target level → flag, in declaration order.
    pub level_flags: IndexMap<u32, String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let level_flags = [
            (0, "blocked"),
            (26, "max-target-o"),
            (28, "max-target-p"),
            (29, "max-target-q"),
            (30, "max-target-r"),
            (31, "max-target-s"),
        ]
        .into_iter()
        .map(|(level, flag)| (level, flag.to_string()))
        .collect();

        Self {
            min_level_requiring_alternatives: DEFAULT_MIN_LEVEL_REQUIRING_ALTERNATIVES,
            unrestricted_flag: FLAG_UNSUPPORTED.to_string(),
            level_flags,
        }
    }
}

impl PolicyConfig {
    /// Flag for a max target level, or `None` if the level is not allowed.
    pub fn flag_for(&self, max_target_level: Option<u32>) -> Option<&str> {
        match max_target_level {
            None => Some(&self.unrestricted_flag),
            Some(level) => self.level_flags.get(&level).map(String::as_str),
        }
    }

    /// Levels accepted in annotations, in declaration order.
    pub fn allowed_levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.level_flags.keys().copied()
    }

    /// Parse a policy from JSON; missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
