//! Difficulty taxonomy and the tier table that drives list foldering.
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::error::ReportError;

/// Demon sub-tier, only meaningful for demon levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DemonDifficulty {
    Easy,
    Medium,
    Hard,
    Insane,
    Extreme,
}

impl DemonDifficulty {
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Insane,
        Self::Extreme,
    ];
}

/// Star-rating family of a level as exported by the game servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyName {
    Auto,
    Easy,
    Normal,
    Hard,
    Harder,
    Insane,
    Demon,
}

/// Difficulty of a rated level. Demons always carry their sub-tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Auto,
    Easy,
    Normal,
    Hard,
    Harder,
    Insane,
    Demon(DemonDifficulty),
}

impl Difficulty {
    /// Combine the exported difficulty name with the optional demon sub-tier.
    ///
    /// # Errors
    ///
    /// Returns a description of the mismatch when a demon has no sub-tier or a
    /// non-demon carries one.
    pub fn from_parts(
        name: DifficultyName,
        demon: Option<DemonDifficulty>,
    ) -> Result<Self, String> {
        let difficulty = match (name, demon) {
            (DifficultyName::Demon, Some(sub)) => Self::Demon(sub),
            (DifficultyName::Demon, None) => {
                return Err("demon level is missing its demon difficulty".to_string());
            }
            (other, Some(sub)) => {
                return Err(format!(
                    "{other:?} level cannot carry demon difficulty {sub:?}"
                ));
            }
            (DifficultyName::Auto, None) => Self::Auto,
            (DifficultyName::Easy, None) => Self::Easy,
            (DifficultyName::Normal, None) => Self::Normal,
            (DifficultyName::Hard, None) => Self::Hard,
            (DifficultyName::Harder, None) => Self::Harder,
            (DifficultyName::Insane, None) => Self::Insane,
        };
        Ok(difficulty)
    }

    #[must_use]
    pub const fn name(self) -> DifficultyName {
        match self {
            Self::Auto => DifficultyName::Auto,
            Self::Easy => DifficultyName::Easy,
            Self::Normal => DifficultyName::Normal,
            Self::Hard => DifficultyName::Hard,
            Self::Harder => DifficultyName::Harder,
            Self::Insane => DifficultyName::Insane,
            Self::Demon(_) => DifficultyName::Demon,
        }
    }

    #[must_use]
    pub const fn demon(self) -> Option<DemonDifficulty> {
        match self {
            Self::Demon(sub) => Some(sub),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_demon(self) -> bool {
        matches!(self, Self::Demon(_))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demon(sub) => write!(f, "{sub:?} Demon"),
            other => write!(f, "{:?}", other.name()),
        }
    }
}

/// Ordinal list tier. Tier 0 is the un-tiered slot used for run-wide files and
/// is never derived from a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Unclassified,
    Auto,
    Easy,
    Normal,
    Hard,
    Harder,
    Insane,
    EasyDemon,
    MediumDemon,
    HardDemon,
    InsaneDemon,
    ExtremeDemon,
}

impl Tier {
    pub const ALL: [Self; 12] = [
        Self::Unclassified,
        Self::Auto,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Harder,
        Self::Insane,
        Self::EasyDemon,
        Self::MediumDemon,
        Self::HardDemon,
        Self::InsaneDemon,
        Self::ExtremeDemon,
    ];

    /// Tiers a level can actually belong to, in ordinal order.
    pub const REAL: [Self; 11] = [
        Self::Auto,
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Harder,
        Self::Insane,
        Self::EasyDemon,
        Self::MediumDemon,
        Self::HardDemon,
        Self::InsaneDemon,
        Self::ExtremeDemon,
    ];

    #[must_use]
    pub const fn of(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Auto => Self::Auto,
            Difficulty::Easy => Self::Easy,
            Difficulty::Normal => Self::Normal,
            Difficulty::Hard => Self::Hard,
            Difficulty::Harder => Self::Harder,
            Difficulty::Insane => Self::Insane,
            Difficulty::Demon(DemonDifficulty::Easy) => Self::EasyDemon,
            Difficulty::Demon(DemonDifficulty::Medium) => Self::MediumDemon,
            Difficulty::Demon(DemonDifficulty::Hard) => Self::HardDemon,
            Difficulty::Demon(DemonDifficulty::Insane) => Self::InsaneDemon,
            Difficulty::Demon(DemonDifficulty::Extreme) => Self::ExtremeDemon,
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Position of a real tier inside per-tier arrays (`Auto` is 0).
    #[must_use]
    pub const fn real_index(self) -> Option<usize> {
        match self {
            Self::Unclassified => None,
            other => Some(other as usize - 1),
        }
    }

    #[must_use]
    pub const fn is_demon(self) -> bool {
        matches!(
            self,
            Self::EasyDemon
                | Self::MediumDemon
                | Self::HardDemon
                | Self::InsaneDemon
                | Self::ExtremeDemon
        )
    }

    /// Sub-folder name under the statistics directory; empty for tier 0.
    #[must_use]
    pub const fn folder_label(self) -> &'static str {
        match self {
            Self::Unclassified => "",
            Self::Auto => "Auto",
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Harder => "Harder",
            Self::Insane => "Insane",
            Self::EasyDemon => "Easy demon",
            Self::MediumDemon => "Medium demon",
            Self::HardDemon => "Hard demon",
            Self::InsaneDemon => "Insane demon",
            Self::ExtremeDemon => "Extreme demon",
        }
    }
}

impl From<Difficulty> for Tier {
    fn from(difficulty: Difficulty) -> Self {
        Self::of(difficulty)
    }
}

impl TryFrom<u8> for Tier {
    type Error = ReportError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or(ReportError::UnknownTier(ordinal))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclassified => write!(f, "All difficulties"),
            other => write!(f, "{}", other.folder_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_table_order() {
        for (expected, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(usize::from(tier.ordinal()), expected);
            assert_eq!(Tier::try_from(tier.ordinal()).unwrap(), *tier);
        }
    }

    #[test]
    fn unknown_ordinal_is_rejected() {
        let err = Tier::try_from(12).unwrap_err();
        assert!(matches!(err, ReportError::UnknownTier(12)));
    }

    #[test]
    fn only_tier_zero_has_empty_folder() {
        assert_eq!(Tier::Unclassified.folder_label(), "");
        assert!(Tier::REAL.iter().all(|t| !t.folder_label().is_empty()));
        assert_eq!(Tier::ExtremeDemon.folder_label(), "Extreme demon");
    }

    #[test]
    fn real_index_covers_per_tier_arrays() {
        assert_eq!(Tier::Unclassified.real_index(), None);
        for (idx, tier) in Tier::REAL.iter().enumerate() {
            assert_eq!(tier.real_index(), Some(idx));
        }
    }

    #[test]
    fn demon_sub_tiers_map_to_demon_tiers() {
        for sub in DemonDifficulty::ALL {
            let tier = Tier::of(Difficulty::Demon(sub));
            assert!(tier.is_demon());
        }
        assert!(!Tier::of(Difficulty::Insane).is_demon());
        assert_eq!(
            Tier::from(Difficulty::Demon(DemonDifficulty::Medium)),
            Tier::MediumDemon
        );
    }

    #[test]
    fn from_parts_rejects_mismatched_demon_data() {
        assert!(Difficulty::from_parts(DifficultyName::Demon, None).is_err());
        assert!(
            Difficulty::from_parts(DifficultyName::Hard, Some(DemonDifficulty::Hard)).is_err()
        );
        assert_eq!(
            Difficulty::from_parts(DifficultyName::Demon, Some(DemonDifficulty::Insane)),
            Ok(Difficulty::Demon(DemonDifficulty::Insane))
        );
        assert_eq!(
            Difficulty::from_parts(DifficultyName::Harder, None),
            Ok(Difficulty::Harder)
        );
    }

    #[test]
    fn difficulty_display_names_demons() {
        assert_eq!(
            Difficulty::Demon(DemonDifficulty::Extreme).to_string(),
            "Extreme Demon"
        );
        assert_eq!(Difficulty::Normal.to_string(), "Normal");
    }
}
