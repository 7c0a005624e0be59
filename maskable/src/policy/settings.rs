//! Configuration surface consumed from the binding layer.
//!
//! [`MaskSettings`] is the raw, deserializable form of a mask configuration as
//! it appears in configuration data: signed counts and a mask character, each
//! optional. Converting it into a [`MaskConfig`] clamps negative counts to
//! zero instead of failing.

use serde::{Deserialize, Serialize};

use super::text::{
    DEFAULT_KEEP_INITIAL_CHARACTERS, DEFAULT_KEEP_LAST_CHARACTERS, MASK_CHAR, MaskConfig,
};

/// Raw masking parameters as configured for a field.
///
/// Field names are snake_case; the camelCase spellings are accepted as aliases.
///
/// ```
/// use maskable::{MaskConfig, MaskSettings};
///
/// let settings: MaskSettings =
///     serde_json::from_str(r##"{"keepLastCharacters": 6, "maskCharacter": "#"}"##).unwrap();
/// assert_eq!(MaskConfig::from(settings), MaskConfig::keep_last(6).with_mask_char('#'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaskSettings {
    /// Character used to replace masked positions.
    #[serde(alias = "maskCharacter")]
    pub mask_character: char,
    /// Leading characters to leave unmasked. Negative values clamp to zero.
    #[serde(alias = "keepInitialCharacters")]
    pub keep_initial_characters: i64,
    /// Trailing characters to leave unmasked. Negative values clamp to zero.
    #[serde(alias = "keepLastCharacters")]
    pub keep_last_characters: i64,
}

impl std::default::Default for MaskSettings {
    fn default() -> Self {
        Self {
            mask_character: MASK_CHAR,
            keep_initial_characters: count(DEFAULT_KEEP_INITIAL_CHARACTERS),
            keep_last_characters: count(DEFAULT_KEEP_LAST_CHARACTERS),
        }
    }
}

impl From<MaskSettings> for MaskConfig {
    fn from(settings: MaskSettings) -> Self {
        Self::clamped(
            settings.keep_initial_characters,
            settings.keep_last_characters,
            settings.mask_character,
        )
    }
}

impl From<MaskConfig> for MaskSettings {
    fn from(config: MaskConfig) -> Self {
        Self {
            mask_character: config.mask_character(),
            keep_initial_characters: count(config.keep_initial_characters()),
            keep_last_characters: count(config.keep_last_characters()),
        }
    }
}

impl Serialize for MaskConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MaskSettings::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MaskConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        MaskSettings::deserialize(deserializer).map(Self::from)
    }
}

fn count(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
