//! Scene classification enums.

use serde::{Deserialize, Serialize};

/// Coarse category of a scene, inferred from its actions and dialogue.
///
/// # Examples
///
/// ```
/// use mangaka_core::SceneType;
///
/// assert_eq!(SceneType::default(), SceneType::SliceOfLife);
/// assert_eq!(format!("{}", SceneType::SliceOfLife), "slice_of_life");
/// assert_eq!(serde_json::to_string(&SceneType::Battle).unwrap(), "\"battle\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// Physical conflict
    #[display("battle")]
    Battle,
    /// Conversation-driven scene
    #[display("social")]
    Social,
    /// Affectionate exchange
    #[display("romance")]
    Romance,
    /// Everything else
    #[default]
    #[display("slice_of_life")]
    SliceOfLife,
}

/// Emotional tone of a scene, inferred from its full body text.
///
/// # Examples
///
/// ```
/// use mangaka_core::Mood;
///
/// assert_eq!(Mood::default(), Mood::Neutral);
/// assert_eq!("determined".parse::<Mood>().unwrap(), Mood::Determined);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    /// Danger and conflict
    #[display("intense")]
    Intense,
    /// Cheerful
    #[display("happy")]
    Happy,
    /// Sorrowful or anxious
    #[display("sad")]
    Sad,
    /// Tender
    #[display("romantic")]
    Romantic,
    /// Resolute
    #[display("determined")]
    Determined,
    /// No recognisable tone
    #[default]
    #[display("neutral")]
    Neutral,
}
