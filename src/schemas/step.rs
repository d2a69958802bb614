//! Step identifier schema - every screen the wizard can show

use serde::{Deserialize, Serialize};

use crate::errors::IntakeError;

/// Identifier for one wizard screen.
///
/// The set is closed: the router, the catalogue and the progress estimator
/// all match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Top-level service selection
    Main,

    // Live sound
    LiveType,
    LiveHireRole,
    LiveHireDetails,
    LiveEventType,
    LiveMusicCheck,
    Performers,
    Instruments,
    LocationEquipment,
    LocationName,
    LivePractical,

    // Studio recording
    StudioType,
    StudioDetails,

    // Post-production
    NabewerkingType,
    NabewerkingDetails,

    // Advisory
    AdviesWho,
    AdviesGoal,
    AdviesRuimte,
    AdviesDoel,
    AdviesMethode,
    AdviesGebruik,
    AdviesKopenDetails,
    AdviesKopenType,

    /// Generic free-text request
    AndersBeschrijving,

    /// Contact details, gated by contact validation
    Contact,
    /// Terminal confirmation screen
    Success,
}

impl StepId {
    /// The step every session starts on.
    pub const INITIAL: StepId = StepId::Main;

    /// The terminal step reached after a valid contact submission.
    pub const SUCCESS: StepId = StepId::Success;

    /// Every member of the closed step set, in catalogue order.
    pub const ALL: [StepId; 26] = [
        StepId::Main,
        StepId::LiveType,
        StepId::LiveHireRole,
        StepId::LiveHireDetails,
        StepId::LiveEventType,
        StepId::LiveMusicCheck,
        StepId::Performers,
        StepId::Instruments,
        StepId::LocationEquipment,
        StepId::LocationName,
        StepId::LivePractical,
        StepId::StudioType,
        StepId::StudioDetails,
        StepId::NabewerkingType,
        StepId::NabewerkingDetails,
        StepId::AdviesWho,
        StepId::AdviesGoal,
        StepId::AdviesRuimte,
        StepId::AdviesDoel,
        StepId::AdviesMethode,
        StepId::AdviesGebruik,
        StepId::AdviesKopenDetails,
        StepId::AdviesKopenType,
        StepId::AndersBeschrijving,
        StepId::Contact,
        StepId::Success,
    ];

    /// Kebab-case identifier used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Main => "main",
            StepId::LiveType => "live-type",
            StepId::LiveHireRole => "live-hire-role",
            StepId::LiveHireDetails => "live-hire-details",
            StepId::LiveEventType => "live-event-type",
            StepId::LiveMusicCheck => "live-music-check",
            StepId::Performers => "performers",
            StepId::Instruments => "instruments",
            StepId::LocationEquipment => "location-equipment",
            StepId::LocationName => "location-name",
            StepId::LivePractical => "live-practical",
            StepId::StudioType => "studio-type",
            StepId::StudioDetails => "studio-details",
            StepId::NabewerkingType => "nabewerking-type",
            StepId::NabewerkingDetails => "nabewerking-details",
            StepId::AdviesWho => "advies-who",
            StepId::AdviesGoal => "advies-goal",
            StepId::AdviesRuimte => "advies-ruimte",
            StepId::AdviesDoel => "advies-doel",
            StepId::AdviesMethode => "advies-methode",
            StepId::AdviesGebruik => "advies-gebruik",
            StepId::AdviesKopenDetails => "advies-kopen-details",
            StepId::AdviesKopenType => "advies-kopen-type",
            StepId::AndersBeschrijving => "anders-beschrijving",
            StepId::Contact => "contact",
            StepId::Success => "success",
        }
    }

    /// Check if this is the terminal success step.
    pub fn is_terminal(self) -> bool {
        self == StepId::SUCCESS
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepId {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::ALL
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| IntakeError::UnknownStep(s.to_string()))
    }
}
