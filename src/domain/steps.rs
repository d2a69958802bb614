//! Step catalogue
//!
//! What each screen asks and how its input is stored. The router decides
//! where a step leads; this module decides what a step shows and whether its
//! own fields are complete enough to leave it.

use crate::schemas::{keys, StepId};

/// A selectable option: stored value and display label.
pub type Choice = (&'static str, &'static str);

/// The input a step collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One option, stored as text under `key`
    SingleChoice {
        key: &'static str,
        options: &'static [Choice],
    },
    /// Any number of options, one flag each under `"{prefix}{option}"`
    MultiChoice {
        prefix: &'static str,
        options: &'static [&'static str],
    },
    /// Free text stored under `key`
    FreeText {
        key: &'static str,
        placeholder: &'static str,
    },
    /// Optional event date and remarks
    Practical,
    /// Name, e-mail, phone and contact preference
    Contact,
    /// Terminal confirmation
    Success,
}

/// Presentation metadata for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPrompt {
    pub step: StepId,
    pub heading: &'static str,
    pub field: FieldKind,
}

pub const SERVICE_OPTIONS: &[Choice] = &[
    ("live", "Live geluid voor een evenement"),
    ("studio", "Studio opname"),
    ("nabewerking", "Audio Nabewerking"),
    ("advies", "Audio Advies"),
    ("anders", "Anders"),
];

pub const LIVE_TYPE_OPTIONS: &[Choice] = &[
    ("organize", "Ik organiseer een evenement - help me met techniek"),
    ("hire", "Ik wil je direct inhuren als technicus"),
];

pub const HIRE_ROLE_OPTIONS: &[Choice] = &[
    ("FOH Technicus", "FOH Technicus"),
    ("Monitor Technicus", "Monitor Technicus"),
    ("Stagehand / Crew", "Stagehand / Crew"),
    ("Systeemontwerper", "Systeemontwerper"),
    ("Anders", "Anders"),
];

pub const CONCERT_EVENT: &str = "Concert / Festival";

pub const EVENT_TYPE_OPTIONS: &[Choice] = &[
    (CONCERT_EVENT, CONCERT_EVENT),
    ("Bedrijfsevent", "Bedrijfsevent"),
    ("Privéfeest / Bruiloft", "Privéfeest / Bruiloft"),
    ("Presentatie / Congres", "Presentatie / Congres"),
];

pub const LIVE_MUSIC_OPTIONS: &[Choice] = &[
    ("ja", "Ja, live muziek"),
    ("nee", "Nee, alleen spraak"),
];

pub const SMALL_BAND: &str = "Band (2-5 personen)";
pub const LARGE_BAND: &str = "Band (6+ personen)";

pub const PERFORMER_OPTIONS: &[Choice] = &[
    ("Solo artiest / DJ", "Solo artiest / DJ"),
    ("Duo / Trio", "Duo / Trio"),
    (SMALL_BAND, SMALL_BAND),
    (LARGE_BAND, LARGE_BAND),
    ("Meerdere acts", "Meerdere acts"),
];

pub const INSTRUMENT_OPTIONS: &[&str] = &[
    "Drums",
    "Basgitaar",
    "Gitaar",
    "Keys / Piano",
    "Zang",
    "Blazers",
    "Percussie",
    "Elektronisch",
];

pub const EQUIPMENT_UNKNOWN: &str = "Weet ik niet";
pub const EQUIPMENT_NONE: &str = "Niks aanwezig";

pub const EQUIPMENT_OPTIONS: &[&str] = &[
    "Speakers (PA)",
    "Mengtafel",
    "Microfoons",
    "Monitoren",
    EQUIPMENT_UNKNOWN,
    EQUIPMENT_NONE,
];

pub const STUDIO_TYPE_OPTIONS: &[Choice] = &[
    ("Zang / Vocals", "Zang / Vocals"),
    ("Band / Instrumenten", "Band / Instrumenten"),
    ("Podcast / Stem", "Podcast / Stem"),
    ("Voice-over", "Voice-over"),
];

pub const NABEWERKING_TYPE_OPTIONS: &[Choice] = &[
    ("Mixing", "Mixing"),
    ("Mastering", "Mastering"),
    ("Podcast Editing", "Podcast Editing"),
    ("Restauratie / Ruisonderdrukking", "Restauratie / Ruisonderdrukking"),
];

pub const ADVIES_WHO_OPTIONS: &[Choice] = &[
    ("Muzikant / Producer", "Muzikant / Producer"),
    ("Organisator", "Organisator"),
    ("Bedrijf", "Bedrijf"),
    ("Particulier", "Particulier"),
];

pub const ADVIES_GOAL_OPTIONS: &[Choice] = &[
    ("event", "Technisch ontwerp voor een event"),
    ("aanschaffen", "Aanschaf van eigen apparatuur"),
    ("verbeteren", "Optimalisatie van een ruimte"),
    ("anders", "Iets anders"),
];

pub const ADVIES_RUIMTE_OPTIONS: &[Choice] = &[
    ("Home Studio", "Home Studio"),
    ("Kantoor / Vergaderruimte", "Kantoor / Vergaderruimte"),
    ("Horeca / Venue", "Horeca / Venue"),
    ("Oefenruimte", "Oefenruimte"),
];

pub const ADVIES_DOEL_OPTIONS: &[Choice] = &[
    ("Geluidsisolatie", "Geluidsisolatie"),
    ("Akoestische behandeling", "Akoestische behandeling"),
    ("Speaker optimalisatie", "Speaker optimalisatie"),
];

pub const ADVIES_METHODE_OPTIONS: &[Choice] = &[
    ("Video Call", "Video Call"),
    ("Op locatie (Eindhoven/Utrecht)", "Op locatie (Eindhoven/Utrecht)"),
    ("Telefonisch", "Telefonisch"),
];

pub const ADVIES_GEBRUIK_OPTIONS: &[Choice] = &[
    ("Live optredens", "Live optredens"),
    ("Recording / Studio", "Recording / Studio"),
    ("Hifi / Luisteren", "Hifi / Luisteren"),
];

pub const KOPEN_TYPE_OPTIONS: &[&str] = &[
    "Speakers",
    "Mengtafel",
    "Microfoons",
    "Interfaces",
    "Bekabeling",
    "Anders",
];

const fn single(key: &'static str, options: &'static [Choice]) -> FieldKind {
    FieldKind::SingleChoice { key, options }
}

const fn multi(prefix: &'static str, options: &'static [&'static str]) -> FieldKind {
    FieldKind::MultiChoice { prefix, options }
}

const fn text(key: &'static str, placeholder: &'static str) -> FieldKind {
    FieldKind::FreeText { key, placeholder }
}

impl StepId {
    /// Heading and field layout for this step.
    pub fn prompt(self) -> StepPrompt {
        let (heading, field) = match self {
            StepId::Main => (
                "Wat kan ik voor je betekenen?",
                single(keys::MAIN_SERVICE, SERVICE_OPTIONS),
            ),
            StepId::LiveType => ("Hoe kan ik helpen?", single(keys::LIVE_TYPE, LIVE_TYPE_OPTIONS)),
            StepId::LiveHireRole => ("In welke rol?", single(keys::HIRE_ROLE, HIRE_ROLE_OPTIONS)),
            StepId::LiveHireDetails => (
                "Opdracht details",
                text(keys::HIRE_DETAILS, "Datum, locatie, tijden en specifieke eisen..."),
            ),
            StepId::LiveEventType => ("Type event?", single(keys::EVENT_TYPE, EVENT_TYPE_OPTIONS)),
            StepId::LiveMusicCheck => (
                "Is er live muziek?",
                single(keys::HAS_LIVE_MUSIC, LIVE_MUSIC_OPTIONS),
            ),
            StepId::Performers => (
                "Wie treedt er op?",
                single(keys::PERFORMERS, PERFORMER_OPTIONS),
            ),
            StepId::Instruments => (
                "Welke instrumenten?",
                multi(keys::INSTRUMENT_PREFIX, INSTRUMENT_OPTIONS),
            ),
            StepId::LocationEquipment => (
                "Aanwezig op locatie?",
                multi(keys::EQUIPMENT_PREFIX, EQUIPMENT_OPTIONS),
            ),
            StepId::LocationName => (
                "Welke locatie?",
                text(keys::LOCATION_NAME, "Naam van de locatie of evenement"),
            ),
            StepId::LivePractical => ("Praktische info", FieldKind::Practical),
            StepId::StudioType => (
                "Wat gaan we opnemen?",
                single(keys::STUDIO_TYPE, STUDIO_TYPE_OPTIONS),
            ),
            StepId::StudioDetails => (
                "Vertel meer over de sessie",
                text(
                    keys::STUDIO_DETAILS,
                    "Aantal personen, gewenste datum, doel van de opname...",
                ),
            ),
            StepId::NabewerkingType => (
                "Type nabewerking?",
                single(keys::NABEWERKING_TYPE, NABEWERKING_TYPE_OPTIONS),
            ),
            StepId::NabewerkingDetails => (
                "Details nabewerking",
                text(
                    keys::NABEWERKING_DETAILS,
                    "Deadline, aantal tracks, specifieke wensen...",
                ),
            ),
            StepId::AdviesWho => ("Wie ben je?", single(keys::ADVIES_WHO, ADVIES_WHO_OPTIONS)),
            StepId::AdviesGoal => (
                "Waar heb je advies bij nodig?",
                single(keys::ADVIES_GOAL, ADVIES_GOAL_OPTIONS),
            ),
            StepId::AdviesRuimte => (
                "Welke ruimte?",
                single(keys::ADVIES_RUIMTE, ADVIES_RUIMTE_OPTIONS),
            ),
            StepId::AdviesDoel => (
                "Wat is het doel?",
                single(keys::ADVIES_DOEL, ADVIES_DOEL_OPTIONS),
            ),
            StepId::AdviesMethode => (
                "Hoe spreken we elkaar?",
                single(keys::ADVIES_METHODE, ADVIES_METHODE_OPTIONS),
            ),
            StepId::AdviesGebruik => (
                "Waar ga je het voor gebruiken?",
                single(keys::ADVIES_GEBRUIK, ADVIES_GEBRUIK_OPTIONS),
            ),
            StepId::AdviesKopenDetails => (
                "Details aanschaf",
                text(
                    keys::ADVIES_KOPEN_DETAILS,
                    "Budget, reeds aanwezige gear, voorkeur voor merken...",
                ),
            ),
            StepId::AdviesKopenType => (
                "Wat wil je kopen?",
                multi(keys::KOPEN_TYPE_PREFIX, KOPEN_TYPE_OPTIONS),
            ),
            StepId::AndersBeschrijving => (
                "Beschrijf je vraag",
                text(keys::ANDERS_DETAILS, "Waar heb je precies hulp bij nodig?"),
            ),
            StepId::Contact => ("Contactgegevens", FieldKind::Contact),
            StepId::Success => ("Briefing Ontvangen", FieldKind::Success),
        };

        StepPrompt {
            step: self,
            heading,
            field,
        }
    }
}

/// Answer key a multi-select option is stored under.
pub fn option_key(prefix: &str, option: &str) -> String {
    format!("{}{}", prefix, option)
}
