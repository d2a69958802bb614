//! Step router
//!
//! Pure transition function over `(current step, answers)`. Most steps have
//! one fixed successor; branch steps pick a successor from a single answer.
//! A missing or unrecognised answer at a branch yields `None`.

use crate::schemas::{keys, AnswerSet, StepId};

use super::steps::{
    option_key, CONCERT_EVENT, EQUIPMENT_NONE, EQUIPMENT_UNKNOWN, EVENT_TYPE_OPTIONS, LARGE_BAND,
    PERFORMER_OPTIONS, SMALL_BAND,
};

/// Compute the step that follows `step` given the current answers.
///
/// Never mutates `answers`. Returns `None` for the terminal step and for
/// branch steps whose deciding answer is missing or unrecognised.
pub fn next_step(step: StepId, answers: &AnswerSet) -> Option<StepId> {
    match step {
        StepId::Main => route_service(answers),

        StepId::LiveType => match answers.text(keys::LIVE_TYPE)? {
            "hire" => Some(StepId::LiveHireRole),
            "organize" => Some(StepId::LiveEventType),
            _ => None,
        },
        StepId::LiveHireRole => Some(StepId::LiveHireDetails),
        StepId::LiveHireDetails => Some(StepId::Contact),

        StepId::LiveEventType => route_event_type(answers),
        StepId::LiveMusicCheck => match answers.text(keys::HAS_LIVE_MUSIC)? {
            "ja" => Some(StepId::Performers),
            "nee" => Some(StepId::LocationEquipment),
            _ => None,
        },
        StepId::Performers => route_performers(answers),
        StepId::Instruments => Some(StepId::LocationEquipment),
        StepId::LocationEquipment => Some(route_equipment(answers)),
        StepId::LocationName => Some(StepId::LivePractical),
        StepId::LivePractical => Some(StepId::Contact),

        StepId::StudioType => Some(StepId::StudioDetails),
        StepId::StudioDetails => Some(StepId::Contact),

        StepId::NabewerkingType => Some(StepId::NabewerkingDetails),
        StepId::NabewerkingDetails => Some(StepId::Contact),

        StepId::AdviesWho => Some(StepId::AdviesGoal),
        StepId::AdviesGoal => match answers.text(keys::ADVIES_GOAL)? {
            "event" => Some(StepId::LiveEventType),
            "verbeteren" => Some(StepId::AdviesRuimte),
            "aanschaffen" => Some(StepId::AdviesGebruik),
            "anders" => Some(StepId::AndersBeschrijving),
            _ => None,
        },
        StepId::AdviesRuimte => Some(StepId::AdviesDoel),
        StepId::AdviesDoel => Some(StepId::AdviesMethode),
        StepId::AdviesMethode => Some(StepId::Contact),
        StepId::AdviesGebruik => Some(StepId::AdviesKopenDetails),
        StepId::AdviesKopenDetails => Some(StepId::AdviesKopenType),
        StepId::AdviesKopenType => Some(StepId::Contact),

        StepId::AndersBeschrijving => Some(StepId::Contact),
        StepId::Contact => Some(StepId::Success),
        StepId::Success => None,
    }
}

fn route_service(answers: &AnswerSet) -> Option<StepId> {
    match answers.text(keys::MAIN_SERVICE)? {
        "live" => Some(StepId::LiveType),
        "studio" => Some(StepId::StudioType),
        "nabewerking" => Some(StepId::NabewerkingType),
        "advies" => Some(StepId::AdviesWho),
        "anders" => Some(StepId::AndersBeschrijving),
        _ => None,
    }
}

fn route_event_type(answers: &AnswerSet) -> Option<StepId> {
    let event_type = answers.text(keys::EVENT_TYPE)?;
    if event_type == CONCERT_EVENT || event_type == "concert" {
        return Some(StepId::Performers);
    }
    EVENT_TYPE_OPTIONS
        .iter()
        .any(|(value, _)| *value == event_type)
        .then_some(StepId::LiveMusicCheck)
}

fn route_performers(answers: &AnswerSet) -> Option<StepId> {
    let performers = answers.text(keys::PERFORMERS)?;
    if performers == SMALL_BAND || performers == LARGE_BAND {
        return Some(StepId::Instruments);
    }
    PERFORMER_OPTIONS
        .iter()
        .any(|(value, _)| *value == performers)
        .then_some(StepId::LocationEquipment)
}

fn route_equipment(answers: &AnswerSet) -> StepId {
    let needs_location = [EQUIPMENT_UNKNOWN, EQUIPMENT_NONE]
        .iter()
        .any(|option| answers.is_present(&option_key(keys::EQUIPMENT_PREFIX, option)));

    if needs_location {
        StepId::LocationName
    } else {
        StepId::LivePractical
    }
}

/// Every step `step` can lead to for some answer assignment.
///
/// Static view of the decision graph, used for catalogue listings and
/// reachability checks.
pub fn possible_successors(step: StepId) -> &'static [StepId] {
    match step {
        StepId::Main => &[
            StepId::LiveType,
            StepId::StudioType,
            StepId::NabewerkingType,
            StepId::AdviesWho,
            StepId::AndersBeschrijving,
        ],
        StepId::LiveType => &[StepId::LiveHireRole, StepId::LiveEventType],
        StepId::LiveHireRole => &[StepId::LiveHireDetails],
        StepId::LiveHireDetails => &[StepId::Contact],
        StepId::LiveEventType => &[StepId::Performers, StepId::LiveMusicCheck],
        StepId::LiveMusicCheck => &[StepId::Performers, StepId::LocationEquipment],
        StepId::Performers => &[StepId::Instruments, StepId::LocationEquipment],
        StepId::Instruments => &[StepId::LocationEquipment],
        StepId::LocationEquipment => &[StepId::LocationName, StepId::LivePractical],
        StepId::LocationName => &[StepId::LivePractical],
        StepId::LivePractical => &[StepId::Contact],
        StepId::StudioType => &[StepId::StudioDetails],
        StepId::StudioDetails => &[StepId::Contact],
        StepId::NabewerkingType => &[StepId::NabewerkingDetails],
        StepId::NabewerkingDetails => &[StepId::Contact],
        StepId::AdviesWho => &[StepId::AdviesGoal],
        StepId::AdviesGoal => &[
            StepId::LiveEventType,
            StepId::AdviesRuimte,
            StepId::AdviesGebruik,
            StepId::AndersBeschrijving,
        ],
        StepId::AdviesRuimte => &[StepId::AdviesDoel],
        StepId::AdviesDoel => &[StepId::AdviesMethode],
        StepId::AdviesMethode => &[StepId::Contact],
        StepId::AdviesGebruik => &[StepId::AdviesKopenDetails],
        StepId::AdviesKopenDetails => &[StepId::AdviesKopenType],
        StepId::AdviesKopenType => &[StepId::Contact],
        StepId::AndersBeschrijving => &[StepId::Contact],
        StepId::Contact => &[StepId::Success],
        StepId::Success => &[],
    }
}

/// Whether the successor of `step` depends on an answer.
pub fn is_branch_step(step: StepId) -> bool {
    possible_successors(step).len() > 1
}
