//! Progress estimator
//!
//! Coarse completion percentage for display. Not consulted by routing.

use crate::schemas::StepId;

/// Percentage added per visited step
pub const STEP_WEIGHT: usize = 6;

/// Percentage before any step is counted
pub const BASE_PROGRESS: usize = 10;

/// Ceiling for every step before contact
pub const PRE_CONTACT_CAP: usize = 90;

pub const CONTACT_PROGRESS: u8 = 95;
pub const SUCCESS_PROGRESS: u8 = 100;

/// Map stack depth and current step to a percentage in `[0, 100]`.
///
/// Saturates at 90 before the contact step so an early screen never looks
/// almost done.
pub fn estimate_progress(depth: usize, current: StepId) -> u8 {
    match current {
        StepId::Success => SUCCESS_PROGRESS,
        StepId::Contact => CONTACT_PROGRESS,
        _ => {
            let calculated = BASE_PROGRESS.saturating_add(depth.saturating_mul(STEP_WEIGHT));
            // min() keeps this <= 90, so the cast is lossless
            calculated.min(PRE_CONTACT_CAP) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_steps() {
        assert_eq!(estimate_progress(12, StepId::Success), 100);
        assert_eq!(estimate_progress(1, StepId::Success), 100);
        assert_eq!(estimate_progress(4, StepId::Contact), 95);
    }

    #[test]
    fn test_depth_formula() {
        assert_eq!(estimate_progress(1, StepId::Main), 16);
        assert_eq!(estimate_progress(2, StepId::LiveType), 22);
        assert_eq!(estimate_progress(5, StepId::Performers), 40);
    }

    #[test]
    fn test_saturates_before_contact() {
        assert_eq!(estimate_progress(13, StepId::LivePractical), 88);
        assert_eq!(estimate_progress(14, StepId::LivePractical), 90);
        assert_eq!(estimate_progress(40, StepId::LivePractical), 90);
        assert_eq!(estimate_progress(usize::MAX, StepId::Main), 90);
    }
}
