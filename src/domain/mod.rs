//! Wizard engine: step catalogue, routing, navigation, progress and validation

mod navigation;
mod progress;
mod router;
mod session;
mod steps;
mod validation;


pub use navigation::NavigationStack;
pub use progress::{estimate_progress, CONTACT_PROGRESS, PRE_CONTACT_CAP, SUCCESS_PROGRESS};
pub use router::{is_branch_step, next_step, possible_successors};
pub use session::{TransitionOutcome, WizardSession};
pub use steps::{option_key, Choice, FieldKind, StepPrompt};
pub use validation::{
    is_valid_email, is_valid_name, is_valid_phone, validate_contact, validate_contact_answers,
    validate_step_fields, ValidationResult,
};
