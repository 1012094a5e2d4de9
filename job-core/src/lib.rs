pub mod controller;
pub mod models;
pub mod summary;
pub mod utils;
pub mod validation;
pub mod visibility;

pub use controller::{FormController, FormError, SubmitOutcome};
pub use models::*;
pub use summary::{Summary, SummaryLine, interview_time_value};
pub use validation::{ErrorMap, ValidationError, validate};
pub use visibility::{is_visible, visible_fields};
