mod field;
mod form_state;
mod position;
mod skill;

pub use field::{Field, ParseFieldError};
pub use form_state::FormState;
pub use position::Position;
pub use skill::Skill;
