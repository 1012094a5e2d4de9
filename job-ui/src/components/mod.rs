pub mod job_form;
pub mod modal;
pub mod window;

pub use job_form::JobApplicationForm;
pub use modal::Modal;
pub use window::AppWindow;
