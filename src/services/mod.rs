pub mod contact_service;
pub mod diagnostics_service;
pub mod project_service;
pub mod settings_service;

pub use contact_service::*;
pub use diagnostics_service::*;
pub use project_service::*;
pub use settings_service::*;
