pub mod messages;
pub mod types;
pub mod validator;

pub use types::{ComplianceReport, ConsultationDetails, PatientHistory};
pub use validator::{ComplianceValidator, CONSULTATION_LEVEL_CODES};
