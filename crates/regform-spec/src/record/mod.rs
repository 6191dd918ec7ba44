mod attachment;
mod draft;
mod payment;
mod registration;

pub use attachment::Attachment;
pub use draft::{
    AcademicStanding, FieldValue, MentorshipPreferences, PaymentSection, PersonalDetails,
    ProfessionalBackground, RegistrationDraft,
};
pub use payment::{BankPayment, CashPayment, GcashPayment, PaymentMethod, PaymentProof};
pub use registration::{
    AcademicRecord, GraduateRecord, MentorshipEnrollment, Registration, StudentRecord,
};
