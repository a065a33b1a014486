use crate::types::answer::{AnswerStore, AnswerValue};
use crate::types::assessment::BusinessProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Industry,
    Employees,
    CommercialProperty,
    ProfessionalServices,
    Vehicles,
    CyberRisks,
}

/// Profile field -> question id it is read from. A question set without one
/// of these ids leaves the field at its default.
pub const PROFILE_QUESTIONS: [(ProfileField, &str); 6] = [
    (ProfileField::Industry, "industry"),
    (ProfileField::Employees, "employees"),
    (ProfileField::CommercialProperty, "property"),
    (ProfileField::ProfessionalServices, "services"),
    (ProfileField::Vehicles, "vehicles"),
    (ProfileField::CyberRisks, "data"),
];

pub fn derive_profile(answers: &AnswerStore) -> BusinessProfile {
    let mut profile = BusinessProfile::default();
    for (field, question_id) in PROFILE_QUESTIONS {
        let answer = answers.get(question_id);
        let text = || answer.and_then(AnswerValue::as_choice).map(str::to_string);
        let flag = answer.is_some_and(AnswerValue::is_true);
        match field {
            ProfileField::Industry => profile.industry = text(),
            ProfileField::Employees => profile.employees = text(),
            ProfileField::CommercialProperty => profile.has_commercial_property = flag,
            ProfileField::ProfessionalServices => profile.offers_professional_services = flag,
            ProfileField::Vehicles => profile.uses_vehicles = flag,
            ProfileField::CyberRisks => profile.has_cyber_risks = flag,
        }
    }
    profile
}
