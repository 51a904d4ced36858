use serde::{Deserialize, Serialize};

use super::ModelError;

/// A registered patient. The free-text `medical_history` field feeds the
/// intake-form specialist suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub medical_history: String,
}

impl Patient {
    /// Registration-form validation: every field is required.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if self.age == 0 {
            return Err(ModelError::InvalidField {
                field: "age",
                reason: "must be greater than zero".into(),
            });
        }
        if self.email.trim().is_empty() {
            return Err(ModelError::MissingField("email"));
        }
        if !self.email.contains('@') {
            return Err(ModelError::InvalidField {
                field: "email",
                reason: format!("not an email address: {}", self.email),
            });
        }
        if self.phone.trim().is_empty() {
            return Err(ModelError::MissingField("phone"));
        }
        if self.medical_history.trim().is_empty() {
            return Err(ModelError::MissingField("medicalHistory"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_patient() -> Patient {
        Patient {
            id: 1,
            name: "Asha Verma".into(),
            age: 34,
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            medical_history: "Occasional migraine".into(),
        }
    }

    #[test]
    fn valid_patient_passes() {
        assert!(valid_patient().validate().is_ok());
    }

    #[test]
    fn blank_name_rejected() {
        let mut p = valid_patient();
        p.name = "   ".into();
        assert_eq!(p.validate().unwrap_err(), ModelError::MissingField("name"));
    }

    #[test]
    fn zero_age_rejected() {
        let mut p = valid_patient();
        p.age = 0;
        assert!(matches!(
            p.validate().unwrap_err(),
            ModelError::InvalidField { field: "age", .. }
        ));
    }

    #[test]
    fn malformed_email_rejected() {
        let mut p = valid_patient();
        p.email = "not-an-email".into();
        assert!(matches!(
            p.validate().unwrap_err(),
            ModelError::InvalidField { field: "email", .. }
        ));
    }

    #[test]
    fn empty_history_rejected() {
        let mut p = valid_patient();
        p.medical_history = String::new();
        assert_eq!(
            p.validate().unwrap_err(),
            ModelError::MissingField("medicalHistory")
        );
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let json = serde_json::to_value(valid_patient()).unwrap();
        assert!(json.get("medicalHistory").is_some());
        assert!(json.get("medical_history").is_none());
    }
}
