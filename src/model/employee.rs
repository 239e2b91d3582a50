//! Employee records and the data hanging off an employee: address, family,
//! medical conditions and bank accounts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    normalize,
    validation::{Rules, Validate, ValidationError},
};

pub const GENDERS: &[&str] = &["male", "female", "other"];
pub const CURRENCIES: &[&str] = &["MXN", "USD"];

fn name_rules(rules: Rules, field: &str, value: &str) -> Rules {
    rules.required(field, value).max_length(field, value, 100)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeDto {
    #[serde(deserialize_with = "normalize::upper")]
    pub code: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub first_name: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub last_name: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub second_last_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub hire_date: Option<NaiveDate>,
    pub business_unit_id: i32,
}

impl Validate for CreateEmployeeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let rules = Rules::new()
            .required("code", &self.code)
            .max_length("code", &self.code, 20);
        let rules = name_rules(rules, "first_name", &self.first_name);
        name_rules(rules, "last_name", &self.last_name)
            .when(self.email.as_deref(), |rules, email| rules.email("email", email))
            .when(self.phone.as_deref(), |rules, phone| rules.max_length("phone", phone, 20))
            .positive("business_unit_id", self.business_unit_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub second_last_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub hire_date: Option<NaiveDate>,
    pub business_unit_id: Option<i32>,
}

impl Validate for UpdateEmployeeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.code.as_deref(), |rules, code| rules.max_length("code", code, 20))
            .when(self.first_name.as_deref(), |rules, name| {
                rules.max_length("first_name", name, 100)
            })
            .when(self.last_name.as_deref(), |rules, name| {
                rules.max_length("last_name", name, 100)
            })
            .when(self.email.as_deref(), |rules, email| rules.email("email", email))
            .when(self.business_unit_id, |rules, id| rules.positive("business_unit_id", id))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAddressDto {
    pub employee_id: i32,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub street: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub exterior_number: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub interior_number: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub neighborhood: Option<String>,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub city: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub state: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub zip_code: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub country: String,
}

impl Validate for CreateAddressDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .required("street", &self.street)
            .max_length("street", &self.street, 150)
            .required("exterior_number", &self.exterior_number)
            .required("city", &self.city)
            .required("state", &self.state)
            .digits("zip_code", &self.zip_code, 5, 5)
            .required("country", &self.country)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAddressDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub exterior_number: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub interior_number: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub country: Option<String>,
}

impl Validate for UpdateAddressDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.street.as_deref(), |rules, street| {
                rules.max_length("street", street, 150)
            })
            .when(self.zip_code.as_deref(), |rules, zip| rules.digits("zip_code", zip, 5, 5))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeChildDto {
    pub employee_id: i32,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub first_name: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub last_name: String,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "normalize::midnight_date")]
    pub birthday: NaiveDate,
}

impl Validate for CreateEmployeeChildDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let rules = Rules::new().positive("employee_id", self.employee_id);
        let rules = name_rules(rules, "first_name", &self.first_name);
        name_rules(rules, "last_name", &self.last_name)
            .when(self.gender.as_deref(), |rules, gender| {
                rules.one_of("gender", gender, GENDERS)
            })
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeChildDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub birthday: Option<NaiveDate>,
}

impl Validate for UpdateEmployeeChildDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.gender.as_deref(), |rules, gender| {
                rules.one_of("gender", gender, GENDERS)
            })
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeSpouseDto {
    pub employee_id: i32,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub first_name: String,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub last_name: String,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub phone: Option<String>,
}

impl Validate for CreateEmployeeSpouseDto {
    fn validate(&self) -> Result<(), ValidationError> {
        let rules = Rules::new().positive("employee_id", self.employee_id);
        let rules = name_rules(rules, "first_name", &self.first_name);
        name_rules(rules, "last_name", &self.last_name)
            .when(self.gender.as_deref(), |rules, gender| {
                rules.one_of("gender", gender, GENDERS)
            })
            .when(self.phone.as_deref(), |rules, phone| rules.max_length("phone", phone, 20))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeSpouseDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "normalize::lower_opt")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "normalize::midnight_date_opt")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub phone: Option<String>,
}

impl Validate for UpdateEmployeeSpouseDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.gender.as_deref(), |rules, gender| {
                rules.one_of("gender", gender, GENDERS)
            })
            .when(self.phone.as_deref(), |rules, phone| rules.max_length("phone", phone, 20))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeMedicalConditionDto {
    pub employee_id: i32,
    pub medical_condition_id: i32,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub notes: Option<String>,
}

impl Validate for CreateEmployeeMedicalConditionDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .positive("medical_condition_id", self.medical_condition_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeMedicalConditionDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub notes: Option<String>,
}

impl Validate for UpdateEmployeeMedicalConditionDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Bank account payload. Account number and CLABE arrive in clear text and
/// are encrypted before they are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeBankDto {
    pub employee_id: i32,
    pub bank_id: i32,
    #[serde(deserialize_with = "normalize::trimmed")]
    pub account_number: String,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub clabe: Option<String>,
    #[serde(deserialize_with = "normalize::upper")]
    pub currency: String,
}

impl Validate for CreateEmployeeBankDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .positive("employee_id", self.employee_id)
            .positive("bank_id", self.bank_id)
            .digits("account_number", &self.account_number, 8, 18)
            .when(self.clabe.as_deref(), |rules, clabe| rules.digits("clabe", clabe, 18, 18))
            .one_of("currency", &self.currency, CURRENCIES)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeBankDto {
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "normalize::trimmed_opt")]
    pub clabe: Option<String>,
    #[serde(default, deserialize_with = "normalize::upper_opt")]
    pub currency: Option<String>,
}

impl Validate for UpdateEmployeeBankDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Rules::new()
            .when(self.account_number.as_deref(), |rules, account| {
                rules.digits("account_number", account, 8, 18)
            })
            .when(self.clabe.as_deref(), |rules, clabe| rules.digits("clabe", clabe, 18, 18))
            .when(self.currency.as_deref(), |rules, currency| {
                rules.one_of("currency", currency, CURRENCIES)
            })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_input_is_normalized() {
        let dto: CreateEmployeeDto = serde_json::from_value(json!({
            "code": " emp-01 ",
            "first_name": " Ana ",
            "last_name": "López",
            "email": " ANA@Example.com ",
            "birthday": "1990-05-17T00:00:00Z",
            "business_unit_id": 1,
        }))
        .unwrap();

        assert_eq!(dto.code, "EMP-01");
        assert_eq!(dto.first_name, "Ana");
        assert_eq!(dto.email.as_deref(), Some("ana@example.com"));
        assert_eq!(dto.birthday, NaiveDate::from_ymd_opt(1990, 5, 17));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn bank_account_requires_known_currency() {
        let dto: CreateEmployeeBankDto = serde_json::from_value(json!({
            "employee_id": 1,
            "bank_id": 1,
            "account_number": "1234567890",
            "currency": "eur",
        }))
        .unwrap();

        assert_eq!(dto.validate().unwrap_err().field, "currency");
    }
}
