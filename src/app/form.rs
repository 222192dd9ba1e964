//! Form model: raw input text per field, parsed into an [`Employee`] on submit

use crate::types::{Employee, Field};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: Field, value: String },
    #[error("Salary cannot be negative")]
    NegativeSalary,
}

/// In-progress employee record. Numeric fields stay text until parsed so a
/// half-typed value never silently turns into something else.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: "0".to_string(),
            name: String::new(),
            position: String::new(),
            department: String::new(),
            salary: "0".to_string(),
        }
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
        }
    }
}

impl EmployeeForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Department => &self.department,
            Field::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Position => &mut self.position,
            Field::Department => &mut self.department,
            Field::Salary => &mut self.salary,
        };
        *slot = value;
    }

    /// Validation error for a single field, if its current text is unusable.
    pub fn field_error(&self, field: Field) -> Option<FormError> {
        match field {
            Field::Id => parse_id(&self.id).err(),
            Field::Salary => parse_salary(&self.salary).err(),
            _ => required(field, self.get(field)).err(),
        }
    }

    /// True when the field holds text that can never parse, as opposed to
    /// simply being empty.
    pub fn is_malformed(&self, field: Field) -> bool {
        matches!(
            self.field_error(field),
            Some(FormError::InvalidNumber { .. }) | Some(FormError::NegativeSalary)
        )
    }

    /// Parse every field, reporting the first problem in display order.
    pub fn parse(&self) -> Result<Employee, FormError> {
        let id = parse_id(&self.id)?;
        required(Field::Name, &self.name)?;
        required(Field::Position, &self.position)?;
        required(Field::Department, &self.department)?;
        let salary = parse_salary(&self.salary)?;

        Ok(Employee {
            id,
            name: self.name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary,
        })
    }
}

fn required(field: Field, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

/// Empty id means "let the server assign one".
fn parse_id(text: &str) -> Result<i64, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| FormError::InvalidNumber {
        field: Field::Id,
        value: text.to_string(),
    })
}

fn parse_salary(text: &str) -> Result<f64, FormError> {
    let text = text.trim();
    required(Field::Salary, text)?;
    let invalid = || FormError::InvalidNumber {
        field: Field::Salary,
        value: text.to_string(),
    };
    // f64::from_str accepts "NaN" and "inf"
    let salary: f64 = text.parse().map_err(|_| invalid())?;
    if !salary.is_finite() {
        return Err(invalid());
    }
    if salary < 0.0 {
        return Err(FormError::NegativeSalary);
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            id: "4".into(),
            name: "Ada".into(),
            position: "Engineer".into(),
            department: "R&D".into(),
            salary: "1200.50".into(),
        }
    }

    #[test]
    fn default_form_has_zeroed_numbers_and_empty_text() {
        let form = EmployeeForm::default();
        assert_eq!(form.get(Field::Id), "0");
        assert_eq!(form.get(Field::Salary), "0");
        assert!(form.name.is_empty() && form.position.is_empty() && form.department.is_empty());
    }

    #[test]
    fn parses_numeric_fields() {
        let employee = filled().parse().unwrap();
        assert_eq!(employee.id, 4);
        assert_eq!(employee.salary, 1200.5);
        assert_eq!(employee.name, "Ada");
    }

    #[test]
    fn numeric_fields_tolerate_surrounding_whitespace() {
        let mut form = filled();
        form.set(Field::Id, " 12 ".into());
        form.set(Field::Salary, " 99 ".into());
        let employee = form.parse().unwrap();
        assert_eq!((employee.id, employee.salary), (12, 99.0));
    }

    #[test]
    fn empty_id_means_unassigned() {
        let mut form = filled();
        form.set(Field::Id, String::new());
        assert_eq!(form.parse().unwrap().id, 0);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let mut form = filled();
        form.set(Field::Id, "abc".into());
        assert_eq!(
            form.parse(),
            Err(FormError::InvalidNumber { field: Field::Id, value: "abc".into() })
        );
    }

    #[test]
    fn rejects_nan_and_infinite_salary() {
        for text in ["NaN", "inf", "-inf", "1e400"] {
            let mut form = filled();
            form.set(Field::Salary, text.into());
            assert!(
                matches!(form.parse(), Err(FormError::InvalidNumber { field: Field::Salary, .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_negative_salary() {
        let mut form = filled();
        form.set(Field::Salary, "-1".into());
        assert_eq!(form.parse(), Err(FormError::NegativeSalary));
    }

    #[test]
    fn required_text_fields_must_not_be_blank() {
        let mut form = filled();
        form.set(Field::Department, "   ".into());
        assert_eq!(form.parse(), Err(FormError::Missing(Field::Department)));
        assert_eq!(form.field_error(Field::Department), Some(FormError::Missing(Field::Department)));
        assert_eq!(form.field_error(Field::Name), None);
    }

    #[test]
    fn blank_fields_are_not_malformed() {
        let mut form = EmployeeForm::default();
        assert!(!form.is_malformed(Field::Name));
        form.set(Field::Salary, "12x".into());
        assert!(form.is_malformed(Field::Salary));
        form.set(Field::Salary, "-3".into());
        assert!(form.is_malformed(Field::Salary));
        assert!(!form.is_malformed(Field::Id));
    }

    #[test]
    fn empty_salary_is_missing_not_zero() {
        let mut form = filled();
        form.set(Field::Salary, String::new());
        assert_eq!(form.parse(), Err(FormError::Missing(Field::Salary)));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = FormError::InvalidNumber { field: Field::Salary, value: "12a".into() };
        assert_eq!(err.to_string(), "Salary must be a number, got \"12a\"");
        assert_eq!(FormError::Missing(Field::Name).to_string(), "Name is required");
    }

    #[test]
    fn copies_employee_values_exactly() {
        let employee = Employee {
            id: 9,
            name: "Grace".into(),
            position: "Admiral".into(),
            department: "Navy".into(),
            salary: 1000.0,
        };
        let form = EmployeeForm::from(&employee);
        assert_eq!(form.id, "9");
        assert_eq!(form.salary, "1000");
        assert_eq!(form.parse().unwrap(), employee);
    }
}
