//! Employee list/form view-model
//!
//! Pure state transitions: user actions return the [`Command`] to send, and
//! completed requests come back as an [`Outcome`] that may ask for a follow-up
//! list refresh. Nothing here touches the network or the UI.

use super::form::EmployeeForm;
use crate::constants::{FETCH_ERROR, SAVE_ERROR};
use crate::types::*;
use tracing::{debug, error, warn};

#[derive(Debug, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub form: EmployeeForm,
    pub editing: bool,
    /// Last error shown to the user; replaced by newer errors, never cleared
    pub error: Option<String>,
}

impl Roster {
    pub fn load(&self) -> Command {
        Command::List
    }

    /// Numeric fields never keep whitespace; parsing happens on submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let mut value = value.into();
        if field.is_numeric() {
            value.retain(|c| !c.is_whitespace());
        }
        self.form.set(field, value);
    }

    /// Build the create/update request for the current form. Returns `None`
    /// and sets the error line when the form does not parse.
    pub fn submit(&mut self) -> Option<Command> {
        let employee = match self.form.parse() {
            Ok(employee) => employee,
            Err(e) => {
                debug!(error = %e, "Form rejected");
                self.error = Some(e.to_string());
                return None;
            }
        };

        if self.editing {
            Some(Command::Update {
                id: employee.id,
                employee,
            })
        } else {
            Some(Command::Create(employee))
        }
    }

    pub fn begin_edit(&mut self, employee: &Employee) {
        self.form = EmployeeForm::from(employee);
        self.editing = true;
    }

    pub fn delete(&self, id: i64) -> Command {
        Command::Delete { id }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing {
            "Update Employee"
        } else {
            "Add Employee"
        }
    }

    /// Fold a finished request into the view.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Command> {
        match outcome {
            Outcome::Listed(Ok(employees)) => {
                self.employees = employees;
                None
            }
            Outcome::Listed(Err(e)) => {
                error!(error = %e, "Could not fetch employees");
                self.error = Some(FETCH_ERROR.to_string());
                None
            }
            Outcome::Saved { mode, result: Ok(()) } => {
                if mode == SubmitMode::Update {
                    self.editing = false;
                }
                self.form = EmployeeForm::default();
                Some(Command::List)
            }
            Outcome::Saved { mode, result: Err(e) } => {
                warn!(?mode, error = %e, "Could not save employee");
                self.error = Some(SAVE_ERROR.to_string());
                None
            }
            Outcome::Deleted { .. } => Some(Command::List),
        }
    }
}
