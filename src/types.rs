//! Common types and data structures

use crate::api::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee record as exchanged with the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - ${}",
            self.name, self.position, self.department, self.salary
        )
    }
}

/// Form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Position,
    Department,
    Salary,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Position,
        Field::Department,
        Field::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "NAME",
            Field::Position => "POSITION",
            Field::Department => "DEPARTMENT",
            Field::Salary => "SALARY",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Id => "0",
            Field::Name => "Name",
            Field::Position => "Position",
            Field::Department => "Department",
            Field::Salary => "Salary",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Id | Field::Salary)
    }

    /// Every field except the id must be filled in before submitting
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Id => "Id",
            Field::Name => "Name",
            Field::Position => "Position",
            Field::Department => "Department",
            Field::Salary => "Salary",
        };
        f.write_str(name)
    }
}

/// Whether a submit creates a new record or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// A request the view asks to have sent to the API
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Create(Employee),
    Update { id: i64, employee: Employee },
    Delete { id: i64 },
}

/// The completed result of a [`Command`], fed back into the view
#[derive(Debug)]
pub enum Outcome {
    Listed(Result<Vec<Employee>, ApiError>),
    Saved {
        mode: SubmitMode,
        result: Result<(), ApiError>,
    },
    /// Delete failures are not surfaced, only the fact that it finished
    Deleted { id: i64 },
}
