//! DTOs for logging exercises.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Exercise, Timestamp, User};
use crate::error::AppError;
use crate::utils::date_parser::parse_date;

/// Form body of `POST /api/users/{_id}/exercises`.
///
/// All fields arrive as strings and are coerced by [`AddExerciseForm::into_request`].
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddExerciseForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "duration is required"))]
    pub duration: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("description is required")));
    }

    Ok(())
}

/// Typed exercise input after boundary coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    pub description: String,
    pub duration: u32,
    pub date: Option<DateTime<Utc>>,
}

impl AddExerciseForm {
    /// Validates the form and coerces it into an [`AddExerciseRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing description or a
    /// duration that is not a non-negative whole number, and
    /// [`AppError::InvalidDate`] for an unparsable date.
    pub fn into_request(self) -> Result<AddExerciseRequest, AppError> {
        self.validate()?;

        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::validation("duration must be a whole number of minutes"))?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_date(raw).map_err(|_| AppError::InvalidDate)?),
        };

        Ok(AddExerciseRequest {
            description: self.description,
            duration,
            date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<(User, Exercise)> for ExerciseResponse {
    fn from((user, exercise): (User, Exercise)) -> Self {
        Self {
            id: user.id,
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: Timestamp::new(exercise.date).readable(),
        }
    }
}
