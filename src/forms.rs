// src/forms.rs
// String-boundary entry points for the form front-end. Each operation takes
// the raw field text and reports which field failed to parse, so the caller
// can show one generic dialog without inspecting internals.

use log::debug;

use crate::roster::{DuplicateId, Roster, Student, StudentPatch};

/// A rejected form submission, classified by the field that failed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("invalid id: {0:?}")]
    InvalidId(String),
    #[error("invalid grade: {0:?}")]
    InvalidGrade(String),
    #[error("invalid attendance: {0:?}")]
    InvalidAttendance(String),
    #[error("invalid mark: {0:?}")]
    InvalidMark(String),
    #[error(transparent)]
    Duplicate(#[from] DuplicateId),
}

fn parse_id(text: &str) -> Result<i64, FormError> {
    text.parse().map_err(|_| FormError::InvalidId(text.to_string()))
}

fn parse_grade(text: &str) -> Result<f64, FormError> {
    text.parse().map_err(|_| FormError::InvalidGrade(text.to_string()))
}

fn parse_attendance(text: &str) -> Result<u32, FormError> {
    text.parse().map_err(|_| FormError::InvalidAttendance(text.to_string()))
}

/// Parses one subject mark for the auto-GPA path.
pub fn parse_mark(text: &str) -> Result<f64, FormError> {
    text.parse().map_err(|_| FormError::InvalidMark(text.to_string()))
}

/// Maps per-subject marks onto the 4.0 GPA scale: the average mark out of
/// `full_marks` becomes the grade. An empty slice yields 0.0.
pub fn gpa_from_marks(marks: &[f64], full_marks: f64) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let average = marks.iter().sum::<f64>() / marks.len() as f64;
    average / (full_marks / 4.0)
}

/// Parses all four fields and appends the record.
pub fn add_student(
    roster: &mut Roster,
    id: &str,
    name: &str,
    grade: &str,
    attendance: &str,
) -> Result<(), FormError> {
    let student = Student {
        id: parse_id(id)?,
        name: name.to_string(),
        grade: parse_grade(grade)?,
        attendance: parse_attendance(attendance)?,
    };
    debug!("form add: id {}", student.id);
    roster.add(student)?;
    Ok(())
}

/// Updates the record with this id. Empty field strings mean "leave
/// unchanged". The whole patch is parsed before the roster is touched, so a
/// bad field never applies a partial update. Returns whether a record matched.
pub fn update_student(
    roster: &mut Roster,
    id: &str,
    name: &str,
    grade: &str,
    attendance: &str,
) -> Result<bool, FormError> {
    let id = parse_id(id)?;
    let patch = StudentPatch {
        name: (!name.is_empty()).then(|| name.to_string()),
        grade: non_empty(grade).map(parse_grade).transpose()?,
        attendance: non_empty(attendance).map(parse_attendance).transpose()?,
    };
    debug!("form update: id {}", id);
    Ok(roster.update(id, &patch))
}

/// Deletes the record with this id. Returns whether a record matched.
pub fn delete_student(roster: &mut Roster, id: &str) -> Result<bool, FormError> {
    let id = parse_id(id)?;
    debug!("form delete: id {}", id);
    Ok(roster.delete(id))
}

/// Looks up the record with this id.
pub fn find_student<'a>(roster: &'a Roster, id: &str) -> Result<Option<&'a Student>, FormError> {
    Ok(roster.find(parse_id(id)?))
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() { None } else { Some(text) }
}
