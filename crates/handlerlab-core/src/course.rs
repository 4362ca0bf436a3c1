//! Course records and the id assignment rule.
//!
//! Ids are server-assigned: the next id is one past the highest id currently
//! stored, or `0` for an empty store. Callers must hold exclusive access to
//! the sequence between `next_id` and the append, otherwise two creates can
//! observe the same maximum.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// Seed document compiled into every binary.
pub const SEED_COURSES_JSON: &str = include_str!("../seed/courses.json");

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub instructor: String,
}

/// Create payload. `id` is a presence marker: `None` and `Some(0)` both mean
/// "not supplied". Missing fields default to `""` / `0`; the body itself must
/// be a JSON object.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub instructor: String,
}

impl NewCourse {
    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| LabError::BadRequest(format!("invalid JSON format: {e}")))?;
        // derived structs also accept arrays; only objects are courses
        if !value.is_object() {
            return Err(LabError::BadRequest(
                "invalid JSON format: expected an object".into(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| LabError::BadRequest(format!("invalid JSON format: {e}")))
    }

    /// Reject client-supplied ids.
    pub fn validate(&self) -> Result<()> {
        match self.id {
            Some(id) if id != 0 => Err(LabError::BadRequest(
                "course id is auto-generated and must not be provided".into(),
            )),
            _ => Ok(()),
        }
    }

    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            name: self.name,
            price: self.price,
            instructor: self.instructor,
        }
    }
}

/// Next id for `courses`: `max(-1, highest id) + 1`.
pub fn next_id(courses: &[Course]) -> Result<i64> {
    courses
        .iter()
        .map(|c| c.id)
        .fold(-1, i64::max)
        .checked_add(1)
        .ok_or_else(|| LabError::Internal("course id space exhausted".into()))
}

/// Parse a seed document (JSON array of courses). Duplicate ids are rejected.
pub fn parse_seed(s: &str) -> Result<Vec<Course>> {
    let courses: Vec<Course> =
        serde_json::from_str(s).map_err(|e| LabError::InvalidSeed(e.to_string()))?;

    let mut seen = HashSet::with_capacity(courses.len());
    for c in &courses {
        if !seen.insert(c.id) {
            return Err(LabError::InvalidSeed(format!("duplicate course id: {}", c.id)));
        }
    }
    Ok(courses)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn course(id: i64) -> Course {
        Course {
            id,
            name: format!("c{id}"),
            price: 10,
            instructor: "x".into(),
        }
    }

    #[test]
    fn next_id_on_empty_is_zero() {
        assert_eq!(next_id(&[]).unwrap(), 0);
    }

    #[test]
    fn next_id_follows_highest_not_last() {
        let courses = vec![course(7), course(2), course(4)];
        assert_eq!(next_id(&courses).unwrap(), 8);
    }

    #[test]
    fn next_id_with_only_negative_ids_is_zero() {
        assert_eq!(next_id(&[course(-5)]).unwrap(), 0);
    }

    #[test]
    fn next_id_overflow_is_internal() {
        let err = next_id(&[course(i64::MAX)]).unwrap_err();
        assert!(matches!(err, LabError::Internal(_)));
    }

    #[test]
    fn zero_or_absent_id_is_accepted() {
        let a = NewCourse::from_slice(br#"{"name":"Rust","price":1,"instructor":"Ferris"}"#).unwrap();
        assert!(a.id.is_none());
        a.validate().unwrap();

        let b = NewCourse::from_slice(br#"{"id":0,"name":"Rust","price":1,"instructor":"Ferris"}"#)
            .unwrap();
        b.validate().unwrap();
    }

    #[test]
    fn nonzero_id_is_rejected() {
        let n = NewCourse::from_slice(br#"{"id":9,"name":"Rust","price":1,"instructor":"Ferris"}"#)
            .unwrap();
        let err = n.validate().unwrap_err();
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = NewCourse::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, LabError::BadRequest(_)));
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let n = NewCourse::from_slice(br#"{"name":"Rust"}"#).unwrap();
        n.validate().unwrap();
        assert_eq!(n.price, 0);
        assert_eq!(n.instructor, "");

        let empty = NewCourse::from_slice(b"{}").unwrap();
        assert!(empty.id.is_none());
        assert_eq!(empty.name, "");
    }

    #[test]
    fn non_object_body_is_bad_request() {
        for body in [&b"null"[..], b"[]", b"42"] {
            assert!(matches!(NewCourse::from_slice(body), Err(LabError::BadRequest(_))));
        }
    }

    #[test]
    fn created_course_is_serialized_with_instructor_key() {
        let n = NewCourse::from_slice(br#"{"name":"Rust","price":300,"instructor":"Ferris"}"#)
            .unwrap();
        let v = serde_json::to_value(n.into_course(4)).unwrap();
        assert_eq!(v["id"], 4);
        assert_eq!(v["instructor"], "Ferris");
    }
}
