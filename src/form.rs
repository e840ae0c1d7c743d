//! Form layer: raw text input checked before it reaches the store

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{GradeScale, GradeSession};

fn non_grade_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.]").expect("static regex"))
}

/// Keep only digits and dots
pub fn clean_grade_text(text: &str) -> String {
    non_grade_chars().replace_all(text, "").into_owned()
}

/// Parse a typed grade and check it against its scale
pub fn parse_grade_input(text: &str, scale: GradeScale) -> Result<f64> {
    let cleaned = clean_grade_text(text);
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AppError::InvalidInput(text.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidInput(text.to_string()));
    }
    if value > f64::from(scale.max()) {
        return Err(AppError::GradeOutOfRange { value, max: scale.max() });
    }
    Ok(value)
}

/// Raw text typed per student while a grade session is open
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeDraft {
    pub session_id: String,
    values: HashMap<String, String>,
}

impl GradeDraft {
    /// Zero grades start out blank
    pub fn from_session(session: &GradeSession) -> Self {
        let values = session
            .grades
            .iter()
            .map(|g| {
                let text = if g.value > 0.0 { g.value.to_string() } else { String::new() };
                (g.student_id.clone(), text)
            })
            .collect();
        GradeDraft {
            session_id: session.id.clone(),
            values,
        }
    }

    pub fn text(&self, student_id: &str) -> &str {
        self.values.get(student_id).map(String::as_str).unwrap_or("")
    }

    /// Record what was typed. Returns the value to forward to the store, if any:
    /// blank input forwards nothing, invalid input is kept as text but rejected.
    pub fn input(&mut self, student_id: &str, text: &str, scale: GradeScale) -> Result<Option<f64>> {
        let cleaned = clean_grade_text(text);
        self.values.insert(student_id.to_string(), cleaned.clone());
        if cleaned.is_empty() {
            return Ok(None);
        }
        parse_grade_input(&cleaned, scale).map(Some)
    }

    /// Fill every blank entry with "0" and return the students touched
    pub fn fill_empty_with_zero(&mut self) -> Vec<String> {
        let mut filled: Vec<String> = self
            .values
            .iter_mut()
            .filter(|(_, text)| text.is_empty())
            .map(|(student, text)| {
                *text = "0".to_string();
                student.clone()
            })
            .collect();
        filled.sort();
        filled
    }

    /// Blank every entry and return all students
    pub fn clear_all(&mut self) -> Vec<String> {
        let mut all: Vec<String> = self
            .values
            .iter_mut()
            .map(|(student, text)| {
                text.clear();
                student.clone()
            })
            .collect();
        all.sort();
        all
    }

    /// Values as the entry screen shows them: the typed text when it parses,
    /// otherwise what the store holds
    pub fn effective_values(&self, session: &GradeSession) -> Vec<f64> {
        session
            .grades
            .iter()
            .map(|g| match self.values.get(&g.student_id) {
                Some(raw) if !raw.is_empty() => raw.parse().unwrap_or(f64::NAN),
                _ => g.value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn test_clean_strips_everything_but_digits_and_dots() {
        assert_eq!(clean_grade_text(" 1a5.5 "), "15.5");
        assert_eq!(clean_grade_text("-3"), "3");
        assert_eq!(clean_grade_text("abc"), "");
    }

    #[test]
    fn test_grade_boundary() {
        assert_eq!(parse_grade_input("20", GradeScale::Twenty).unwrap(), 20.0);
        assert_eq!(parse_grade_input("0", GradeScale::Twenty).unwrap(), 0.0);
        assert_eq!(
            parse_grade_input("20.5", GradeScale::Twenty),
            Err(AppError::GradeOutOfRange { value: 20.5, max: 20 })
        );
        assert!(matches!(
            parse_grade_input("11", GradeScale::Ten),
            Err(AppError::GradeOutOfRange { max: 10, .. })
        ));
        assert!(matches!(parse_grade_input("1.2.3", GradeScale::Twenty), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_grade_input("", GradeScale::Twenty), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_draft_starts_blank_for_zero_grades() {
        let mut store = Store::default();
        store.update_grade_value("GS3", "ST17", 0.0);
        let session = store.grade_sessions().get("GS3").unwrap();
        let draft = GradeDraft::from_session(session);
        assert_eq!(draft.text("ST16"), "12");
        assert_eq!(draft.text("ST17"), "");
    }

    #[test]
    fn test_draft_input_keeps_text_but_only_forwards_valid_values() {
        let store = Store::default();
        let mut draft = GradeDraft::from_session(store.grade_sessions().get("GS3").unwrap());

        assert_eq!(draft.input("ST16", "16", GradeScale::Twenty), Ok(Some(16.0)));
        assert!(draft.input("ST17", "25", GradeScale::Twenty).is_err());
        assert_eq!(draft.text("ST17"), "25");
        assert_eq!(draft.input("ST18", "", GradeScale::Twenty), Ok(None));
    }

    #[test]
    fn test_fill_and_clear() {
        let store = Store::default();
        let mut draft = GradeDraft::from_session(store.grade_sessions().get("GS3").unwrap());
        draft.input("ST16", "", GradeScale::Twenty).unwrap();

        assert_eq!(draft.fill_empty_with_zero(), vec!["ST16".to_string()]);
        assert_eq!(draft.text("ST16"), "0");
        assert!(draft.fill_empty_with_zero().is_empty());

        let cleared = draft.clear_all();
        assert_eq!(cleared.len(), 5);
        assert!(cleared.iter().all(|s| draft.text(s).is_empty()));
    }
}
