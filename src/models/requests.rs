//! Request DTOs for the server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Fields are kept as raw JSON so type mistakes get the API's own messages
//! instead of a generic deserialization error.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::models::records::{GradeClass, MAX_GRADE, MIN_GRADE};
use crate::validation::validate_required;

/// Integral value of a JSON number; `42.0` counts as 42.
fn whole_number(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Request body for POST /api/numbers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddNumberRequest {
    #[serde(default)]
    pub value: Option<Value>,
}

impl AddNumberRequest {
    /// Validates the request and returns the integer to store.
    pub fn validate(&self) -> Result<i32, String> {
        let number = match &self.value {
            Some(Value::Number(n)) => n,
            _ => return Err("Value must be a number".to_string()),
        };

        whole_number(number)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| "Value must be an integer".to_string())
    }
}

/// Request body for POST /api/grades
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddGradeRequest {
    #[serde(default)]
    pub class: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl AddGradeRequest {
    /// Validates the request and returns the class and grade to store.
    ///
    /// Missing fields are reported before range checks, and the range check
    /// before the class name check.
    pub fn validate(&self) -> Result<(GradeClass, i32), String> {
        let required = || "Class and value are required".to_string();

        let class = self.class.as_ref().and_then(Value::as_str);
        if validate_required(class, "class").is_some() {
            return Err(required());
        }
        let number = match &self.value {
            Some(Value::Number(n)) => n,
            _ => return Err(required()),
        };

        let out_of_range = || format!("Grade must be between {} and {}", MIN_GRADE, MAX_GRADE);
        let grade = match whole_number(number) {
            Some(v) => i32::try_from(v).map_err(|_| out_of_range())?,
            None if number.as_f64().is_some_and(|f| f.fract() != 0.0) => {
                return Err("Grade must be a whole number".to_string())
            }
            None => return Err(out_of_range()),
        };
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(out_of_range());
        }

        let class = class.unwrap_or_default().parse::<GradeClass>()?;
        Ok((class, grade))
    }
}

/// Query string for GET /api/grades
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradesQuery {
    #[serde(default)]
    pub class: Option<String>,
}

impl GradesQuery {
    /// Returns the class to filter by; an absent or empty parameter means all.
    pub fn class_filter(&self) -> Result<Option<GradeClass>, String> {
        match self.class.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_request(json: &str) -> AddNumberRequest {
        serde_json::from_str(json).unwrap()
    }

    fn grade_request(json: &str) -> AddGradeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_request_valid() {
        assert_eq!(number_request(r#"{"value": 42}"#).validate(), Ok(42));
        assert_eq!(number_request(r#"{"value": -3}"#).validate(), Ok(-3));
        assert_eq!(number_request(r#"{"value": 7.0}"#).validate(), Ok(7));
    }

    #[test]
    fn test_number_request_not_a_number() {
        let expected = Err("Value must be a number".to_string());
        assert_eq!(number_request(r#"{"value": "not a number"}"#).validate(), expected);
        assert_eq!(number_request(r#"{}"#).validate(), expected);
        assert_eq!(number_request(r#"{"value": null}"#).validate(), expected);
    }

    #[test]
    fn test_number_request_not_an_integer() {
        let expected = Err("Value must be an integer".to_string());
        assert_eq!(number_request(r#"{"value": 1.5}"#).validate(), expected);
        assert_eq!(number_request(r#"{"value": 3000000000}"#).validate(), expected);
    }

    #[test]
    fn test_grade_request_valid() {
        let req = grade_request(r#"{"class": "Math", "value": 85}"#);
        assert_eq!(req.validate(), Ok((GradeClass::Math, 85)));

        let req = grade_request(r#"{"class": "History", "value": 0}"#);
        assert_eq!(req.validate(), Ok((GradeClass::History, 0)));

        let req = grade_request(r#"{"class": "Science", "value": 100.0}"#);
        assert_eq!(req.validate(), Ok((GradeClass::Science, 100)));
    }

    #[test]
    fn test_grade_request_missing_fields() {
        let expected = Err("Class and value are required".to_string());
        assert_eq!(grade_request(r#"{"value": 85}"#).validate(), expected);
        assert_eq!(grade_request(r#"{"class": "", "value": 85}"#).validate(), expected);
        assert_eq!(grade_request(r#"{"class": "Math"}"#).validate(), expected);
        assert_eq!(grade_request(r#"{"class": "Math", "value": "85"}"#).validate(), expected);
    }

    #[test]
    fn test_grade_request_out_of_range() {
        let expected = Err("Grade must be between 0 and 100".to_string());
        assert_eq!(grade_request(r#"{"class": "Math", "value": 150}"#).validate(), expected);
        assert_eq!(grade_request(r#"{"class": "Math", "value": -1}"#).validate(), expected);
        assert_eq!(grade_request(r#"{"class": "Art", "value": 101}"#).validate(), expected);
    }

    #[test]
    fn test_grade_request_fractional() {
        assert_eq!(
            grade_request(r#"{"class": "Math", "value": 85.5}"#).validate(),
            Err("Grade must be a whole number".to_string())
        );
    }

    #[test]
    fn test_grade_request_unknown_class() {
        assert_eq!(
            grade_request(r#"{"class": "Art", "value": 90}"#).validate(),
            Err("Class must be one of Math, Science, History".to_string())
        );
    }

    #[test]
    fn test_grades_query_filter() {
        assert_eq!(GradesQuery::default().class_filter(), Ok(None));

        let query = GradesQuery { class: Some(String::new()) };
        assert_eq!(query.class_filter(), Ok(None));

        let query = GradesQuery { class: Some("Science".to_string()) };
        assert_eq!(query.class_filter(), Ok(Some(GradeClass::Science)));

        let query = GradesQuery { class: Some("Gym".to_string()) };
        assert!(query.class_filter().is_err());
    }
}
