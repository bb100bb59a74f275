use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationError as RuleViolation, ValidationErrors};

/// Collection every accepted inquiry is written to.
pub const INQUIRY_COLLECTION: &str = "inquiry";

pub const NAME_MAX_CHARS: u64 = 120;
pub const CONTACT_MAX_CHARS: u64 = 254;
pub const MESSAGE_MAX_CHARS: u64 = 2000;
pub const CATEGORY_MAX_CHARS: u64 = 100;

const BLANK_CODE: &str = "blank";
const LENGTH_CODE: &str = "length";

fn not_blank(value: &str) -> Result<(), RuleViolation> {
    if value.trim().is_empty() {
        Err(RuleViolation::new(BLANK_CODE))
    } else {
        Ok(())
    }
}

/// A customer inquiry that passed validation. Serializes to exactly the
/// document that gets stored: absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Inquiry {
    #[validate(custom(function = not_blank), length(max = NAME_MAX_CHARS))]
    pub name: String,
    /// Phone number or email address, stored as given.
    #[validate(custom(function = not_blank), length(max = CONTACT_MAX_CHARS))]
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MESSAGE_MAX_CHARS))]
    pub message: Option<String>,
    /// Product category key (`car`, `truck`, ...) or free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = CATEGORY_MAX_CHARS))]
    pub category: Option<String>,
}

struct FieldSpec {
    name: &'static str,
    required: bool,
    max_chars: u64,
}

/// Declared schema, in reporting order.
const INQUIRY_SCHEMA: [FieldSpec; 4] = [
    FieldSpec { name: "name", required: true, max_chars: NAME_MAX_CHARS },
    FieldSpec { name: "contact", required: true, max_chars: CONTACT_MAX_CHARS },
    FieldSpec { name: "message", required: false, max_chars: MESSAGE_MAX_CHARS },
    FieldSpec { name: "category", required: false, max_chars: CATEGORY_MAX_CHARS },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    NotAnObject,
    Missing,
    WrongType { expected: &'static str },
    Blank,
    TooLong { max: u64 },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::NotAnObject => write!(f, "expected a JSON object"),
            FieldIssue::Missing => write!(f, "is required"),
            FieldIssue::WrongType { expected } => write!(f, "must be a {}", expected),
            FieldIssue::Blank => write!(f, "must not be blank"),
            FieldIssue::TooLong { max } => write!(f, "must be at most {} characters", max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    #[serde(rename = "reason", serialize_with = "serialize_issue")]
    pub issue: FieldIssue,
}

fn serialize_issue<S: serde::Serializer>(issue: &FieldIssue, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(issue)
}

impl FieldError {
    fn new(field: &'static str, issue: FieldIssue) -> Self {
        Self { field, issue }
    }
}

/// Rejection of an inquiry submission, one entry per failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn issue_for(&self, field: &str) -> Option<FieldIssue> {
        self.fields.iter().find(|e| e.field == field).map(|e| e.issue)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid inquiry")?;
        for (i, error) in self.fields.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{} {}", sep, error.field, error.issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check raw request input against the inquiry schema.
///
/// Unknown keys are ignored. Every failing declared field is reported, not
/// just the first. Accepted values are returned exactly as submitted.
pub fn validate(raw: &Value) -> Result<Inquiry, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError {
            fields: vec![FieldError::new("body", FieldIssue::NotAnObject)],
        });
    };

    let mut structural: HashMap<&'static str, FieldIssue> = HashMap::new();
    let mut text = |spec: &FieldSpec| read_text(object, spec, &mut structural);

    let [name, contact, message, category] = &INQUIRY_SCHEMA;
    let inquiry = Inquiry {
        name: text(name).unwrap_or_default(),
        contact: text(contact).unwrap_or_default(),
        message: text(message),
        category: text(category),
    };

    let rule_errors = inquiry.validate().err();

    let fields: Vec<FieldError> = INQUIRY_SCHEMA
        .iter()
        .filter_map(|spec| {
            structural
                .get(spec.name)
                .copied()
                .or_else(|| rule_issue(rule_errors.as_ref(), spec))
                .map(|issue| FieldError::new(spec.name, issue))
        })
        .collect();

    if fields.is_empty() {
        Ok(inquiry)
    } else {
        Err(ValidationError { fields })
    }
}

fn read_text(
    object: &Map<String, Value>,
    spec: &FieldSpec,
    issues: &mut HashMap<&'static str, FieldIssue>,
) -> Option<String> {
    match object.get(spec.name) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => {
            if spec.required {
                issues.insert(spec.name, FieldIssue::Missing);
            }
            None
        }
        Some(_) => {
            issues.insert(spec.name, FieldIssue::WrongType { expected: "string" });
            None
        }
    }
}

fn rule_issue(errors: Option<&ValidationErrors>, spec: &FieldSpec) -> Option<FieldIssue> {
    let field_errors = errors?.field_errors();
    let violations = field_errors.get(spec.name)?;

    violations.iter().find_map(|violation| match violation.code.as_ref() {
        BLANK_CODE => Some(FieldIssue::Blank),
        LENGTH_CODE => Some(FieldIssue::TooLong { max: spec.max_chars }),
        _ => None,
    })
}
