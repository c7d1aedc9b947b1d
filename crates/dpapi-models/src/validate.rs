//! Schema constraint checks shared by all models.

use dpapi_error::{FieldError, ValidationErrorKind, ValidationErrors};
use once_cell::sync::Lazy;
use regex::Regex;

/// Position of the value being validated, used to build error paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    path: String,
}

impl ValidationContext {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full path of `name` below this position.
    pub fn field(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    pub fn child(&self, name: &str) -> Self {
        Self::at(self.field(name))
    }

    pub fn index(&self, name: &str, i: usize) -> Self {
        Self::at(format!("{}[{}]", self.field(name), i))
    }
}

pub trait Validate {
    /// Validates the value as found at `ctx`, reporting every failing field.
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.context_validate(&ValidationContext::root())
    }
}

/// Collects field errors for one struct.
pub struct Validator<'a> {
    ctx: &'a ValidationContext,
    errors: ValidationErrors,
}

impl<'a> Validator<'a> {
    pub fn new(ctx: &'a ValidationContext) -> Self {
        Self {
            ctx,
            errors: ValidationErrors::new(),
        }
    }

    fn fail(&mut self, field: &str, kind: ValidationErrorKind) {
        self.errors.push(FieldError::new(self.ctx.field(field), kind));
    }

    pub fn required_str(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.fail(field, ValidationErrorKind::Required);
        }
        self
    }

    pub fn required<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.fail(field, ValidationErrorKind::Required);
        }
        self
    }

    /// Pattern check; empty values are left to `required_str`.
    pub fn pattern(&mut self, field: &str, value: &str, pattern: &Regex) -> &mut Self {
        if !value.is_empty() && !pattern.is_match(value) {
            self.fail(
                field,
                ValidationErrorKind::Pattern {
                    pattern: pattern.as_str().to_string(),
                },
            );
        }
        self
    }

    pub fn pattern_opt(&mut self, field: &str, value: Option<&str>, pattern: &Regex) -> &mut Self {
        if let Some(value) = value {
            self.pattern(field, value, pattern);
        }
        self
    }

    pub fn minimum(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.fail(field, ValidationErrorKind::Minimum { min, value });
        }
        self
    }

    pub fn maximum(&mut self, field: &str, value: i64, max: i64) -> &mut Self {
        if value > max {
            self.fail(field, ValidationErrorKind::Maximum { max, value });
        }
        self
    }

    pub fn range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) -> &mut Self {
        if let Some(value) = value {
            self.minimum(field, value, min).maximum(field, value, max);
        }
        self
    }

    pub fn minimum_opt(&mut self, field: &str, value: Option<i64>, min: i64) -> &mut Self {
        if let Some(value) = value {
            self.minimum(field, value, min);
        }
        self
    }

    pub fn invalid(&mut self, field: &str, reason: impl Into<String>) -> &mut Self {
        self.fail(
            field,
            ValidationErrorKind::Invalid {
                reason: reason.into(),
            },
        );
        self
    }

    pub fn nested<T: Validate>(&mut self, field: &str, value: &T) -> &mut Self {
        if let Err(e) = value.context_validate(&self.ctx.child(field)) {
            self.errors.extend(e);
        }
        self
    }

    pub fn nested_opt<T: Validate>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.nested(field, value);
        }
        self
    }

    pub fn each<T: Validate>(&mut self, field: &str, values: &[T]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            if let Err(e) = value.context_validate(&self.ctx.index(field, i)) {
                self.errors.extend(e);
            }
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        std::mem::take(&mut self.errors).into_result()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static validation pattern must compile")
}

/// Section and object names.
pub static NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9_.:-]+$"));

/// Values that must not contain whitespace.
pub static NO_WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"^[^\s]+$"));

/// Mail addresses as accepted by the mailers section.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| compile(r"^\S+@\S+$"));
