//! A whole configuration document: one optional `global` section plus the
//! named sections that may repeat.

use crate::acme_provider::AcmeProvider;
use crate::backend::Backend;
use crate::comparable;
use crate::defaults::Defaults;
use crate::global::Global;
use crate::http_after_response_rule::HttpAfterResponseRule;
use crate::validate::{Validate, ValidationContext};
use dpapi_error::{FieldError, ValidationErrorKind, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<Global>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<Defaults>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backends: Vec<Backend>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acme_providers: Vec<AcmeProvider>,

    /// Rules applied at the top level, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub http_after_response_rules: Vec<HttpAfterResponseRule>,
}

comparable!(Configuration {
    global,
    defaults,
    backends,
    acme_providers,
    http_after_response_rules,
});

impl Configuration {
    pub fn is_empty(&self) -> bool {
        self.global.is_none()
            && self.defaults.is_empty()
            && self.backends.is_empty()
            && self.acme_providers.is_empty()
            && self.http_after_response_rules.is_empty()
    }

    pub fn backend(&self, name: &str) -> Option<&Backend> {
        self.backends.iter().find(|b| b.name == name)
    }

    pub fn defaults_section(&self, name: &str) -> Option<&Defaults> {
        self.defaults
            .iter()
            .find(|d| d.name.as_deref() == Some(name))
    }

    pub fn acme_provider(&self, name: &str) -> Option<&AcmeProvider> {
        self.acme_providers.iter().find(|p| p.name == name)
    }
}

/// Context of a named section: `backends[be_app]`, or `backends[0]` when unnamed.
fn section_context(
    ctx: &ValidationContext,
    field: &str,
    name: &str,
    index: usize,
) -> ValidationContext {
    if name.is_empty() {
        ctx.index(field, index)
    } else {
        ValidationContext::at(format!("{}[{}]", ctx.field(field), name))
    }
}

/// Validates every section of `field` and reports names seen more than once.
fn validate_sections<'a, T, I>(
    ctx: &ValidationContext,
    field: &str,
    sections: I,
    errors: &mut ValidationErrors,
) where
    T: Validate + 'a,
    I: IntoIterator<Item = (&'a str, &'a T)>,
{
    let mut seen = HashSet::new();
    for (i, (name, section)) in sections.into_iter().enumerate() {
        let section_ctx = section_context(ctx, field, name, i);
        if let Err(e) = section.context_validate(&section_ctx) {
            errors.extend(e);
        }
        if !name.is_empty() && !seen.insert(name) {
            errors.push(FieldError::new(
                section_ctx.field("name"),
                ValidationErrorKind::Duplicate {
                    name: name.to_string(),
                },
            ));
        }
    }
}

impl Validate for Configuration {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(global) = &self.global {
            if let Err(e) = global.context_validate(&ctx.child("global")) {
                errors.extend(e);
            }
        }

        validate_sections(
            ctx,
            "defaults",
            self.defaults
                .iter()
                .map(|d| (d.name.as_deref().unwrap_or_default(), d)),
            &mut errors,
        );
        for (i, section) in self.defaults.iter().enumerate() {
            let Some(from) = section.from.as_deref() else {
                continue;
            };
            if self.defaults_section(from).is_none() {
                let name = section.name.as_deref().unwrap_or_default();
                errors.push(FieldError::new(
                    section_context(ctx, "defaults", name, i).field("from"),
                    ValidationErrorKind::Invalid {
                        reason: format!("unknown defaults section '{}'", from),
                    },
                ));
            }
        }

        validate_sections(
            ctx,
            "backends",
            self.backends.iter().map(|b| (b.name.as_str(), b)),
            &mut errors,
        );
        validate_sections(
            ctx,
            "acme_providers",
            self.acme_providers.iter().map(|p| (p.name.as_str(), p)),
            &mut errors,
        );

        for (i, rule) in self.http_after_response_rules.iter().enumerate() {
            if let Err(e) = rule.context_validate(&ctx.index("http_after_response_rules", i)) {
                errors.extend(e);
            }
        }

        errors.into_result()
    }
}
