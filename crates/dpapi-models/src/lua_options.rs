use crate::validate::{NO_WHITESPACE, Validate, ValidationContext, Validator};
use crate::{comparable, leaf_comparable};
use dpapi_error::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Lua settings of the `global` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuaOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub loads: Vec<LuaLoad>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_per_thread: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prepend_path: Vec<LuaPrependPath>,
}

/// `lua-load <file>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuaLoad {
    pub file: String,
}

/// `lua-prepend-path <name> [path|cpath]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuaPrependPath {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LuaPathType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LuaPathType {
    Path,
    Cpath,
}

leaf_comparable!(LuaPathType);

comparable!(LuaOptions {
    loads,
    load_per_thread,
    prepend_path,
});

comparable!(LuaLoad { file });

comparable!(LuaPrependPath {
    name,
    kind as "type",
});

impl Validate for LuaOptions {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .each("loads", &self.loads)
            .pattern_opt(
                "load_per_thread",
                self.load_per_thread.as_deref(),
                &NO_WHITESPACE,
            )
            .each("prepend_path", &self.prepend_path)
            .finish()
    }
}

impl Validate for LuaLoad {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("file", &self.file)
            .pattern("file", &self.file, &NO_WHITESPACE)
            .finish()
    }
}

impl Validate for LuaPrependPath {
    fn context_validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        Validator::new(ctx)
            .required_str("name", &self.name)
            .finish()
    }
}
