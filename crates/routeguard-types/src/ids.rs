//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_ROUTES_PATH_SYNTAX: &str = "routes.path_syntax";

// Codes: routes.path_syntax
pub const CODE_EMPTY_PARAM_BEFORE_SLASH: &str = "empty_param_before_slash";
pub const CODE_DOUBLE_COLON: &str = "double_colon";
pub const CODE_TRAILING_COLON: &str = "trailing_colon";
pub const CODE_EMPTY_PARAM: &str = "empty_param";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
