pub const APP_NAME: &str = "AHS Freight Desk";
pub const APP_AUTHOR: &str = "AHS Pakistan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Git tag when built from a tagged checkout, "v{cargo version}" otherwise.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}
