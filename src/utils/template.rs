//! String template rendering utilities.
//!
//! Placeholders use `{{key}}` syntax. Keys never contain spaces, so
//! GitHub Actions expressions (`${{ github.sha }}`) pass through
//! untouched and are resolved when the workflow itself runs.

pub struct TemplateVars;

impl TemplateVars {
    pub const PROJECT: &'static str = "project";
    pub const REGION: &'static str = "region";
    pub const ENVIRONMENT: &'static str = "environment";
    pub const TARGET: &'static str = "target";
    pub const ROLE_ARN: &'static str = "roleArn";
    pub const REPOSITORY: &'static str = "repository";
    pub const ENVIRONMENTS: &'static str = "environments";
    pub const TRIGGER: &'static str = "trigger";
    pub const DEPLOY_COMMANDS: &'static str = "deployCommands";
    pub const REVISION: &'static str = "revision";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
