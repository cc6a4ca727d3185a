use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct ConfirmVideoRequest {
    pub confirmed: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SelectAnswerRequest {
    /// Full option text, label included (e.g. `"B. Stay calm"`).
    #[validate(length(min = 1, max = 500, message = "Option text must not be empty"))]
    pub option: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SkillApplicationRequest {
    #[validate(length(min = 1, max = 100, message = "Choice must not be empty"))]
    pub choice: String,
}

/// Query string of a manager section render.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SectionQuery {
    #[validate(length(min = 1, max = 100))]
    pub member: Option<String>,
}
