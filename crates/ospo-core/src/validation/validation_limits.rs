pub const DEFAULT_MIN_TITLE_LENGTH: usize = 3;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_MIN_PROJECT_NAME_LENGTH: usize = 2;

/// Length bounds applied to request form fields (trimmed, in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub min_title_length: usize,
    pub max_title_length: usize,
    pub min_project_name_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_title_length: DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            min_project_name_length: DEFAULT_MIN_PROJECT_NAME_LENGTH,
        }
    }
}
