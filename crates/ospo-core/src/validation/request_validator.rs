//! Client-side checks run before a request is dispatched.
//!
//! Each rule reports at most one message per field, first failing rule wins.

use crate::{RequestType, SubmitRequest, ValidationLimits, ValidationReport};

use regex::Regex;
use url::Url;

const GITHUB_HOST: &str = "github.com";
const PULL_REQUEST_PATH_PATTERN: &str = r"/pull/\d+";

pub const FIELD_TITLE: &str = "title";
pub const FIELD_PROJECT_NAME: &str = "projectName";
pub const FIELD_PROJECT_URL: &str = "projectUrl";
pub const FIELD_LICENSE: &str = "license";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_PULL_REQUEST_URL: &str = "pullRequestUrl";

/// Validates request form data against the rules for its type
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    limits: ValidationLimits,
}

impl RequestValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Dispatch on the request type
    pub fn validate(&self, data: &SubmitRequest) -> ValidationReport {
        match data.request_type {
            RequestType::Project => self.validate_project_request(data),
            RequestType::PullRequest => self.validate_pull_request_request(data),
            RequestType::Access => self.validate_access_request(data),
        }
    }

    /// Title, project name, GitHub project URL and license are required
    pub fn validate_project_request(&self, data: &SubmitRequest) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_title(&data.title, &mut report);
        self.check_project_name(data.project_name.as_deref(), true, &mut report);

        match non_blank(data.project_url.as_deref()) {
            None => report.push(FIELD_PROJECT_URL, "Project URL is required"),
            Some(url) => match Url::parse(url) {
                Err(_) => report.push(FIELD_PROJECT_URL, "Please enter a valid URL"),
                Ok(parsed) if !is_github_repository(&parsed) => report.push(
                    FIELD_PROJECT_URL,
                    "Only GitHub URLs are currently supported",
                ),
                Ok(_) => {}
            },
        }

        if non_blank(data.license.as_deref()).is_none() {
            report.push(FIELD_LICENSE, "License selection is required");
        }

        report
    }

    /// Title, project name and role are required
    pub fn validate_access_request(&self, data: &SubmitRequest) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_title(&data.title, &mut report);
        self.check_project_name(data.project_name.as_deref(), true, &mut report);

        if non_blank(data.role.as_deref()).is_none() {
            report.push(FIELD_ROLE, "Role selection is required");
        }

        report
    }

    /// Title, project name and a GitHub pull request URL are required.
    /// The URL travels in `project_url`.
    pub fn validate_pull_request_request(&self, data: &SubmitRequest) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_title(&data.title, &mut report);
        self.check_project_name(data.project_name.as_deref(), false, &mut report);

        match non_blank(data.project_url.as_deref()) {
            None => report.push(FIELD_PULL_REQUEST_URL, "Pull request URL is required"),
            Some(url) => match Url::parse(url) {
                Err(_) => report.push(FIELD_PULL_REQUEST_URL, "Please enter a valid URL"),
                Ok(parsed) if !is_github_pull_request(&parsed) => report.push(
                    FIELD_PULL_REQUEST_URL,
                    "Please enter a valid GitHub pull request URL",
                ),
                Ok(_) => {}
            },
        }

        report
    }

    fn check_title(&self, title: &str, report: &mut ValidationReport) {
        let length = title.trim().chars().count();

        if length == 0 {
            report.push(FIELD_TITLE, "Title is required");
        } else if length < self.limits.min_title_length {
            report.push(
                FIELD_TITLE,
                format!(
                    "Title must be at least {} characters long",
                    self.limits.min_title_length
                ),
            );
        } else if length > self.limits.max_title_length {
            report.push(
                FIELD_TITLE,
                format!(
                    "Title must be less than {} characters",
                    self.limits.max_title_length
                ),
            );
        }
    }

    fn check_project_name(
        &self,
        project_name: Option<&str>,
        enforce_min_length: bool,
        report: &mut ValidationReport,
    ) {
        match non_blank(project_name) {
            None => report.push(FIELD_PROJECT_NAME, "Project name is required"),
            Some(name)
                if enforce_min_length
                    && name.chars().count() < self.limits.min_project_name_length =>
            {
                report.push(
                    FIELD_PROJECT_NAME,
                    format!(
                        "Project name must be at least {} characters long",
                        self.limits.min_project_name_length
                    ),
                )
            }
            Some(_) => {}
        }
    }
}

/// Trimmed value, or None when missing or whitespace only
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A github.com URL that points somewhere below the root
pub fn is_github_repository(url: &Url) -> bool {
    url.host_str() == Some(GITHUB_HOST) && url.path().len() > 1
}

/// A github.com URL whose path contains `/pull/<digits>`
pub fn is_github_pull_request(url: &Url) -> bool {
    url.host_str() == Some(GITHUB_HOST)
        && Regex::new(PULL_REQUEST_PATH_PATTERN).map_or(false, |re| re.is_match(url.path()))
}
