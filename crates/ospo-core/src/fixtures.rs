//! Seed data for the demo backend and for tests.

use crate::{
    ApprovedProject, Project, ProjectStatus, Request, RequestStatus, RequestType, User, UserRole,
};

use chrono::{DateTime, TimeZone, Utc};

pub const MOCK_USER_ID: &str = "USER001";

pub fn mock_user() -> User {
    User {
        corporate_id: MOCK_USER_ID.to_string(),
        github_username: "john.doe".to_string(),
        name: "John Doe".to_string(),
        department: "Engineering".to_string(),
        role: UserRole::User,
    }
}

/// `(id, name, description, status, last activity)`
type ProjectRow = (&'static str, &'static str, &'static str, ProjectStatus, &'static str);

const AUTHORED: [ProjectRow; 3] = [
    (
        "1",
        "React Components Library",
        "Reusable UI components",
        ProjectStatus::Active,
        "2 days ago",
    ),
    ("2", "API Gateway Service", "Microservices gateway", ProjectStatus::Approved, "1 week ago"),
    (
        "3",
        "Data Analytics Tool",
        "Business intelligence dashboard",
        ProjectStatus::Pending,
        "3 days ago",
    ),
];

const CONTRIBUTED: [ProjectRow; 4] = [
    (
        "4",
        "Open Source ML Framework",
        "Machine learning utilities",
        ProjectStatus::Active,
        "1 day ago",
    ),
    ("5", "DevOps Automation", "CI/CD pipeline tools", ProjectStatus::Active, "4 days ago"),
    (
        "6",
        "Security Scanner",
        "Vulnerability assessment tool",
        ProjectStatus::Approved,
        "1 week ago",
    ),
    ("7", "Documentation Generator", "Auto-generate API docs", ProjectStatus::Active, "2 days ago"),
];

const APPROVED: [ProjectRow; 5] = [
    (
        "8",
        "Cloud Infrastructure",
        "Kubernetes deployment configs",
        ProjectStatus::Approved,
        "5 days ago",
    ),
    (
        "9",
        "Monitoring Dashboard",
        "System health monitoring",
        ProjectStatus::Approved,
        "1 week ago",
    ),
    (
        "10",
        "Authentication Service",
        "OAuth2 implementation",
        ProjectStatus::Approved,
        "3 days ago",
    ),
    (
        "11",
        "Logging Framework",
        "Centralized logging solution",
        ProjectStatus::Approved,
        "6 days ago",
    ),
    ("12", "Testing Utilities", "Automated testing tools", ProjectStatus::Approved, "2 weeks ago"),
];

fn projects(rows: &[ProjectRow]) -> Vec<Project> {
    rows.iter()
        .map(|&(id, name, description, status, last_activity)| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status,
            last_activity: last_activity.to_string(),
        })
        .collect()
}

pub fn authored_projects() -> Vec<Project> {
    projects(&AUTHORED)
}

pub fn contributed_projects() -> Vec<Project> {
    projects(&CONTRIBUTED)
}

pub fn approved_projects() -> Vec<Project> {
    projects(&APPROVED)
}

fn timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .unwrap_or_default()
}

/// Requests already on file for [`MOCK_USER_ID`]
pub fn pending_requests() -> Vec<Request> {
    vec![
        Request {
            id: "req-1".to_string(),
            request_type: RequestType::Access,
            title: "request muppet access".to_string(),
            status: RequestStatus::Pending,
            project_name: Some("the muppets".to_string()),
            requester_id: Some(MOCK_USER_ID.to_string()),
            created_at: timestamp(2025, 8, 22, 15, 9, 47),
        },
        Request {
            id: "req-2".to_string(),
            request_type: RequestType::Project,
            title: "New Documentation Site".to_string(),
            status: RequestStatus::InReview,
            project_name: None,
            requester_id: Some(MOCK_USER_ID.to_string()),
            created_at: timestamp(2025, 8, 20, 10, 30, 0),
        },
        Request {
            id: "req-3".to_string(),
            request_type: RequestType::PullRequest,
            title: "Bug fix for authentication".to_string(),
            status: RequestStatus::Pending,
            project_name: Some("Authentication Service".to_string()),
            requester_id: Some(MOCK_USER_ID.to_string()),
            created_at: timestamp(2025, 8, 21, 14, 15, 0),
        },
    ]
}

struct CatalogRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    repository_url: &'static str,
    license: &'static str,
    contribution_type: &'static str,
    maintainer_contact: &'static str,
    approved_on: (i32, u32, u32),
    with_maintenance: bool,
}

const CATALOG: [CatalogRow; 8] = [
    CatalogRow {
        id: "1",
        name: "React",
        description: "A JavaScript library for building user interfaces",
        repository_url: "https://github.com/facebook/react",
        license: "MIT",
        contribution_type: "CLA",
        maintainer_contact: "react-team@meta.com",
        approved_on: (2024, 1, 15),
        with_maintenance: false,
    },
    CatalogRow {
        id: "2",
        name: "Vue.js",
        description: "The Progressive JavaScript Framework",
        repository_url: "https://github.com/vuejs/vue",
        license: "MIT",
        contribution_type: "DCO",
        maintainer_contact: "team@vuejs.org",
        approved_on: (2024, 1, 10),
        with_maintenance: true,
    },
    CatalogRow {
        id: "3",
        name: "Angular",
        description: "Deliver web apps with confidence",
        repository_url: "https://github.com/angular/angular",
        license: "MIT",
        contribution_type: "CLA",
        maintainer_contact: "angular-team@google.com",
        approved_on: (2024, 1, 20),
        with_maintenance: false,
    },
    CatalogRow {
        id: "4",
        name: "Node.js",
        description: "Node.js JavaScript runtime",
        repository_url: "https://github.com/nodejs/node",
        license: "MIT",
        contribution_type: "DCO",
        maintainer_contact: "nodejs-team@nodejs.org",
        approved_on: (2024, 1, 25),
        with_maintenance: true,
    },
    CatalogRow {
        id: "5",
        name: "TypeScript",
        description: "TypeScript is a superset of JavaScript",
        repository_url: "https://github.com/microsoft/TypeScript",
        license: "Apache-2.0",
        contribution_type: "CLA",
        maintainer_contact: "typescript@microsoft.com",
        approved_on: (2024, 2, 1),
        with_maintenance: false,
    },
    CatalogRow {
        id: "6",
        name: "Kubernetes",
        description: "Production-Grade Container Scheduling and Management",
        repository_url: "https://github.com/kubernetes/kubernetes",
        license: "Apache-2.0",
        contribution_type: "CLA",
        maintainer_contact: "kubernetes-dev@googlegroups.com",
        approved_on: (2024, 2, 5),
        with_maintenance: true,
    },
    CatalogRow {
        id: "7",
        name: "Docker",
        description: "Docker container platform",
        repository_url: "https://github.com/docker/docker-ce",
        license: "Apache-2.0",
        contribution_type: "DCO",
        maintainer_contact: "docker-maintainers@docker.com",
        approved_on: (2024, 2, 10),
        with_maintenance: false,
    },
    CatalogRow {
        id: "8",
        name: "Webpack",
        description: "A bundler for javascript and friends",
        repository_url: "https://github.com/webpack/webpack",
        license: "MIT",
        contribution_type: "DCO",
        maintainer_contact: "webpack-team@webpack.js.org",
        approved_on: (2024, 2, 15),
        with_maintenance: true,
    },
];

impl CatalogRow {
    fn to_project(&self) -> ApprovedProject {
        let mut allowed = vec!["bug-fix", "feature", "documentation", "testing"];
        if self.with_maintenance {
            allowed.push("maintenance");
        }

        let (year, month, day) = self.approved_on;

        ApprovedProject {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            repository_url: self.repository_url.to_string(),
            license: self.license.to_string(),
            contribution_type: self.contribution_type.to_string(),
            maintainer_contact: self.maintainer_contact.to_string(),
            approval_date: timestamp(year, month, day, 0, 0, 0),
            is_active: true,
            allowed_contribution_types: allowed.into_iter().map(String::from).collect(),
        }
    }
}

/// Catalog of upstream projects cleared for contribution
pub fn approved_catalog() -> Vec<ApprovedProject> {
    CATALOG.iter().map(CatalogRow::to_project).collect()
}
