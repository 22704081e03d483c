use ospo_core::{RequestStatus, RequestType, SubmitRequest};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum RequestCommands {
    /// List your requests
    List {
        /// Only requests in this status (pending, in_review, approved, rejected)
        #[arg(long)]
        status: Option<RequestStatus>,
    },
    /// Pending and in-review requests, one page at a time
    Open {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Request counts by status
    Stats,
    /// Submit a new request
    Submit {
        #[command(subcommand)]
        kind: SubmitCommands,
    },
}

#[derive(Subcommand)]
pub enum SubmitCommands {
    /// Propose a new open-source project
    Project {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        project_name: Option<String>,
        /// GitHub repository URL
        #[arg(long)]
        project_url: Option<String>,
        #[arg(long)]
        license: Option<String>,
    },
    /// Ask approval for a pull request to an approved project
    PullRequest {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        project_name: Option<String>,
        /// GitHub pull request URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Ask for access to a project
    Access {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        project_name: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
}

impl SubmitCommands {
    /// Form data exactly as entered; validation happens later
    pub fn into_submit_request(self) -> SubmitRequest {
        match self {
            SubmitCommands::Project {
                title,
                project_name,
                project_url,
                license,
            } => SubmitRequest {
                request_type: RequestType::Project,
                title,
                project_name,
                project_url,
                license,
                role: None,
            },
            SubmitCommands::PullRequest {
                title,
                project_name,
                url,
            } => SubmitRequest {
                request_type: RequestType::PullRequest,
                title,
                project_name,
                project_url: url,
                license: None,
                role: None,
            },
            SubmitCommands::Access {
                title,
                project_name,
                role,
            } => SubmitRequest {
                request_type: RequestType::Access,
                title,
                project_name,
                project_url: None,
                license: None,
                role,
            },
        }
    }
}
