use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects approved for contribution
    Approved,

    /// List projects owned by the session user
    Authored,

    /// List projects the session user has contributed to
    Contributed,
}
