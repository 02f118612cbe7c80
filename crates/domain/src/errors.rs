use thiserror::Error;

/// Failure while turning a profile document into a compiled configuration.
///
/// Every variant aborts the load before the engine is touched.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse profile: {0}")]
    Parse(String),

    #[error("Invalid profile: {0}")]
    Compile(#[from] CompileError),
}

/// Semantic problems found while compiling a well-formed raw config.
///
/// All problems are collected rather than stopping at the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .issues.join("; "))]
pub struct CompileError {
    pub issues: Vec<String>,
}

impl CompileError {
    pub fn new(issue: impl Into<String>) -> Self {
        Self {
            issues: vec![issue.into()],
        }
    }

    pub fn from_issues(issues: Vec<String>) -> Self {
        Self { issues }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Network {0} has no usable addresses")]
    EmptyPool(String),

    #[error("Fake-IP pool capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Fake-IP enhanced mode requires a fake-IP pool")]
    MissingPool,

    #[error("Resolver requires at least one main name server")]
    NoNameServers,
}
