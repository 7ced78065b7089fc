use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Fetch failed for {url}: {message}")]
    FetchError { url: String, message: String },

    #[error("Parse failed: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::FetchError { .. } => ErrorCategory::Network,
            DashboardError::ParseError { .. } => ErrorCategory::Parse,
            DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路問題通常重跑即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch dashboard data ({})", self),
            ErrorCategory::Parse => format!("Dashboard data was not a JSON array ({})", self),
            ErrorCategory::Configuration => format!("Invalid configuration ({})", self),
            ErrorCategory::System => format!("System error ({})", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the server is running and --base-url points at it",
            ErrorCategory::Parse => "Check that /api/data returns a JSON array of user records",
            ErrorCategory::Configuration => "Fix the reported field in the CLI flags or TOML file",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }

    pub(crate) fn fetch_failed(url: impl Into<String>, message: impl ToString) -> Self {
        DashboardError::FetchError {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn parse_failed(message: impl ToString) -> Self {
        DashboardError::ParseError {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
