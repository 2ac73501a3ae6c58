use std::fmt;

#[derive(Debug, Clone)]
pub enum PixeltrackError {
    InvalidTrackingId(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    Serialization(String),
    FileOperation(String),
}

impl PixeltrackError {
    pub fn code(&self) -> &'static str {
        match self {
            PixeltrackError::InvalidTrackingId(_) => "E001",
            PixeltrackError::DatabaseConfig(_) => "E002",
            PixeltrackError::DatabaseConnection(_) => "E003",
            PixeltrackError::DatabaseOperation(_) => "E004",
            PixeltrackError::Validation(_) => "E005",
            PixeltrackError::Serialization(_) => "E006",
            PixeltrackError::FileOperation(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            PixeltrackError::InvalidTrackingId(_) => "Invalid Tracking Id",
            PixeltrackError::DatabaseConfig(_) => "Database Configuration Error",
            PixeltrackError::DatabaseConnection(_) => "Database Connection Error",
            PixeltrackError::DatabaseOperation(_) => "Database Operation Error",
            PixeltrackError::Validation(_) => "Validation Error",
            PixeltrackError::Serialization(_) => "Serialization Error",
            PixeltrackError::FileOperation(_) => "File Operation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PixeltrackError::InvalidTrackingId(msg) => msg,
            PixeltrackError::DatabaseConfig(msg) => msg,
            PixeltrackError::DatabaseConnection(msg) => msg,
            PixeltrackError::DatabaseOperation(msg) => msg,
            PixeltrackError::Validation(msg) => msg,
            PixeltrackError::Serialization(msg) => msg,
            PixeltrackError::FileOperation(msg) => msg,
        }
    }

    /// 客户端错误（422 类）还是服务端错误（500 类）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PixeltrackError::InvalidTrackingId(_) | PixeltrackError::Validation(_)
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PixeltrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PixeltrackError {}

// 便捷的构造函数
impl PixeltrackError {
    pub fn invalid_tracking_id<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::InvalidTrackingId(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        PixeltrackError::FileOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for PixeltrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        PixeltrackError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PixeltrackError {
    fn from(err: std::io::Error) -> Self {
        PixeltrackError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PixeltrackError {
    fn from(err: serde_json::Error) -> Self {
        PixeltrackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PixeltrackError>;
