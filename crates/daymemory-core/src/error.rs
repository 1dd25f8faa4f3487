use std::fmt;

use http::StatusCode;

/// Closed catalog of every classified failure the system raises.
///
/// Each kind maps to exactly one HTTP status and one default user-facing
/// message. The set is fixed at compile time; nothing registers kinds at
/// runtime, so the catalog is safe to read from any number of request
/// tasks without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // User
    UserNotFound,
    UserAlreadyExists,
    InvalidPassword,
    InvalidToken,
    ExpiredToken,
    Unauthorized,
    Forbidden,

    // Event
    EventNotFound,
    EventDateInvalid,
    EventTypeInvalid,
    EventAccessDenied,
    EventNotRecurring,
    ReminderDaysInvalid,

    // Reminder
    ReminderNotFound,
    ReminderAlreadySent,
    EmailSendFailed,

    // Gift
    GiftNotFound,
    GiftAccessDenied,
    GiftCategoryInvalid,

    // File
    FileUploadFailed,
    FileSizeExceeded,
    InvalidFileType,

    // AI
    AiServiceUnavailable,
    AiRequestFailed,
    AiRecommendationNotFound,

    // External API
    ExternalApiError,

    // Common
    InvalidInputValue,
    ValidationError,
    InvalidRequest,
    ServerInternalError,
    DatabaseError,
}

impl ErrorKind {
    /// Every kind in the catalog, in declaration order.
    pub const ALL: [Self; 31] = [
        Self::UserNotFound,
        Self::UserAlreadyExists,
        Self::InvalidPassword,
        Self::InvalidToken,
        Self::ExpiredToken,
        Self::Unauthorized,
        Self::Forbidden,
        Self::EventNotFound,
        Self::EventDateInvalid,
        Self::EventTypeInvalid,
        Self::EventAccessDenied,
        Self::EventNotRecurring,
        Self::ReminderDaysInvalid,
        Self::ReminderNotFound,
        Self::ReminderAlreadySent,
        Self::EmailSendFailed,
        Self::GiftNotFound,
        Self::GiftAccessDenied,
        Self::GiftCategoryInvalid,
        Self::FileUploadFailed,
        Self::FileSizeExceeded,
        Self::InvalidFileType,
        Self::AiServiceUnavailable,
        Self::AiRequestFailed,
        Self::AiRecommendationNotFound,
        Self::ExternalApiError,
        Self::InvalidInputValue,
        Self::ValidationError,
        Self::InvalidRequest,
        Self::ServerInternalError,
        Self::DatabaseError,
    ];

    /// HTTP status this kind translates to
    pub const fn status(self) -> StatusCode {
        match self {
            Self::UserNotFound
            | Self::EventNotFound
            | Self::ReminderNotFound
            | Self::GiftNotFound
            | Self::AiRecommendationNotFound => StatusCode::NOT_FOUND,

            Self::UserAlreadyExists | Self::ReminderAlreadySent => StatusCode::CONFLICT,

            Self::InvalidPassword | Self::InvalidToken | Self::ExpiredToken | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }

            Self::Forbidden | Self::EventAccessDenied | Self::GiftAccessDenied => StatusCode::FORBIDDEN,

            Self::EventDateInvalid
            | Self::EventTypeInvalid
            | Self::EventNotRecurring
            | Self::ReminderDaysInvalid
            | Self::GiftCategoryInvalid
            | Self::FileSizeExceeded
            | Self::InvalidFileType
            | Self::InvalidInputValue
            | Self::ValidationError
            | Self::InvalidRequest => StatusCode::BAD_REQUEST,

            Self::EmailSendFailed
            | Self::FileUploadFailed
            | Self::AiRequestFailed
            | Self::ServerInternalError
            | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::AiServiceUnavailable | Self::ExternalApiError => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Stable wire code, suitable for programmatic branching by clients
    pub const fn name(self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::EventDateInvalid => "EVENT_DATE_INVALID",
            Self::EventTypeInvalid => "EVENT_TYPE_INVALID",
            Self::EventAccessDenied => "EVENT_ACCESS_DENIED",
            Self::EventNotRecurring => "EVENT_NOT_RECURRING",
            Self::ReminderDaysInvalid => "REMINDER_DAYS_INVALID",
            Self::ReminderNotFound => "REMINDER_NOT_FOUND",
            Self::ReminderAlreadySent => "REMINDER_ALREADY_SENT",
            Self::EmailSendFailed => "EMAIL_SEND_FAILED",
            Self::GiftNotFound => "GIFT_NOT_FOUND",
            Self::GiftAccessDenied => "GIFT_ACCESS_DENIED",
            Self::GiftCategoryInvalid => "GIFT_CATEGORY_INVALID",
            Self::FileUploadFailed => "FILE_UPLOAD_FAILED",
            Self::FileSizeExceeded => "FILE_SIZE_EXCEEDED",
            Self::InvalidFileType => "INVALID_FILE_TYPE",
            Self::AiServiceUnavailable => "AI_SERVICE_UNAVAILABLE",
            Self::AiRequestFailed => "AI_REQUEST_FAILED",
            Self::AiRecommendationNotFound => "AI_RECOMMENDATION_NOT_FOUND",
            Self::ExternalApiError => "EXTERNAL_API_ERROR",
            Self::InvalidInputValue => "INVALID_INPUT_VALUE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ServerInternalError => "SERVER_INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Default user-facing message
    pub const fn message(self) -> &'static str {
        match self {
            Self::UserNotFound => "user not found",
            Self::UserAlreadyExists => "an account with this email already exists",
            Self::InvalidPassword => "incorrect password",
            Self::InvalidToken => "invalid token",
            Self::ExpiredToken => "expired token",
            Self::Unauthorized => "authentication required",
            Self::Forbidden => "access denied",
            Self::EventNotFound => "event not found",
            Self::EventDateInvalid => "invalid event date",
            Self::EventTypeInvalid => "invalid event type",
            Self::EventAccessDenied => "no permission to access this event",
            Self::EventNotRecurring => "event is not recurring",
            Self::ReminderDaysInvalid => "reminder days must be at least 1",
            Self::ReminderNotFound => "reminder not found",
            Self::ReminderAlreadySent => "reminder has already been sent",
            Self::EmailSendFailed => "failed to send email",
            Self::GiftNotFound => "gift not found",
            Self::GiftAccessDenied => "no permission to access this gift",
            Self::GiftCategoryInvalid => "invalid gift category",
            Self::FileUploadFailed => "file upload failed",
            Self::FileSizeExceeded => "file size exceeds the 5MB limit",
            Self::InvalidFileType => "only image files can be uploaded",
            Self::AiServiceUnavailable => "AI service is unavailable",
            Self::AiRequestFailed => "AI recommendation request failed",
            Self::AiRecommendationNotFound => "AI recommendation not found",
            Self::ExternalApiError => "external API call failed",
            Self::InvalidInputValue => "invalid input value",
            Self::ValidationError => "input validation failed",
            Self::InvalidRequest => "invalid request",
            Self::ServerInternalError => "an internal server error occurred",
            Self::DatabaseError => "a database error occurred",
        }
    }

    /// Look up a kind by its wire code
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Classified failure raised by business logic.
///
/// Wraps exactly one catalog kind, optionally with extra detail for the
/// operational log. Propagates untouched up the call stack until the
/// response boundary translates it; no intermediate layer may swallow or
/// re-map it. The detail never reaches the client — response bodies carry
/// the catalog message only.
#[derive(Debug, Clone)]
pub struct DomainError {
    kind: ErrorKind,
    detail: Option<String>,
}

impl DomainError {
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind, detail: None }
    }

    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message: the detail when present, the catalog
    /// message otherwise
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or_else(|| self.kind.message())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message())
    }
}

impl std::error::Error for DomainError {}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
