/// Keyword forwarded to the remote function when the caller supplies none
pub const DEFAULT_KEYWORD: &str = "nothing";

/// Query parameter carrying the keyword, both inbound and towards the remote function
pub const KEYWORD_PARAM: &str = "keyword";

/// Payload returned with a 200 status when no student matches the requested id
pub const STUDENT_NOT_FOUND: &str = "Student not found";

pub const STUDENT_CREATED: &str = "Student created successfully";
pub const STUDENT_EMAIL_UPDATED: &str = "Student email updated successfully";
pub const STUDENT_DELETED: &str = "Student deleted successfully";

/// Message sent to clients in place of storage error details, which are only logged
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

pub const REMOTE_FAILURE_MESSAGE: &str = "Failed to reach remote function";

/// Longest email address accepted, per the SMTP path limit
pub const MAX_EMAIL_LENGTH: usize = 254;
