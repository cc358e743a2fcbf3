use chrono::NaiveDate;
use ulid::Ulid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    NotFound(Ulid),
    EmailTaken(String),
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    DateNotAvailable(NaiveDate),
    /// The candidate stay intersects the identified existing booking.
    OverlapConflict(Ulid),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(id) => write!(f, "not found: {id}"),
            EngineError::EmailTaken(email) => write!(f, "email already registered: {email}"),
            EngineError::InvalidDateRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "check-out {check_out} must be strictly after check-in {check_in}"
                )
            }
            EngineError::DateNotAvailable(date) => {
                write!(f, "listing not open for stay on {date}")
            }
            EngineError::OverlapConflict(id) => {
                write!(f, "dates overlap existing booking: {id}")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
