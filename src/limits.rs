//! Input-size limits enforced by the mutation paths.

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NAME_LEN: usize = 120;
pub const MAX_LOCATION_LEN: usize = 120;
pub const MAX_DESCRIPTION_LEN: usize = 4096;
/// A listing enumerates every open day explicitly; cap the set at roughly
/// one year of days.
pub const MAX_OPEN_DATES: usize = 366;
