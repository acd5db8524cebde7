use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::AppError;

pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Renders an instant in the named timezone. Unknown zone names fall back to
/// UTC so a bad display preference never fails the request.
pub fn to_local_display(instant: DateTime<Utc>, timezone_name: &str) -> String {
    match timezone_name.parse::<Tz>() {
        Ok(tz) => instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
        Err(_) => {
            warn!("Unknown timezone '{}', rendering in UTC", timezone_name);
            instant.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        }
    }
}

/// Interprets a timezone-naive `YYYY-MM-DD HH:MM` string as wall time in the
/// named zone. Ambiguous wall times (DST fall-back) resolve to the
/// standard-time instant; times inside a spring-forward gap are rejected.
pub fn to_utc(local: &str, timezone_name: &str) -> Result<DateTime<Utc>, AppError> {
    let tz: Tz = timezone_name
        .parse()
        .map_err(|_| AppError::InvalidTimezone(timezone_name.to_string()))?;

    let naive = NaiveDateTime::parse_from_str(local, LOCAL_DATETIME_FORMAT)
        .map_err(|_| AppError::InvalidDateTimeFormat(local.to_string()))?;

    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, standard) => standard,
        LocalResult::None => {
            return Err(AppError::InvalidDateTimeFormat(format!(
                "{} does not exist in {}",
                local, timezone_name
            )));
        }
    };

    Ok(resolved.with_timezone(&Utc))
}
