use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Anything that names a single instant and can be normalized to UTC.
///
/// Naive values carry no offset and are taken to already be in UTC, which is
/// how the DMI service interprets timestamps without a zone designator.
pub trait IntoUtcDateTime {
    fn into_utc(self) -> DateTime<Utc>;
}

/// Read as a UTC wall-clock time; no offset is applied.
impl IntoUtcDateTime for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

/// Midnight UTC at the start of the day.
impl IntoUtcDateTime for NaiveDate {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.and_time(NaiveTime::MIN))
    }
}

/// Shifted from the system time zone's offset at that instant.
impl IntoUtcDateTime for DateTime<Local> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Returned unchanged.
impl IntoUtcDateTime for DateTime<Utc> {
    fn into_utc(self) -> DateTime<Utc> {
        self
    }
}

/// Shifted by its fixed offset, so `01:00+01:00` becomes `00:00Z`.
impl IntoUtcDateTime for DateTime<FixedOffset> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}
