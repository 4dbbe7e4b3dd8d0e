use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Recording date and time of the first frame of a DV file.
///
/// The values are wall-clock local time at capture; DV headers carry no
/// time zone. Fields stay plain integers because the packed header can
/// encode combinations no calendar accepts (day 31 of a 30-day month, hour
/// 39): every decoded value formats without panicking, while
/// [RecordingDateTime::to_naive] is the checked calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl RecordingDateTime {
    /// File name under the clip naming convention iMovie '08 uses to
    /// recover capture dates, e.g. `clip-2008-07-28 09;30;00.dv`.
    pub fn clip_file_name(&self) -> String {
        format!(
            "clip-{:04}-{:02}-{:02} {:02};{:02};{:02}.dv",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Date argument for `SetFile -d`, e.g. `07/28/2008 09:30:00`.
    pub fn set_file_argument(&self) -> String {
        format!(
            "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
            self.month, self.day, self.year, self.hour, self.minute, self.second
        )
    }

    /// Checked conversion to a calendar value. Returns `None` when the
    /// decoded fields do not name a real date and time.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())?
            .and_hms_opt(self.hour.into(), self.minute.into(), self.second.into())
    }
}

impl fmt::Display for RecordingDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
