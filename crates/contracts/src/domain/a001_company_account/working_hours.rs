//! Weekly working-hours codec.
//!
//! Company accounts persist their availability as a flat list of strings on
//! the `working_hours` field, at most one entry per weekday:
//!
//! ```text
//! "Monday: 09:00 - 17:00"
//! "Tuesday: Closed"
//! ```
//!
//! `decode` turns that list into a structured [`WeeklySchedule`] for the form
//! (one [`DaySchedule`] per weekday, canonical Monday..Sunday order), and
//! [`update`] recomputes the list after a single-day edit. Both functions are
//! pure and never fail: malformed entries degrade to the default hours
//! instead of raising an error, so corrupt stored data is silently repaired
//! on the next save.

/// Fallback opening time used when an entry is missing or malformed.
pub const DEFAULT_START: &str = "09:00";
/// Fallback closing time used when an entry is missing or malformed.
pub const DEFAULT_END: &str = "17:00";

/// The seven weekdays in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, canonical Monday..Sunday order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Canonical index, Monday = 0 .. Sunday = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a day name. Case-sensitive, matching the wire format.
    pub fn from_name(s: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| d.name() == s)
    }

    /// Whether a serialized entry belongs to this day (`"<Day>:"` prefix).
    fn matches_entry(self, entry: &str) -> bool {
        entry
            .strip_prefix(self.name())
            .is_some_and(|rest| rest.starts_with(':'))
    }

    /// The weekday a serialized entry belongs to, if any.
    fn of_entry(entry: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| d.matches_entry(entry))
    }
}

/// One weekday's availability. `start`/`end` are `HH:MM` strings, kept as
/// strings for wire compatibility; they are meaningful only when `is_open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub is_open: bool,
    pub start: String,
    pub end: String,
}

impl DaySchedule {
    /// Closed day with the default hours pre-filled for the form.
    pub fn closed(day: Weekday) -> Self {
        Self {
            day,
            is_open: false,
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }

    fn open_default(day: Weekday) -> Self {
        Self {
            is_open: true,
            ..Self::closed(day)
        }
    }

    /// Serialized form of this day.
    pub fn to_entry(&self) -> String {
        if self.is_open {
            format!("{}: {} - {}", self.day.name(), self.start, self.end)
        } else {
            format!("{}: Closed", self.day.name())
        }
    }
}

/// Structured weekly availability: one entry per weekday, canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }
}

/// Decode a serialized schedule into one [`DaySchedule`] per weekday.
///
/// Total: missing or malformed entries produce the defaults instead of an
/// error. When a day occurs more than once, the first entry in input order
/// wins; `update` always collapses duplicates back to a single entry for the
/// day being edited.
pub fn decode(serialized: &[String]) -> WeeklySchedule {
    WeeklySchedule {
        days: Weekday::ALL.map(|day| decode_day(serialized, day)),
    }
}

fn decode_day(serialized: &[String], day: Weekday) -> DaySchedule {
    let Some(entry) = serialized.iter().find(|s| day.matches_entry(s)) else {
        return DaySchedule::closed(day);
    };
    let Some((_, rest)) = entry.split_once(": ") else {
        // Day prefix without the ": " separator, e.g. "Monday:09". Open with
        // default hours rather than failing.
        return DaySchedule::open_default(day);
    };
    if rest == "Closed" {
        return DaySchedule::closed(day);
    }
    let (start, end) = rest.split_once(" - ").unwrap_or((rest, ""));
    DaySchedule {
        day,
        is_open: true,
        start: non_empty(start, DEFAULT_START),
        end: non_empty(end, DEFAULT_END),
    }
}

fn non_empty(token: &str, fallback: &str) -> String {
    if token.is_empty() {
        fallback.to_string()
    } else {
        token.to_string()
    }
}

/// Recompute the serialized schedule after editing a single day.
///
/// Every existing entry for `day` is removed (collapsing duplicates), exactly
/// one new entry is appended, and the list is sorted by canonical weekday
/// index. Entries that do not name a known weekday sort after Sunday and keep
/// their relative order.
pub fn update(current: &[String], day: Weekday, is_open: bool, start: &str, end: &str) -> Vec<String> {
    let mut next: Vec<String> = current
        .iter()
        .filter(|entry| !day.matches_entry(entry))
        .cloned()
        .collect();
    next.push(
        DaySchedule {
            day,
            is_open,
            start: start.to_string(),
            end: end.to_string(),
        }
        .to_entry(),
    );
    next.sort_by_key(|entry| Weekday::of_entry(entry).map_or(Weekday::ALL.len(), Weekday::index));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn update_then_decode_open_day() {
        for day in Weekday::ALL {
            let encoded = update(&[], day, true, "08:00", "12:00");
            assert_eq!(encoded, vec![format!("{}: 08:00 - 12:00", day.name())]);

            let schedule = decode(&encoded);
            let d = schedule.day(day);
            assert!(d.is_open);
            assert_eq!(d.start, "08:00");
            assert_eq!(d.end, "12:00");
        }
    }

    #[test]
    fn update_then_decode_closed_day() {
        for day in Weekday::ALL {
            let encoded = update(&[], day, false, "08:00", "12:00");
            assert_eq!(encoded, vec![format!("{}: Closed", day.name())]);
            assert!(!decode(&encoded).day(day).is_open);
        }
    }

    #[test]
    fn update_is_idempotent() {
        let once = update(&[], Weekday::Tuesday, true, "10:00", "14:00");
        let twice = update(&once, Weekday::Tuesday, true, "10:00", "14:00");
        assert_eq!(once, twice);
    }

    #[test]
    fn updates_keep_canonical_order() {
        let mut hours = Vec::new();
        hours = update(&hours, Weekday::Sunday, true, "10:00", "14:00");
        hours = update(&hours, Weekday::Wednesday, false, "09:00", "17:00");
        hours = update(&hours, Weekday::Monday, true, "08:00", "16:00");
        assert_eq!(
            hours,
            entries(&[
                "Monday: 08:00 - 16:00",
                "Wednesday: Closed",
                "Sunday: 10:00 - 14:00",
            ])
        );
    }

    #[test]
    fn decode_fills_missing_days_with_closed_defaults() {
        let schedule = decode(&entries(&["Monday: 09:00 - 17:00", "Tuesday: Closed"]));

        let monday = schedule.day(Weekday::Monday);
        assert!(monday.is_open);
        assert_eq!(monday.start, "09:00");
        assert_eq!(monday.end, "17:00");

        for day in [
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ] {
            let d = schedule.day(day);
            assert!(!d.is_open);
            assert_eq!(d.start, DEFAULT_START);
            assert_eq!(d.end, DEFAULT_END);
        }
    }

    #[test]
    fn decode_of_empty_list_is_all_closed() {
        let schedule = decode(&[]);
        for d in &schedule.days {
            assert!(!d.is_open);
            assert_eq!(d.start, DEFAULT_START);
            assert_eq!(d.end, DEFAULT_END);
        }
    }

    #[test]
    fn decode_tolerates_missing_end_time() {
        // No " - " separator at all: the single token becomes the start time.
        let d = decode(&entries(&["Monday: 09:00"]));
        let monday = d.day(Weekday::Monday);
        assert!(monday.is_open);
        assert_eq!(monday.start, "09:00");
        assert_eq!(monday.end, DEFAULT_END);

        // Separator present but the end token is empty.
        let d = decode(&entries(&["Monday: 09:00 - "]));
        let monday = d.day(Weekday::Monday);
        assert!(monday.is_open);
        assert_eq!(monday.start, "09:00");
        assert_eq!(monday.end, DEFAULT_END);
    }

    #[test]
    fn decode_tolerates_missing_separator_after_day() {
        let d = decode(&entries(&["Monday:09"]));
        let monday = d.day(Weekday::Monday);
        assert!(monday.is_open);
        assert_eq!(monday.start, DEFAULT_START);
        assert_eq!(monday.end, DEFAULT_END);
    }

    #[test]
    fn decode_first_duplicate_wins() {
        let d = decode(&entries(&["Monday: 08:00 - 12:00", "Monday: Closed"]));
        let monday = d.day(Weekday::Monday);
        assert!(monday.is_open);
        assert_eq!(monday.start, "08:00");
    }

    #[test]
    fn update_collapses_duplicate_entries() {
        let current = entries(&["Friday: Closed", "Friday: 10:00 - 11:00"]);
        let next = update(&current, Weekday::Friday, true, "09:00", "10:00");
        assert_eq!(next, entries(&["Friday: 09:00 - 10:00"]));
    }

    #[test]
    fn unknown_entries_sort_after_known_days() {
        let current = entries(&["Someday: 08:00 - 09:00", "Monday: Closed"]);
        let next = update(&current, Weekday::Sunday, true, "10:00", "12:00");
        assert_eq!(
            next,
            entries(&[
                "Monday: Closed",
                "Sunday: 10:00 - 12:00",
                "Someday: 08:00 - 09:00",
            ])
        );
    }

    #[test]
    fn weekday_name_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_name(day.name()), Some(day));
        }
        assert_eq!(Weekday::from_name("monday"), None);
    }
}
