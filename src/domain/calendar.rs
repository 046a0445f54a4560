use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// A fixed hourly slot in the day view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// 24-hour value like "09:00"
    pub value: String,
    /// 12-hour display label like "9:00 AM"
    pub label: String,
}

/// Calendar weeks covering a month, Sunday-first, padded with days from
/// the adjacent months. Returns an empty grid for an invalid year/month.
pub fn month_grid(year: i32, month: u32) -> Vec<[NaiveDate; 7]> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(day) => day,
        None => return Vec::new(),
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = match next_month {
        Some(day) => day - Duration::days(1),
        None => return Vec::new(),
    };

    let mut cursor = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = [cursor; 7];
        for slot in week.iter_mut() {
            *slot = cursor;
            cursor = cursor + Duration::days(1);
        }
        weeks.push(week);
    }
    weeks
}

/// The Monday-first 7-day week containing `date`
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let mut days = [monday; 7];
    for (offset, slot) in days.iter_mut().enumerate() {
        *slot = monday + Duration::days(offset as i64);
    }
    days
}

/// The 24 hourly slots of the day view
pub fn time_slots() -> Vec<TimeSlot> {
    (0..24)
        .map(|hour| {
            let (display_hour, meridiem) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            TimeSlot {
                value: format!("{:02}:00", hour),
                label: format!("{}:00 {}", display_hour, meridiem),
            }
        })
        .collect()
}

/// Format a timestamp as "9:05 AM"
pub fn format_time(time: DateTime<Local>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a date as "Jun 02, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a timestamp as "Jun 02, 2025 9:05 AM"
pub fn format_date_time(time: DateTime<Local>) -> String {
    time.format("%b %d, %Y %-I:%M %p").to_string()
}
