//! Date formatting utilities
//!
//! Django/PHP-style format strings for the date and datetime values shown in
//! list cells.
//!
//! Supported format codes:
//! - Y: 4-digit year (e.g., 2025)
//! - y: 2-digit year (e.g., 25)
//! - m: Month with leading zero (01-12)
//! - n: Month without leading zero (1-12)
//! - F: Full month name (e.g., January)
//! - M: Abbreviated month name (e.g., Jan)
//! - d: Day with leading zero (01-31)
//! - j: Day without leading zero (1-31)
//! - l: Full weekday name (e.g., Monday)
//! - D: Abbreviated weekday name (e.g., Mon)
//! - H: Hour in 24-hour format with leading zero (00-23)
//! - G: Hour in 24-hour format without leading zero (0-23)
//! - h: Hour in 12-hour format with leading zero (01-12)
//! - g: Hour in 12-hour format without leading zero (1-12)
//! - i: Minutes with leading zero (00-59)
//! - s: Seconds with leading zero (00-59)
//! - A / a: AM/PM, am/pm
//!
//! A backslash outputs the next character literally.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Format a datetime using a Django-style format string
///
/// # Examples
///
/// ```
/// use smart_lists_i18n::dateformat::format;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .unwrap()
///     .and_hms_opt(14, 30, 45)
///     .unwrap();
/// assert_eq!(format(&dt, "Y-m-d"), "2025-01-15");
/// assert_eq!(format(&dt, "H:i:s"), "14:30:45");
/// assert_eq!(format(&dt, "l, F j, Y"), "Wednesday, January 15, 2025");
/// assert_eq!(format(&dt, "\\Y\\e\\a\\r: Y"), "Year: 2025");
/// ```
pub fn format(dt: &NaiveDateTime, format_str: &str) -> String {
	let mut result = String::with_capacity(format_str.len() * 2);
	let mut chars = format_str.chars();

	while let Some(c) = chars.next() {
		if c == '\\' {
			if let Some(next) = chars.next() {
				result.push(next);
			}
			continue;
		}

		match c {
			'Y' => result.push_str(&format!("{:04}", dt.year())),
			'y' => result.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
			'm' => result.push_str(&format!("{:02}", dt.month())),
			'n' => result.push_str(&dt.month().to_string()),
			'F' => result.push_str(month_name(dt.month())),
			'M' => result.push_str(&month_name(dt.month())[..3]),
			'd' => result.push_str(&format!("{:02}", dt.day())),
			'j' => result.push_str(&dt.day().to_string()),
			'l' => result.push_str(weekday_name(dt.weekday())),
			'D' => result.push_str(&weekday_name(dt.weekday())[..3]),
			'H' => result.push_str(&format!("{:02}", dt.hour())),
			'G' => result.push_str(&dt.hour().to_string()),
			'h' => result.push_str(&format!("{:02}", hour12(dt.hour()))),
			'g' => result.push_str(&hour12(dt.hour()).to_string()),
			'i' => result.push_str(&format!("{:02}", dt.minute())),
			's' => result.push_str(&format!("{:02}", dt.second())),
			'A' => result.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
			'a' => result.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
			_ => result.push(c),
		}
	}

	result
}

/// Format a date using a Django-style format string
///
/// Time codes render as midnight.
///
/// # Examples
///
/// ```
/// use smart_lists_i18n::dateformat::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(format_date(&date, "M j, Y"), "Feb 29, 2024");
/// ```
pub fn format_date(date: &NaiveDate, format_str: &str) -> String {
	format(&date.and_time(chrono::NaiveTime::MIN), format_str)
}

fn hour12(hour: u32) -> u32 {
	match hour % 12 {
		0 => 12,
		h => h,
	}
}

fn month_name(month: u32) -> &'static str {
	match month {
		1 => "January",
		2 => "February",
		3 => "March",
		4 => "April",
		5 => "May",
		6 => "June",
		7 => "July",
		8 => "August",
		9 => "September",
		10 => "October",
		11 => "November",
		_ => "December",
	}
}

fn weekday_name(weekday: Weekday) -> &'static str {
	match weekday {
		Weekday::Mon => "Monday",
		Weekday::Tue => "Tuesday",
		Weekday::Wed => "Wednesday",
		Weekday::Thu => "Thursday",
		Weekday::Fri => "Friday",
		Weekday::Sat => "Saturday",
		Weekday::Sun => "Sunday",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sample() -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2025, 1, 15)
			.unwrap()
			.and_hms_opt(14, 5, 9)
			.unwrap()
	}

	#[rstest]
	#[case("Y", "2025")]
	#[case("y", "25")]
	#[case("m", "01")]
	#[case("n", "1")]
	#[case("F", "January")]
	#[case("M", "Jan")]
	#[case("d", "15")]
	#[case("j", "15")]
	#[case("l", "Wednesday")]
	#[case("D", "Wed")]
	#[case("H", "14")]
	#[case("G", "14")]
	#[case("h", "02")]
	#[case("g", "2")]
	#[case("i", "05")]
	#[case("s", "09")]
	#[case("A", "PM")]
	#[case("a", "pm")]
	fn test_single_codes(#[case] code: &str, #[case] expected: &str) {
		assert_eq!(format(&sample(), code), expected);
	}

	#[rstest]
	#[case(0, 12)]
	#[case(1, 1)]
	#[case(12, 12)]
	#[case(23, 11)]
	fn test_hour12(#[case] hour: u32, #[case] expected: u32) {
		assert_eq!(hour12(hour), expected);
	}

	#[rstest]
	fn test_escape_and_literals() {
		assert_eq!(format(&sample(), "\\d\\a\\y j"), "day 15");
		assert_eq!(format(&sample(), "Y/m/d @ H:i"), "2025/01/15 @ 14:05");
	}

	#[rstest]
	fn test_trailing_backslash_is_dropped() {
		assert_eq!(format(&sample(), "Y\\"), "2025");
	}

	#[rstest]
	fn test_format_date_is_midnight() {
		let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
		assert_eq!(format_date(&date, "Y-m-d H:i:s A"), "2024-07-04 00:00:00 AM");
	}
}
