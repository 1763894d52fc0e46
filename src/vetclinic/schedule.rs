//! # Date/Time Ordering
//!
//! Calendar rules and the total order that keeps the appointment book sorted.
//!
//! Dates compare by the integer key `year*10000 + month*100 + day`. Appointment
//! slots compare by date first and minute-of-day second. Two appointments with
//! the same date and time are the *same slot*, whichever patient they belong to;
//! that equality is what the scheduler treats as a collision.

use crate::model::{Appointment, Date, Time};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub fn compare_date(a: &Date, b: &Date) -> Ordering {
    a.key().cmp(&b.key())
}

pub fn compare_slot(a: &Appointment, b: &Appointment) -> Ordering {
    compare_date(&a.date, &b.date).then_with(|| a.time.key().cmp(&b.time.key()))
}

pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12). Out-of-range months yield 0.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// The window in which appointments can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicHours {
    pub first_hour: u8,
    pub last_hour: u8,
    /// Latest minute allowed within `last_hour`.
    pub last_minute: u8,
    pub interval_minutes: u8,
}

impl Default for ClinicHours {
    fn default() -> Self {
        Self {
            first_hour: 10,
            last_hour: 14,
            last_minute: 0,
            interval_minutes: 30,
        }
    }
}

impl ClinicHours {
    pub fn accepts(&self, time: &Time) -> bool {
        if time.hour < self.first_hour || time.hour > self.last_hour {
            return false;
        }
        if self.interval_minutes > 0 && time.minute % self.interval_minutes != 0 {
            return false;
        }
        !(time.hour == self.last_hour && time.minute > self.last_minute)
    }

    /// Human readable description used when a time is rejected.
    pub fn describe(&self) -> String {
        format!(
            "Time must be between {:02}:00 and {:02}:{:02} in {:02} minute intervals.",
            self.first_hour, self.last_hour, self.last_minute, self.interval_minutes
        )
    }
}
