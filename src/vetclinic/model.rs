use crate::error::{ClinicError, Result};
use crate::schedule::days_in_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a patient name.
pub const NAME_LEN: usize = 15;
/// Number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Builds a calendar date, rejecting months outside 1-12 and days past the
    /// end of the month (February follows the leap-year rule). The result is
    /// checked against chrono's calendar as well.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ClinicError::InvalidInput(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(ClinicError::InvalidInput(format!(
                "day must be between 1 and {} for {:04}-{:02}, got {}",
                last, year, month, day
            )));
        }
        let date = Self { year, month, day };
        if date.to_naive().is_none() {
            return Err(ClinicError::InvalidInput(format!(
                "{} is not a calendar date",
                date
            )));
        }
        Ok(date)
    }

    /// Integer ordering key: `year*10000 + month*100 + day`.
    pub fn key(&self) -> u32 {
        u32::from(self.year) * 10_000 + u32::from(self.month) * 100 + u32::from(self.day)
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = ClinicError;

    fn try_from(value: NaiveDate) -> Result<Self> {
        let year = u16::try_from(value.year())
            .map_err(|_| ClinicError::InvalidInput(format!("year out of range: {}", value)))?;
        Date::new(year, value.month() as u8, value.day() as u8)
    }
}

impl FromStr for Date {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| ClinicError::InvalidInput(format!("bad date '{}': {}", s, e)))?;
        Date::try_from(parsed)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
}

impl Time {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ClinicError::InvalidInput(format!(
                "time out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Minutes since midnight, the secondary slot ordering key.
    pub fn key(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneDescription {
    Cell,
    Home,
    Work,
    Tbd,
}

impl PhoneDescription {
    /// Menu order used when asking how the patient wants to be contacted.
    pub const ALL: [PhoneDescription; 4] = [
        PhoneDescription::Cell,
        PhoneDescription::Home,
        PhoneDescription::Work,
        PhoneDescription::Tbd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneDescription::Cell => "CELL",
            PhoneDescription::Home => "HOME",
            PhoneDescription::Work => "WORK",
            PhoneDescription::Tbd => "TBD",
        }
    }
}

impl fmt::Display for PhoneDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneDescription {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "CELL" => Ok(PhoneDescription::Cell),
            "HOME" => Ok(PhoneDescription::Home),
            "WORK" => Ok(PhoneDescription::Work),
            "TBD" => Ok(PhoneDescription::Tbd),
            other => Err(ClinicError::InvalidInput(format!(
                "unknown phone description: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub description: PhoneDescription,
    /// Exactly [`PHONE_LEN`] digits, or empty when the description is TBD.
    pub number: String,
}

impl Phone {
    pub fn new(description: PhoneDescription, number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        match description {
            PhoneDescription::Tbd if !number.is_empty() => Err(ClinicError::InvalidInput(
                "a TBD phone cannot carry a number".to_string(),
            )),
            PhoneDescription::Tbd => Ok(Self {
                description,
                number,
            }),
            _ if !is_phone_number(&number) => Err(ClinicError::InvalidInput(format!(
                "phone number must be exactly {} digits: '{}'",
                PHONE_LEN, number
            ))),
            _ => Ok(Self {
                description,
                number,
            }),
        }
    }

    pub fn tbd() -> Self {
        Self {
            description: PhoneDescription::Tbd,
            number: String::new(),
        }
    }
}

pub fn is_phone_number(s: &str) -> bool {
    s.len() == PHONE_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_number: u32,
    pub name: String,
    pub phone: Phone,
}

impl Patient {
    pub fn new(patient_number: u32, name: impl Into<String>, phone: Phone) -> Self {
        Self {
            patient_number,
            name: name.into(),
            phone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_number: u32,
    pub date: Date,
    pub time: Time,
}

impl Appointment {
    pub fn new(patient_number: u32, date: Date, time: Time) -> Self {
        Self {
            patient_number,
            date,
            time,
        }
    }
}
