//! Validated line input.
//!
//! Every prompt loops until the operator types something acceptable, printing
//! the reason and asking again. Running out of input is the only way out of a
//! prompt without a value (`ClinicError::InputClosed`).

use std::io::{BufRead, Write};
use vetclinic::error::{ClinicError, Result};
use vetclinic::model::{is_phone_number, Date, Phone, PhoneDescription, Time, PHONE_LEN};
use vetclinic::schedule::{days_in_month, ClinicHours};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ClinicError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// A whole number.
    pub fn int(&mut self) -> Result<i64> {
        loop {
            match self.read_line()?.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Error! Input a whole number: ")?,
            }
        }
    }

    pub fn int_positive(&mut self) -> Result<u32> {
        loop {
            let value = self.int()?;
            match u32::try_from(value) {
                Ok(v) if v > 0 => return Ok(v),
                _ => self.say("ERROR! Value must be > 0: ")?,
            }
        }
    }

    pub fn int_range(&mut self, min: i64, max: i64) -> Result<i64> {
        loop {
            let value = self.int()?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(&format!(
                "ERROR! Value must be between {} and {} inclusive: ",
                min, max
            ))?;
        }
    }

    /// A single character out of `options`.
    pub fn char_option(&mut self, options: &str) -> Result<char> {
        loop {
            let line = self.read_line()?;
            let mut chars = line.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if options.contains(c) {
                    return Ok(c);
                }
            }
            self.say(&format!("ERROR: Character must be one of [{}]: ", options))?;
        }
    }

    /// A string whose length (in characters) is within `min..=max`.
    pub fn string_range(&mut self, min: usize, max: usize) -> Result<String> {
        loop {
            let line = self.read_line()?;
            let len = line.chars().count();
            if min == max && len != max {
                self.say(&format!("Invalid {}-digit number! Number: ", max))?;
            } else if len > max {
                self.say(&format!(
                    "ERROR: String length must be no more than {} chars: ",
                    max
                ))?;
            } else if len < min {
                self.say(&format!(
                    "ERROR: String length must be between {} and {} chars: ",
                    min, max
                ))?;
            } else {
                return Ok(line);
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question)?;
        Ok(self.char_option("yn")? == 'y')
    }

    pub fn pause(&mut self) -> Result<()> {
        self.say("<ENTER> to continue...")?;
        self.read_line()?;
        self.say("\n")
    }

    pub fn phone(&mut self) -> Result<Phone> {
        self.say(
            "Phone Information\n\
             -----------------\n\
             How will the patient like to be contacted?\n\
             1. Cell\n\
             2. Home\n\
             3. Work\n\
             4. TBD\n\
             Selection: ",
        )?;
        let choice = self.int_range(1, PhoneDescription::ALL.len() as i64)?;
        let description = PhoneDescription::ALL[(choice - 1) as usize];
        self.say("\n")?;

        if description == PhoneDescription::Tbd {
            return Ok(Phone::tbd());
        }

        self.say(&format!("Contact: {}\nNumber : ", description))?;
        let number = loop {
            let number = self.string_range(PHONE_LEN, PHONE_LEN)?;
            if is_phone_number(&number) {
                break number;
            }
            self.say(&format!("Invalid {}-digit number! Number: ", PHONE_LEN))?;
        };
        self.say("\n")?;
        Phone::new(description, number)
    }

    pub fn date(&mut self) -> Result<Date> {
        self.say("Year        : ")?;
        let year = self.int_range(1, i64::from(u16::MAX))? as u16;
        self.say("Month (1-12): ")?;
        let month = self.int_range(1, 12)? as u8;
        let last = days_in_month(year, month);
        self.say(&format!("Day (1-{})  : ", last))?;
        let day = self.int_range(1, i64::from(last))? as u8;
        Date::new(year, month, day)
    }

    /// An hour and minute inside the clinic's bookable window.
    pub fn time(&mut self, hours: &ClinicHours) -> Result<Time> {
        loop {
            self.say("Hour (0-23)  : ")?;
            let hour = self.int_range(0, 23)? as u8;
            self.say("Minute (0-59): ")?;
            let minute = self.int_range(0, 59)? as u8;
            let time = Time::new(hour, minute)?;
            if hours.accepts(&time) {
                return Ok(time);
            }
            self.say(&format!("ERROR: {}\n\n", hours.describe()))?;
        }
    }
}
