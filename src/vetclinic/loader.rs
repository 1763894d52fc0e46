//! # Bulk Loader
//!
//! Populates the stores from the clinic's flat data files at startup.
//!
//! Patients, one per line:
//!
//! ```text
//! 1024|Shaggy Yanson|CELL|3048005191
//! 1040|Pugsley Yanson|TBD|
//! ```
//!
//! Appointments, one per line (patient, year, month, day, hour, minute):
//!
//! ```text
//! 1024,2024,2,28,10,30
//! ```
//!
//! Records land in consecutive slots starting at slot 0. Loading stops at the
//! first line without a readable leading patient number, or when the store is
//! full. A record numbered 0 consumes its slot but stays empty. A record with a
//! good number but bad remaining fields is skipped with a warning. Only the
//! number of non-empty records committed is returned, so bad input under-counts
//! instead of failing.

use crate::error::Result;
use crate::model::{Appointment, Date, Patient, Phone, PhoneDescription, Time, NAME_LEN};
use crate::store::appointments::AppointmentStore;
use crate::store::patients::PatientStore;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn load_patients<R: BufRead>(reader: R, store: &mut PatientStore) -> Result<usize> {
    let mut slot = 0;
    let mut loaded = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if slot >= store.capacity() {
            break;
        }
        let Some((number, rest)) = split_leading_number(&line) else {
            break;
        };

        if number == 0 {
            store.put_slot(slot, None)?;
        } else {
            match parse_patient_fields(number, rest) {
                Some(patient) => match store.commit(slot, patient) {
                    Ok(()) => loaded += 1,
                    Err(e) => {
                        warn!("patient line {}: {}", line_no + 1, e);
                        store.put_slot(slot, None)?;
                    }
                },
                None => {
                    warn!("patient line {}: malformed record skipped", line_no + 1);
                    store.put_slot(slot, None)?;
                }
            }
        }
        slot += 1;
    }

    info!("loaded {} patient records", loaded);
    Ok(loaded)
}

pub fn load_appointments<R: BufRead>(reader: R, store: &mut AppointmentStore) -> Result<usize> {
    let mut slot = 0;
    let mut loaded = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if slot >= store.capacity() {
            break;
        }
        let Some((number, rest)) = split_leading_number(&line) else {
            break;
        };

        let record = if number == 0 {
            None
        } else {
            match parse_appointment_fields(number, rest) {
                Some(appointment) if store.has_collision(&appointment) => {
                    warn!(
                        "appointment line {}: slot {} {} already taken, skipped",
                        line_no + 1,
                        appointment.date,
                        appointment.time
                    );
                    None
                }
                Some(appointment) => {
                    loaded += 1;
                    Some(appointment)
                }
                None => {
                    warn!("appointment line {}: malformed record skipped", line_no + 1);
                    None
                }
            }
        };
        store.put_slot(slot, record)?;
        slot += 1;
    }

    // File order is not guaranteed chronological.
    store.sort();
    info!("loaded {} appointment records", loaded);
    Ok(loaded)
}

pub fn load_patients_file<P: AsRef<Path>>(path: P, store: &mut PatientStore) -> Result<usize> {
    let file = File::open(path.as_ref())?;
    load_patients(BufReader::new(file), store)
}

pub fn load_appointments_file<P: AsRef<Path>>(
    path: P,
    store: &mut AppointmentStore,
) -> Result<usize> {
    let file = File::open(path.as_ref())?;
    load_appointments(BufReader::new(file), store)
}

/// Splits the leading unsigned integer off a line.
fn split_leading_number(line: &str) -> Option<(u32, &str)> {
    let line = line.trim_start();
    let end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if end == 0 {
        return None;
    }
    let number = line[..end].parse().ok()?;
    Some((number, &line[end..]))
}

fn parse_patient_fields(number: u32, rest: &str) -> Option<Patient> {
    let mut fields = rest.strip_prefix('|')?.splitn(3, '|');
    let name = fields.next()?.trim();
    let description: PhoneDescription = fields.next()?.parse().ok()?;
    let phone_number = fields.next().unwrap_or("").trim();

    if name.is_empty() || name.chars().count() > NAME_LEN {
        return None;
    }
    let phone = Phone::new(description, phone_number).ok()?;
    Some(Patient::new(number, name, phone))
}

fn parse_appointment_fields(number: u32, rest: &str) -> Option<Appointment> {
    let fields: Vec<&str> = rest.strip_prefix(',')?.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return None;
    }
    let year: u16 = fields[0].parse().ok()?;
    let month: u8 = fields[1].parse().ok()?;
    let day: u8 = fields[2].parse().ok()?;
    let hour: u8 = fields[3].parse().ok()?;
    let minute: u8 = fields[4].parse().ok()?;

    let date = Date::new(year, month, day).ok()?;
    let time = Time::new(hour, minute).ok()?;
    Some(Appointment::new(number, date, time))
}
