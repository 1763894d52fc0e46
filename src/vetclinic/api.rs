//! # API Facade
//!
//! `ClinicApi` is the single entry point for every clinic operation. It owns
//! both stores (there is no global state) and dispatches to the command
//! functions in `commands/*.rs`, which hold the logic.
//!
//! Cross-store rules live here by composition: booking needs the patient store
//! to validate the patient and the appointment store to validate the slot.
//!
//! Mutating methods take `&mut self`, so each operation (lookup, allocate,
//! validate, commit) runs as one exclusive step. Sharing a `ClinicApi` between
//! threads requires wrapping the whole value in a lock, never the stores
//! individually.

use crate::commands;
use crate::config::ClinicConfig;
use crate::error::Result;
use crate::loader;
use crate::model::{Date, Phone, Time};
use crate::schedule::ClinicHours;
use crate::store::appointments::AppointmentStore;
use crate::store::patients::PatientStore;
use std::io::BufRead;
use std::path::Path;

pub struct ClinicApi {
    patients: PatientStore,
    appointments: AppointmentStore,
    hours: ClinicHours,
}

impl ClinicApi {
    pub fn new(patients: PatientStore, appointments: AppointmentStore) -> Self {
        Self {
            patients,
            appointments,
            hours: ClinicHours::default(),
        }
    }

    /// Empty stores sized from the config.
    pub fn from_config(config: &ClinicConfig) -> Self {
        Self {
            patients: PatientStore::new(config.max_patients),
            appointments: AppointmentStore::new(config.max_appointments),
            hours: config.hours,
        }
    }

    pub fn hours(&self) -> &ClinicHours {
        &self.hours
    }

    pub fn patients(&self) -> &PatientStore {
        &self.patients
    }

    pub fn appointments(&self) -> &AppointmentStore {
        &self.appointments
    }

    pub fn load_patients<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        loader::load_patients(reader, &mut self.patients)
    }

    pub fn load_appointments<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        loader::load_appointments(reader, &mut self.appointments)
    }

    pub fn load_patients_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        loader::load_patients_file(path, &mut self.patients)
    }

    pub fn load_appointments_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        loader::load_appointments_file(path, &mut self.appointments)
    }

    // --- Patients ---

    pub fn list_patients(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.patients)
    }

    pub fn find_patient(&self, patient_number: u32) -> Result<commands::CmdResult> {
        commands::search::by_number(&self.patients, patient_number)
    }

    pub fn search_by_phone(&self, number: &str) -> Result<commands::CmdResult> {
        commands::search::by_phone(&self.patients, number)
    }

    pub fn add_patient(&mut self, name: &str, phone: Phone) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.patients, name, phone)
    }

    pub fn edit_patient(
        &mut self,
        patient_number: u32,
        update: commands::PatientUpdate,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.patients, patient_number, update)
    }

    pub fn remove_patient(&mut self, patient_number: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.patients, patient_number)
    }

    /// Number the next added patient will receive.
    pub fn next_patient_number(&self) -> Result<u32> {
        self.patients.next_patient_number()
    }

    // --- Appointments ---

    pub fn book_appointment(
        &mut self,
        patient_number: u32,
        date: Date,
        time: Time,
    ) -> Result<commands::CmdResult> {
        commands::book::run(
            &self.patients,
            &mut self.appointments,
            patient_number,
            date,
            time,
        )
    }

    pub fn cancel_appointment(
        &mut self,
        patient_number: u32,
        date: &Date,
    ) -> Result<commands::CmdResult> {
        commands::cancel::run(&self.patients, &mut self.appointments, patient_number, date)
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::schedule::all(&self.patients, &self.appointments)
    }

    pub fn list_on_date(&self, date: &Date) -> Result<commands::CmdResult> {
        commands::schedule::on_date(&self.patients, &self.appointments, date)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PatientUpdate, ScheduleEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClinicError, StoreKind};
    use crate::model::PhoneDescription;
    use std::io::Cursor;

    fn api() -> ClinicApi {
        ClinicApi::new(PatientStore::new(5), AppointmentStore::new(10))
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn add_patient_to_empty_clinic() {
        let mut api = api();
        assert_eq!(api.next_patient_number().unwrap(), 1);
        let phone = Phone::new(PhoneDescription::Cell, "5551234567").unwrap();
        api.add_patient("Rex", phone).unwrap();

        let listed = api.list_patients().unwrap().listed_patients;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].patient_number, 1);
        assert_eq!(listed[0].name, "Rex");
    }

    #[test]
    fn add_after_loading_highest_number() {
        let mut api = api();
        let loaded = api
            .load_patients(Cursor::new("4294967295|Rex|TBD|\n"))
            .unwrap();
        assert_eq!(loaded, 1);
        assert!(matches!(
            api.add_patient("Tom", Phone::tbd()),
            Err(ClinicError::Full(StoreKind::Patients))
        ));
        assert_eq!(api.list_patients().unwrap().listed_patients.len(), 1);
    }

    #[test]
    fn booking_round_trip() {
        let mut api = api();
        api.add_patient("Rex", Phone::tbd()).unwrap();
        let nine = Time::new(9, 0).unwrap();

        api.book_appointment(1, date("2024-03-10"), nine).unwrap();
        assert!(matches!(
            api.book_appointment(1, date("2024-03-10"), nine),
            Err(ClinicError::SlotTaken { .. })
        ));

        let cancelled = api.cancel_appointment(1, &date("2024-03-10")).unwrap();
        assert_eq!(cancelled.removed, 1);
        assert!(api.list_all().unwrap().schedule.is_empty());
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut api = api();
        api.add_patient("Rex", Phone::tbd()).unwrap();
        api.book_appointment(1, date("2024-01-05"), Time::new(10, 0).unwrap())
            .unwrap();
        api.book_appointment(1, date("2024-01-01"), Time::new(9, 0).unwrap())
            .unwrap();

        let schedule = api.list_all().unwrap().schedule;
        assert_eq!(schedule[0].appointment.date, date("2024-01-01"));
        assert_eq!(schedule[1].appointment.date, date("2024-01-05"));
    }

    #[test]
    fn booking_unknown_patient_consumes_nothing() {
        let mut api = api();
        let result = api.book_appointment(3, date("2024-01-01"), Time::new(9, 0).unwrap());
        assert!(matches!(result, Err(ClinicError::PatientNotFound(3))));
        assert!(api.appointments().is_empty());
    }

    #[test]
    fn loads_through_facade() {
        let mut api = ClinicApi::from_config(&ClinicConfig::default());
        let patients = api
            .load_patients(Cursor::new("1|Rex|CELL|5551234567\n2|Tom|TBD|\n"))
            .unwrap();
        let appointments = api
            .load_appointments(Cursor::new("2,2024,1,2,10,0\n1,2024,1,1,10,0\n"))
            .unwrap();
        assert_eq!((patients, appointments), (2, 2));

        let day = api.list_on_date(&date("2024-01-02")).unwrap().schedule;
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].patient.name, "Tom");
        assert_eq!(api.hours(), &ClinicHours::default());
    }
}
