//! Interactive front-desk menus.
//!
//! Menus only gather input, call the API and render results. Domain failures
//! (full stores, unknown patients, taken slots) are reported and the menu
//! carries on; only I/O failures and closed input end the session.

use super::prompt::Prompter;
use super::render::{
    formatted_phone, patient_form, patient_table, print_messages, schedule_table,
};
use log::debug;
use std::io::{BufRead, Write};
use vetclinic::api::{ClinicApi, CmdResult, PatientUpdate};
use vetclinic::error::{ClinicError, Result, StoreKind};
use vetclinic::model::{Patient, NAME_LEN, PHONE_LEN};

const MAIN_MENU: &str = "\
Veterinary Clinic System
=========================
1) PATIENT     Management
2) APPOINTMENT Management
-------------------------
0) Exit System
-------------------------
Selection: ";

const PATIENT_MENU: &str = "\
Patient Management
=========================
1) VIEW   Patient Data
2) SEARCH Patients
3) ADD    Patient
4) EDIT   Patient
5) REMOVE Patient
-------------------------
0) Previous menu
-------------------------
Selection: ";

const SEARCH_MENU: &str = "\
Search Options
==========================
1) By patient number
2) By phone number
..........................
0) Previous menu
..........................
Selection: ";

const APPOINTMENT_MENU: &str = "\
Appointment Management
==============================
1) VIEW   ALL Appointments
2) VIEW   Appointments by DATE
3) ADD    Appointment
4) REMOVE Appointment
------------------------------
0) Previous menu
------------------------------
Selection: ";

pub struct Menu<'a, R, W> {
    api: &'a mut ClinicApi,
    prompt: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(api: &'a mut ClinicApi, prompt: Prompter<R, W>) -> Self {
        Self { api, prompt }
    }

    /// Runs the main menu until the operator exits. Closed input counts as
    /// exiting.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(ClinicError::InputClosed) => {
                debug!("input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MAIN_MENU)?;
            let selection = self.prompt.int_range(0, 2)?;
            self.prompt.say("\n")?;
            match selection {
                0 => {
                    if self.prompt.confirm("Are you sure you want to exit? (y|n): ")? {
                        self.prompt.say("\nExiting system... Goodbye.\n\n")?;
                        return Ok(());
                    }
                    self.prompt.say("\n")?;
                }
                1 => self.patient_menu()?,
                _ => self.appointment_menu()?,
            }
        }
    }

    fn patient_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(PATIENT_MENU)?;
            let selection = self.prompt.int_range(0, 5)?;
            self.prompt.say("\n")?;
            match selection {
                0 => return Ok(()),
                1 => {
                    self.view_patients()?;
                    self.prompt.pause()?;
                }
                2 => self.search_menu()?,
                3 => {
                    self.add_patient()?;
                    self.prompt.pause()?;
                }
                4 => self.edit_patient()?,
                _ => {
                    self.remove_patient()?;
                    self.prompt.pause()?;
                }
            }
        }
    }

    fn appointment_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(APPOINTMENT_MENU)?;
            let selection = self.prompt.int_range(0, 4)?;
            self.prompt.say("\n")?;
            match selection {
                0 => return Ok(()),
                1 => self.view_all_appointments()?,
                2 => self.view_appointments_on_date()?,
                3 => self.add_appointment()?,
                _ => self.remove_appointment()?,
            }
            self.prompt.pause()?;
        }
    }

    fn search_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(SEARCH_MENU)?;
            let selection = self.prompt.int_range(0, 2)?;
            self.prompt.say("\n")?;
            match selection {
                0 => return Ok(()),
                1 => self.search_by_number()?,
                _ => self.search_by_phone()?,
            }
            self.prompt.pause()?;
        }
    }

    fn patient_edit_menu(&mut self, patient_number: u32) -> Result<()> {
        loop {
            let Some(patient) = self.lookup(patient_number)? else {
                return Ok(());
            };
            self.prompt.say(&format!(
                "Edit Patient ({:05})\n\
                 =========================\n\
                 1) NAME : {}\n\
                 2) PHONE: {}\n\
                 -------------------------\n\
                 0) Previous menu\n\
                 -------------------------\n\
                 Selection: ",
                patient.patient_number,
                patient.name,
                formatted_phone(&patient.phone.number)
            ))?;
            let selection = self.prompt.int_range(0, 2)?;
            self.prompt.say("\n")?;

            let update = match selection {
                0 => return Ok(()),
                1 => {
                    self.prompt.say("Name  : ")?;
                    let name = self.prompt.string_range(1, NAME_LEN)?;
                    self.prompt.say("\n")?;
                    PatientUpdate::name(name)
                }
                _ => PatientUpdate::phone(self.prompt.phone()?),
            };
            let result = self.api.edit_patient(patient_number, update);
            self.report(result)?;
            self.prompt.say("\n")?;
        }
    }

    fn view_patients(&mut self) -> Result<()> {
        let result = self.api.list_patients()?;
        patient_table(self.prompt.writer(), &result.listed_patients)?;
        Ok(())
    }

    fn search_by_number(&mut self) -> Result<()> {
        self.prompt.say("Search by patient number: ")?;
        let number = self.prompt.int_positive()?;
        self.prompt.say("\n")?;
        match self.lookup(number)? {
            Some(patient) => patient_form(self.prompt.writer(), &patient)?,
            None => self.prompt.say("*** No records found ***\n")?,
        }
        self.prompt.say("\n")
    }

    fn search_by_phone(&mut self) -> Result<()> {
        self.prompt.say("Search by phone number: ")?;
        let number = self.prompt.string_range(PHONE_LEN, PHONE_LEN)?;
        self.prompt.say("\n")?;
        let result = self.api.search_by_phone(&number)?;
        patient_table(self.prompt.writer(), &result.listed_patients)?;
        Ok(())
    }

    fn add_patient(&mut self) -> Result<()> {
        if let Err(e) = self.api.patients().allocate() {
            return self.report_error(e);
        }
        let number = match self.api.next_patient_number() {
            Ok(number) => number,
            Err(e) => return self.report_error(e),
        };
        self.prompt.say(&format!(
            "Patient Data Input\n\
             ------------------\n\
             Number: {:05}\n\
             Name  : ",
            number
        ))?;
        let name = self.prompt.string_range(1, NAME_LEN)?;
        self.prompt.say("\n")?;
        let phone = self.prompt.phone()?;

        let result = self.api.add_patient(&name, phone);
        self.report(result)?;
        self.prompt.say("\n")
    }

    fn edit_patient(&mut self) -> Result<()> {
        self.prompt.say("Enter the patient number: ")?;
        let number = self.prompt.int_positive()?;
        self.prompt.say("\n")?;
        if self.lookup(number)?.is_none() {
            return self.prompt.say("ERROR: Patient record not found!\n\n");
        }
        self.patient_edit_menu(number)
    }

    fn remove_patient(&mut self) -> Result<()> {
        self.prompt.say("Enter the patient number: ")?;
        let number = self.prompt.int_positive()?;
        self.prompt.say("\n")?;

        let Some(patient) = self.lookup(number)? else {
            return self.prompt.say("ERROR: Patient record not found!\n\n");
        };
        patient_form(self.prompt.writer(), &patient)?;
        self.prompt.say("\n")?;
        if self
            .prompt
            .confirm("Are you sure you want to remove this patient record? (y/n): ")?
        {
            let result = self.api.remove_patient(number);
            self.report(result)?;
        } else {
            self.prompt.say("Operation aborted.\n")?;
        }
        self.prompt.say("\n")
    }

    fn view_all_appointments(&mut self) -> Result<()> {
        let result = self.api.list_all()?;
        schedule_table(self.prompt.writer(), None, &result.schedule)?;
        Ok(())
    }

    fn view_appointments_on_date(&mut self) -> Result<()> {
        let date = self.prompt.date()?;
        self.prompt.say("\n")?;
        let result = self.api.list_on_date(&date)?;
        if result.schedule.is_empty() {
            return self.prompt.say("No appointments found.\n\n");
        }
        schedule_table(self.prompt.writer(), Some(&date), &result.schedule)?;
        Ok(())
    }

    fn add_appointment(&mut self) -> Result<()> {
        if let Err(e) = self.api.appointments().allocate() {
            return self.report_error(e);
        }
        self.prompt.say("Patient Number: ")?;
        let number = self.prompt.int_positive()?;
        if self.lookup(number)?.is_none() {
            return self.prompt.say("ERROR: Patient record not found!\n\n");
        }

        // Only the date and time are asked again when the slot is taken.
        loop {
            let date = self.prompt.date()?;
            let hours = *self.api.hours();
            let time = self.prompt.time(&hours)?;
            self.prompt.say("\n")?;

            match self.api.book_appointment(number, date, time) {
                Err(ClinicError::SlotTaken { .. }) => {
                    self.prompt
                        .say("ERROR: Appointment timeslot is not available!\n\n")?;
                }
                result => {
                    self.report(result)?;
                    return self.prompt.say("\n");
                }
            }
        }
    }

    fn remove_appointment(&mut self) -> Result<()> {
        self.prompt.say("Patient Number: ")?;
        let number = self.prompt.int_positive()?;
        let Some(patient) = self.lookup(number)? else {
            return self.prompt.say("ERROR: Patient record not found!\n\n");
        };
        let date = self.prompt.date()?;
        self.prompt.say("\n")?;

        let booked = self
            .api
            .list_on_date(&date)?
            .schedule
            .iter()
            .filter(|e| e.appointment.patient_number == number)
            .count();
        if booked == 0 {
            return self.prompt.say("ERROR: Appointment record not found!\n\n");
        }

        patient_form(self.prompt.writer(), &patient)?;
        if self
            .prompt
            .confirm("Are you sure you want to remove this appointment (y,n): ")?
        {
            self.prompt.say("\n")?;
            let result = self.api.cancel_appointment(number, &date);
            self.report(result)?;
        } else {
            self.prompt.say("Operation aborted.\n")?;
        }
        self.prompt.say("\n")
    }

    /// The patient with this number, if any.
    fn lookup(&mut self, patient_number: u32) -> Result<Option<Patient>> {
        match self.api.find_patient(patient_number) {
            Ok(mut result) => Ok(result.listed_patients.pop()),
            Err(ClinicError::PatientNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Prints a command's messages, or its error if it is a domain failure.
    fn report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => {
                print_messages(self.prompt.writer(), &result.messages)?;
                Ok(())
            }
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, error: ClinicError) -> Result<()> {
        let text = match error {
            ClinicError::Full(StoreKind::Patients) => "ERROR: Patient listing is FULL!".to_string(),
            ClinicError::Full(StoreKind::Appointments) => {
                "ERROR: Appointment slots are full!".to_string()
            }
            ClinicError::PatientNotFound(_) | ClinicError::NotFound(_) => {
                "ERROR: Patient record not found!".to_string()
            }
            ClinicError::SlotTaken { .. } => {
                "ERROR: Appointment timeslot is not available!".to_string()
            }
            ClinicError::InvalidInput(msg) => format!("ERROR: {}", msg),
            fatal => return Err(fatal),
        };
        self.prompt.say(&text)?;
        self.prompt.say("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vetclinic::model::Phone;
    use vetclinic::store::appointments::AppointmentStore;
    use vetclinic::store::patients::PatientStore;

    fn session(api: &mut ClinicApi, lines: &[&str]) -> String {
        let mut input = lines.join("\n");
        input.push('\n');
        let prompt = Prompter::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut menu = Menu::new(api, prompt);
        menu.run().unwrap();
        String::from_utf8(menu.prompt.writer().clone()).unwrap()
    }

    fn api(max_patients: usize) -> ClinicApi {
        ClinicApi::new(PatientStore::new(max_patients), AppointmentStore::new(5))
    }

    #[test]
    fn add_book_retry_and_cancel() {
        let mut api = api(5);
        let out = session(
            &mut api,
            &[
                "1", "3", "Rex", "1", "5551234567", "", "0", // add patient
                "2", "3", "1", "2024", "3", "10", "10", "0", "", // book 10:00
                "3", "1", "2024", "3", "10", "10", "0", // same slot again
                "2024", "3", "10", "10", "30", "", // retry at 10:30
                "4", "1", "2024", "3", "10", "y", "", // cancel the day
                "0", "0", "y",
            ],
        );

        assert!(out.contains("*** New patient record added ***"));
        assert_eq!(out.matches("*** Appointment scheduled! ***").count(), 2);
        assert!(out.contains("ERROR: Appointment timeslot is not available!"));
        assert!(out.contains("Appointment record has been removed!"));
        assert!(out.contains("Exiting system... Goodbye."));

        assert_eq!(api.find_patient(1).unwrap().listed_patients[0].name, "Rex");
        assert!(api.list_all().unwrap().schedule.is_empty());
    }

    #[test]
    fn closed_input_ends_session() {
        let mut api = api(5);
        let out = session(&mut api, &["1"]);
        assert!(out.contains("Patient Management"));
    }

    #[test]
    fn booking_for_unknown_patient() {
        let mut api = api(5);
        let out = session(&mut api, &["2", "3", "9", "", "0", "0", "y"]);
        assert!(out.contains("ERROR: Patient record not found!"));
        assert!(api.appointments().is_empty());
    }

    #[test]
    fn full_listing_refuses_new_patient() {
        let mut api = api(1);
        api.add_patient("Rex", Phone::tbd()).unwrap();
        let out = session(&mut api, &["1", "3", "", "0", "0", "y"]);
        assert!(out.contains("ERROR: Patient listing is FULL!"));
        assert!(!out.contains("Patient Data Input"));
    }

    #[test]
    fn exhausted_numbering_refuses_new_patient() {
        let mut api = api(5);
        api.load_patients(Cursor::new("4294967295|Rex|TBD|\n"))
            .unwrap();
        let out = session(&mut api, &["1", "3", "", "0", "0", "y"]);
        assert!(out.contains("ERROR: Patient listing is FULL!"));
        assert_eq!(api.list_patients().unwrap().listed_patients.len(), 1);
    }

    #[test]
    fn declined_exit_returns_to_main_menu() {
        let mut api = api(5);
        let out = session(&mut api, &["0", "n", "0", "y"]);
        assert_eq!(out.matches("Veterinary Clinic System").count(), 2);
    }

    #[test]
    fn edit_patient_name() {
        let mut api = api(5);
        api.add_patient("Rex", Phone::tbd()).unwrap();
        let out = session(&mut api, &["1", "4", "1", "1", "Max", "0", "0", "0", "y"]);
        assert!(out.contains("Patient record updated!"));
        assert_eq!(api.find_patient(1).unwrap().listed_patients[0].name, "Max");
    }
}
