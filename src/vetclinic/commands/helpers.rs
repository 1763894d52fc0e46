use crate::commands::ScheduleEntry;
use crate::error::{ClinicError, Result};
use crate::model::{Appointment, Patient, NAME_LEN};
use crate::store::patients::PatientStore;

/// Slot index of a patient, or `PatientNotFound`.
pub fn resolve_patient(patients: &PatientStore, patient_number: u32) -> Result<usize> {
    patients
        .find_by_number(patient_number)
        .ok_or(ClinicError::PatientNotFound(patient_number))
}

pub fn patient_at(patients: &PatientStore, index: usize) -> Result<Patient> {
    patients
        .get(index)
        .cloned()
        .ok_or_else(|| ClinicError::NotFound(format!("Patient slot {}", index)))
}

/// Joins an appointment with its patient. Orphans yield `None`.
pub fn join(patients: &PatientStore, appointment: &Appointment) -> Option<ScheduleEntry> {
    let index = patients.find_by_number(appointment.patient_number)?;
    patients.get(index).map(|patient| ScheduleEntry {
        patient: patient.clone(),
        appointment: *appointment,
    })
}

pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 || len > NAME_LEN {
        return Err(ClinicError::InvalidInput(format!(
            "name must be between 1 and {} chars",
            NAME_LEN
        )));
    }
    Ok(name.to_string())
}
