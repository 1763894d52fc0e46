use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::patients::PatientStore;

use super::helpers::{patient_at, resolve_patient};

pub fn by_number(patients: &PatientStore, patient_number: u32) -> Result<CmdResult> {
    let index = resolve_patient(patients, patient_number)?;
    let patient = patient_at(patients, index)?;
    Ok(CmdResult::default().with_listed_patients(vec![patient]))
}

/// Exact match on the stored phone digits. No match is a message, not an error.
pub fn by_phone(patients: &PatientStore, number: &str) -> Result<CmdResult> {
    let listed = patients
        .find_by_phone(number)
        .into_iter()
        .map(|index| patient_at(patients, index))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("*** No records found ***"));
    }
    Ok(result.with_listed_patients(listed))
}
