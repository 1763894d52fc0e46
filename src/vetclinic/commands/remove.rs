use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::patients::PatientStore;
use log::debug;

use super::helpers::resolve_patient;

/// Empties the patient's slot. Their appointments are left in place and drop
/// out of schedule listings.
pub fn run(patients: &mut PatientStore, patient_number: u32) -> Result<CmdResult> {
    let index = resolve_patient(patients, patient_number)?;
    let mut result = CmdResult::default();
    if let Some(patient) = patients.remove(index) {
        debug!("patient {:05} removed from slot {}", patient_number, index);
        result.affected_patients.push(patient);
    }
    result.add_message(CmdMessage::success("Patient record has been removed!"));
    Ok(result)
}
