use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Patient, Phone};
use crate::store::patients::PatientStore;
use log::debug;

use super::helpers::validate_name;

/// Allocates the first free slot and assigns the next patient number.
pub fn run(patients: &mut PatientStore, name: &str, phone: Phone) -> Result<CmdResult> {
    let name = validate_name(name)?;
    let index = patients.allocate()?;
    let number = patients.next_patient_number()?;
    let patient = Patient::new(number, name, phone);
    patients.commit(index, patient.clone())?;
    debug!("patient {:05} added in slot {}", number, index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("*** New patient record added ***"));
    Ok(result.with_affected_patients(vec![patient]))
}
