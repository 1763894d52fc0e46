use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::patients::PatientStore;

/// Every occupied patient record in slot order.
pub fn run(patients: &PatientStore) -> Result<CmdResult> {
    let listed = patients.iter().cloned().collect();
    Ok(CmdResult::default().with_listed_patients(listed))
}
