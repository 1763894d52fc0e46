use crate::commands::{CmdMessage, CmdResult, PatientUpdate};
use crate::error::Result;
use crate::store::patients::PatientStore;
use log::debug;

use super::helpers::{resolve_patient, validate_name};

pub fn run(
    patients: &mut PatientStore,
    patient_number: u32,
    update: PatientUpdate,
) -> Result<CmdResult> {
    let index = resolve_patient(patients, patient_number)?;
    let name = update.name.as_deref().map(validate_name).transpose()?;
    let patient = patients.update(index, name, update.phone)?.clone();
    debug!("patient {:05} updated", patient_number);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Patient record updated!"));
    Ok(result.with_affected_patients(vec![patient]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::model::{Phone, PhoneDescription};
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn renames_patient() {
        let mut fixture = StoreFixture::default().with_patient("Rex", "5551234567");
        let result = run(&mut fixture.patients, 1, PatientUpdate::name("Max")).unwrap();
        assert_eq!(result.affected_patients[0].name, "Max");
        assert_eq!(fixture.patients.get(0).unwrap().name, "Max");
        assert_eq!(fixture.patients.get(0).unwrap().phone.number, "5551234567");
    }

    #[test]
    fn changes_phone_only() {
        let mut fixture = StoreFixture::default().with_patient("Rex", "5551234567");
        let work = Phone::new(PhoneDescription::Work, "9055550101").unwrap();
        run(&mut fixture.patients, 1, PatientUpdate::phone(work.clone())).unwrap();
        let rex = fixture.patients.get(0).unwrap();
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.phone, work);
    }

    #[test]
    fn unknown_patient() {
        let mut fixture = StoreFixture::default();
        assert!(matches!(
            run(&mut fixture.patients, 4, PatientUpdate::name("Max")),
            Err(ClinicError::PatientNotFound(4))
        ));
    }
}
