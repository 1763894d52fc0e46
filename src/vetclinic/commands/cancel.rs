use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Date;
use crate::store::appointments::AppointmentStore;
use crate::store::patients::PatientStore;
use log::debug;

use super::helpers::{patient_at, resolve_patient};

/// Removes every appointment the patient holds on `date`.
///
/// The patient is resolved first so callers can show who is affected. Zero
/// removals is a normal outcome reported through the message list.
pub fn run(
    patients: &PatientStore,
    appointments: &mut AppointmentStore,
    patient_number: u32,
    date: &Date,
) -> Result<CmdResult> {
    let index = resolve_patient(patients, patient_number)?;
    let patient = patient_at(patients, index)?;

    let removed = appointments.remove(patient_number, date);
    debug!(
        "removed {} appointment(s) for {:05} on {}",
        removed, patient_number, date
    );

    let mut result = CmdResult::default().with_affected_patients(vec![patient]);
    result.removed = removed;
    if removed == 0 {
        result.add_message(CmdMessage::error("Appointment record not found!"));
    } else {
        result.add_message(CmdMessage::success("Appointment record has been removed!"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::model::Appointment;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn cancels_all_same_day_appointments() {
        let mut fixture = StoreFixture::default()
            .with_patient("Rex", "5551234567")
            .with_appointment(1, "2024-02-02", (10, 0))
            .with_appointment(1, "2024-02-02", (13, 30))
            .with_appointment(1, "2024-02-03", (10, 0));

        let result = run(
            &fixture.patients,
            &mut fixture.appointments,
            1,
            &"2024-02-02".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(result.removed, 2);
        assert_eq!(result.affected_patients[0].name, "Rex");
        assert_eq!(fixture.appointments.len(), 1);
        assert!(fixture.appointments.is_sorted());
    }

    #[test]
    fn no_match_is_zero_not_error() {
        let mut fixture = StoreFixture::default()
            .with_patients(7)
            .with_appointment(7, "2024-02-03", (10, 0));
        let before: Vec<Appointment> = fixture.appointments.iter().copied().collect();

        let result = run(
            &fixture.patients,
            &mut fixture.appointments,
            7,
            &"2024-02-02".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(result.removed, 0);
        assert_eq!(result.messages[0].content, "Appointment record not found!");

        let after: Vec<Appointment> = fixture.appointments.iter().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_patient() {
        let mut fixture = StoreFixture::default();
        assert!(matches!(
            run(
                &fixture.patients,
                &mut fixture.appointments,
                7,
                &"2024-02-02".parse().unwrap()
            ),
            Err(ClinicError::PatientNotFound(7))
        ));
    }
}
