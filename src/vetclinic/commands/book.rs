use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClinicError, Result};
use crate::model::{Appointment, Date, Time};
use crate::store::appointments::AppointmentStore;
use crate::store::patients::PatientStore;
use log::debug;

use super::helpers::{join, resolve_patient};

/// Books `patient_number` into the (date, time) slot.
///
/// Checks run in order: the patient must exist, the book must have a free
/// slot, and no appointment (for any patient) may hold the same date and time.
/// Nothing is written unless all three pass.
pub fn run(
    patients: &PatientStore,
    appointments: &mut AppointmentStore,
    patient_number: u32,
    date: Date,
    time: Time,
) -> Result<CmdResult> {
    resolve_patient(patients, patient_number)?;
    appointments.allocate()?;

    let appointment = Appointment::new(patient_number, date, time);
    if appointments.has_collision(&appointment) {
        debug!("slot {} {} already taken", date, time);
        return Err(ClinicError::SlotTaken { date, time });
    }

    appointments.insert(appointment)?;
    debug!("patient {:05} booked for {} {}", patient_number, date, time);

    let mut result = CmdResult::default();
    result.schedule.extend(join(patients, &appointment));
    result.add_message(CmdMessage::success("*** Appointment scheduled! ***"));
    Ok(result)
}
