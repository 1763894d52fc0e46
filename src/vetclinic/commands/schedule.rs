use crate::commands::{CmdResult, ScheduleEntry};
use crate::error::Result;
use crate::model::Date;
use crate::store::appointments::AppointmentStore;
use crate::store::patients::PatientStore;

use super::helpers::join;

/// Every appointment with its patient, in (date, time) order. Appointments
/// whose patient has been removed are skipped.
pub fn all(patients: &PatientStore, appointments: &AppointmentStore) -> Result<CmdResult> {
    let entries: Vec<ScheduleEntry> = appointments
        .iter()
        .filter_map(|a| join(patients, a))
        .collect();
    Ok(CmdResult::default().with_schedule(entries))
}

/// The day's appointments in time order.
pub fn on_date(
    patients: &PatientStore,
    appointments: &AppointmentStore,
    date: &Date,
) -> Result<CmdResult> {
    let entries: Vec<ScheduleEntry> = appointments
        .find_all_on_date(date)
        .into_iter()
        .filter_map(|index| appointments.get(index))
        .filter_map(|a| join(patients, a))
        .collect();
    Ok(CmdResult::default().with_schedule(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::default()
            .with_patient("Rex", "5551234567")
            .with_patient("Tom", "5559876543")
            .with_appointment(1, "2024-01-05", (10, 0))
            .with_appointment(2, "2024-01-01", (9, 0))
            .with_appointment(2, "2024-01-05", (9, 30))
            .with_appointment(5, "2024-01-05", (11, 0))
    }

    #[test]
    fn all_is_chronological() {
        let fixture = fixture();
        let result = all(&fixture.patients, &fixture.appointments).unwrap();
        let listed: Vec<String> = result
            .schedule
            .iter()
            .map(|e| format!("{} {} {}", e.appointment.date, e.appointment.time, e.patient.name))
            .collect();
        assert_eq!(
            listed,
            vec![
                "2024-01-01 09:00 Tom",
                "2024-01-05 09:30 Tom",
                "2024-01-05 10:00 Rex",
            ]
        );
    }

    #[test]
    fn on_date_filters_and_skips_orphans() {
        let fixture = fixture();
        let result = on_date(
            &fixture.patients,
            &fixture.appointments,
            &"2024-01-05".parse().unwrap(),
        )
        .unwrap();
        let times: Vec<String> = result
            .schedule
            .iter()
            .map(|e| e.appointment.time.to_string())
            .collect();
        assert_eq!(times, vec!["09:30", "10:00"]);
    }

    #[test]
    fn empty_day() {
        let fixture = fixture();
        let result = on_date(
            &fixture.patients,
            &fixture.appointments,
            &"2024-01-02".parse().unwrap(),
        )
        .unwrap();
        assert!(result.schedule.is_empty());
    }
}
