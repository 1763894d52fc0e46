use super::SlotArena;
use crate::error::{ClinicError, Result, StoreKind};
use crate::model::{Appointment, Date};
use crate::schedule::{compare_date, compare_slot};
use std::cmp::Ordering;

/// Fixed-capacity appointment book.
///
/// Invariants after every `insert`/`remove`:
/// - no two occupied slots share a (date, time);
/// - occupied slots ascend by (date, time). Empty slots sort as the lowest key,
///   so they gather at the front of the backing array.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    arena: SlotArena<Appointment>,
}

impl AppointmentStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            arena: SlotArena::new(capacity, StoreKind::Appointments),
        }
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn len(&self) -> usize {
        self.arena.occupied()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn allocate(&self) -> Result<usize> {
        self.arena.allocate()
    }

    pub fn has_collision(&self, candidate: &Appointment) -> bool {
        self.arena
            .iter()
            .any(|(_, a)| compare_slot(a, candidate) == Ordering::Equal)
    }

    /// Stores a new appointment and re-sorts the book.
    ///
    /// The caller is expected to have checked [`has_collision`](Self::has_collision);
    /// a colliding record is refused with `SlotTaken` rather than stored.
    pub fn insert(&mut self, appointment: Appointment) -> Result<()> {
        let index = self.arena.allocate()?;
        if self.has_collision(&appointment) {
            return Err(ClinicError::SlotTaken {
                date: appointment.date,
                time: appointment.time,
            });
        }
        self.arena.put(index, Some(appointment))?;
        self.sort();
        Ok(())
    }

    /// Raw slot write used by the bulk loader. Callers must [`sort`](Self::sort)
    /// once they are done.
    pub(crate) fn put_slot(&mut self, index: usize, appointment: Option<Appointment>) -> Result<()> {
        self.arena.put(index, appointment)
    }

    /// Removes every appointment of `patient_number` on `date`, re-sorting after
    /// each removal. Returns how many were removed.
    pub fn remove(&mut self, patient_number: u32, date: &Date) -> usize {
        let mut removed = 0;
        while let Some(index) = self.position_of(patient_number, date) {
            self.arena.take(index);
            self.sort();
            removed += 1;
        }
        removed
    }

    fn position_of(&self, patient_number: u32, date: &Date) -> Option<usize> {
        self.arena
            .iter()
            .find(|(_, a)| {
                a.patient_number == patient_number
                    && compare_date(&a.date, date) == Ordering::Equal
            })
            .map(|(i, _)| i)
    }

    /// Indexes of the appointments on `date`, in time order.
    pub fn find_all_on_date(&self, date: &Date) -> Vec<usize> {
        self.arena
            .iter()
            .filter(|(_, a)| compare_date(&a.date, date) == Ordering::Equal)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.arena.get(index)
    }

    /// Occupied records in (date, time) order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.arena.iter().map(|(_, a)| a)
    }

    /// Selection sort of the whole backing array: repeatedly select the
    /// minimum of the unsorted tail and swap it into place.
    pub fn sort(&mut self) {
        let slots = self.arena.slots_mut();
        for i in 0..slots.len() {
            let mut min = i;
            for j in (i + 1)..slots.len() {
                if compare_slots(&slots[j], &slots[min]) == Ordering::Less {
                    min = j;
                }
            }
            if min != i {
                slots.swap(i, min);
            }
        }
    }

    /// True when the occupied slots are non-decreasing by (date, time).
    pub fn is_sorted(&self) -> bool {
        let occupied: Vec<&Appointment> = self.iter().collect();
        occupied
            .windows(2)
            .all(|w| compare_slot(w[0], w[1]) != Ordering::Greater)
    }

    #[cfg(test)]
    fn slots(&self) -> &[Option<Appointment>] {
        self.arena.slots()
    }
}

/// Empty slots order before every occupied one.
fn compare_slots(a: &Option<Appointment>, b: &Option<Appointment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_slot(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Time;
    use crate::store::fixtures::StoreFixture;

    fn appt(patient: u32, date: &str, hour: u8, minute: u8) -> Appointment {
        Appointment::new(patient, date.parse().unwrap(), Time::new(hour, minute).unwrap())
    }

    #[test]
    fn insert_keeps_chronological_order() {
        let mut store = AppointmentStore::new(5);
        store.insert(appt(1, "2024-01-05", 10, 0)).unwrap();
        store.insert(appt(2, "2024-01-01", 9, 0)).unwrap();
        store.insert(appt(1, "2024-01-01", 8, 30)).unwrap();

        let order: Vec<String> = store
            .iter()
            .map(|a| format!("{} {}", a.date, a.time))
            .collect();
        assert_eq!(
            order,
            vec!["2024-01-01 08:30", "2024-01-01 09:00", "2024-01-05 10:00"]
        );
        assert!(store.is_sorted());
    }

    #[test]
    fn empty_slots_migrate_to_the_front() {
        let mut store = AppointmentStore::new(4);
        store.insert(appt(1, "2024-02-01", 10, 0)).unwrap();
        store.insert(appt(1, "2024-01-01", 10, 0)).unwrap();

        let slots = store.slots();
        assert!(slots[0].is_none());
        assert!(slots[1].is_none());
        assert_eq!(slots[2].unwrap().date.to_string(), "2024-01-01");
        assert_eq!(slots[3].unwrap().date.to_string(), "2024-02-01");
    }

    #[test]
    fn collision_is_any_patient_same_slot() {
        let fixture = StoreFixture::default().with_appointment(1, "2024-03-10", (9, 0));
        assert!(fixture.appointments.has_collision(&appt(1, "2024-03-10", 9, 0)));
        assert!(fixture.appointments.has_collision(&appt(7, "2024-03-10", 9, 0)));
        assert!(!fixture.appointments.has_collision(&appt(1, "2024-03-10", 9, 30)));
        assert!(!fixture.appointments.has_collision(&appt(1, "2024-03-11", 9, 0)));
    }

    #[test]
    fn insert_refuses_collision_and_full() {
        let mut store = AppointmentStore::new(2);
        store.insert(appt(1, "2024-03-10", 9, 0)).unwrap();
        assert!(matches!(
            store.insert(appt(2, "2024-03-10", 9, 0)),
            Err(ClinicError::SlotTaken { .. })
        ));
        store.insert(appt(2, "2024-03-10", 9, 30)).unwrap();
        assert!(matches!(
            store.insert(appt(3, "2024-03-11", 9, 0)),
            Err(ClinicError::Full(StoreKind::Appointments))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_takes_every_match_for_patient_and_date() {
        let mut store = AppointmentStore::new(6);
        store.insert(appt(3, "2024-05-01", 10, 0)).unwrap();
        store.insert(appt(3, "2024-05-01", 11, 0)).unwrap();
        store.insert(appt(3, "2024-05-02", 10, 0)).unwrap();
        store.insert(appt(4, "2024-05-01", 12, 0)).unwrap();

        let removed = store.remove(3, &"2024-05-01".parse().unwrap());
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 2);
        assert!(store.is_sorted());
        assert!(store
            .iter()
            .all(|a| !(a.patient_number == 3 && a.date.to_string() == "2024-05-01")));
    }

    #[test]
    fn remove_without_match_leaves_store_unchanged() {
        let mut fixture = StoreFixture::default()
            .with_appointment(1, "2024-02-02", (10, 0))
            .with_appointment(7, "2024-02-03", (10, 0));
        let before: Vec<Appointment> = fixture.appointments.iter().copied().collect();

        let removed = fixture.appointments.remove(7, &"2024-02-02".parse().unwrap());
        assert_eq!(removed, 0);
        let after: Vec<Appointment> = fixture.appointments.iter().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn find_all_on_date_in_time_order() {
        let fixture = StoreFixture::default()
            .with_appointment(1, "2024-06-01", (13, 0))
            .with_appointment(2, "2024-06-02", (10, 0))
            .with_appointment(3, "2024-06-01", (10, 30));
        let store = &fixture.appointments;

        let found: Vec<u32> = store
            .find_all_on_date(&"2024-06-01".parse().unwrap())
            .into_iter()
            .map(|i| store.get(i).unwrap().patient_number)
            .collect();
        assert_eq!(found, vec![3, 1]);
        assert!(store
            .find_all_on_date(&"2024-06-03".parse().unwrap())
            .is_empty());
    }

    #[test]
    fn sort_repairs_unordered_bulk_input() {
        let mut store = AppointmentStore::new(4);
        store.put_slot(0, Some(appt(1, "2024-09-01", 10, 0))).unwrap();
        store.put_slot(1, Some(appt(2, "2023-09-01", 10, 0))).unwrap();
        store.put_slot(3, Some(appt(3, "2024-01-01", 14, 0))).unwrap();
        assert!(!store.is_sorted());

        store.sort();
        assert!(store.is_sorted());
        assert!(store.slots()[0].is_none());
    }
}
