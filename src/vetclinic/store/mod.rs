//! # Storage Layer
//!
//! Both stores are fixed-capacity arenas: a `Vec<Option<T>>` whose length is set
//! at construction and never changes. `None` is an empty slot.
//!
//! ## Allocation
//!
//! `allocate()` returns the index of the *first* empty slot, or
//! [`ClinicError::Full`] when every slot is occupied. Allocation does not mark
//! the slot as used; the caller commits a record into it afterwards. Nothing is
//! reserved, so an operation that fails validation after allocating leaves the
//! store untouched.
//!
//! ## Implementations
//!
//! - [`patients::PatientStore`]: unordered, unique patient numbers.
//! - [`appointments::AppointmentStore`]: re-sorted after every mutation so that
//!   occupied slots are in ascending (date, time) order.

use crate::error::{ClinicError, Result, StoreKind};

pub mod appointments;
pub mod patients;

#[derive(Debug, Clone)]
pub(crate) struct SlotArena<T> {
    slots: Vec<Option<T>>,
    kind: StoreKind,
}

impl<T> SlotArena<T> {
    pub(crate) fn new(capacity: usize, kind: StoreKind) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, kind }
    }

    pub(crate) fn allocate(&self) -> Result<usize> {
        self.slots
            .iter()
            .position(Option::is_none)
            .ok_or(ClinicError::Full(self.kind))
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Overwrites a slot. Out-of-range indexes are reported, never grown into.
    pub(crate) fn put(&mut self, index: usize, value: Option<T>) -> Result<()> {
        let capacity = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            ClinicError::InvalidInput(format!(
                "slot {} out of range (capacity {})",
                index, capacity
            ))
        })?;
        *slot = value;
        Ok(())
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|v| (i, v)))
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::appointments::AppointmentStore;
    use super::patients::PatientStore;
    use crate::model::{Appointment, Date, Patient, Phone, PhoneDescription, Time};

    pub struct StoreFixture {
        pub patients: PatientStore,
        pub appointments: AppointmentStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new(10, 20)
        }
    }

    impl StoreFixture {
        pub fn new(max_patients: usize, max_appointments: usize) -> Self {
            Self {
                patients: PatientStore::new(max_patients),
                appointments: AppointmentStore::new(max_appointments),
            }
        }

        pub fn with_patient(mut self, name: &str, number: &str) -> Self {
            let index = self.patients.allocate().unwrap();
            let patient_number = self.patients.next_patient_number().unwrap();
            let phone = Phone::new(PhoneDescription::Cell, number).unwrap();
            self.patients
                .commit(index, Patient::new(patient_number, name, phone))
                .unwrap();
            self
        }

        pub fn with_patients(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Patient {}", i + 1);
                self = self.with_patient(&name, &format!("55500000{:02}", i));
            }
            self
        }

        pub fn with_appointment(mut self, patient_number: u32, date: &str, time: (u8, u8)) -> Self {
            let date: Date = date.parse().unwrap();
            let time = Time::new(time.0, time.1).unwrap();
            self.appointments
                .insert(Appointment::new(patient_number, date, time))
                .unwrap();
            self
        }
    }
}
