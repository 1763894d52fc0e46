use super::SlotArena;
use crate::error::{ClinicError, Result, StoreKind};
use crate::model::{Patient, Phone};

/// Fixed-capacity patient listing.
///
/// Patient numbers are unique among occupied slots. Patients carry no order, so
/// removal just empties the slot.
#[derive(Debug, Clone)]
pub struct PatientStore {
    arena: SlotArena<Patient>,
}

impl PatientStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            arena: SlotArena::new(capacity, StoreKind::Patients),
        }
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.arena.occupied()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the first empty slot.
    pub fn allocate(&self) -> Result<usize> {
        self.arena.allocate()
    }

    /// One more than the highest number in use (1 for an empty store).
    ///
    /// Recomputed from the current records every time: removing the
    /// highest-numbered patient frees that number for the next allocation.
    /// Once `u32::MAX` is in use no further number exists and the listing
    /// reports itself full.
    pub fn next_patient_number(&self) -> Result<u32> {
        self.arena
            .iter()
            .map(|(_, p)| p.patient_number)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(ClinicError::Full(StoreKind::Patients))
    }

    /// Writes a populated record into an allocated slot.
    pub fn commit(&mut self, index: usize, patient: Patient) -> Result<()> {
        if patient.patient_number == 0 {
            return Err(ClinicError::InvalidInput(
                "patient number must be positive".to_string(),
            ));
        }
        if let Some(existing) = self.find_by_number(patient.patient_number) {
            if existing != index {
                return Err(ClinicError::InvalidInput(format!(
                    "patient number {:05} already in use",
                    patient.patient_number
                )));
            }
        }
        self.arena.put(index, Some(patient))
    }

    /// Raw slot write used by the bulk loader; `None` leaves the slot empty.
    pub(crate) fn put_slot(&mut self, index: usize, patient: Option<Patient>) -> Result<()> {
        self.arena.put(index, patient)
    }

    pub fn find_by_number(&self, patient_number: u32) -> Option<usize> {
        if patient_number == 0 {
            return None;
        }
        self.arena
            .iter()
            .find(|(_, p)| p.patient_number == patient_number)
            .map(|(i, _)| i)
    }

    /// Every occupied slot whose phone number matches exactly, in slot order.
    pub fn find_by_phone(&self, number: &str) -> Vec<usize> {
        self.arena
            .iter()
            .filter(|(_, p)| p.phone.number == number)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Patient> {
        self.arena.get(index)
    }

    /// Empties the slot, returning the record that was there.
    pub fn remove(&mut self, index: usize) -> Option<Patient> {
        self.arena.take(index)
    }

    pub fn update(
        &mut self,
        index: usize,
        name: Option<String>,
        phone: Option<Phone>,
    ) -> Result<&Patient> {
        let patient = self
            .arena
            .get_mut(index)
            .ok_or_else(|| ClinicError::NotFound(format!("Patient slot {}", index)))?;
        if let Some(name) = name {
            patient.name = name;
        }
        if let Some(phone) = phone {
            patient.phone = phone;
        }
        Ok(patient)
    }

    /// Occupied records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.arena.iter().map(|(_, p)| p)
    }
}
