use crate::model::{Appointment, Patient, Phone};
use serde::Serialize;

pub mod add;
pub mod book;
pub mod cancel;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod schedule;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An appointment joined with the patient it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub patient: Patient,
    pub appointment: Appointment,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_patients: Vec<Patient>,
    pub listed_patients: Vec<Patient>,
    pub schedule: Vec<ScheduleEntry>,
    /// Appointments removed by a cancellation.
    pub removed: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_patients(mut self, patients: Vec<Patient>) -> Self {
        self.affected_patients = patients;
        self
    }

    pub fn with_listed_patients(mut self, patients: Vec<Patient>) -> Self {
        self.listed_patients = patients;
        self
    }

    pub fn with_schedule(mut self, schedule: Vec<ScheduleEntry>) -> Self {
        self.schedule = schedule;
        self
    }
}

/// Field changes for an existing patient. `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub phone: Option<Phone>,
}

impl PatientUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone: None,
        }
    }

    pub fn phone(phone: Phone) -> Self {
        Self {
            name: None,
            phone: Some(phone),
        }
    }
}
