use crate::model::{Date, Time};
use std::fmt;
use thiserror::Error;

/// Which fixed-capacity store ran out of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Patients,
    Appointments,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Patients => write!(f, "Patient listing"),
            StoreKind::Appointments => write!(f, "Appointment slots"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("{0} is FULL")]
    Full(StoreKind),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Appointment timeslot {date} {time} is not available")]
    SlotTaken { date: Date, time: Time },

    #[error("Patient record not found: {0:05}")]
    PatientNotFound(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClinicError>;
