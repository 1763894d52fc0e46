use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vetclinic::api::{CmdMessage, MessageLevel, ScheduleEntry};
use vetclinic::model::{is_phone_number, Date, Patient, NAME_LEN};

pub fn print_messages<W: Write>(w: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// `(555)123-4567`, or a blank mask when the number is not ten digits.
pub fn formatted_phone(number: &str) -> String {
    if is_phone_number(number) {
        format!("({}){}-{}", &number[..3], &number[3..6], &number[6..])
    } else {
        "(___)___-____".to_string()
    }
}

/// Pads (or cuts) a name to the name column's display width.
fn name_column(name: &str) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > NAME_LEN {
            break;
        }
        out.push(c);
        width += w;
    }
    let padding = NAME_LEN.saturating_sub(out.width());
    out.push_str(&" ".repeat(padding));
    out
}

pub fn patient_table_header<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Pat.# Name            Phone#")?;
    writeln!(w, "----- --------------- --------------------")
}

pub fn patient_row<W: Write>(w: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(
        w,
        "{:05} {} {} ({})",
        patient.patient_number,
        name_column(&patient.name),
        formatted_phone(&patient.phone.number),
        patient.phone.description
    )
}

pub fn patient_form<W: Write>(w: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(w, "Name  : {}", patient.name)?;
    writeln!(w, "Number: {:05}", patient.patient_number)?;
    writeln!(
        w,
        "Phone : {} ({})",
        formatted_phone(&patient.phone.number),
        patient.phone.description
    )
}

/// Table of patients, or the no-records notice.
pub fn patient_table<W: Write>(w: &mut W, patients: &[Patient]) -> io::Result<()> {
    patient_table_header(w)?;
    if patients.is_empty() {
        writeln!(w)?;
        writeln!(w, "*** No records found ***")?;
    }
    for patient in patients {
        patient_row(w, patient)?;
    }
    writeln!(w)
}

/// `None` renders the all-dates header.
pub fn schedule_header<W: Write>(w: &mut W, date: Option<&Date>) -> io::Result<()> {
    match date {
        None => {
            writeln!(w, "Clinic Appointments for the Date: <ALL>")?;
            writeln!(w)?;
            writeln!(w, "Date       Time  Pat.# Name            Phone#")?;
            writeln!(
                w,
                "---------- ----- ----- --------------- --------------------"
            )
        }
        Some(date) => {
            writeln!(w, "Clinic Appointments for the Date: {}", date)?;
            writeln!(w)?;
            writeln!(w, "Time  Pat.# Name            Phone#")?;
            writeln!(w, "----- ----- --------------- --------------------")
        }
    }
}

pub fn schedule_row<W: Write>(w: &mut W, entry: &ScheduleEntry, include_date: bool) -> io::Result<()> {
    if include_date {
        write!(w, "{} ", entry.appointment.date)?;
    }
    writeln!(
        w,
        "{} {:05} {} {} ({})",
        entry.appointment.time,
        entry.patient.patient_number,
        name_column(&entry.patient.name),
        formatted_phone(&entry.patient.phone.number),
        entry.patient.phone.description
    )
}

pub fn schedule_table<W: Write>(
    w: &mut W,
    date: Option<&Date>,
    entries: &[ScheduleEntry],
) -> io::Result<()> {
    schedule_header(w, date)?;
    for entry in entries {
        schedule_row(w, entry, date.is_none())?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetclinic::model::{Appointment, Phone, PhoneDescription, Time};

    fn rex() -> Patient {
        Patient::new(
            1024,
            "Rex",
            Phone::new(PhoneDescription::Cell, "5551234567").unwrap(),
        )
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn phone_formatting() {
        assert_eq!(formatted_phone("5551234567"), "(555)123-4567");
        assert_eq!(formatted_phone(""), "(___)___-____");
    }

    #[test]
    fn name_column_is_fixed_width() {
        assert_eq!(name_column("Rex"), format!("Rex{}", " ".repeat(12)));
        assert_eq!(name_column("A very long pet name").width(), NAME_LEN);
        assert_eq!(name_column("ミケ").width(), NAME_LEN);
    }

    #[test]
    fn patient_row_layout() {
        let out = render(|w| patient_row(w, &rex()));
        assert_eq!(out, "01024 Rex             (555)123-4567 (CELL)\n");
    }

    #[test]
    fn patient_form_layout() {
        let out = render(|w| patient_form(w, &rex()));
        assert_eq!(
            out,
            "Name  : Rex\nNumber: 01024\nPhone : (555)123-4567 (CELL)\n"
        );
    }

    #[test]
    fn empty_table_notice() {
        let out = render(|w| patient_table(w, &[]));
        assert!(out.contains("*** No records found ***"));
    }

    #[test]
    fn schedule_rows_with_and_without_date() {
        let entry = ScheduleEntry {
            patient: rex(),
            appointment: Appointment::new(
                1024,
                "2024-03-10".parse().unwrap(),
                Time::new(9, 30).unwrap(),
            ),
        };
        let all = render(|w| schedule_table(w, None, std::slice::from_ref(&entry)));
        assert!(all.contains("<ALL>"));
        assert!(all.contains("2024-03-10 09:30 01024 Rex"));

        let date: Date = "2024-03-10".parse().unwrap();
        let day = render(|w| schedule_table(w, Some(&date), std::slice::from_ref(&entry)));
        assert!(day.contains("Clinic Appointments for the Date: 2024-03-10"));
        assert!(day.contains("\n09:30 01024 Rex"));
    }
}
