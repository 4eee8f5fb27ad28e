use crate::core::booking::BookingState;
use crate::views::ViewOptions;
use std::fmt::Write;

pub const MISSING_DOCTOR_MESSAGE: &str = "No doctor information found";
pub const BACK_ACTION_LABEL: &str = "Back to Doctors List";

pub fn render(state: &BookingState, options: &ViewOptions) -> String {
    let mut out = String::new();

    let Some(doctor) = state.doctor() else {
        let _ = writeln!(out, "{}", MISSING_DOCTOR_MESSAGE);
        let _ = writeln!(out, "[{}]", BACK_ACTION_LABEL);
        return out;
    };

    out.push_str("✔ Appointment Booked Successfully!\n\n");
    let _ = writeln!(out, "{}", doctor.name);
    let _ = writeln!(out, "{}", doctor.specialities.join(", "));
    let _ = writeln!(out, "{}", options.avatar_url(&doctor.id));
    out.push('\n');
    let _ = writeln!(
        out,
        "Your appointment has been successfully booked with {}.",
        doctor.name
    );
    let _ = writeln!(out, "Consultation Mode: {}", doctor.consultation_mode);
    let _ = writeln!(out, "Consultation Fee: {}", options.format_fee(doctor.fees));
    out.push('\n');
    let _ = writeln!(out, "[{}]", BACK_ACTION_LABEL);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ConsultationMode, Doctor};

    #[test]
    fn test_render_confirmed() {
        let doctor = Doctor::new(
            "2",
            "Dr. Sarah Johnson",
            &["Dentist", "Surgeon"],
            8,
            800.0,
            ConsultationMode::InClinic,
        );
        let text = render(&BookingState::Confirmed(doctor), &ViewOptions::default());
        assert!(text.contains("Appointment Booked Successfully!"));
        assert!(text.contains("Dentist, Surgeon"));
        assert!(text.contains("Consultation Mode: In Clinic"));
        assert!(text.contains("Consultation Fee: ₹800"));
    }

    #[test]
    fn test_render_missing_doctor() {
        let text = render(&BookingState::MissingDoctor, &ViewOptions::default());
        assert!(text.contains(MISSING_DOCTOR_MESSAGE));
        assert!(text.contains(BACK_ACTION_LABEL));
    }
}
