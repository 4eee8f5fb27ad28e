use crate::core::directory::Directory;
use crate::domain::model::{ConsultationMode, Doctor, FilterState, SortOption};
use crate::views::ViewOptions;
use std::fmt::Write;

pub struct ListingView<'a> {
    pub directory: &'a Directory,
    pub filters: &'a FilterState,
    pub displayed: &'a [Doctor],
    pub suggestions: &'a [&'a Doctor],
    pub options: &'a ViewOptions,
}

impl ListingView<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.directory.is_loading() {
            out.push_str("Loading doctors...\n");
            return out;
        }

        if let Some(error) = self.directory.error() {
            let _ = writeln!(out, "⚠ {}", error);
            out.push_str("[Retry]\n\n");
        }

        self.render_search(&mut out);
        self.render_filters(&mut out);
        self.render_doctors(&mut out);
        out
    }

    fn render_search(&self, out: &mut String) {
        let _ = writeln!(out, "Search Doctors: {}", self.filters.search_query);
        for doctor in self.suggestions {
            let _ = writeln!(
                out,
                "  » {} ({}) [Book]",
                doctor.name,
                doctor.specialities.join(", ")
            );
        }
        out.push('\n');
    }

    fn render_filters(&self, out: &mut String) {
        out.push_str("Filters [Clear All]\n");

        out.push_str("  Consultation Mode:\n");
        for mode in ConsultationMode::ALL {
            let _ = writeln!(
                out,
                "    {} {}",
                radio(self.filters.consultation_mode == Some(mode)),
                mode
            );
        }

        out.push_str("  Speciality:\n");
        for speciality in self.directory.all_specialities() {
            let checked = self.filters.specialities.contains(&speciality);
            let _ = writeln!(out, "    {} {}", checkbox(checked), speciality);
        }

        out.push_str("  Sort By:\n");
        for sort in SortOption::ALL {
            let _ = writeln!(
                out,
                "    {} {}",
                radio(self.filters.sort_by == Some(sort)),
                sort.label()
            );
        }
        out.push('\n');
    }

    fn render_doctors(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{} of {} doctors",
            self.displayed.len(),
            self.directory.doctors().len()
        );

        if self.displayed.is_empty() {
            out.push_str("No doctors found matching your criteria\n");
            return;
        }

        for doctor in self.displayed {
            let _ = writeln!(out, "- {} [{}]", doctor.name, doctor.id);
            let _ = writeln!(out, "    {}", doctor.specialities.join(", "));
            let _ = writeln!(
                out,
                "    {} years experience | {} | {}",
                doctor.experience,
                self.options.format_fee(doctor.fees),
                doctor.consultation_mode
            );
            let _ = writeln!(out, "    {}", self.options.avatar_url(&doctor.id));
            out.push_str("    [Book Appointment]\n");
        }
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
