// PagePulse - ui/panels/forms.rs
//
// Signup and contact forms.
// Validation failures surface as warning notices; a passing submit flips
// the form into its busy state and `gui.rs` completes it once the settle
// interval elapses. The password meter recolours on every keystroke.

use std::time::Instant;

use crate::app::state::{ContactFields, SignupFields};
use crate::core::form::{fit_rows, FormController};
use crate::core::notice::{NoticeCenter, NoticeKind};
use crate::core::strength::StrengthBand;
use crate::ui::theme;
use crate::util::constants;

/// Render the account signup form into the current section.
pub fn render_signup(
    ui: &mut egui::Ui,
    fields: &mut SignupFields,
    form: &mut FormController,
    notices: &mut NoticeCenter,
    now: Instant,
) {
    text_field(ui, &mut fields.username, "Username *");
    text_field(ui, &mut fields.email, "Email *");

    ui.horizontal(|ui| {
        let half = (theme::FORM_FIELD_WIDTH - 8.0) / 2.0;
        ui.add(
            egui::TextEdit::singleline(&mut fields.first_name)
                .hint_text("First name *")
                .desired_width(half),
        );
        ui.add(
            egui::TextEdit::singleline(&mut fields.last_name)
                .hint_text("Last name *")
                .desired_width(half),
        );
    });
    ui.add_space(6.0);

    text_field(ui, &mut fields.roll_number, "Roll number *");
    text_field(ui, &mut fields.department, "Department *");

    ui.label(egui::RichText::new("Year of study").small().weak());
    egui::ComboBox::from_id_salt("signup-year")
        .selected_text(year_label(fields.year))
        .width(theme::FORM_FIELD_WIDTH)
        .show_ui(ui, |ui| {
            for year in 1..=4u8 {
                ui.selectable_value(&mut fields.year, year, year_label(year));
            }
        });
    ui.add_space(6.0);

    ui.add(
        egui::TextEdit::singleline(&mut fields.password1)
            .password(true)
            .hint_text("Password *")
            .desired_width(theme::FORM_FIELD_WIDTH),
    );
    strength_meter(ui, &fields.password1);
    ui.add_space(6.0);

    ui.add(
        egui::TextEdit::singleline(&mut fields.password2)
            .password(true)
            .hint_text("Confirm password *")
            .desired_width(theme::FORM_FIELD_WIDTH),
    );
    ui.add_space(10.0);

    submit_row(ui, form, fields.validation_error(), notices, now);
}

/// Render the contact form into the current section.
pub fn render_contact(
    ui: &mut egui::Ui,
    fields: &mut ContactFields,
    form: &mut FormController,
    notices: &mut NoticeCenter,
    now: Instant,
) {
    text_field(ui, &mut fields.name, "Name *");
    text_field(ui, &mut fields.email, "Email *");
    text_field(ui, &mut fields.subject, "Subject *");

    // The message box grows a row per line of text, never shrinking
    // below the minimum height.
    let rows = fit_rows(&fields.message, constants::TEXTAREA_MIN_ROWS);
    ui.add(
        egui::TextEdit::multiline(&mut fields.message)
            .hint_text("Message *")
            .desired_width(theme::FORM_FIELD_WIDTH)
            .desired_rows(rows),
    );
    ui.add_space(10.0);

    submit_row(ui, form, fields.validation_error(), notices, now);
}

/// One single-line field with trailing spacing.
fn text_field(ui: &mut egui::Ui, value: &mut String, hint: &str) {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(theme::FORM_FIELD_WIDTH),
    );
    ui.add_space(6.0);
}

/// Password strength bar plus band label underneath the password field.
/// Empty input paints the empty track and no label.
fn strength_meter(ui: &mut egui::Ui, password: &str) {
    let band = StrengthBand::for_password(password);

    ui.add_space(4.0);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::FORM_FIELD_WIDTH, theme::STRENGTH_METER_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    if band != StrengthBand::Empty {
        let mut fill = rect;
        fill.set_width(rect.width() * band.fraction());
        ui.painter()
            .rect_filled(fill, 2.0, theme::strength_colour(band));
        ui.label(
            egui::RichText::new(band.label())
                .small()
                .color(theme::strength_colour(band)),
        );
    }
}

/// Submit button shared by both forms. The button greys out and shows the
/// busy label while a submit is settling; clicks on an invalid form raise
/// a warning notice instead of entering the busy state.
fn submit_row(
    ui: &mut egui::Ui,
    form: &mut FormController,
    validation_error: Option<&'static str>,
    notices: &mut NoticeCenter,
    now: Instant,
) {
    let button = egui::Button::new(form.submit_label());
    if ui.add_enabled(!form.is_submitting(), button).clicked() {
        match validation_error {
            Some(message) => {
                notices.push(message, NoticeKind::Warning, now);
            }
            None => {
                form.begin_submit(now);
            }
        }
    }
}

fn year_label(year: u8) -> &'static str {
    match year {
        1 => "1st Year",
        2 => "2nd Year",
        3 => "3rd Year",
        4 => "4th Year",
        _ => "Other",
    }
}
