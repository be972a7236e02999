use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectType {
    #[default]
    WebDevelopment,
    MobileApp,
    ECommerce,
    SaasPlatform,
    ApiDevelopment,
    Consulting,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        ProjectType::WebDevelopment,
        ProjectType::MobileApp,
        ProjectType::ECommerce,
        ProjectType::SaasPlatform,
        ProjectType::ApiDevelopment,
        ProjectType::Consulting,
        ProjectType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::WebDevelopment => "Web Development",
            ProjectType::MobileApp => "Mobile App",
            ProjectType::ECommerce => "E-commerce",
            ProjectType::SaasPlatform => "SaaS Platform",
            ProjectType::ApiDevelopment => "API Development",
            ProjectType::Consulting => "Consulting",
            ProjectType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    Malformed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub issue: FieldIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issue {
            FieldIssue::Missing => write!(f, "{} is required", self.field.label()),
            FieldIssue::Malformed => write!(f, "{} looks invalid", self.field.label()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Busy,
    Invalid(Vec<FieldError>),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Busy => f.write_str("a submission is already in flight"),
            SubmitError::Invalid(errors) => write!(f, "{} field(s) need attention", errors.len()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub project_type: ProjectType,
}

fn email_pattern() -> &'static Regex {
    static RE_EMAIL: OnceLock<Regex> = OnceLock::new();
    RE_EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

impl ContactFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let value = self.value(field);
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    issue: FieldIssue::Missing,
                });
            } else if field == Field::Email && !email_pattern().is_match(value.trim()) {
                errors.push(FieldError {
                    field,
                    issue: FieldIssue::Malformed,
                });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Form state for the simulated contact flow.
///
/// Every submission bumps a generation counter; delayed callbacks carry the
/// [`Ticket`] they were issued with and become no-ops once the generation has
/// moved on. Edits made after a submission started keep their text through
/// the confirmation reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: Vec<FieldError>,
    phase: Phase,
    generation: u64,
    edited_in_flight: bool,
}

impl ContactForm {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
        self.touch(Some(field));
    }

    pub fn select_project_type(&mut self, project_type: ProjectType) {
        self.fields.project_type = project_type;
        self.touch(None);
    }

    fn touch(&mut self, field: Option<Field>) {
        if let Some(field) = field {
            self.errors.retain(|e| e.field != field);
        }
        match self.phase {
            Phase::Editing => {}
            Phase::Submitting => self.edited_in_flight = true,
            // Typing while the confirmation is showing cancels the pending auto-reset.
            Phase::Submitted => {
                self.phase = Phase::Editing;
                self.generation += 1;
            }
        }
    }

    pub fn begin_submit(&mut self) -> Result<Ticket, SubmitError> {
        if self.phase == Phase::Submitting {
            return Err(SubmitError::Busy);
        }
        if let Err(errors) = self.fields.validate() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors.clear();
        self.generation += 1;
        self.edited_in_flight = false;
        self.phase = Phase::Submitting;
        Ok(Ticket(self.generation))
    }

    pub fn finish_submit(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.phase != Phase::Submitting {
            return false;
        }
        self.phase = Phase::Submitted;
        true
    }

    /// Leaves the confirmation; returns whether the fields were cleared.
    pub fn expire_confirmation(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.phase != Phase::Submitted {
            return false;
        }
        self.phase = Phase::Editing;
        if std::mem::take(&mut self.edited_in_flight) {
            return false;
        }
        self.fields = ContactFields::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada Lovelace".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Subject, "Analytical engine".into());
        form.edit(Field::Message, "Let's build something.".into());
        form
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let mut form = ContactForm::default();
        let Err(SubmitError::Invalid(errors)) = form.begin_submit() else {
            panic!("blank form should not submit");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.errors.len(), 4);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.edit(Field::Email, "ada at example".into());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Invalid(vec![FieldError {
                field: Field::Email,
                issue: FieldIssue::Malformed,
            }]))
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        let _ = form.begin_submit();
        form.edit(Field::Name, "Ada".into());
        assert!(form.errors.iter().all(|e| e.field != Field::Name));
        assert_eq!(form.errors.len(), 3);
    }

    #[test]
    fn full_cycle_resets_fields() {
        let mut form = filled();
        form.select_project_type(ProjectType::Consulting);
        let ticket = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::Busy));

        assert!(form.finish_submit(ticket));
        assert!(form.is_submitted());

        assert!(form.expire_confirmation(ticket));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.fields.project_type, ProjectType::WebDevelopment);
    }

    #[test]
    fn typing_after_submit_cancels_auto_reset() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.finish_submit(ticket);

        form.edit(Field::Message, "One more thing".into());
        assert!(!form.expire_confirmation(ticket));
        assert_eq!(form.fields.message, "One more thing");
        assert_eq!(form.fields.name, "Ada Lovelace");
    }

    #[test]
    fn text_typed_while_sending_survives_the_reset() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.edit(Field::Message, "second thought".into());

        assert!(form.finish_submit(ticket));
        assert!(!form.expire_confirmation(ticket));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields.message, "second thought");
        assert_eq!(form.fields.name, "Ada Lovelace");
    }

    #[test]
    fn in_flight_edit_does_not_leak_into_next_submission() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.select_project_type(ProjectType::Other);
        form.finish_submit(first);
        form.expire_confirmation(first);

        let second = form.begin_submit().unwrap();
        form.finish_submit(second);
        assert!(form.expire_confirmation(second));
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn stale_ticket_from_earlier_submission_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.finish_submit(first);
        form.edit(Field::Subject, "Follow-up".into());

        let second = form.begin_submit().unwrap();
        assert!(!form.expire_confirmation(first));
        assert!(!form.finish_submit(first));
        assert!(form.finish_submit(second));
        assert!(form.is_submitted());
    }

    #[test]
    fn project_type_labels_round_trip() {
        for t in ProjectType::ALL {
            assert_eq!(ProjectType::from_label(t.label()), Some(t));
        }
        assert_eq!(ProjectType::from_label("web development"), None);
    }
}
