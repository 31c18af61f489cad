//! Field-level validation for the booking form. Checks run on blur; any
//! subsequent input clears the invalid flag eagerly so the user can retry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
    TextArea,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub invalid: bool,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            invalid: false,
        }
    }

    /// Blur-time validation. Returns whether the field passed.
    pub fn on_blur(&mut self) -> bool {
        let value = self.value.trim();
        self.invalid = false;

        if self.required && value.is_empty() {
            self.invalid = true;
        } else if !value.is_empty() {
            let ok = match self.kind {
                FieldKind::Email => is_valid_email(value),
                FieldKind::Phone => is_valid_phone(value),
                _ => true,
            };
            self.invalid = !ok;
        }
        !self.invalid
    }

    /// Any edit clears the flag without re-validating.
    pub fn on_input(&mut self, c: char) {
        self.value.push(c);
        self.invalid = false;
    }

    pub fn on_backspace(&mut self) {
        self.value.pop();
        self.invalid = false;
    }
}

/// Shape check equivalent to `local@domain.tld`: no whitespace, exactly one
/// `@` with a non-empty local part, and a dot strictly inside the domain.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Loose E.164 shape: after stripping spaces/dashes/parens, an optional `+`
/// followed by a 1-9 digit and up to 15 further digits.
fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);

    let mut chars = digits.chars();
    match chars.next() {
        Some(c) if ('1'..='9').contains(&c) => {}
        _ => return false,
    }
    let rest: Vec<char> = chars.collect();
    rest.len() <= 15 && rest.iter().all(|c| c.is_ascii_digit())
}

/// The booking form: ordered fields with a cursor. Moving the cursor blurs
/// the field being left, which is when validation runs.
pub struct BookingForm {
    fields: Vec<FormField>,
    active: usize,
}

pub const SERVICE_OPTIONS: [&str; 4] = ["recording", "mixing", "mastering", "production"];

impl BookingForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::new("firstName", "First Name", FieldKind::Text, true),
                FormField::new("lastName", "Last Name", FieldKind::Text, true),
                FormField::new("email", "Email", FieldKind::Email, true),
                FormField::new("phone", "Phone", FieldKind::Phone, true),
                FormField::new("artistName", "Artist / Band Name", FieldKind::Text, false),
                FormField::new("service", "Service", FieldKind::Select, true),
                FormField::new("description", "Project Description", FieldKind::TextArea, false),
                FormField::new("duration", "Session Duration", FieldKind::Text, false),
                FormField::new("requests", "Special Requests", FieldKind::TextArea, false),
            ],
            active: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_field(&self) -> &FormField {
        &self.fields[self.active]
    }

    pub fn active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active]
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value_of(&self, name: &str) -> String {
        self.field(name)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.to_string();
            field.invalid = false;
        }
    }

    /// Leaving a field is its blur event.
    pub fn next_field(&mut self) {
        self.fields[self.active].on_blur();
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.fields[self.active].on_blur();
        self.active = if self.active == 0 {
            self.fields.len() - 1
        } else {
            self.active - 1
        };
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.invalid = false;
        }
        self.active = 0;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_empty_field_flags_on_blur() {
        let mut form = BookingForm::new();
        assert!(!form.field_mut("firstName").unwrap().on_blur());
        assert!(form.field("firstName").unwrap().invalid);
    }

    #[test]
    fn optional_empty_field_passes_blur() {
        let mut form = BookingForm::new();
        assert!(form.field_mut("requests").unwrap().on_blur());
    }

    #[test]
    fn bad_email_flags_and_input_clears_eagerly() {
        let mut form = BookingForm::new();
        let email = form.field_mut("email").unwrap();
        email.value = "not-an-email".to_string();
        assert!(!email.on_blur());
        assert!(email.invalid);

        // Still not a valid address, but the flag clears on input anyway
        email.on_input('x');
        assert!(!email.invalid);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("sarah@resonance.studio"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@nobody.com"));
        assert!(!is_valid_email("two@@ats.com"));
        assert!(!is_valid_email("trailing@dot."));
        assert!(!is_valid_email("spa ced@mail.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("12345678901234567")); // 17 digits
    }

    #[test]
    fn moving_cursor_blurs_the_left_field() {
        let mut form = BookingForm::new();
        form.active_field_mut().value = String::new();
        form.next_field();
        assert!(form.field("firstName").unwrap().invalid);
        assert_eq!(form.active_field().name, "lastName");
    }

    #[test]
    fn clear_resets_values_flags_and_cursor() {
        let mut form = BookingForm::new();
        form.set_value("email", "someone@mail.com");
        form.field_mut("phone").unwrap().invalid = true;
        form.next_field();
        form.clear();
        assert!(form.value_of("email").is_empty());
        assert!(!form.field("phone").unwrap().invalid);
        assert_eq!(form.active_index(), 0);
    }
}
