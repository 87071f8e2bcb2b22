use tracing::{info, warn};

use crate::{
    presenter::FormPresenter,
    validate::{validate_email, validate_name},
};

const MAIL_SUBJECT: &str = "Sharing my Azertype score";

/// A request for the system mail handler to compose a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    pub recipient: String,
    pub sender_name: String,
    pub score: String,
}

impl MailRequest {
    pub fn subject(&self) -> &'static str {
        MAIL_SUBJECT
    }

    pub fn body(&self) -> String {
        format!(
            "Hi, I'm {} and I just scored {} on Azertype!",
            self.sender_name, self.score
        )
    }

    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(self.subject()),
            encode_component(&self.body())
        )
    }
}

// unreserved characters pass through, everything else is %-escaped per byte
fn encode_component(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Validates the form values and builds the mail request. The first failure
/// is written to the form's error surface; success clears it.
pub fn submit_share<F: FormPresenter>(
    name: &str,
    email: &str,
    score: &str,
    presenter: &mut F,
) -> Option<MailRequest> {
    let checked = validate_name(name).and_then(|_| validate_email(email));

    match checked {
        Ok(()) => {
            presenter.ensure_error_surface().clear();
            info!(score, "score shared");
            Some(MailRequest {
                recipient: email.to_string(),
                sender_name: name.to_string(),
                score: score.to_string(),
            })
        }
        Err(err) => {
            warn!(%err, "share form rejected");
            let surface = presenter.ensure_error_surface();
            surface.clear();
            surface.push_str(&err.to_string());
            None
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Name,
        }
    }
}

/// The score-sharing popup: two text fields and a lazily created error line.
#[derive(Debug, Default, Clone)]
pub struct ShareForm {
    pub name: String,
    pub email: String,
    pub focus: Field,
    error: Option<String>,
    /// Link of the last successful submit, kept for display.
    pub last_link: Option<String>,
}

impl ShareForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit(&mut self, score: &str) -> Option<MailRequest> {
        let (name, email) = (self.name.clone(), self.email.clone());
        let request = submit_share(&name, &email, score, self);
        self.last_link = request.as_ref().map(MailRequest::mailto_url);
        request
    }
}

impl FormPresenter for ShareForm {
    fn ensure_error_surface(&mut self) -> &mut String {
        self.error.get_or_insert_with(String::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        created: usize,
        surface: Option<String>,
    }

    impl FormPresenter for CountingSurface {
        fn ensure_error_surface(&mut self) -> &mut String {
            if self.surface.is_none() {
                self.created += 1;
            }
            self.surface.get_or_insert_with(String::new)
        }
    }

    #[test]
    fn test_mail_request_text() {
        let request = MailRequest {
            recipient: "ford@betelgeuse.example".into(),
            sender_name: "Arthur".into(),
            score: "3 / 5".into(),
        };
        assert_eq!(request.subject(), "Sharing my Azertype score");
        assert_eq!(
            request.body(),
            "Hi, I'm Arthur and I just scored 3 / 5 on Azertype!"
        );
    }

    #[test]
    fn test_mailto_url_is_encoded() {
        let request = MailRequest {
            recipient: "a@b.c".into(),
            sender_name: "Zoë".into(),
            score: "1 / 2".into(),
        };
        let url = request.mailto_url();
        assert!(url.starts_with("mailto:a@b.c?subject=Sharing%20my%20Azertype%20score&body="));
        assert!(url.contains("Hi%2C%20I%27m%20Zo%C3%AB"));
        assert!(url.contains("1%20%2F%202"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_submit_success_builds_request() {
        let mut surface = CountingSurface::default();
        let request = submit_share("Arthur", "arthur@earth.example", "2 / 2", &mut surface).unwrap();

        assert_eq!(request.recipient, "arthur@earth.example");
        assert_eq!(request.sender_name, "Arthur");
        assert_eq!(request.score, "2 / 2");
        assert_eq!(surface.surface.as_deref(), Some(""));
    }

    #[test]
    fn test_submit_reports_first_failure_only() {
        let mut surface = CountingSurface::default();
        assert!(submit_share("a", "nope", "0 / 0", &mut surface).is_none());
        assert_eq!(surface.surface.as_deref(), Some("The name is too short"));

        assert!(submit_share("Arthur", "nope", "0 / 0", &mut surface).is_none());
        assert_eq!(
            surface.surface.as_deref(),
            Some("The email address is not valid")
        );
    }

    #[test]
    fn test_error_surface_created_once() {
        let mut surface = CountingSurface::default();
        submit_share("a", "a@b.c", "0 / 0", &mut surface);
        submit_share("b", "a@b.c", "0 / 0", &mut surface);
        submit_share("Arthur", "a@b.c", "0 / 0", &mut surface);
        assert_eq!(surface.created, 1);
        assert_eq!(surface.surface.as_deref(), Some(""));
    }

    #[test]
    fn test_share_form_editing() {
        let mut form = ShareForm::default();
        form.focused_mut().push_str("Arthur");
        form.switch_focus();
        form.focused_mut().push_str("a@b.c");

        assert_eq!(form.name, "Arthur");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.error(), None);

        let request = form.submit("1 / 1").unwrap();
        assert_eq!(form.last_link, Some(request.mailto_url()));
        assert_eq!(form.error(), Some(""));
    }

    #[test]
    fn test_share_form_failure_keeps_fields() {
        let mut form = ShareForm::default();
        form.name = "x".into();
        assert!(form.submit("0 / 0").is_none());
        assert_eq!(form.error(), Some("The name is too short"));
        assert_eq!(form.name, "x");
        assert_eq!(form.last_link, None);
    }
}
