use std::fmt;

use urlencoding::encode;

/// Subject lines the page pre-fills in mail links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailSubject<'a> {
    InternshipApplication,
    RoleApplication(&'a str),
    CourseEnquiry(&'a str),
    GeneralEnquiry,
}

impl fmt::Display for MailSubject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailSubject::InternshipApplication => f.write_str("Internship Application"),
            MailSubject::RoleApplication(role) => write!(f, "Application for {role}"),
            MailSubject::CourseEnquiry(course) => write!(f, "{course} - Course Enquiry"),
            MailSubject::GeneralEnquiry => f.write_str("General Enquiry"),
        }
    }
}

/// `mailto:` URI. The whole subject is percent-encoded, so names with spaces,
/// parentheses or `&` survive as one query parameter.
pub fn mailto(address: &str, subject: Option<MailSubject<'_>>) -> String {
    match subject {
        Some(s) => format!("mailto:{}?subject={}", address, encode(&s.to_string())),
        None => format!("mailto:{address}"),
    }
}

pub fn tel(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Pulls the decoded `subject` parameter back out of a mailto URI.
/// Inverse of [`mailto`]; lets callers check what a mail client will pre-fill.
pub fn subject_of(uri: &str) -> Result<String, String> {
    let query = uri
        .split_once('?')
        .map(|(_, q)| q)
        .ok_or_else(|| format!("no query in {uri}"))?;
    let raw = query
        .split('&')
        .find_map(|kv| kv.strip_prefix("subject="))
        .ok_or_else(|| format!("no subject in {uri}"))?;
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|e| format!("subject is not valid UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "thetrinityc@gmail.com";

    #[test]
    fn role_application_subject_decodes_exactly() {
        let uri = mailto(EMAIL, Some(MailSubject::RoleApplication("Data Analyst")));
        assert_eq!(
            uri,
            "mailto:thetrinityc@gmail.com?subject=Application%20for%20Data%20Analyst"
        );
        assert_eq!(subject_of(&uri).unwrap(), "Application for Data Analyst");
    }

    #[test]
    fn course_enquiry_encodes_punctuation() {
        let uri = mailto(
            EMAIL,
            Some(MailSubject::CourseEnquiry("Artificial Intelligence (AI)")),
        );
        assert!(!uri.contains(' '));
        assert!(!uri.contains('('));
        assert_eq!(
            subject_of(&uri).unwrap(),
            "Artificial Intelligence (AI) - Course Enquiry"
        );
    }

    #[test]
    fn ampersand_in_name_does_not_split_the_query() {
        let uri = mailto(EMAIL, Some(MailSubject::CourseEnquiry("Forecasting & Time Series")));
        assert_eq!(uri.matches('&').count(), 0);
        assert_eq!(
            subject_of(&uri).unwrap(),
            "Forecasting & Time Series - Course Enquiry"
        );
    }

    #[test]
    fn fixed_subjects() {
        assert_eq!(
            mailto(EMAIL, Some(MailSubject::InternshipApplication)),
            "mailto:thetrinityc@gmail.com?subject=Internship%20Application"
        );
        assert_eq!(
            mailto(EMAIL, Some(MailSubject::GeneralEnquiry)),
            "mailto:thetrinityc@gmail.com?subject=General%20Enquiry"
        );
    }

    #[test]
    fn plain_mailto_has_no_query() {
        assert_eq!(mailto(EMAIL, None), "mailto:thetrinityc@gmail.com");
        assert!(subject_of(&mailto(EMAIL, None)).is_err());
    }

    #[test]
    fn tel_keeps_the_phone_literal() {
        assert_eq!(tel("+91 9503447189"), "tel:+91 9503447189");
    }
}
