use validator::ValidateEmail;

pub const INVALID_EMAIL_MESSAGE: &str = "This is not a valid email";

/// Minimum length of the alphabetic top-level domain.
const MIN_TLD_LEN: usize = 2;

pub fn is_valid_email(value: &str) -> bool {
    value.to_string().validate_email() && has_dotted_domain(value)
}

/// The domain must be `<host>.<tld>` with an alphabetic TLD of at least two letters.
fn has_dotted_domain(value: &str) -> bool {
    value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .map(|(host, tld)| {
            !host.is_empty()
                && tld.chars().count() >= MIN_TLD_LEN
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        })
        .unwrap_or(false)
}
