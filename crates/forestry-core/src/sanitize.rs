//! Sanitization helpers for values that end up in log output.
//!
//! Emails are PII and raw request strings can carry control characters that
//! forge log lines, so anything user-supplied is passed through here before
//! it reaches `tracing`.

/// Mask an email address for logging: `john.doe@example.com` becomes
/// `j***e@e***e.com`. Control characters are stripped first.
pub fn mask_email(email: &str) -> String {
    let cleaned = strip_control(email);
    if cleaned.trim().is_empty() {
        return "[empty-email]".to_string();
    }

    let Some((local, domain)) = cleaned.split_once('@') else {
        // Not an email shape; mask aggressively.
        return if cleaned.len() > 4 {
            format!("{}***{}", &cleaned[..2], &cleaned[cleaned.len() - 2..])
        } else {
            "***".to_string()
        };
    };

    let masked_local = mask_part(local);

    let masked_domain = match domain.split_once('.') {
        Some((host, tld)) => format!("{}.{}", mask_part(host), tld),
        None => mask_part(domain),
    };

    format!("{masked_local}@{masked_domain}")
}

/// Strip control characters and truncate free-form text before logging.
pub fn sanitize_text(text: &str) -> String {
    let cleaned = strip_control(text);
    if cleaned.trim().is_empty() {
        return "[empty]".to_string();
    }
    if cleaned.len() > 100 {
        let mut end = 100;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &cleaned[..end])
    } else {
        cleaned
    }
}

/// Keep first and last character, mask the middle.
fn mask_part(part: &str) -> String {
    let chars: Vec<char> = part.chars().collect();
    match chars.len() {
        0 => String::new(),
        1 => "*".to_string(),
        2 => format!("{}*", chars[0]),
        _ => format!("{}***{}", chars[0], chars[chars.len() - 1]),
    }
}

fn strip_control(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_typical_email() {
        assert_eq!(mask_email("john.doe@example.com"), "j***e@e***e.com");
    }

    #[test]
    fn masks_short_local_part() {
        assert_eq!(mask_email("ab@example.com"), "a*@e***e.com");
        assert_eq!(mask_email("a@b.com"), "*@*.com");
    }

    #[test]
    fn handles_empty_and_non_email_input() {
        assert_eq!(mask_email(""), "[empty-email]");
        assert_eq!(mask_email("abc"), "***");
        assert_eq!(mask_email("not-an-email"), "no***il");
    }

    #[test]
    fn strips_newlines_that_could_forge_logs() {
        let masked = mask_email("evil@example.com\nINFO fake line");
        assert!(!masked.contains('\n'));
    }

    #[test]
    fn truncates_long_text() {
        let long = "x".repeat(300);
        let out = sanitize_text(&long);
        assert_eq!(out.len(), 103);
        assert!(out.ends_with("..."));
    }
}
