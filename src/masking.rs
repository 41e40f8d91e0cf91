//! Log-safe masking
//!
//! Masks personal data before it reaches logs or console output.

/// Mask the local part of an email address.
///
/// Keeps the first and last character and masks the middle; local parts
/// of two characters or fewer are masked entirely. Strings without an
/// `@` come back unchanged.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };

    let chars: Vec<char> = local.chars().collect();
    if chars.len() <= 2 {
        return format!("{}@{domain}", "*".repeat(chars.len()));
    }

    let first = chars[0];
    let last = chars[chars.len() - 1];
    let masked_middle = "*".repeat(chars.len() - 2);

    format!("{first}{masked_middle}{last}@{domain}")
}
