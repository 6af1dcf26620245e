//! Deep links for reaching people straight from the dashboard.

/// WhatsApp chat link. wa.me wants digits only, no '+' or separators.
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

/// Telegram chat link from a handle, with or without the leading '@'.
pub fn telegram_link(handle: &str) -> String {
    format!("https://t.me/{}", handle.trim_start_matches('@'))
}

/// Dialer link
pub fn phone_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Mail client link
pub fn email_link(email: &str) -> String {
    format!("mailto:{}", email)
}
