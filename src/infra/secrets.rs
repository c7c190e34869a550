use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 7] = [
    "password", "passcode", "2fa", "secret", "token", "otp", "code",
];

const TRUSTED_CODE_PREFIXES: [&str; 2] = ["AUTH_", "VK_"];

pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps machine-readable error codes, replaces anything that could carry
/// user input with a generic code.
pub fn sanitize_error_code(code: &str) -> String {
    let valid = TRUSTED_CODE_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
        && code.len() <= 64
        && code
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_' || ch == '-');

    if valid {
        code.to_owned()
    } else {
        "VK_TRANSIENT".to_owned()
    }
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "vk-cleaner panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("vk-cleaner panic: {}", scrubbed);
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    if assigns_sensitive_value(chunk) || looks_like_secret_value(chunk) {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

/// `password=...` or `token:...`; a bare word like "password" is prose.
fn assigns_sensitive_value(chunk: &str) -> bool {
    let Some((key, value)) = chunk.split_once(|ch: char| ch == '=' || ch == ':') else {
        return false;
    };

    let key = key.to_ascii_lowercase();
    !value.is_empty() && SENSITIVE_MARKERS.iter().any(|marker| key.contains(marker))
}

fn looks_like_secret_value(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());

    let has_mixed = cleaned.chars().any(|ch| ch.is_ascii_alphabetic())
        && cleaned.chars().any(|ch| ch.is_ascii_digit());

    cleaned.len() >= 6 && (cleaned.chars().all(|ch| ch.is_ascii_digit()) || has_mixed)
}
