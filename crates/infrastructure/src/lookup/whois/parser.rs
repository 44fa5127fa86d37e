use certwatch_domain::ExpiryDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Field labels registries use for the registration expiry, lowercased.
const EXPIRY_LABELS: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "registry expiration date",
    "expiration date",
    "expiry date",
    "expire date",
    "expiration time",
    "expires on",
    "expires",
    "expire",
    "expiry",
    "paid-till",
    "valid until",
    "renewal date",
    "domain expiration date",
    "record expires on",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%d-%b-%Y", "%d-%B-%Y", "%Y.%m.%d", "%d.%m.%Y", "%Y/%m/%d", "%d/%m/%Y",
];

/// Splits `label: value`, normalizing the label (lowercase, no dot leaders).
fn split_field(line: &str) -> Option<(String, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = label
        .trim()
        .trim_end_matches('.')
        .trim()
        .to_ascii_lowercase();
    Some((label, value.trim()))
}

/// WHOIS server named by an IANA-style `refer:` or `whois:` line.
pub fn parse_referral(response: &str) -> Option<String> {
    response.lines().find_map(|line| {
        let (label, value) = split_field(line)?;
        match label.as_str() {
            "refer" | "whois" if !value.is_empty() => Some(value.to_ascii_lowercase()),
            _ => None,
        }
    })
}

/// Registrar WHOIS server a thin registry points to.
pub fn parse_registrar_server(response: &str) -> Option<String> {
    response.lines().find_map(|line| {
        let (label, value) = split_field(line)?;
        if label != "registrar whois server" {
            return None;
        }
        let host = value
            .trim_start_matches("whois://")
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        (!host.is_empty()).then(|| host.to_ascii_lowercase())
    })
}

/// First expiry field in `response` whose value parses as a date.
pub fn parse_expiry(response: &str) -> Option<ExpiryDate> {
    response.lines().find_map(|line| {
        let (label, value) = split_field(line)?;
        if EXPIRY_LABELS.contains(&label.as_str()) {
            parse_date(value)
        } else {
            None
        }
    })
}

/// Parses the date layouts registries commonly emit.
pub fn parse_date(raw: &str) -> Option<ExpiryDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ExpiryDate::new(dt.to_utc()));
    }

    let without_zone = raw
        .trim_end_matches("(UTC)")
        .trim_end_matches("UTC")
        .trim_end_matches("GMT")
        .trim();

    for candidate in [raw, without_zone] {
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(candidate, format) {
                return Some(ExpiryDate::new(dt.and_utc()));
            }
        }
    }

    let first_token = raw.split_whitespace().next().unwrap_or(raw);
    for candidate in [without_zone, first_token] {
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
                return date
                    .and_hms_opt(0, 0, 0)
                    .map(|dt| ExpiryDate::new(dt.and_utc()));
            }
        }
    }

    parse_compact_date(first_token)
}

/// `yyyymmdd`, as used by a few ccTLD registries.
fn parse_compact_date(token: &str) -> Option<ExpiryDate> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = token[0..4].parse().ok()?;
    let month = token[4..6].parse().ok()?;
    let day = token[6..8].parse().ok()?;
    ExpiryDate::from_ymd(year, month, day)
}
