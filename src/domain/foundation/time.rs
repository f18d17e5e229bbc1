//! Helpers for managing time strings.
//!
//! Durations are stored as integral seconds and displayed as colon-separated
//! strings (`mm:ss`, optionally up to `yy:dd:hh:mm:ss`). This module converts
//! between the two shapes and normalizes partial keyboard entry ("130" is
//! treated as a calculator-style `1:30`, not 130 seconds).

/// Carrying capacity of each display unit, least significant first
/// (seconds per minute, minutes per hour, hours per day, days per year).
/// The most significant segment (years) is unbounded.
const UNIT_CAPS: [u64; 4] = [60, 60, 24, 365];

/// Zero-padding width of each display unit, least significant first.
/// The years segment is unpadded.
const PADDING: [usize; 4] = [2, 2, 2, 3];

/// Time strings always render at least `mm:ss`, even below one minute.
const MIN_SEGMENTS: usize = 2;

/// At most `yy:dd:hh:mm:ss`.
const MAX_SEGMENTS: usize = 5;

/// Largest representable duration in seconds (2^53 - 1, the safe-integer
/// range of the persisted interchange format).
pub const MAX_SECONDS: u64 = (1 << 53) - 1;

fn parse_digits(s: &str) -> Option<u128> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a time string of the format `mm:ss` (or optionally including days,
/// hours, and years) into a number of seconds.
///
/// Accepted: `:45`, `00:45`, `0:45`, `:30:00`, `1:30:00`, and bare digit
/// strings (normalized through the same colon-insertion path as partial
/// entries, so `"90"` and `"130"` both parse as 90 seconds).
/// Rejected: `::45`, `14:95`, `25:61:61`, more than five segments, and values
/// beyond [`MAX_SECONDS`].
pub fn parse_time(time_str: &str) -> Option<u64> {
    let segments: Vec<&str> = time_str.split(':').collect();

    // Bare digit strings: colonize (with carry), then parse the result.
    if segments.len() == 1 {
        let colonized = add_colons(segments[0], false);
        return if colonized.contains(':') {
            parse_time(&colonized)
        } else {
            parse_digits(&colonized)
                .and_then(|v| u64::try_from(v).ok())
                .filter(|v| *v <= MAX_SECONDS)
        };
    }

    if segments.len() > MAX_SEGMENTS {
        return None;
    }

    // Least significant first. Every segment but the most significant must be
    // digits within its unit range; the most significant may be empty.
    let rev: Vec<&str> = segments.iter().rev().copied().collect();
    let last = rev.len() - 1;
    for (i, seg) in rev.iter().enumerate() {
        if i < last {
            let v = parse_digits(seg)?;
            if v >= UNIT_CAPS[i] as u128 {
                return None;
            }
        } else if !seg.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let mut accum: u128 = 1;
    let mut secs: u128 = 0;
    for (i, seg) in rev.iter().enumerate() {
        let v = if seg.is_empty() { 0 } else { parse_digits(seg)? };
        secs = secs.checked_add(v.checked_mul(accum)?)?;
        if i < UNIT_CAPS.len() {
            accum = accum.checked_mul(UNIT_CAPS[i] as u128)?;
        }
    }

    u64::try_from(secs).ok().filter(|s| *s <= MAX_SECONDS)
}

/// Converts a number of seconds to a formatted time string (`mm:ss` at
/// minimum, extending through hours, days, and years as needed).
///
/// Returns `None` when the value exceeds [`MAX_SECONDS`].
pub fn stringify_time(secs: u64) -> Option<String> {
    if secs > MAX_SECONDS {
        return None;
    }

    let mut segments: Vec<u128> = Vec::new();
    let mut n = secs as u128;
    for cap in UNIT_CAPS {
        segments.push(n % cap as u128);
        n /= cap as u128;
        if n == 0 {
            break;
        }
    }
    if n > 0 {
        segments.push(n);
    }

    while segments.len() < MIN_SEGMENTS {
        segments.push(0);
    }

    Some(stringify_segments(&segments))
}

/// Normalizes a partially-entered time string into display form.
///
/// Strips existing colons and leading zeros, then re-inserts colons by digit
/// grouping with carry, so `"130"` becomes `"01:30"` and `"565"` becomes
/// `"06:05"`. Non-numeric input is returned unchanged.
pub fn sanitize_time(time_str: &str) -> String {
    let digits: String = time_str.chars().filter(|c| *c != ':').collect();
    let trimmed = digits.trim_start_matches('0');
    add_colons(trimmed, true)
}

/// Inserts colons into a digit string, grouping from the least significant
/// end by display width and carrying overflowing units upward.
///
/// Returns the input unchanged when it is empty or not purely digits.
fn add_colons(num_str: &str, require_min_segments: bool) -> String {
    if num_str.is_empty() || !num_str.bytes().all(|b| b.is_ascii_digit()) {
        return num_str.to_string();
    }

    // Group digits from the right by per-unit display widths; everything past
    // the padded units lands in one unbounded segment.
    let mut time: Vec<u128> = Vec::new();
    let mut end = num_str.len();
    let mut unit = 0;
    while end > 0 {
        let width = PADDING.get(unit).copied().unwrap_or(end);
        let take = width.min(end);
        match num_str[end - take..end].parse() {
            Ok(v) => time.push(v),
            // Absurdly long inputs fall out of range downstream anyway.
            Err(_) => return num_str.to_string(),
        }
        end -= take;
        unit += 1;
    }

    // Apply carry: 90 seconds becomes 1 minute 30 seconds.
    let mut u = 0;
    while u < UNIT_CAPS.len() && u < time.len() {
        let cap = UNIT_CAPS[u] as u128;
        let (d, m) = (time[u] / cap, time[u] % cap);
        time[u] = m;
        if d == 0 && u == time.len() - 1 {
            break;
        }
        if u + 1 == time.len() {
            time.push(0);
        }
        time[u + 1] += d;
        u += 1;
    }

    if require_min_segments {
        while time.len() < MIN_SEGMENTS {
            time.push(0);
        }
    }
    stringify_segments(&time)
}

fn stringify_segments(segments: &[u128]) -> String {
    segments
        .iter()
        .enumerate()
        .rev()
        .map(|(i, n)| match PADDING.get(i) {
            Some(w) => format!("{:0width$}", n, width = *w),
            None => n.to_string(),
        })
        .collect::<Vec<_>>()
        .join(":")
}
