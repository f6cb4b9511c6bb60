//! Free-text runtimes ("12:34", "1:02:30", "45 min") to whole minutes.

use cinefila_model::{FilmRecord, LengthBucket};

/// Parse a runtime into whole minutes.
///
/// Only digits and `:` are kept. Three groups read as `H:MM:SS`, two as
/// `MM:SS`, one as plain minutes; an empty group counts as zero. The total
/// is rounded to the nearest minute. Returns `None` when nothing is left
/// after cleaning or when there are more than three groups.
pub fn parse_runtime_minutes(text: &str) -> Option<u32> {
    let cleaned: String = text
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == ':')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let groups = cleaned
        .split(':')
        .map(group_value)
        .collect::<Option<Vec<f64>>>()?;

    let minutes = match groups.as_slice() {
        [hours, minutes, seconds] => hours * 60.0 + minutes + seconds / 60.0,
        [minutes, seconds] => minutes + seconds / 60.0,
        [minutes] => *minutes,
        _ => return None,
    };

    let rounded = minutes.round();
    (rounded.is_finite() && rounded <= f64::from(u32::MAX)).then_some(rounded as u32)
}

fn group_value(group: &str) -> Option<f64> {
    if group.is_empty() {
        Some(0.0)
    } else {
        group.parse::<f64>().ok()
    }
}

/// Length bucket of the per-episode runtime, if it parses.
pub fn length_bucket(record: &FilmRecord) -> Option<LengthBucket> {
    record
        .film
        .runtime
        .as_deref()
        .and_then(parse_runtime_minutes)
        .map(LengthBucket::from_minutes)
}

/// Leading integer of a count field, `parseInt` style: optional sign then
/// digits, anything after is ignored.
pub(crate) fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Series and episode counts, when both are positive.
fn episode_multiplier(record: &FilmRecord) -> Option<u64> {
    let count = |field: &Option<String>| {
        field
            .as_deref()
            .and_then(leading_int)
            .filter(|value| *value > 0)
    };
    let series = count(&record.film.number_of_series)?;
    let episodes = count(&record.film.number_of_episodes)?;
    u64::try_from(series.checked_mul(episodes)?).ok()
}

fn episode_minutes(record: &FilmRecord) -> Option<u32> {
    record
        .film
        .runtime
        .as_deref()
        .and_then(parse_runtime_minutes)
        .filter(|minutes| *minutes > 0)
}

/// Runtime shown to visitors.
///
/// Episodic works read `"{series × episodes} × {minutes} min"`, everything
/// else `"{minutes} min"`. When the runtime does not parse the raw text is
/// shown as written.
pub fn display_runtime(record: &FilmRecord) -> Option<String> {
    let raw = record
        .film
        .runtime
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());

    match (episode_multiplier(record), episode_minutes(record)) {
        (Some(episodes), Some(minutes)) => Some(format!("{episodes} × {minutes} min")),
        (None, Some(minutes)) => Some(format!("{minutes} min")),
        (_, None) => raw.map(str::to_string),
    }
}

/// Total running time in minutes, multiplied out for episodic works.
pub fn total_runtime_minutes(record: &FilmRecord) -> Option<u64> {
    let minutes = u64::from(episode_minutes(record)?);
    match episode_multiplier(record) {
        Some(episodes) => episodes.checked_mul(minutes),
        None => Some(minutes),
    }
}
