use std::time::Duration;

/// Format string passed to `playerctl metadata --format`.
pub const METADATA_FORMAT: &str = "{{title}}|{{artist}}|{{album}}|{{status}}";

/// A metadata line split into its fields.
#[derive(Debug, PartialEq, Eq)]
pub enum MetadataLine<'a> {
    Empty,
    /// Wrong number of `|`-separated fields.
    Malformed(usize),
    Fields {
        title: &'a str,
        artist: &'a str,
        album: &'a str,
        status: &'a str,
    },
}

pub fn parse_metadata(output: &str) -> MetadataLine<'_> {
    let output = output.trim();
    if output.is_empty() {
        return MetadataLine::Empty;
    }

    let parts: Vec<&str> = output.split('|').map(str::trim).collect();
    match parts.as_slice() {
        &[title, artist, album, status] => MetadataLine::Fields {
            title,
            artist,
            album,
            status,
        },
        _ => MetadataLine::Malformed(parts.len()),
    }
}

/// Parse `mpris:length` (integer microseconds). Anything unreadable is zero.
pub fn parse_length(output: &str) -> Duration {
    output
        .trim()
        .parse::<u64>()
        .map(Duration::from_micros)
        .unwrap_or(Duration::ZERO)
}

/// Parse `playerctl position` (fractional seconds). Anything unreadable is zero.
pub fn parse_position(output: &str) -> Duration {
    output
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(Duration::ZERO)
}
