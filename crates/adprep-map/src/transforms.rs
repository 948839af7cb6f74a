//! Field transforms applied while building export records.
//!
//! Every function takes an already-trimmed or raw cell value and returns the
//! export value. None of them fail: unrecognized input passes through or
//! falls back to a default.

/// Extensions reported in the `File Type` column (uppercase, no dot).
pub const ALLOWED_FILE_TYPES: [&str; 23] = [
    "AI", "CR2", "CSS", "DOC", "DOCX", "EPS", "GIF", "GLB", "HTML", "IDML", "INDD", "JFIF", "JPEG",
    "MOV", "MP3", "MP4", "OTF", "PDF", "PNG", "PPT", "WEBM", "AVI", "MKV",
];

const ANIMATION_MARKER: &str = "(Animation)";
const SPANISH_MARKER: &str = "Spanish";
const SPANISH_SUFFIX: &str = " (Spanish)";
const FOCUS_PLACEHOLDER: &str = "____";

/// Picks the override when present, else the row value, both trimmed.
///
/// ```
/// use adprep_map::transforms::resolve;
///
/// assert_eq!(resolve(Some("2025"), "2024"), "2025");
/// assert_eq!(resolve(Some("  "), " 2024 "), "2024");
/// assert_eq!(resolve(None, ""), "");
/// ```
pub fn resolve<'a>(override_value: Option<&'a str>, row_value: &'a str) -> &'a str {
    override_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| row_value.trim())
}

/// Normalizes a year, dropping the `.0` that numeric spreadsheet cells carry.
///
/// ```
/// use adprep_map::transforms::normalize_year;
///
/// assert_eq!(normalize_year("2024.0"), "2024");
/// assert_eq!(normalize_year("2024"), "2024");
/// assert_eq!(normalize_year(""), "");
/// ```
pub fn normalize_year(value: &str) -> String {
    let value = value.trim();
    value.strip_suffix(".0").unwrap_or(value).to_string()
}

/// Derives the expiration from a `Spot Running` range.
///
/// A range like `"01/01/2025 - 03/31/2025"` yields the part after the first
/// hyphen. Without a hyphen the first space-separated token is used.
pub fn video_expiration(spot_running: &str) -> String {
    let spot = spot_running.trim();
    if let Some((_, after)) = spot.split_once('-') {
        return after.trim().to_string();
    }
    spot.split(' ').next().unwrap_or_default().to_string()
}

/// Ad name up to the Spanish suffix; the `____` placeholder means blank.
pub fn video_focus(ad_name: &str) -> String {
    let head = ad_name
        .split_once(SPANISH_SUFFIX)
        .map_or(ad_name, |(head, _)| head)
        .trim();
    if head == FOCUS_PLACEHOLDER {
        String::new()
    } else {
        head.to_string()
    }
}

/// Expands the standard spot lengths; anything else passes through trimmed.
pub fn total_run_time(trt: &str) -> String {
    let trt = trt.trim();
    match trt {
        ":06" => "06 seconds".to_string(),
        ":15" => "15 seconds".to_string(),
        ":30" => "30 seconds".to_string(),
        other => other.to_string(),
    }
}

pub fn video_type(ad_name: &str) -> &'static str {
    if ad_name.contains(ANIMATION_MARKER) {
        "Animation"
    } else {
        "Live Action"
    }
}

pub fn language(ad_name: &str) -> &'static str {
    if ad_name.contains(SPANISH_MARKER) {
        "Spanish"
    } else {
        "English"
    }
}

/// Uppercased extension if it is an allowed file type, else blank.
///
/// Accepts the extension with or without its leading dot.
pub fn file_type(extension: &str) -> String {
    let upper = extension.trim_start_matches('.').to_ascii_uppercase();
    if ALLOWED_FILE_TYPES.contains(&upper.as_str()) {
        upper
    } else {
        String::new()
    }
}
