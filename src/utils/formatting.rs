pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Renders a byte count as megabytes with two decimals, e.g. `12.50 MB`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB as f64)
}

/// Avatar text: the first two characters of `name`, upper-cased.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

pub fn doctor_title(name: &str) -> String {
    format!("Dr. {name}")
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{count} {word}")
}
