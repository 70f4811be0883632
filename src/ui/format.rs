/// Format milliseconds as `MM:SS`. Minutes are not capped at two digits.
pub fn format_mmss(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
