use crossterm::style::Stylize;

/// Renders the `ERROR` marker line appended under the help text.
///
/// With `colored` the marker is drawn on a red background and the message in
/// red. The literal ` ERROR ` and the message text stay contiguous either way.
#[must_use]
pub fn error_line(message: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", " ERROR ".on_red(), message.red())
    } else {
        format!(" ERROR  {message}")
    }
}
