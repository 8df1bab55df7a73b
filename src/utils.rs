use unicode_segmentation::UnicodeSegmentation;

/// Truncates a given string to a specified maximum width, appending an ellipsis (`…`)
/// if the string exceeds the specified width. Handles Unicode grapheme clusters properly,
/// so Cyrillic keywords and emoji are never cut in half.
///
/// # Parameters
/// - `message`: The input string to be truncated.
/// - `max_width`: The maximum allowed number of graphemes, including the ellipsis.
///   Must be at least 2 to accommodate the ellipsis.
///
/// # Panics
/// Panics if `max_width` is less than 2.
///
/// # Examples
/// ```rust
/// use seoprobe::utils::truncate_message;
///
/// assert_eq!(truncate_message("создание сайтов", 9), "создание…");
/// assert_eq!(truncate_message("Hi", 5), "Hi");
/// ```
pub fn truncate_message(message: &str, max_width: usize) -> String {
    assert!(
        max_width >= 2,
        "max_width must be at least 2 to accommodate the ellipsis"
    );

    let ellipsis = "…";
    let graphemes: Vec<&str> = message.graphemes(true).collect();

    if graphemes.len() > max_width {
        let truncated: String = graphemes[..max_width - 1].concat();
        format!("{}{}", truncated, ellipsis)
    } else {
        message.to_string()
    }
}

pub fn percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

pub fn ms(milliseconds: u64) -> String {
    format!("{milliseconds}ms")
}

/// One decimal place, the way search consoles show average positions.
pub fn decimal(value: f64) -> String {
    format!("{value:.1}")
}
