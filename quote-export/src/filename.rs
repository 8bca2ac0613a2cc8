use slug::slugify;

/// Derives an export file name from the user's quote number.
///
/// The quote number is free text, so it is slugified before use; a quote
/// number with no usable characters falls back to `"quote"`.
pub fn export_file_name(
    quote_number: &str,
    extension: &str,
) -> String {
    let stem = slugify(quote_number);
    if stem.is_empty() {
        format!("quote.{extension}")
    } else {
        format!("{stem}.{extension}")
    }
}
