use super::PageRequest;

/// Parse a loosely-typed numeric query value.
///
/// Leading whitespace is ignored and only the leading run of ASCII digits is
/// read, so `"10abc"` yields `10`. Anything that does not start with a digit,
/// or parses to zero, yields `None`.
pub fn parse_query_number(raw: Option<&str>) -> Option<u64> {
    let trimmed = raw?.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse::<u64>().ok().filter(|n| *n > 0)
}

/// Resolve raw `page` / page-size query values into a [`PageRequest`].
///
/// Missing or non-numeric values fall back to page 1 and `default_page_size`;
/// the page size is capped at `max_page_size`.
pub fn validate_pagination(
    page: Option<&str>,
    page_size: Option<&str>,
    default_page_size: u64,
    max_page_size: u64,
) -> PageRequest {
    let page = parse_query_number(page).unwrap_or(1);
    let page_size = parse_query_number(page_size)
        .unwrap_or(default_page_size)
        .clamp(1, max_page_size.max(1));
    PageRequest::new(page, page_size)
}
