//! SoQL query construction.
//! Builds the five `$`-prefixed parameters the Socrata API understands:
//! <https://dev.socrata.com/docs/queries/>. Values are plain strings; the
//! HTTP layer handles URL encoding.

/// Parameter name → value pairs, in a fixed order.
pub type Payload = Vec<(&'static str, String)>;

/// Comma-joined field list for `$select`.
pub fn build_select_clause(fields: &[&str]) -> String {
    fields.join(",")
}

/// Filter for `$where`: records whose business-hours window straddles the
/// current time on the matching weekday. The layout is fixed; `start24`
/// and `end24` are zero-padded 24h text columns, so the comparison is a
/// lexicographic one and `time_literal` must already be quoted.
pub fn build_where_clause(day_order: u32, time_literal: &str) -> String {
    format!("dayorder = {day_order} AND {time_literal} > start24 AND {time_literal} < end24")
}

/// Ascending sort on one field for `$order`.
pub fn build_order_clause(sort_field: &str) -> String {
    format!("{sort_field} ASC")
}

/// Page size for `$limit`.
pub fn build_limit_clause(page_limit: usize) -> String {
    page_limit.to_string()
}

/// Starting record for `$offset`; `page_index` is zero-based, so page 3
/// with a limit of 10 starts at record 30.
pub fn build_offset_clause(page_limit: usize, page_index: u64) -> String {
    (page_limit as u64 * page_index).to_string()
}

/// The full parameter set for one page request. Only the offset varies
/// between pages of a session.
pub fn build_payload(
    fields: &[&str],
    day_order: u32,
    time_literal: &str,
    sort_field: &str,
    page_limit: usize,
    page_index: u64,
) -> Payload {
    vec![
        ("$select", build_select_clause(fields)),
        ("$where", build_where_clause(day_order, time_literal)),
        ("$order", build_order_clause(sort_field)),
        ("$limit", build_limit_clause(page_limit)),
        ("$offset", build_offset_clause(page_limit, page_index)),
    ]
}
