//! Export formatter
//!
//! Renders the list as plain text for the clipboard.

use chrono::{DateTime, Utc};

use crate::domain::entities::ShoppingListItem;

/// Timestamp format used in the export header
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Render the export text for `items` as of `at`
///
/// ```text
/// The Shopping List as of Sun Oct 18 2026 09:30:00 UTC:
/// 1. milk (2)
/// 2. bread (1) - whole grain [IMPORTANT]
/// ```
pub fn format_export(items: &[ShoppingListItem], at: DateTime<Utc>) -> String {
    let mut buf = format!(
        "The Shopping List as of {}:",
        at.format(EXPORT_TIMESTAMP_FORMAT)
    );

    for (index, item) in items.iter().enumerate() {
        buf.push('\n');
        buf.push_str(&format_line(index + 1, item));
    }

    buf
}

/// One export line; `position` is 1-based
pub fn format_line(position: usize, item: &ShoppingListItem) -> String {
    let mut line = format!("{}. {} ({})", position, item.item, item.quantity);

    // Priority 1 gets neither label nor brackets.
    if let Some(details) = item.details() {
        line.push_str(&format!(" - {}", details));
        if let Some(label) = item.urgency().label() {
            line.push_str(&format!(" [{}]", label));
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_item_with, test_timestamp};

    const HEADER: &str = "The Shopping List as of Sun Oct 18 2026 09:30:00 UTC:";

    #[test]
    fn plain_item_has_no_suffix() {
        let items = vec![test_item_with(1, "milk", 2, 1, None)];
        let out = format_export(&items, test_timestamp());
        assert_eq!(out, format!("{}\n1. milk (2)", HEADER));
    }

    #[test]
    fn important_item_with_details() {
        let items = vec![test_item_with(2, "bread", 1, 2, Some("whole grain"))];
        let out = format_export(&items, test_timestamp());
        assert_eq!(
            out.lines().nth(1),
            Some("1. bread (1) - whole grain [IMPORTANT]")
        );
    }

    #[test]
    fn urgent_for_priority_three_and_above() {
        let items = vec![
            test_item_with(1, "batteries", 4, 3, Some("AA")),
            test_item_with(2, "matches", 1, 9, Some("long")),
        ];
        let out = format_export(&items, test_timestamp());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "1. batteries (4) - AA [URGENT]");
        assert_eq!(lines[2], "2. matches (1) - long [URGENT]");
    }

    #[test]
    fn normal_priority_details_without_brackets() {
        let item = test_item_with(1, "eggs", 12, 1, Some("free range"));
        assert_eq!(format_line(1, &item), "1. eggs (12) - free range");
    }

    #[test]
    fn label_requires_details() {
        let item = test_item_with(1, "rice", 1, 3, None);
        assert_eq!(format_line(1, &item), "1. rice (1)");
        let blank = test_item_with(1, "rice", 1, 2, Some(""));
        assert_eq!(format_line(1, &blank), "1. rice (1)");
    }

    #[test]
    fn lines_are_numbered_in_list_order() {
        let items = vec![
            test_item_with(30, "a", 1, 1, None),
            test_item_with(10, "b", 1, 1, None),
            test_item_with(20, "c", 1, 1, None),
        ];
        let out = format_export(&items, test_timestamp());
        assert_eq!(out, format!("{}\n1. a (1)\n2. b (1)\n3. c (1)", HEADER));
    }

    #[test]
    fn output_is_deterministic_and_input_untouched() {
        let items = vec![
            test_item_with(1, "milk", 2, 1, None),
            test_item_with(2, "bread", 1, 2, Some("whole grain")),
        ];
        let snapshot = items.clone();

        let first = format_export(&items, test_timestamp());
        let second = format_export(&items, test_timestamp());

        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }
}
