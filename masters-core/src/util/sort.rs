use std::cmp::Ordering;

/// Sorts records ascending by their serial number. Records without one (absent
/// or empty) go after every record that has one; ties keep their input order.
///
/// Letters compare case-insensitively, with lowercase before uppercase when
/// two serials differ only in case (`a, A, b, B`).
pub fn sort_by_serial_number<T, F>(items: &mut [T], serial: F)
where
    F: Fn(&T) -> Option<&str>,
{
    items.sort_by(|a, b| {
        let a = serial(a).filter(|s| !s.is_empty());
        let b = serial(b).filter(|s| !s.is_empty());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_serials(a, b),
        }
    });
}

fn compare_serials(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_sort_after_values() {
        let mut items = vec![Some("B"), None, Some("A"), Some("")];
        sort_by_serial_number(&mut items, |s| *s);

        assert_eq!(items[0], Some("A"));
        assert_eq!(items[1], Some("B"));
        // the two blanks keep their relative input order
        assert_eq!(items[2], None);
        assert_eq!(items[3], Some(""));
    }

    #[test]
    fn equal_serials_are_stable() {
        let mut items = vec![("X", 1), ("A", 2), ("X", 3)];
        sort_by_serial_number(&mut items, |(s, _)| Some(*s));

        let order: Vec<i32> = items.iter().map(|(_, n)| *n).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn mixed_case_serials_ignore_case_first() {
        let mut items = vec!["b", "A", "a", "B"];
        sort_by_serial_number(&mut items, |s| Some(*s));

        assert_eq!(items, vec!["a", "A", "b", "B"]);
    }
}
