use indexmap::IndexMap;

/// Rows sharing one key, in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedGroup<'a, T> {
    pub key: String,
    pub rows: Vec<&'a T>,
}

/// Group rows by key in first-seen key order. Input does not need to be sorted.
pub fn group_by_key<'a, T, F>(rows: &'a [T], key_fn: F) -> Vec<KeyedGroup<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: IndexMap<&str, Vec<&'a T>> = IndexMap::new();
    for row in rows {
        groups.entry(key_fn(row)).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(key, rows)| KeyedGroup {
            key: key.to_string(),
            rows,
        })
        .collect()
}

/// True when every key's rows are adjacent.
pub fn is_grouped_contiguously<T, F>(rows: &[T], key_fn: F) -> bool
where
    F: Fn(&T) -> &str,
{
    let mut finished: Vec<&str> = Vec::new();
    let mut current: Option<&str> = None;
    for row in rows {
        let key = key_fn(row);
        if current == Some(key) {
            continue;
        }
        if finished.contains(&key) {
            return false;
        }
        if let Some(previous) = current {
            finished.push(previous);
        }
        current = Some(key);
    }
    true
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
