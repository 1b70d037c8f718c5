use crate::error::AppResult;

pub fn print_rows(rows: &[(&str, String)]) -> AppResult<()> {
    for line in format_rows(rows) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_rows(rows: &[(&str, String)]) -> Vec<String> {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    rows.iter()
        .map(|(key, value)| {
            let label = format!("{key}:");
            format!("{label:<width$} {value}").trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_values() {
        let rows = [("mode", "dev".to_string()), ("version", "1.0".to_string())];
        assert_eq!(format_rows(&rows), ["mode:    dev", "version: 1.0"]);
    }

    #[test]
    fn empty_value_leaves_no_trailing_space() {
        let rows = [("feature", String::new())];
        assert_eq!(format_rows(&rows), ["feature:"]);
    }
}
