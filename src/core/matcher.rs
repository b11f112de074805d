/// Reference names with no exact, case-sensitive match among the column
/// names, in reference order. Columns missing from the reference list are
/// intentionally never reported.
pub fn unmatched_names<'a>(reference_names: &'a [String], columns: &[String]) -> Vec<&'a str> {
    reference_names
        .iter()
        .filter(|name| !columns.iter().any(|column| column == *name))
        .map(String::as_str)
        .collect()
}

/// One stdout line per unmatched reference name; silent when all match.
pub fn report_unmatched(reference_names: &[String], columns: &[String]) {
    for name in unmatched_names(reference_names, columns) {
        println!("Not matched column name {name}");
    }
}
