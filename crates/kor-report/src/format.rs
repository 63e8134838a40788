use tabled::{Table, Tabled};

/// Table row for an unused ConfigMap
#[derive(Tabled)]
struct UnusedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Config Map Name")]
    name: String,
}

/// Render the report for one namespace
pub fn format_output(namespace: &str, unused: &[String]) -> String {
    if unused.is_empty() {
        return format!("No unused config maps found in the namespace: {}", namespace);
    }

    let rows = unused.iter().enumerate().map(|(i, name)| UnusedRow {
        index: i + 1,
        name: name.clone(),
    });
    let table = Table::new(rows);

    format!("Unused Config Maps in Namespace: {}\n{}", namespace, table)
}
