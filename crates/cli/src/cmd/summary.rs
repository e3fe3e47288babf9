//! Terminal breakdown tables printed after an index run.

use mdindex_core::vault::VaultStructure;
use tabled::{Table, Tabled, settings::Style};

/// Row for the file type table.
#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Files")]
    count: usize,
}

/// Row for the naming pattern table.
#[derive(Tabled)]
struct PatternRow {
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Files")]
    count: usize,
    #[tabled(rename = "Example")]
    example: String,
}

/// Build the summary shown with `--summary`.
pub fn render(structure: &VaultStructure) -> String {
    let stats = &structure.stats;
    let mut out = format!(
        "{}: {} folders, {} files, max depth {}\n",
        structure.root, stats.total_folders, stats.total_files, stats.depth_max
    );

    if stats.total_files == 0 {
        out.push_str("(no files found)\n");
        return out;
    }

    let types: Vec<TypeRow> = stats
        .file_types
        .by_count_desc()
        .into_iter()
        .map(|(category, count)| TypeRow { category: category.to_string(), count })
        .collect();

    let patterns: Vec<PatternRow> = stats
        .patterns_found
        .by_count_desc()
        .into_iter()
        .map(|(pattern, count)| PatternRow {
            pattern: pattern.to_string(),
            count,
            example: pattern.display_example().to_string(),
        })
        .collect();

    out.push_str(&Table::new(&types).with(Style::rounded()).to_string());
    out.push('\n');
    out.push_str(&Table::new(&patterns).with(Style::rounded()).to_string());
    out.push('\n');
    out
}

pub fn print(structure: &VaultStructure) {
    println!();
    print!("{}", render(structure));
}
