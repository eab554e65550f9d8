use tabled::Table;

use crate::{management::Library, success, types::CatalogTableRow, warning};

pub fn catalog(library: &Library) {
    let catalog = library.catalog();

    let rows: Vec<CatalogTableRow> = catalog
        .groups
        .values()
        .flatten()
        .map(|e| CatalogTableRow {
            category: e.category.clone(),
            name: e.name.clone(),
            id: e.id.clone(),
        })
        .collect();

    let count = rows.len();
    println!("{}", Table::new(rows));

    for issue in &catalog.errors {
        warning!("{}", issue.message);
    }

    success!(
        "{} playlists in {} categories",
        count,
        catalog.groups.len()
    );
}
