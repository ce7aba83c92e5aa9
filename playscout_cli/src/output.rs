use playscout_lib::AppRecord;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct AppRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Reviews")]
    reviews: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

fn build_rows(records: &[AppRecord]) -> Vec<AppRow> {
    records
        .iter()
        .map(|r| AppRow {
            name: r.name.clone(),
            author: r.author.clone(),
            category: r.category.clone(),
            rating: r.rating.clone(),
            reviews: r.review_count.clone(),
            updated: r.last_updated.clone(),
        })
        .collect()
}

pub fn print_table(records: &[AppRecord]) {
    if records.is_empty() {
        println!("No matching apps found.");
        return;
    }
    let mut table = Table::new(build_rows(records));
    table.with(Style::rounded());
    println!("{}", table);
}
