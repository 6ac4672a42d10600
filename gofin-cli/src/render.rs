//! Plain-text rendering of the dashboard and the import file list.

use gofin_client::{DashboardData, UploadedFile};

const TITLE_W: usize = 28;
const PRICE_W: usize = 18;
const CATEGORY_W: usize = 16;

pub fn render_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();

    let cards = [
        ("Income", &data.balance.income),
        ("Outcome", &data.balance.outcome),
        ("Total", &data.balance.total),
    ];
    for (label, value) in cards {
        out.push_str(&format!("{label:<8} {value:>20}\n"));
    }
    out.push('\n');

    if data.transactions.is_empty() {
        out.push_str("No transactions yet.\n");
        return out;
    }

    out.push_str(&format!(
        "{:TITLE_W$} {:>PRICE_W$}  {:CATEGORY_W$} {}\n",
        "Title", "Price", "Category", "Date"
    ));
    out.push_str(&"-".repeat(TITLE_W + PRICE_W + CATEGORY_W + 14));
    out.push('\n');

    for t in &data.transactions {
        out.push_str(&format!(
            "{:TITLE_W$} {:>PRICE_W$}  {:CATEGORY_W$} {}\n",
            truncate(&t.transaction.title, TITLE_W),
            t.display_value(),
            truncate(&t.transaction.category.title, CATEGORY_W),
            t.formatted_date,
        ));
    }

    out
}

pub fn render_file_list(file: &UploadedFile) -> String {
    format!("{}  {}\n", file.name, file.readable_size)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
