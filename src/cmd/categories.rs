//! Categories command - employee NI category reference table

use clap::Args;
use rust_decimal_macros::dec;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::tax::ni::ALL_CATEGORIES;

#[derive(Args, Debug)]
pub struct CategoriesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Main Rate")]
    main_rate: String,

    #[tabled(rename = "Upper Rate")]
    upper_rate: String,

    #[tabled(rename = "Description")]
    description: &'static str,
}

impl CategoriesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<CategoryRow> = ALL_CATEGORIES
            .iter()
            .map(|category| {
                let rates = category.rates();
                CategoryRow {
                    category: category.to_string(),
                    main_rate: format!("{}%", (rates.main * dec!(100)).normalize()),
                    upper_rate: format!("{}%", (rates.upper * dec!(100)).normalize()),
                    description: category.description(),
                }
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        Ok(())
    }
}
