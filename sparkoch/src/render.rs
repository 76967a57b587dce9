//! Plain-text rendering of catalog records

use catalog::{ListSection, ShoppingTotals};
use shared::{Offer, Recipe, ShoppingItem, Store};

/// One-line terminal representation of a record
pub trait Render {
    fn line(&self) -> String;
}

impl Render for Offer {
    fn line(&self) -> String {
        format!(
            "#{:<3} {:<28} {:>6.2}€ (statt {:.2}€, -{}%)  {} • {:.1} km • bis {}",
            self.id,
            self.product_name,
            self.discounted_price,
            self.original_price,
            self.discount_percentage,
            self.store_name,
            self.distance,
            self.expiration_date.format("%d.%m.%Y"),
        )
    }
}

impl Render for Recipe {
    fn line(&self) -> String {
        let tags: Vec<&str> = self.dietary.iter().map(|tag| tag.as_str()).collect();
        format!(
            "#{:<3} {:<34} {:>5.2}€/Portion  ★ {:.1} ({})  {} min • {} • {} Portionen  [{}]",
            self.id,
            self.title,
            self.cost_per_serving,
            self.rating,
            self.review_count,
            self.cooking_time,
            self.difficulty,
            self.servings,
            tags.join(", "),
        )
    }
}

impl Render for Store {
    fn line(&self) -> String {
        let open = if self.is_open { "geöffnet" } else { "geschlossen" };
        format!(
            "#{:<3} {:<22} {:>4.1} km  {} Angebote • {}  {}",
            self.id, self.name, self.distance, self.offers, open, self.address,
        )
    }
}

impl Render for ShoppingItem {
    fn line(&self) -> String {
        let check = if self.completed { "x" } else { " " };
        let brand = self.brand.as_deref().map(|b| format!(" ({b})")).unwrap_or_default();
        let offer = if self.has_offer { " %" } else { "" };
        format!(
            "[{check}] {} {} {}{brand}  {:.2}€{offer}",
            self.quantity,
            self.unit,
            self.name,
            self.line_cost(),
        )
    }
}

pub fn totals_line(totals: &ShoppingTotals) -> String {
    format!(
        "Summe {:.2}€ (statt {:.2}€) • gespart {:.2}€",
        totals.cost, totals.original_cost, totals.savings
    )
}

pub fn section_lines(section: &ListSection<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(section.items.len() + 2);
    lines.push(format!("{} ({})", section.title, section.items.len()));
    lines.extend(section.items.iter().map(|item| format!("  {}", item.line())));
    lines.push(format!("  {}", totals_line(&section.totals)));
    lines
}
