//! Catalog browsing, search and reviews.

use std::io::Write;

use flora_core::{Price, ProductId, ReviewRating};
use flora_storefront::models::{Category, Product};
use flora_storefront::services::{ProductFilter, ReviewService, search_products};
use flora_storefront::state::AppState;
use tracing::info;

use super::{CommandError, CommandResult};

/// Filters accepted by `flora catalog`.
#[derive(Debug, Default)]
pub struct CatalogArgs {
    pub category: Option<String>,
    pub name: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub occasion: Option<String>,
    pub flowers: Vec<String>,
    pub min_rating: Option<f64>,
}

impl CatalogArgs {
    fn into_filter(self) -> Result<ProductFilter, CommandError> {
        let category = self
            .category
            .map(|c| {
                c.parse::<Category>()
                    .map_err(|_| CommandError::InvalidArgument { what: "category", value: c })
            })
            .transpose()?;
        Ok(ProductFilter {
            name: self.name,
            category,
            min_price: self.min_price.map(Price::from_units),
            max_price: self.max_price.map(Price::from_units),
            occasion: self.occasion,
            flowers: self.flowers,
            min_rating: self.min_rating,
        })
    }
}

pub fn write_product_line(out: &mut impl Write, product: &Product) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>4}  {} {:<32} {:>8}  ★{:.1}  {}",
        product.id, product.image, product.name, product.price, product.rating, product.category
    )
}

/// List catalog products matching the given filters.
///
/// # Errors
///
/// Returns an error for an unknown category or if output fails.
pub fn list(state: &AppState, args: CatalogArgs, out: &mut impl Write) -> CommandResult {
    let filter = args.into_filter()?;
    let products = state.storage.products();
    let matches = filter.apply(&products);
    for product in &matches {
        write_product_line(out, product)?;
    }
    info!(shown = matches.len(), total = products.len(), "Catalog listed");
    Ok(())
}

/// Show one product and its current rating.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown product.
pub fn show(state: &AppState, id: &str, out: &mut impl Write) -> CommandResult {
    let id = ProductId::new(id);
    let product = state
        .storage
        .product(&id)
        .ok_or_else(|| CommandError::NotFound(format!("Product {id}")))?;
    let reviews = ReviewService::new(&state.storage);
    let rating = reviews.rating(&id)?;
    let wished = state.storage.is_in_wishlist(&id);

    writeln!(out, "{} {}", product.image, product.name)?;
    writeln!(out, "Price:    {}", product.price)?;
    writeln!(out, "Category: {}", product.category)?;
    writeln!(out, "Rating:   ★{rating:.1} ({} reviews)", product.reviews_count)?;
    if let Some(seller) = &product.seller {
        writeln!(out, "Seller:   {seller}")?;
    }
    if let Some(size) = &product.size {
        writeln!(out, "Size:     {size}")?;
    }
    if !product.flowers.is_empty() {
        writeln!(out, "Flowers:  {}", product.flowers.join(", "))?;
    }
    if !product.occasion.is_empty() {
        writeln!(out, "Occasion: {}", product.occasion.join(", "))?;
    }
    if wished {
        writeln!(out, "♥ In your wishlist")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;
    Ok(())
}

/// Search the catalog and remember the query.
///
/// With no query, prints the recent searches instead.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn search(state: &AppState, query: Option<&str>, out: &mut impl Write) -> CommandResult {
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        for recent in state.storage.recent_searches() {
            writeln!(out, "{recent}")?;
        }
        return Ok(());
    };

    state.storage.record_search(query);
    let products = state.storage.products();
    let matches = search_products(&products, query);
    if matches.is_empty() {
        writeln!(out, "Nothing found for \"{}\"", query.trim())?;
    }
    for product in matches {
        write_product_line(out, product)?;
    }
    Ok(())
}

/// Print the reviews of a product.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn reviews(state: &AppState, id: &str, out: &mut impl Write) -> CommandResult {
    let reviews = ReviewService::new(&state.storage).for_product(&ProductId::new(id));
    if reviews.is_empty() {
        writeln!(out, "No reviews yet")?;
    }
    for review in reviews {
        let stars = "★".repeat(usize::from(review.rating.stars()));
        writeln!(
            out,
            "{stars:<5} {} ({})",
            review.user_name,
            review.date.format("%Y-%m-%d")
        )?;
        writeln!(out, "      {}", review.text)?;
    }
    Ok(())
}

/// Leave a review.
///
/// # Errors
///
/// Returns an error for an out-of-range rating, unknown product or blank text.
pub fn add_review(
    state: &AppState,
    id: &str,
    stars: u8,
    text: &str,
    out: &mut impl Write,
) -> CommandResult {
    let rating = ReviewRating::new(stars).map_err(flora_storefront::StorefrontError::from)?;
    let review =
        ReviewService::new(&state.storage).submit_review(&ProductId::new(id), rating, text)?;
    writeln!(out, "Thanks, {}! Your review was added.", review.user_name)?;
    Ok(())
}
