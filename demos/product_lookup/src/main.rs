use std::error::Error;
use snack_catalog::Catalog;

fn main() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::snacks()?;
    println!("{:#?}", catalog.get_product_by_id("makhana01"));
    println!("{:#?}", catalog.get_products_by_category("chips"));
    Ok(())
}
