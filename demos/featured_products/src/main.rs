use std::error::Error;
use std::time::Duration;
use snack_catalog::{Catalog, HeroCarousel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::snacks()?;
    let carousel = HeroCarousel::from_featured(&catalog, Duration::from_secs(1));
    let slides = carousel.slides().to_vec();
    let mut handle = carousel.spawn();
    for _ in 0..slides.len() {
        let index = handle.changed().await?;
        println!("{:#?}", slides[index]);
    }
    Ok(())
}
