mod carousel;

pub use carousel::{CarouselHandle, HeroCarousel, HeroSlide};
