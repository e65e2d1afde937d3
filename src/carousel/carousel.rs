use std::time::Duration;

use eyre::{eyre, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::{Catalog, Product};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// One banner of the home page hero.
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    /// Path or URL of the banner image.
    pub image: String,
    /// Page the banner links to.
    pub href: String,
}

impl HeroSlide {
    /// A banner advertising `product` and linking to its page.
    pub fn from_product(product: &Product) -> Self {
        HeroSlide {
            title: product.name.clone(),
            subtitle: product.description.clone(),
            image: product.image.clone(),
            href: format!("/products/{}", product.id),
        }
    }
}

#[derive(Debug, Clone)]
/// Rotates through hero slides on a fixed interval.
///
/// The carousel can be driven by hand with `advance`, `previous` and
/// `go_to`, or moved onto a tokio task with `spawn`.
pub struct HeroCarousel {
    slides: Vec<HeroSlide>,
    current: usize,
    interval: Duration,
}

impl HeroCarousel {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    pub fn new(slides: Vec<HeroSlide>, interval: Duration) -> Self {
        HeroCarousel {
            slides,
            current: 0,
            interval,
        }
    }

    /// One slide per featured product, in catalog order.
    pub fn from_featured(catalog: &Catalog, interval: Duration) -> Self {
        let slides = catalog
            .get_featured_products()
            .into_iter()
            .map(HeroSlide::from_product)
            .collect();
        Self::new(slides, interval)
    }

    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide on display, `None` for an empty carousel.
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    pub fn current(&self) -> Option<&HeroSlide> {
        self.slides.get(self.current)
    }

    /// Moves to the next slide, wrapping around after the last one.
    pub fn advance(&mut self) {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    /// Moves to the previous slide, wrapping around before the first one.
    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        }
    }

    /// Jumps to `index`. Out of range indices are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Runs the rotation on a tokio task.
    ///
    /// The slide advances every `interval`; a manual move through the
    /// returned handle restarts the interval. An empty carousel never
    /// rotates and its task finishes straight away.
    pub fn spawn(self) -> CarouselHandle {
        let (index_tx, index_rx) = watch::channel(self.current);
        let (command_tx, command_rx) = mpsc::channel(8);
        let task = tokio::spawn(self.run(command_rx, index_tx));
        CarouselHandle {
            commands: command_tx,
            index: index_rx,
            task,
        }
    }

    async fn run(mut self, mut commands: mpsc::Receiver<Command>, index: watch::Sender<usize>) {
        if self.is_empty() {
            return;
        }
        let sleep = time::sleep(self.interval);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                () = &mut sleep => self.advance(),
                command = commands.recv() => match command {
                    Some(Command::Next) => self.advance(),
                    Some(Command::Previous) => self.previous(),
                    Some(Command::GoTo(target)) => {
                        if !self.go_to(target) {
                            // the running interval keeps its deadline
                            debug!(
                                slide = target,
                                slides = self.len(),
                                "ignoring out of range slide"
                            );
                            continue;
                        }
                    }
                    None => break,
                },
            }
            sleep.as_mut().reset(Instant::now() + self.interval);
            debug!(index = self.current, "hero carousel rotated");
            if index.send(self.current).is_err() {
                break;
            }
        }
    }
}

#[derive(Debug)]
enum Command {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug)]
/// Controls a carousel running on a tokio task.
///
/// Dropping the handle stops the rotation.
pub struct CarouselHandle {
    commands: mpsc::Sender<Command>,
    index: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

impl CarouselHandle {
    /// Index of the slide currently on display.
    pub fn current_index(&self) -> usize {
        *self.index.borrow()
    }

    /// Waits for the next rotation and returns the new index.
    pub async fn changed(&mut self) -> Result<usize> {
        self.index
            .changed()
            .await
            .map_err(|_| eyre!("Carousel has stopped"))?;
        Ok(*self.index.borrow_and_update())
    }

    /// A receiver that observes rotations independently of this handle.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub async fn next(&self) -> Result<()> {
        self.send(Command::Next).await
    }

    pub async fn previous(&self) -> Result<()> {
        self.send(Command::Previous).await
    }

    pub async fn go_to(&self, index: usize) -> Result<()> {
        self.send(Command::GoTo(index)).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| eyre!("Carousel has stopped"))
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
