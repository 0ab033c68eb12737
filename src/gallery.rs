//! Memories gallery - photo carousel and lightbox shown after the reveal

use serde::Serialize;

use crate::config::GalleryConfig;
use crate::constants::{CAROUSEL_CARD_WIDTH, CAROUSEL_GAP, CAROUSEL_PADDING, PHOTO_TILTS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    /// Card tilt in degrees
    pub tilt: f32,
}

/// Horizontally scrolling strip of cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carousel {
    offset: f32,
    step: f32,
    viewport_width: f32,
    content_width: f32,
}

impl Carousel {
    pub fn new(card_count: usize, step: f32, viewport_width: f32) -> Self {
        let gaps = card_count.saturating_sub(1) as f32;
        let content_width =
            card_count as f32 * CAROUSEL_CARD_WIDTH + gaps * CAROUSEL_GAP + 2.0 * CAROUSEL_PADDING;
        Self {
            offset: 0.0,
            step,
            viewport_width,
            content_width,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn can_go_left(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_go_right(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub fn scroll_left(&mut self) -> f32 {
        self.scroll_by(-self.step)
    }

    pub fn scroll_right(&mut self) -> f32 {
        self.scroll_by(self.step)
    }

    fn scroll_by(&mut self, delta: f32) -> f32 {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        self.offset
    }
}

/// Full-screen single photo view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lightbox {
    selected: usize,
    open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    photos: Vec<Photo>,
    carousel: Carousel,
    lightbox: Lightbox,
}

impl Gallery {
    pub fn from_config(config: &GalleryConfig) -> Self {
        let photos: Vec<Photo> = config
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| Photo {
                src: photo.src.clone(),
                alt: photo.alt.clone(),
                tilt: PHOTO_TILTS[i % PHOTO_TILTS.len()],
            })
            .collect();
        let carousel = Carousel::new(photos.len(), config.scroll_step, config.viewport_width);

        Self {
            photos,
            carousel,
            lightbox: Lightbox {
                selected: 0,
                open: false,
            },
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.open
    }

    /// Photo shown in the lightbox, if it is open
    pub fn selected(&self) -> Option<&Photo> {
        if self.lightbox.open {
            self.photos.get(self.lightbox.selected)
        } else {
            None
        }
    }

    pub fn selected_index(&self) -> usize {
        self.lightbox.selected
    }

    /// Open the lightbox on `index`; out of range does nothing
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.photos.len() {
            return false;
        }
        self.lightbox = Lightbox {
            selected: index,
            open: true,
        };
        true
    }

    pub fn close(&mut self) {
        self.lightbox.open = false;
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step_selection(1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.step_selection(self.photos.len().saturating_sub(1))
    }

    fn step_selection(&mut self, forward: usize) -> Option<usize> {
        let count = self.photos.len();
        if !self.lightbox.open || count == 0 {
            return None;
        }
        self.lightbox.selected = (self.lightbox.selected + forward) % count;
        Some(self.lightbox.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Gallery {
        Gallery::from_config(&GalleryConfig::default())
    }

    #[test]
    fn test_tilts_cycle() {
        let mut config = GalleryConfig::default();
        let extra = config.photos[0].clone();
        config.photos.push(extra);

        let gallery = Gallery::from_config(&config);
        let tilts: Vec<f32> = gallery.photos().iter().map(|p| p.tilt).collect();
        assert_eq!(tilts, vec![-3.0, 2.0, -2.0, 3.0, -1.0, 2.0, -3.0, -3.0]);
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut gallery = gallery();
        assert!(gallery.open(6));
        assert_eq!(gallery.next(), Some(0));
        assert_eq!(gallery.prev(), Some(6));
        assert_eq!(gallery.prev(), Some(5));
        assert_eq!(gallery.selected().map(|p| p.src.as_str()), Some("/biology/6.jpg"));
    }

    #[test]
    fn test_navigation_needs_open_lightbox() {
        let mut gallery = gallery();
        assert_eq!(gallery.next(), None);
        assert!(!gallery.open(7));
        assert!(!gallery.is_open());

        gallery.open(2);
        gallery.close();
        assert_eq!(gallery.selected(), None);
        assert_eq!(gallery.prev(), None);
        assert_eq!(gallery.selected_index(), 2);
    }

    #[test]
    fn test_carousel_scroll_clamps() {
        // 7 * 288 + 6 * 24 + 32 = 2192, viewport 1024 -> max 1168
        let mut carousel = Carousel::new(7, 300.0, 1024.0);
        assert_eq!(carousel.max_offset(), 1168.0);
        assert!(!carousel.can_go_left());
        assert_eq!(carousel.scroll_left(), 0.0);
        for _ in 0..3 {
            carousel.scroll_right();
        }
        assert_eq!(carousel.offset(), 900.0);
        assert_eq!(carousel.scroll_right(), 1168.0);
        assert!(!carousel.can_go_right());
        assert_eq!(carousel.scroll_left(), 868.0);
        assert!(carousel.can_go_left() && carousel.can_go_right());
    }

    #[test]
    fn test_carousel_fits_viewport() {
        let mut carousel = Carousel::new(1, 300.0, 1024.0);
        assert_eq!(carousel.max_offset(), 0.0);
        assert_eq!(carousel.scroll_right(), 0.0);
    }
}
