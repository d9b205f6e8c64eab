use crate::api::types::ElementId;
use crate::core::once::OnceSet;

pub const LOADED_CLASS: &str = "loaded";

/// How to handle an image found at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoad {
    /// Already fetched (cache hit): mark it now.
    MarkNow,
    /// Mark it when its `load` event fires.
    AwaitLoad,
}

/// Tracks `pending -> loaded` for images in the about and project containers.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    loaded: OnceSet,
}

impl ImageLoader {
    pub fn new(images: usize) -> Self {
        Self { loaded: OnceSet::new(images) }
    }

    pub fn discover(&mut self, image: ElementId, complete: bool) -> ImageLoad {
        if complete {
            self.loaded.mark(image);
            ImageLoad::MarkNow
        } else {
            ImageLoad::AwaitLoad
        }
    }

    /// `load` fired. Returns `true` if the image was not marked yet.
    pub fn loaded(&mut self, image: ElementId) -> bool {
        self.loaded.mark(image)
    }

    pub fn pending(&self) -> usize {
        self.loaded.len() - self.loaded.marked()
    }
}
