//! Optional image assets
//!
//! The catcher and logo sprites are nice-to-have: any failure to fetch or
//! decode one is logged and the renderer falls back to procedural drawing.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use thiserror::Error;

/// Catcher sprite size in logical pixels
pub const CATCHER_SIZE: (u32, u32) = (100, 60);
/// Logo is decoded at half its on-screen size (400x200) and drawn doubled
pub const LOGO_SIZE: (u32, u32) = (200, 100);
pub const LOGO_PIXEL_SCALE: f32 = 2.0;

pub const CATCHER_FILE: &str = "catcher.png";
pub const LOGO_FILE: &str = "logo.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Decoded RGBA sprite at its draw size
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Decode PNG bytes and scale to `width` x `height` (nearest neighbour)
    pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self::from_image(decoded, width, height))
    }

    pub fn from_image(image: RgbaImage, width: u32, height: u32) -> Self {
        let image = if image.dimensions() == (width, height) {
            image
        } else {
            imageops::resize(&image, width, height, FilterType::Nearest)
        };
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA at (x, y), None outside the sprite
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Rows of pixels, top first
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.image
            .as_raw()
            .chunks_exact(self.image.width() as usize * 4)
    }
}

/// Sprites available to the renderer
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub catcher: Option<Sprite>,
    pub logo: Option<Sprite>,
}

impl Assets {
    /// No sprites; everything is drawn procedurally
    pub fn none() -> Self {
        Self::default()
    }

    fn from_results(
        catcher: Result<Sprite, AssetError>,
        logo: Result<Sprite, AssetError>,
    ) -> Self {
        let catcher = catcher
            .inspect_err(|e| log::warn!("Catcher sprite unavailable: {}", e))
            .ok();
        let logo = logo
            .inspect_err(|e| log::warn!("Logo unavailable: {}", e))
            .ok();
        Self { catcher, logo }
    }

    /// Load sprites from a directory on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_dir(dir: &std::path::Path) -> Self {
        let load = |name: &str, (w, h): (u32, u32)| -> Result<Sprite, AssetError> {
            let bytes = std::fs::read(dir.join(name))?;
            Sprite::decode(&bytes, w, h)
        };
        Self::from_results(load(CATCHER_FILE, CATCHER_SIZE), load(LOGO_FILE, LOGO_SIZE))
    }

    /// Fetch sprites relative to the page
    #[cfg(target_arch = "wasm32")]
    pub async fn fetch(base: &str) -> Self {
        let catcher = fetch_sprite(&format!("{base}/{CATCHER_FILE}"), CATCHER_SIZE).await;
        let logo = fetch_sprite(&format!("{base}/{LOGO_FILE}"), LOGO_SIZE).await;
        Self::from_results(catcher, logo)
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_sprite(url: &str, (w, h): (u32, u32)) -> Result<Sprite, AssetError> {
    let bytes = fetch_bytes(url).await?;
    Sprite::decode(&bytes, w, h)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let fail = |reason: String| AssetError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| fail(format!("{e:?}")))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fail(format!("{e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| fail("not a Response".into()))?;
    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }

    let buffer = response
        .array_buffer()
        .map_err(|e| fail(format!("{e:?}")))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| fail(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
