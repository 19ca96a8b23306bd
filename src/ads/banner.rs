use std::fmt;

use crate::error::AdError;

use super::gateway::{AdGateway, Platform};

/// Where the banner sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdPosition {
    Top,
    #[default]
    Bottom,
}

/// Standard banner sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerSize {
    #[default]
    Banner,
    LargeBanner,
    MediumRectangle,
}

impl BannerSize {
    /// Width and height in device pixels.
    pub fn dimensions(&self) -> (u16, u16) {
        match self {
            BannerSize::Banner => (320, 50),
            BannerSize::LargeBanner => (320, 100),
            BannerSize::MediumRectangle => (300, 250),
        }
    }

    /// Rows the banner takes in the terminal, borders included.
    pub fn height_cells(&self) -> u16 {
        match self {
            BannerSize::Banner => 3,
            BannerSize::LargeBanner => 5,
            BannerSize::MediumRectangle => 9,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "large-banner" => BannerSize::LargeBanner,
            "medium-rectangle" => BannerSize::MediumRectangle,
            _ => BannerSize::Banner,
        }
    }
}

/// What the SDK is asked to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRequest {
    pub unit_id: String,
    pub size: BannerSize,
    pub non_personalized_only: bool,
}

/// Banner lifecycle events reported by the SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    Loaded,
    FailedToLoad(AdError),
    Opened,
    Closed,
    Impression,
    Clicked,
}

type Callback = Box<dyn FnMut() + Send>;

/// Optional observers for banner events.
#[derive(Default)]
pub struct AdEventCallbacks {
    pub on_loaded: Option<Callback>,
    pub on_failed_to_load: Option<Box<dyn FnMut(&AdError) + Send>>,
    pub on_opened: Option<Callback>,
    pub on_closed: Option<Callback>,
    pub on_impression: Option<Callback>,
    pub on_clicked: Option<Callback>,
}

impl fmt::Debug for AdEventCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdEventCallbacks")
            .field("on_loaded", &self.on_loaded.is_some())
            .field("on_failed_to_load", &self.on_failed_to_load.is_some())
            .field("on_opened", &self.on_opened.is_some())
            .field("on_closed", &self.on_closed.is_some())
            .field("on_impression", &self.on_impression.is_some())
            .field("on_clicked", &self.on_clicked.is_some())
            .finish()
    }
}

/// Banner state for one screen.
#[derive(Debug)]
pub struct AdBanner {
    position: AdPosition,
    size: BannerSize,
    unit_id: String,
    visible: bool,
    loaded: bool,
    opened: bool,
    callbacks: AdEventCallbacks,
}

impl AdBanner {
    /// Mount a banner. It starts visible only if the gateway is enabled and
    /// has a unit for `platform`.
    pub fn mount(
        gateway: &AdGateway,
        platform: Platform,
        position: AdPosition,
        size: BannerSize,
    ) -> Self {
        let unit_id = gateway.banner_unit_id(platform).to_string();
        let visible = gateway.is_enabled() && !unit_id.is_empty();
        if !visible {
            tracing::debug!(%platform, "Banner hidden: ads disabled or no unit id");
        }
        Self {
            position,
            size,
            unit_id,
            visible,
            loaded: false,
            opened: false,
            callbacks: AdEventCallbacks::default(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: AdEventCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// The load request to hand to the SDK, if the banner should show.
    pub fn request(&self) -> Option<BannerRequest> {
        self.visible.then(|| BannerRequest {
            unit_id: self.unit_id.clone(),
            size: self.size,
            non_personalized_only: false,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn position(&self) -> AdPosition {
        self.position
    }

    pub fn size(&self) -> BannerSize {
        self.size
    }

    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    /// Apply an SDK event. A load failure hides the banner for good.
    pub fn handle_event(&mut self, event: &AdEvent) {
        match event {
            AdEvent::Loaded => {
                tracing::info!("Ad loaded");
                self.loaded = true;
                if let Some(cb) = self.callbacks.on_loaded.as_mut() {
                    cb();
                }
            }
            AdEvent::FailedToLoad(err) => {
                tracing::warn!("Ad failed to load: {}", err);
                self.visible = false;
                self.loaded = false;
                if let Some(cb) = self.callbacks.on_failed_to_load.as_mut() {
                    cb(err);
                }
            }
            AdEvent::Opened => {
                tracing::info!("Ad opened by user");
                self.opened = true;
                if let Some(cb) = self.callbacks.on_opened.as_mut() {
                    cb();
                }
            }
            AdEvent::Closed => {
                tracing::info!("Ad closed by user");
                self.opened = false;
                if let Some(cb) = self.callbacks.on_closed.as_mut() {
                    cb();
                }
            }
            AdEvent::Impression => {
                if let Some(cb) = self.callbacks.on_impression.as_mut() {
                    cb();
                }
            }
            AdEvent::Clicked => {
                if let Some(cb) = self.callbacks.on_clicked.as_mut() {
                    cb();
                }
            }
        }
    }
}
