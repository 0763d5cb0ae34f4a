//! Device orientation input.
//!
//! The host delivers an [`OrientationEvent`] whenever the device rotates or
//! the screen size class changes. The toolbar never polls global device
//! state; the wide-layout decision is derived from the event alone.

/// Physical orientation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceOrientation {
    /// Orientation not known yet.
    #[default]
    Unknown,
    /// Upright.
    Portrait,
    /// Upside down.
    PortraitUpsideDown,
    /// Rotated with the top of the device to the left.
    LandscapeLeft,
    /// Rotated with the top of the device to the right.
    LandscapeRight,
    /// Lying flat, screen up.
    FaceUp,
    /// Lying flat, screen down.
    FaceDown,
}

impl DeviceOrientation {
    /// Whether the toolbar reacts to this orientation at all.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            DeviceOrientation::LandscapeLeft | DeviceOrientation::Portrait | DeviceOrientation::FaceUp
        )
    }

    /// Whether this is the landscape orientation the toolbar lays out wide.
    pub fn is_landscape(self) -> bool {
        self == DeviceOrientation::LandscapeLeft
    }
}

/// Screen bounds in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenSize {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl ScreenSize {
    /// Create a screen size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the screen is wider than it is tall.
    pub fn is_wider_than_tall(&self) -> bool {
        self.height < self.width
    }
}

/// A single orientation notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationEvent {
    /// Reported device orientation.
    pub orientation: DeviceOrientation,
    /// Screen bounds at the time of the event.
    pub screen: ScreenSize,
}

impl OrientationEvent {
    /// Create an event.
    pub const fn new(orientation: DeviceOrientation, screen: ScreenSize) -> Self {
        Self { orientation, screen }
    }

    /// An upright phone-shaped event.
    pub const fn portrait() -> Self {
        Self::new(DeviceOrientation::Portrait, ScreenSize::new(390.0, 844.0))
    }

    /// A landscape phone-shaped event.
    pub const fn landscape() -> Self {
        Self::new(DeviceOrientation::LandscapeLeft, ScreenSize::new(844.0, 390.0))
    }

    /// Whether the toolbar should use the wide layout.
    ///
    /// Unsupported orientations never count as wide.
    pub fn is_wide(&self) -> bool {
        self.orientation.is_supported()
            && (self.orientation.is_landscape() || self.screen.is_wider_than_tall())
    }
}
