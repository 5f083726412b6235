//! Display-side scene model: styling, scaling, and per-frame views.

pub mod frame;
pub mod style;

pub use frame::{
    BodyFrame, BodyStyle, FrameView, Scene, DAYS_PER_YEAR, FRAME_DELAY_MS, TITLE, TRAIL_LEN,
    VIEW_MARGIN,
};
pub use style::BodyClass;
