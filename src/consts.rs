use crate::config::{self, Config};
use std::{borrow::Cow, num::NonZeroUsize};

pub const DEFAULT_CONFIG: Config = Config {
    plot: config::Plot {
        title: Cow::Borrowed("SenRen LIDAR Scan"),
        marker_size: 4.0,
        marker_color: Cow::Borrowed("#0000ff"),
        grid_color: Cow::Borrowed("#b0b0b0"),
        background_color: Cow::Borrowed("#ffffff"),
        radial_margin: 1.1,
        rings: unsafe { NonZeroUsize::new_unchecked(4) },
        spokes: unsafe { NonZeroUsize::new_unchecked(8) },
        window_width: 800,
        window_height: 800,
    },
};

/// Number of segments used to approximate a circle.
pub const CIRCLE_SEGMENTS: usize = 180;

/// Fraction of the smaller window side covered by the plot diameter.
pub const PLOT_FILL: f32 = 0.8;

pub const TITLE_FONT_SIZE: f32 = 48.0;
pub const LABEL_FONT_SIZE: f32 = 28.0;
