use crate::{
    config::{self, parse_color},
    consts::{CIRCLE_SEGMENTS, LABEL_FONT_SIZE, PLOT_FILL, TITLE_FONT_SIZE},
    plot::{format_label, PolarPlot},
};
use anyhow::Result;
use itertools::Itertools;
use kiss3d::{
    nalgebra::{Point2, Point3},
    text::Font,
    window::{State, Window},
};
use palette::Srgb;
use std::{
    f64::consts::TAU,
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering::*},
        Arc,
    },
};
use tracing::{info, warn};

/// Opens a window showing the plot and blocks until it is closed.
pub fn run_gui(plot: PolarPlot, style: &config::Plot, is_terminated: Arc<AtomicBool>) -> Result<()> {
    let marker_color = to_point(parse_color(&style.marker_color)?);
    let grid_color = to_point(parse_color(&style.grid_color)?);
    let background = parse_color(&style.background_color)?;

    let mut window = Window::new_with_size(&plot.title, style.window_width, style.window_height);
    window.set_background_color(background.red, background.green, background.blue);

    let gui = Gui {
        plot,
        is_terminated,
        font: Font::default(),
        marker_color,
        grid_color,
        marker_size: style.marker_size,
    };

    info!("Showing plot, close the window to exit");
    window.render_loop(gui);
    info!("Window closed");
    Ok(())
}

struct Gui {
    plot: PolarPlot,

    /// Set by the Ctrl-C handler.
    is_terminated: Arc<AtomicBool>,

    font: Rc<Font>,
    marker_color: Point3<f32>,
    grid_color: Point3<f32>,
    marker_size: f32,
}

/// Window dimensions in logical pixels, plus the HiDPI factor.
#[derive(Clone, Copy)]
struct Frame {
    width: f32,
    height: f32,
    hidpi: f32,
}

impl Frame {
    fn of(window: &Window) -> Self {
        let hidpi = window.scale_factor() as f32;
        Self {
            width: window.width() as f32 / hidpi,
            height: window.height() as f32 / hidpi,
            hidpi,
        }
    }

    /// Radius of the outer plot circle.
    fn extent(&self) -> f32 {
        self.width.min(self.height) * PLOT_FILL / 2.0
    }

    /// Converts centered, y-up planar coordinates into the top-left origin,
    /// physical pixel coordinates used for text.
    fn text_pos(&self, [x, y]: [f32; 2]) -> Point2<f32> {
        Point2::new(
            (x + self.width / 2.0) * self.hidpi,
            (self.height / 2.0 - y) * self.hidpi,
        )
    }
}

impl State for Gui {
    fn step(&mut self, window: &mut Window) {
        // Check termination signal
        if self.is_terminated.load(SeqCst) {
            warn!("User interrupted");
            window.close();
            return;
        }

        let frame = Frame::of(window);
        self.draw_grid(window, frame);
        self.draw_points(window, frame);
        self.draw_title(window, frame);
    }
}

impl Gui {
    fn draw_grid(&self, window: &mut Window, frame: Frame) {
        let extent = frame.extent();
        let color = &self.grid_color;

        for radius in self.plot.ring_radii() {
            let circle: Vec<_> = (0..CIRCLE_SEGMENTS)
                .map(|index| {
                    let angle = TAU * index as f64 / CIRCLE_SEGMENTS as f64;
                    to_planar(self.plot.project(angle, radius, extent))
                })
                .collect();

            for (from, to) in circle.iter().circular_tuple_windows() {
                window.draw_planar_line(from, to, color);
            }

            // Ring labels sit between the first two spokes.
            let label_angle = TAU / self.plot.spokes as f64 / 2.0;
            let pos = frame.text_pos(self.plot.project(label_angle, radius, extent));
            window.draw_text(&format_label(radius), &pos, LABEL_FONT_SIZE, &self.font, color);
        }

        let origin = Point2::origin();
        for angle in self.plot.spoke_angles() {
            let tip = self.plot.project(angle, self.plot.radial_max, extent);
            window.draw_planar_line(&origin, &to_planar(tip), color);

            let label = format!("{}°", format_label(angle.to_degrees()));
            let [x, y] = self.plot.project(angle, self.plot.radial_max, extent * 1.1);
            let half_width = label.chars().count() as f32 * LABEL_FONT_SIZE / 4.0 / frame.hidpi;
            let pos = frame.text_pos([x - half_width, y + LABEL_FONT_SIZE / 4.0 / frame.hidpi]);
            window.draw_text(&label, &pos, LABEL_FONT_SIZE, &self.font, color);
        }
    }

    /// Each sample becomes a small filled square.
    fn draw_points(&self, window: &mut Window, frame: Frame) {
        let extent = frame.extent();
        let half = self.marker_size / 2.0;
        let rows = self.marker_size.ceil().max(1.0) as usize;

        for point in &self.plot.points {
            let [x, y] = self.plot.project(point.angle_rad, point.radius, extent);
            for row in 0..rows {
                let dy = -half + row as f32 * self.marker_size / rows as f32;
                window.draw_planar_line(
                    &Point2::new(x - half, y + dy),
                    &Point2::new(x + half, y + dy),
                    &self.marker_color,
                );
            }
        }
    }

    /// The title's bottom edge rests just above the plot area.
    fn draw_title(&self, window: &mut Window, frame: Frame) {
        let top = frame.extent() * 1.1 + LABEL_FONT_SIZE / frame.hidpi;
        let half_width =
            self.plot.title.chars().count() as f32 * TITLE_FONT_SIZE / 4.0 / frame.hidpi;
        let pos = frame.text_pos([-half_width, top + TITLE_FONT_SIZE / frame.hidpi]);
        window.draw_text(
            &self.plot.title,
            &pos,
            TITLE_FONT_SIZE,
            &self.font,
            &Point3::new(0.0, 0.0, 0.0),
        );
    }
}

fn to_planar([x, y]: [f32; 2]) -> Point2<f32> {
    Point2::new(x, y)
}

fn to_point(color: Srgb<f32>) -> Point3<f32> {
    let (r, g, b) = color.into_components();
    Point3::new(r, g, b)
}
