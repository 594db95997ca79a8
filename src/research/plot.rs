//! Plots the training/validation error curves of a [`SweepResult`].
use plotters::prelude::*;
use plotters::coord::Shift;

use std::error::Error;
use std::path::Path;

use crate::ClassifierKind;
use super::sweep::SweepResult;

const DEFAULT_SIZE: (u32, u32) = (1100, 800);
const FONT: &str = "sans-serif";
const LINE_WIDTH: u32 = 3;


/// A builder that draws the error curves of a sweep.
/// The training error is drawn in red, the validation error in blue.
///
/// # Example
/// ```no_run
/// use miniclassify::prelude::*;
///
/// ErrorCurvePlot::new(&result)
///     .log_x_axis(true)
///     .save_png("logistic.png")
///     .unwrap();
/// ```
pub struct ErrorCurvePlot<'a> {
    result: &'a SweepResult,
    log_x_axis: bool,
    size: (u32, u32),
}


impl<'a> ErrorCurvePlot<'a> {
    /// Construct a new plot of `result`.
    pub fn new(result: &'a SweepResult) -> Self {
        Self {
            result,
            log_x_axis: true,
            size: DEFAULT_SIZE,
        }
    }


    /// Plot `log10(C)` instead of `C` for logistic regression.
    /// Other families ignore this flag.
    /// Default is `true`.
    pub fn log_x_axis(mut self, flag: bool) -> Self {
        self.log_x_axis = flag;
        self
    }


    /// Set the image size in pixels.
    /// Default is `1100 x 800`.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }


    /// Returns the label of the x axis.
    pub fn x_label(&self) -> &'static str {
        match self.result.kind {
            ClassifierKind::Logistic if self.log_x_axis => "log10(C)",
            ClassifierKind::Logistic => "C",
            ClassifierKind::Knn => "k",
            ClassifierKind::NaiveBayes => "bandwidth",
        }
    }


    /// Returns the drawn points `(x, training error, validation error)`.
    pub fn points(&self) -> Vec<(f64, f64, f64)> {
        let log_x = self.log_x_axis
            && self.result.kind == ClassifierKind::Logistic;
        self.result.points.iter()
            .map(|p| {
                let x = if log_x { p.value.log10() } else { p.value };
                (x, p.train_error, p.valid_error)
            })
            .collect()
    }


    /// Draw the curves to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P)
        -> Result<(), Box<dyn Error>>
    {
        let root = BitMapBackend::new(path.as_ref(), self.size)
            .into_drawing_area();
        self.draw(root)
    }


    /// Draw the curves to a SVG file.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P)
        -> Result<(), Box<dyn Error>>
    {
        let root = SVGBackend::new(path.as_ref(), self.size)
            .into_drawing_area();
        self.draw(root)
    }


    fn draw<DB>(&self, root: DrawingArea<DB, Shift>)
        -> Result<(), Box<dyn Error>>
        where DB: DrawingBackend,
              DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;

        let points = self.points();
        let (mut x_min, mut x_max) = points.iter()
            .fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), p| (lo.min(p.0), hi.max(p.0))
            );
        if x_min >= x_max {
            x_min -= 0.5;
            x_max += 0.5;
        }
        let y_max = points.iter()
            .map(|p| p.1.max(p.2))
            .fold(0.0, f64::max)
            .max(0.05)
            * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.result.kind.to_string(), (FONT, 32))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

        chart.configure_mesh()
            .x_desc(self.x_label())
            .y_desc("error")
            .label_style((FONT, 20))
            .draw()?;

        let train_style = RED.stroke_width(LINE_WIDTH);
        chart.draw_series(LineSeries::new(
                points.iter().map(|p| (p.0, p.1)),
                train_style,
            ))?
            .label("training")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], train_style)
            });

        let valid_style = BLUE.stroke_width(LINE_WIDTH);
        chart.draw_series(LineSeries::new(
                points.iter().map(|p| (p.0, p.2)),
                valid_style,
            ))?
            .label("validation")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], valid_style)
            });

        chart.configure_series_labels()
            .label_font((FONT, 20))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
