use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
pub mod plot;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// Errors raised while loading or writing a coordinate file.
/// Both kinds are fatal, there is no recovery or line skipping.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two comma-separated integers, found \"{text}\"")]
    Parse { line: usize, text: String },
}

/// The main struct for the 2D coordinate path,
/// ordered as read from the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPath {
    pub x: Vec<i64>,
    pub y: Vec<i64>,
}

/// Settings for the rendered chart.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    /// annotate every nth vertex with its "(x,y)" text, 0 disables labels
    pub label_every: usize,
}

impl Default for PlotOptions {
    fn default() -> PlotOptions {
        PlotOptions {
            title: String::from("Coordinate path"),
            label_every: 1,
        }
    }
}

impl PointPath {
    pub fn new(capacity: usize) -> PointPath {
        let x: Vec<i64> = Vec::with_capacity(capacity);
        let y: Vec<i64> = Vec::with_capacity(capacity);
        PointPath { x, y }
    }

    /// Init a PointPath from a text file with one `x,y` pair per line.
    /// Blank lines are skipped, any malformed line is a fatal error.
    pub fn from_file(fin: &Path) -> Result<PointPath, LoadError> {
        let file = File::open(fin)?;
        let buf = BufReader::new(file);
        PointPath::from_reader(buf)
    }

    /// Parsing core behind `from_file`, kept separate so it can run
    /// over any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<PointPath, LoadError> {
        let mut pointpath = PointPath::new(1000);
        for (i, l) in reader.lines().enumerate() {
            let l = l?;
            let trimmed = l.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (x, y) = parse_pair(trimmed, i + 1)?;
            pointpath.x.push(x);
            pointpath.y.push(y);
        }
        Ok(pointpath)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// iterates the vertices in path order
    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| (x, y))
    }

    /// writes the path back out as `x,y` lines at the given path
    pub fn to_file(&self, fout: &Path) -> Result<(), LoadError> {
        let file = File::create(fout)?;
        let mut buf = BufWriter::new(file);
        for (x, y) in self.points() {
            buf.write_all(format!("{},{}\n", x, y).as_bytes())?;
        }
        buf.flush()?;
        Ok(())
    }

    /// plots the path to svg as a connected line with circular markers,
    /// annotating vertices with their coordinate text
    pub fn plot(&self, fout: &Path, opts: &PlotOptions) -> Result<(), Box<dyn std::error::Error>> {
        let (xmin, xmax) = padded_range(&self.x);
        let (ymin, ymax) = padded_range(&self.y);
        let root = SVGBackend::new(fout, (900, 900)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&opts.title, ("sans-serif", 32))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 18))
            .x_desc("x")
            .y_desc("y")
            .draw()?;
        if self.is_empty() {
            root.present()?;
            return Ok(());
        }
        let line_color = RGBColor(31, 119, 180);
        let line = LineSeries::new(self.points(), line_color.stroke_width(1));
        chart.draw_series(line)?;
        let markers = self.points().map(|p| Circle::new(p, 3, line_color.filled()));
        chart.draw_series(markers)?;
        if opts.label_every > 0 {
            let labels = self
                .points()
                .enumerate()
                .filter(|(i, _)| i % opts.label_every == 0)
                .map(|(_, (px, py))| {
                    Text::new(format!("({},{})", px, py), (px, py), ("sans-serif", 12))
                });
            chart.draw_series(labels)?;
        }
        root.present()?;
        Ok(())
    }
}

impl std::fmt::Display for PointPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, y) in self.points() {
            write!(f, "{},{}\n", x, y)?
        }
        Ok(())
    }
}

/// parses one non-blank line as two comma-separated integers;
/// `line` is the 1-based line number reported on failure
fn parse_pair(text: &str, line: usize) -> Result<(i64, i64), LoadError> {
    let mut tokens = text.split(',');
    let xtok = tokens.next();
    let ytok = tokens.next();
    let extra = tokens.next();
    let pair = match (xtok, ytok, extra) {
        (Some(xs), Some(ys), None) => {
            let x = xs.trim().parse::<i64>();
            let y = ys.trim().parse::<i64>();
            match (x, y) {
                (Ok(x), Ok(y)) => Some((x, y)),
                _ => None,
            }
        }
        _ => None,
    };
    pair.ok_or_else(|| LoadError::Parse {
        line,
        text: text.to_string(),
    })
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}

/// axis range with a margin of span/20 on each side;
/// degenerate and empty spans are padded so the chart always has extent
fn padded_range(s: &[i64]) -> (i64, i64) {
    if s.is_empty() {
        return (0, 1);
    }
    let (min, max) = min_and_max(s);
    let mut margin = (max - min) / 20;
    if margin == 0 {
        margin = 1;
    }
    (min - margin, max + margin)
}
