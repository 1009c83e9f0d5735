//! Print analysis results

use std::io::{self, Write};

use yansi::Color;

use common::color::Rgb;

use crate::analyzer::Analysis;

/// Receives a titled batch of `(text, colour)` lines
pub trait Reporter {
    fn batch(&mut self, title: &str) -> io::Result<()>;

    fn line(&mut self, text: &str, color: Rgb) -> io::Result<()>;

    fn analysis(&mut self, title: &str, analysis: &Analysis<'_>) -> io::Result<()> {
        self.batch(title)?;
        for flight in &analysis.flights {
            self.line(&flight.report_line(), flight.color)?;
        }
        Ok(())
    }
}

/// Writes lines painted with a 24-bit colour. Whether ANSI codes are emitted at all is
/// controlled globally with `yansi::Paint::enable`/`disable`.
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn batch(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{title}:")
    }

    fn line(&mut self, text: &str, color: Rgb) -> io::Result<()> {
        let Rgb(r, g, b) = color;
        writeln!(self.out, "{}", Color::RGB(r, g, b).paint(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, Flight, Params};
    use crate::metric::Metric;
    use common::structs::Coordinate;

    #[derive(Default)]
    struct Collect {
        titles: Vec<String>,
        lines: Vec<(String, Rgb)>,
    }

    impl Reporter for Collect {
        fn batch(&mut self, title: &str) -> io::Result<()> {
            self.titles.push(title.to_owned());
            Ok(())
        }

        fn line(&mut self, text: &str, color: Rgb) -> io::Result<()> {
            self.lines.push((text.to_owned(), color));
            Ok(())
        }
    }

    #[test]
    fn analysis_lines() {
        let a = Coordinate::new(0.0, 0.0).unwrap();
        let b = Coordinate::new(0.0, 30.0).unwrap();
        let c = Coordinate::new(0.0, 10.0).unwrap();
        let flights = [
            Flight::new("A", vec![1.0], a, b).unwrap(),
            Flight::new("B", vec![1.0], a, c).unwrap().with_route("X-Y"),
        ];
        let analysis = analyze(&flights, &Metric::Sphere, Params { color_scale: 1.0 }).unwrap();

        let mut collect = Collect::default();
        collect.analysis("Sphere", &analysis).unwrap();
        assert_eq!(collect.titles, ["Sphere"]);
        assert_eq!(collect.lines.len(), 2);
        assert_eq!(collect.lines[0].0, " - A: 50.0% off");
        assert_eq!(collect.lines[0].1, analysis.flights[0].color);
        assert_eq!(collect.lines[1].0, " - B (X-Y): -50.0% off");
    }

    #[test]
    fn console_header() {
        let mut console = ConsoleReporter::new(Vec::new());
        console.batch("AE Map").unwrap();
        assert_eq!(console.into_inner(), b"AE Map:\n");
    }
}
