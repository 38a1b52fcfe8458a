use crate::error::{plot_err, RecordError};
use crate::utils::*;
use log::{debug, info, warn};
use plotters::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
pub mod error;
pub mod plot_outcomes;
pub mod utils;

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const USAGE: &str = "pass file to plot as argument to the program";
pub const GENERATION_STEP: i64 = 10;
pub const CHART_SIZE: (u32, u32) = (800, 600);
pub const X_LABEL: &str = "generation";

/// One of the three counts stored in each record.
/// The order of ALL is the order in which the charts are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Wins,
    Ties,
    Losses,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Wins, Metric::Ties, Metric::Losses];

    /// Position of the value in the line.
    pub fn index(self) -> usize {
        match self {
            Metric::Wins => 0,
            Metric::Ties => 1,
            Metric::Losses => 2,
        }
    }

    /// Label of the y axis.
    /// The values are raw counts, the % is kept for continuity with the existing charts.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Wins => "win %",
            Metric::Ties => "tie %",
            Metric::Losses => "loss %",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Metric::Wins => "wins.png",
            Metric::Ties => "ties.png",
            Metric::Losses => "losses.png",
        }
    }
}

/// Wins, ties, and losses of one sampled generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
}

impl Record {
    /// Parse a line with exactly three whitespace-separated integers.
    /// line_no is only used for the error messages.
    /// Values must fit in i64 and be plain decimal with an optional sign:
    /// digit separators such as `1_000` and larger integers are parse errors.
    pub fn from_line(line: &str, line_no: usize) -> Result<Record, RecordError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(RecordError::TokenCount {
                line: line_no,
                got: tokens.len(),
            });
        }
        let mut values = [0i64; 3];
        for (v, t) in values.iter_mut().zip(tokens.iter()) {
            *v = t.parse::<i64>().map_err(|source| RecordError::ParseInt {
                line: line_no,
                token: t.to_string(),
                source,
            })?;
        }
        Ok(Record {
            wins: values[0],
            ties: values[1],
            losses: values[2],
        })
    }

    pub fn get(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Wins => self.wins,
            Metric::Ties => self.ties,
            Metric::Losses => self.losses,
        }
    }
}

/// The main struct, all the records of a run in file order.
#[derive(Debug, Clone, Default)]
pub struct Outcomes {
    pub records: Vec<Record>,
}

impl Outcomes {
    pub fn new(capacity: usize) -> Outcomes {
        Outcomes {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Read all the records, stop at the first line that is not a valid record.
    /// Blank lines are not skipped, they count as records with no values.
    pub fn from_reader<R: BufRead>(buf: R) -> Result<Outcomes, RecordError> {
        let mut outcomes = Outcomes::new(1000);
        for (i, l) in buf.lines().enumerate() {
            let line_no = i + 1;
            let l = l.map_err(|source| RecordError::Read {
                line: line_no,
                source,
            })?;
            outcomes.records.push(Record::from_line(&l, line_no)?);
        }
        Ok(outcomes)
    }

    /// Open and read the record file, the file is closed before returning.
    pub fn from_file<P>(fin: P) -> Result<Outcomes, RecordError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(&fin).map_err(|source| RecordError::Open {
            path: fin.as_ref().to_path_buf(),
            source,
        })?;
        let outcomes = Outcomes::from_reader(BufReader::new(file))?;
        info!(
            "read {} records from {}",
            outcomes.len(),
            fin.as_ref().display()
        );
        if outcomes.is_empty() {
            warn!("no records in {}, charts will be empty", fin.as_ref().display());
        }
        Ok(outcomes)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one metric across all the records.
    pub fn series(&self, metric: Metric) -> Vec<i64> {
        self.records.iter().map(|r| r.get(metric)).collect()
    }

    /// The x axis, each record stands for GENERATION_STEP generations.
    pub fn generations(&self) -> Vec<i64> {
        (0..self.records.len() as i64)
            .map(|i| GENERATION_STEP * i)
            .collect()
    }

    pub fn points(&self, metric: Metric) -> Vec<(i64, i64)> {
        self.generations()
            .into_iter()
            .zip(self.series(metric))
            .collect()
    }

    /// Plot one metric against the generations to png,
    /// overwriting dir/metric.file_name() if it exists.
    /// Every call draws on its own backend, nothing is shared between charts.
    pub fn plot_metric<P>(&self, metric: Metric, dir: P) -> Result<PathBuf, RecordError>
    where
        P: AsRef<Path>,
    {
        let fout = dir.as_ref().join(metric.file_name());
        let xrange = axis_range(&self.generations());
        let yrange = pad_range(axis_range(&self.series(metric)));
        debug!(
            "{}: x range {:?}, y range {:?}",
            metric.file_name(),
            xrange,
            yrange
        );
        {
            let root = BitMapBackend::new(&fout, CHART_SIZE).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;
            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(xrange, yrange)
                .map_err(plot_err)?;
            chart
                .configure_mesh()
                .light_line_style(&TRANSPARENT)
                .bold_line_style(RGBColor(100, 100, 100).mix(0.5).stroke_width(1))
                .label_style(("sans-serif", 16))
                .x_desc(X_LABEL)
                .y_desc(metric.label())
                .x_label_formatter(&|x: &f64| format!("{:.0}", x))
                .y_label_formatter(&|y: &f64| format!("{:.0}", y))
                .draw()
                .map_err(plot_err)?;
            let points = self
                .points(metric)
                .into_iter()
                .map(|(x, y)| (x as f64, y as f64));
            chart
                .draw_series(LineSeries::new(points, &BLUE))
                .map_err(plot_err)?;
            root.present().map_err(plot_err)?;
        }
        info!("saved {}", fout.display());
        Ok(fout)
    }

    /// Plot wins, ties, and losses, in this order.
    /// Stop at the first failure, the charts already saved are left in place.
    pub fn plot_all<P>(&self, dir: P) -> Result<Vec<PathBuf>, RecordError>
    where
        P: AsRef<Path>,
    {
        Metric::ALL
            .iter()
            .map(|m| self.plot_metric(*m, &dir))
            .collect()
    }
}

impl fmt::Display for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "generation wins ties losses")?;
        for (g, r) in self.generations().iter().zip(self.records.iter()) {
            writeln!(f, "{} {} {} {}", g, r.wins, r.ties, r.losses)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scenario() -> Outcomes {
        Outcomes::from_reader(Cursor::new("5 3 2\n6 2 2\n7 1 2\n")).unwrap()
    }

    #[test]
    fn record_from_line_with_extra_whitespace() {
        let r = Record::from_line("  12\t 0   -3  \r", 1).unwrap();
        assert_eq!(
            r,
            Record {
                wins: 12,
                ties: 0,
                losses: -3
            }
        );
    }

    #[test]
    fn record_wrong_token_count() {
        match Record::from_line("1 2", 4) {
            Err(RecordError::TokenCount { line, got }) => {
                assert_eq!(line, 4);
                assert_eq!(got, 2);
            }
            other => panic!("expected TokenCount, got {:?}", other),
        }
        assert!(matches!(
            Record::from_line("1 2 3 4", 1),
            Err(RecordError::TokenCount { got: 4, .. })
        ));
        assert!(matches!(
            Record::from_line("", 1),
            Err(RecordError::TokenCount { got: 0, .. })
        ));
    }

    #[test]
    fn record_not_an_integer() {
        match Record::from_line("1 2.5 3", 7) {
            Err(RecordError::ParseInt { line, token, .. }) => {
                assert_eq!(line, 7);
                assert_eq!(token, "2.5");
            }
            other => panic!("expected ParseInt, got {:?}", other),
        }
    }

    #[test]
    fn scenario_series_and_generations() {
        let o = scenario();
        assert_eq!(o.len(), 3);
        assert_eq!(o.generations(), vec![0, 10, 20]);
        assert_eq!(o.series(Metric::Wins), vec![5, 6, 7]);
        assert_eq!(o.series(Metric::Ties), vec![3, 2, 1]);
        assert_eq!(o.series(Metric::Losses), vec![2, 2, 2]);
        assert_eq!(o.points(Metric::Ties), vec![(0, 3), (10, 2), (20, 1)]);
    }

    #[test]
    fn series_are_projections_of_records() {
        let o = Outcomes::from_file("./test/outcomes.txt").unwrap();
        for m in Metric::ALL.iter() {
            let points = o.points(*m);
            assert_eq!(points.len(), o.len());
            for (i, (p, r)) in points.iter().zip(o.records.iter()).enumerate() {
                assert_eq!(p.0, 10 * i as i64);
                assert_eq!(p.1, r.get(*m));
                assert_eq!(p.1, [r.wins, r.ties, r.losses][m.index()]);
            }
        }
    }

    #[test]
    fn trailing_blank_line_fails() {
        let res = Outcomes::from_reader(Cursor::new("5 3 2\n\n"));
        assert!(matches!(
            res,
            Err(RecordError::TokenCount { line: 2, got: 0 })
        ));
    }

    #[test]
    fn malformed_file_reports_line() {
        let res = Outcomes::from_file("./test/outcomes_malformed.txt");
        assert!(matches!(
            res,
            Err(RecordError::TokenCount { line: 3, got: 2 })
        ));
    }

    #[test]
    fn missing_file() {
        let res = Outcomes::from_file("./test/does_not_exist.txt");
        assert!(matches!(res, Err(RecordError::Open { .. })));
    }

    #[test]
    fn empty_input() {
        let o = Outcomes::from_reader(Cursor::new("")).unwrap();
        assert!(o.is_empty());
        assert!(o.generations().is_empty());
        assert!(o.points(Metric::Wins).is_empty());
    }

    #[test]
    fn metric_order_labels_and_files() {
        let labels: Vec<&str> = Metric::ALL.iter().map(|m| m.label()).collect();
        let files: Vec<&str> = Metric::ALL.iter().map(|m| m.file_name()).collect();
        assert_eq!(labels, vec!["win %", "tie %", "loss %"]);
        assert_eq!(files, vec!["wins.png", "ties.png", "losses.png"]);
    }

    #[test]
    fn plot_single_metric() {
        let dir = std::env::temp_dir().join("outcome_plot_single_metric");
        std::fs::create_dir_all(&dir).unwrap();
        let fout = scenario().plot_metric(Metric::Ties, &dir).unwrap();
        assert_eq!(fout, dir.join("ties.png"));
        assert!(std::fs::metadata(&fout).unwrap().len() > 0);
        assert!(!dir.join("wins.png").exists());
    }

    #[test]
    fn plot_values_at_integer_limits() {
        let dir = std::env::temp_dir().join("outcome_plot_integer_limits");
        std::fs::create_dir_all(&dir).unwrap();
        let single = Outcomes::from_reader(Cursor::new("9223372036854775807 0 0\n")).unwrap();
        single.plot_metric(Metric::Wins, &dir).unwrap();
        let both = Outcomes::from_reader(Cursor::new(
            "-9223372036854775808 0 0\n9223372036854775807 0 0\n",
        ))
        .unwrap();
        let files = both.plot_all(&dir).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn record_rejects_separators_and_big_integers() {
        assert!(matches!(
            Record::from_line("1_000 0 0", 1),
            Err(RecordError::ParseInt { .. })
        ));
        assert!(matches!(
            Record::from_line("9223372036854775808 0 0", 1),
            Err(RecordError::ParseInt { .. })
        ));
        assert_eq!(Record::from_line("+5 0 0", 1).unwrap().wins, 5);
    }

    #[test]
    fn display_table() {
        let o = scenario();
        assert_eq!(
            o.to_string(),
            "generation wins ties losses\n0 5 3 2\n10 6 2 2\n20 7 1 2\n"
        );
    }
}
