//! Report sinks: per-generation CSV output and the final summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::Writer;

use crate::evolve::{EvolveResult, FitnessReport, GenerationSink};
use crate::grid::Grid;

/// Writes every generation's scored population to a CSV file.
///
/// The file is rewritten each generation, not appended, so it always
/// holds a snapshot of the latest evaluated population: one row per
/// candidate with its total, row, column, and subgrid scores.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GenerationSink for CsvSink {
    fn record(
        &mut self,
        _generation: usize,
        population: &[Grid],
        reports: &[FitnessReport],
    ) -> Result<()> {
        let mut writer = Writer::from_path(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;

        writer.write_record(["candidate", "total", "rows", "columns", "subgrids"])?;
        for (grid, report) in population.iter().zip(reports) {
            writer.write_record([
                grid.to_string(),
                report.total.to_string(),
                report.rows.to_string(),
                report.columns.to_string(),
                report.subgrids.to_string(),
            ])?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Renders the final human-readable summary of a run.
pub fn render_summary(result: &EvolveResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Search finished: {} after {} generation(s).\n\n",
        result.termination, result.generations
    ));
    out.push_str(&format!("Best Fitness Score: {}\n", result.fitness.total));
    out.push_str(&format!("Row Score: {}\n", result.fitness.rows));
    out.push_str(&format!("Column Score: {}\n", result.fitness.columns));
    out.push_str(&format!("Subgrid Score: {}\n", result.fitness.subgrids));
    out.push_str("Grid:\n");
    for row in 0..result.best.size() {
        out.push_str(&result.best.row_line(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolve::Termination;
    use crate::grid::Cell;

    fn sample_population() -> (Vec<Grid>, Vec<FitnessReport>) {
        let mut grid = Grid::empty(2);
        grid.set(0, 0, Cell::Fixed('l'));
        grid.set(1, 1, Cell::Generated('o'));
        let report = FitnessReport {
            total: -10,
            rows: -2,
            columns: -2,
            subgrids: -6,
        };
        (vec![grid.clone(), grid], vec![report, report])
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness_scores.csv");
        let mut sink = CsvSink::new(&path);
        let (population, reports) = sample_population();

        sink.record(0, &population, &reports).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "candidate,total,rows,columns,subgrids");
        assert_eq!(lines[1], "l-/-O,-10,-2,-2,-6");
    }

    #[test]
    fn test_csv_sink_overwrites_between_generations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness_scores.csv");
        let mut sink = CsvSink::new(&path);
        let (population, reports) = sample_population();

        sink.record(0, &population, &reports).unwrap();
        sink.record(1, &population[..1], &reports[..1]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        // One header and one candidate: the earlier snapshot is gone.
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_render_summary() {
        let mut best = Grid::empty(2);
        best.set(0, 0, Cell::Fixed('l'));
        best.set(0, 1, Cell::Generated('o'));
        let result = EvolveResult {
            best,
            fitness: FitnessReport {
                total: 3,
                rows: 1,
                columns: 1,
                subgrids: 1,
            },
            generations: 12,
            termination: Termination::FitnessReached,
        };

        let summary = render_summary(&result);
        assert!(summary.contains("target fitness reached"));
        assert!(summary.contains("12 generation(s)"));
        assert!(summary.contains("Best Fitness Score: 3"));
        assert!(summary.contains("| l O |"));
    }
}
