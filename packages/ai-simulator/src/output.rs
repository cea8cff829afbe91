//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

/// JSONL sink; the gzip variant needs `finish` to write its trailer.
enum JsonlSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl JsonlSink {
    fn finish(self) -> std::io::Result<()> {
        match self {
            JsonlSink::Plain(mut w) => w.flush(),
            JsonlSink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for JsonlSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            JsonlSink::Plain(w) => w.write(buf),
            JsonlSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            JsonlSink::Plain(w) => w.flush(),
            JsonlSink::Gzip(w) => w.flush(),
        }
    }
}

pub struct OutputWriter {
    jsonl_writer: Option<JsonlSink>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (jsonl_writer, jsonl_path) = match format {
            OutputFormat::Jsonl => {
                let filename = format!("simulation_{timestamp}.jsonl");
                if compress {
                    let path = dir.join(format!("{filename}.gz"));
                    let writer = JsonlSink::Gzip(GzEncoder::new(
                        BufWriter::new(create_truncated(&path)?),
                        Compression::default(),
                    ));
                    (Some(writer), Some(path))
                } else {
                    let path = dir.join(filename);
                    let writer = JsonlSink::Plain(BufWriter::new(create_truncated(&path)?));
                    (Some(writer), Some(path))
                }
            }
            OutputFormat::None => (None, None),
        };

        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{json}")?;
        }
        self.csv_writer.serialize(CsvSummaryRow::from(metrics))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(writer) = self.jsonl_writer.take() {
            writer.finish()?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl_path.as_ref(), &self.csv_path)
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
