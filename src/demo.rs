//! Demonstration report
//!
//! Exercises every module once and renders the results either as the fixed
//! human-readable text or as a JSON document. Neither is a stable contract.

use eyre::{Result, WrapErr};
use rand::Rng;
use serde::Serialize;
use std::io::Write;

use crate::calculator::{add, divide, multiply, subtract};
use crate::config::{DemoConfig, ReportFormat};
use crate::processing::{self, generate_random_numbers, seeded_rng, time_seeded_rng};
use crate::record::Record;
use crate::text::{count_words, find_string, process_strings, reverse_string};

/// Banner printed before the report.
pub const BANNER: &str = "✅ Rust test fixture built and ran.";
/// Sentence used for the string operations.
pub const SAMPLE_TEXT: &str = "Hello, World! This is a test.";

const RECORD_NAME: &str = "example";
const RECORD_VALUE: i64 = 42;
const RECORD_TAG: &str = "test";
const RAW_STRINGS: [&str; 3] = ["  hello  ", "", "  world  "];
const LOOKUP_NEEDLE: &str = "HELLO";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorSection {
    pub a: i64,
    pub b: i64,
    pub sum: i64,
    pub difference: i64,
    pub product: i64,
    pub quotient: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSection {
    pub numbers: Vec<i64>,
    pub sum: i64,
    pub average: f64,
    pub max: i64,
    pub min: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSection {
    pub original: String,
    pub reversed: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSection {
    pub record: Record,
    pub processed: Vec<String>,
    /// Index of the lookup needle in `processed`, or the lookup error
    pub lookup: std::result::Result<usize, String>,
}

/// Everything the demo computes, in print order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub calculator: CalculatorSection,
    pub processing: ProcessingSection,
    pub text: TextSection,
    pub record: RecordSection,
}

/// Compute the report using `rng` for the random numbers
pub fn build_report<R: Rng>(config: &DemoConfig, rng: &mut R) -> Result<DemoReport> {
    let (a, b) = (config.operand_a, config.operand_b);
    let calculator = CalculatorSection {
        a,
        b,
        sum: add(a, b),
        difference: subtract(a, b),
        product: multiply(a, b),
        quotient: divide(a, b),
    };

    let numbers = generate_random_numbers(rng, config.sample_size, config.sample_bound)
        .wrap_err("Failed to generate sample numbers")?;
    let processing = ProcessingSection {
        sum: processing::sum(&numbers),
        average: processing::average(&numbers),
        max: processing::max(&numbers),
        min: processing::min(&numbers),
        numbers,
    };

    let text = TextSection {
        original: SAMPLE_TEXT.to_string(),
        reversed: reverse_string(SAMPLE_TEXT),
        word_count: count_words(SAMPLE_TEXT),
    };

    let mut record = Record::new(RECORD_NAME, RECORD_VALUE);
    record.add_tag(RECORD_TAG).wrap_err("Failed to tag demo record")?;
    let processed = process_strings(&RAW_STRINGS, true);
    let lookup = find_string(&processed, LOOKUP_NEEDLE).map_err(|e| e.to_string());

    Ok(DemoReport {
        calculator,
        processing,
        text,
        record: RecordSection {
            record,
            processed,
            lookup,
        },
    })
}

/// Render `report` to `writer` in the requested format and flush it
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &DemoReport,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(writer, report).wrap_err("Failed to write report")?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)
                .wrap_err("Failed to serialize report to JSON")?;
            writeln!(writer).wrap_err("Failed to write report")?;
        }
    }

    writer.flush().wrap_err("Failed to flush report output")?;
    Ok(())
}

fn write_text<W: Write>(w: &mut W, report: &DemoReport) -> Result<()> {
    let c = &report.calculator;
    writeln!(w, "{}", BANNER)?;
    writeln!(w, "Calculator Demo:")?;
    writeln!(w, "  {} + {} = {}", c.a, c.b, c.sum)?;
    writeln!(w, "  {} - {} = {}", c.a, c.b, c.difference)?;
    writeln!(w, "  {} * {} = {}", c.a, c.b, c.product)?;
    writeln!(w, "  {} / {} = {}", c.a, c.b, c.quotient)?;

    let p = &report.processing;
    writeln!(w, "\nData Processing:")?;
    writeln!(w, "  Generated {} random numbers", p.numbers.len())?;
    writeln!(w, "  Sum: {}", p.sum)?;
    writeln!(w, "  Average: {:.2}", p.average)?;
    writeln!(w, "  Max: {}", p.max)?;
    writeln!(w, "  Min: {}", p.min)?;

    let t = &report.text;
    writeln!(w, "\nString Operations:")?;
    writeln!(w, "  Original: {}", t.original)?;
    writeln!(w, "  Reversed: {}", t.reversed)?;
    writeln!(w, "  Word count: {}", t.word_count)?;

    let r = &report.record;
    writeln!(w, "\nRecord Demo:")?;
    writeln!(w, "  Name: {}", r.record.name())?;
    writeln!(w, "  Value: {}", r.record.value())?;
    writeln!(w, "  Tags: {:?}", r.record.tags())?;
    writeln!(w, "  Processed: {:?}", r.processed)?;
    match &r.lookup {
        Ok(index) => writeln!(w, "  Found at index: {}", index)?,
        Err(message) => writeln!(w, "  Not found: {}", message)?,
    }

    Ok(())
}

/// Build and print the report described by `config`
pub fn run<W: Write>(config: &DemoConfig, writer: &mut W) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => seeded_rng(seed),
        None => time_seeded_rng(),
    };
    let report = build_report(config, &mut rng)?;
    write_report(writer, &report, config.format)
}
