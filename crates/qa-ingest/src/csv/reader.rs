//! CSV text decoding and row-to-pair extraction.

use std::path::Path;

use encoding_rs::Encoding;
use qa_model::QaPair;

use crate::error::{IngestError, Result};
use crate::options::LoaderOptions;

use super::columns::ColumnSelection;

/// Pairs extracted from one file, plus the number of malformed rows dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    pub pairs: Vec<QaPair>,
    pub skipped: usize,
}

/// Decodes raw file bytes with `encoding`, dropping a leading BOM.
///
/// Malformed byte sequences are an error rather than being replaced.
pub fn decode_text(bytes: &[u8], encoding: &'static Encoding, origin: &Path) -> Result<String> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: origin.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

/// Splits CSV text into Q/A pairs according to loader options.
#[derive(Debug, Clone)]
pub struct RowParser {
    delimiter: u8,
    has_header: bool,
    trim: bool,
    columns: ColumnSelection,
}

impl RowParser {
    pub fn from_options(options: &LoaderOptions) -> Result<Self> {
        Ok(Self {
            delimiter: options.delimiter_byte()?,
            has_header: options.has_header,
            trim: options.trim,
            columns: ColumnSelection::new(options.question_column, options.answer_column),
        })
    }

    /// Parses `text`, returning pairs in row order.
    ///
    /// - Rows made only of blank fields are ignored and do not count as the header.
    /// - With `has_header`, the first remaining row is discarded.
    /// - Rows the column selection rejects are skipped and counted.
    /// - Rows whose question and answer are both empty are dropped silently.
    ///
    /// `origin` is used for error and log context only.
    pub fn parse(&self, text: &str, origin: &Path) -> Result<ParsedRows> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut parsed = ParsedRows::default();
        let mut record = csv::StringRecord::new();
        let mut header_pending = self.has_header;

        while reader
            .read_record(&mut record)
            .map_err(|e| IngestError::CsvParse {
                path: origin.to_path_buf(),
                source: e,
            })?
        {
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            let Some((question_idx, answer_idx)) = self.columns.select(record.len()) else {
                parsed.skipped += 1;
                tracing::debug!(
                    path = %origin.display(),
                    line = record.position().map(csv::Position::line),
                    fields = record.len(),
                    "Skipping malformed row"
                );
                continue;
            };

            let question = self.field(&record, question_idx);
            let answer = self.field(&record, answer_idx);
            if question.is_empty() && answer.is_empty() {
                continue;
            }
            parsed.pairs.push(QaPair::new(question, answer));
        }

        Ok(parsed)
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, index: usize) -> &'r str {
        let value = record.get(index).unwrap_or_default();
        if self.trim { value.trim() } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_model::ColumnRole;

    fn parse_with(options: LoaderOptions, text: &str) -> ParsedRows {
        RowParser::from_options(&options)
            .unwrap()
            .parse(text, Path::new("test.csv"))
            .unwrap()
    }

    #[test]
    fn test_parse_left() {
        let parsed = parse_with(LoaderOptions::default(), "red,rouge\nblue,bleu\n");
        assert_eq!(parsed.pairs, vec![
            QaPair::new("red", "rouge"),
            QaPair::new("blue", "bleu"),
        ]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_header_only_file() {
        let options = LoaderOptions::new().with_header(true);
        let parsed = parse_with(options, "question,answer\n");
        assert!(parsed.pairs.is_empty());
    }

    #[test]
    fn test_blank_rows_do_not_consume_header() {
        let options = LoaderOptions::new().with_header(true);
        let parsed = parse_with(options, "\n , \nq,a\none,two\n");
        assert_eq!(parsed.pairs, vec![QaPair::new("one", "two")]);
    }

    #[test]
    fn test_single_field_rows_skipped() {
        let parsed = parse_with(LoaderOptions::default(), "lonely\nq1,a1\nalone\n");
        assert_eq!(parsed.pairs, vec![QaPair::new("q1", "a1")]);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_quoted_fields() {
        let text = "\"a, b\",\"line one\nline two\"\n\"say \"\"hi\"\"\",greeting\n";
        let parsed = parse_with(LoaderOptions::default(), text);
        assert_eq!(parsed.pairs, vec![
            QaPair::new("a, b", "line one\nline two"),
            QaPair::new("say \"hi\"", "greeting"),
        ]);
    }

    #[test]
    fn test_custom_delimiter_and_right() {
        let options = LoaderOptions::new()
            .with_delimiter(";")
            .with_question_column(ColumnRole::Right);
        let parsed = parse_with(options, "one;two\nthree;four\n");
        assert_eq!(parsed.pairs, vec![
            QaPair::new("two", "one"),
            QaPair::new("four", "three"),
        ]);
    }

    #[test]
    fn test_explicit_index_out_of_bounds_skipped() {
        let options = LoaderOptions::new().with_question_column(ColumnRole::Index(2));
        let parsed = parse_with(options, "a,b,c\nd,e\n");
        assert_eq!(parsed.pairs, vec![QaPair::new("c", "a")]);
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn test_trim_toggle() {
        let trimmed = parse_with(LoaderOptions::default(), " q , a \n");
        assert_eq!(trimmed.pairs, vec![QaPair::new("q", "a")]);

        let raw = parse_with(LoaderOptions::new().with_trim(false), " q , a \n");
        assert_eq!(raw.pairs, vec![QaPair::new(" q ", " a ")]);
    }

    #[test]
    fn test_empty_question_and_answer_dropped() {
        let parsed = parse_with(LoaderOptions::default(), ",x,\nq,a\n");
        assert_eq!(parsed.pairs, vec![QaPair::new("q", "a")]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xEF\xBB\xBFq,a\n";
        let text = decode_text(bytes, encoding_rs::UTF_8, Path::new("bom.csv")).unwrap();
        assert_eq!(text, "q,a\n");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let result = decode_text(b"q,\xFF\n", encoding_rs::UTF_8, Path::new("bad.csv"));
        assert!(matches!(result, Err(IngestError::Decode { .. })));
    }

    #[test]
    fn test_decode_latin1() {
        let text = decode_text(b"caf\xE9,coffee\n", encoding_rs::WINDOWS_1252, Path::new("x.csv"))
            .unwrap();
        assert_eq!(text, "café,coffee\n");
    }
}
