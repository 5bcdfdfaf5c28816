use crate::processors::WaypointCollection;
use crate::readers::{RecordTokenizer, SkipReason};
use crate::utils::progress::ProgressReporter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub pages: usize,
    pub empty_pages: usize,
    pub lines_seen: usize,
    pub records: usize,
    pub blank_lines: usize,
    pub banner_lines: usize,
    pub unmatched_lines: Vec<String>,
}

impl ExtractionReport {
    fn record_skip(&mut self, line: &str, reason: SkipReason) {
        match reason {
            SkipReason::Blank => self.blank_lines += 1,
            SkipReason::Banner(_) => self.banner_lines += 1,
            SkipReason::TooFewFields(_) => self.unmatched_lines.push(line.trim().to_string()),
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Extraction Report ===\n");
        summary.push_str(&format!(
            "Pages: {} ({} without text)\n",
            self.pages, self.empty_pages
        ));
        summary.push_str(&format!("Lines Scanned: {}\n", self.lines_seen));
        summary.push_str(&format!("Waypoints Extracted: {}\n", self.records));
        summary.push_str(&format!("Blank Lines: {}\n", self.blank_lines));
        summary.push_str(&format!("Header/Banner Lines: {}\n", self.banner_lines));
        summary.push_str(&format!("Unmatched Lines: {}\n", self.unmatched_lines.len()));

        if !self.unmatched_lines.is_empty() {
            summary.push_str("\nFirst 10 Unmatched Lines:\n");
            for (i, line) in self.unmatched_lines.iter().take(10).enumerate() {
                summary.push_str(&format!("  {}. {}\n", i + 1, line));
            }
        }

        summary
    }
}

/// Runs page text through the tokenizer and collects the surviving records
pub struct WaypointExtractor {
    tokenizer: RecordTokenizer,
}

impl WaypointExtractor {
    pub fn new() -> Self {
        Self {
            tokenizer: RecordTokenizer::new(),
        }
    }

    pub fn with_tokenizer(tokenizer: RecordTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Extract waypoints from page texts, in page then line order
    pub fn extract_pages<I, S>(
        &self,
        pages: I,
        progress: Option<&ProgressReporter>,
    ) -> (WaypointCollection, ExtractionReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collection = WaypointCollection::new();
        let mut report = ExtractionReport::default();

        for page in pages {
            report.pages += 1;
            let text = page.as_ref();

            if text.is_empty() {
                report.empty_pages += 1;
            } else {
                self.extract_into(text.lines(), &mut collection, &mut report);
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        (collection, report)
    }

    /// Extract waypoints from a flat sequence of lines
    pub fn extract_lines<I, S>(&self, lines: I) -> (WaypointCollection, ExtractionReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collection = WaypointCollection::new();
        let mut report = ExtractionReport::default();
        self.extract_into(lines, &mut collection, &mut report);
        (collection, report)
    }

    fn extract_into<I, S>(
        &self,
        lines: I,
        collection: &mut WaypointCollection,
        report: &mut ExtractionReport,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            report.lines_seen += 1;

            match self.tokenizer.tokenize(line) {
                Ok(record) => {
                    report.records += 1;
                    collection.push(record);
                }
                Err(reason) => report.record_skip(line, reason),
            }
        }
    }
}

impl Default for WaypointExtractor {
    fn default() -> Self {
        Self::new()
    }
}
