//! Human-readable console output for each stage of a run.

use std::io::{self, Write};
use std::path::Path;

use colored::*;

use product_search_repository::DeleteIndexOutcome;
use product_search_shared::SearchResponse;

/// Writes stage status lines and search results.
pub struct Reporter {
    out: Box<dyn Write + Send>,
}

impl Reporter {
    /// Create a reporter writing to the given sink.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Create a reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn index_deleted(&mut self, index: &str, outcome: DeleteIndexOutcome) -> io::Result<()> {
        match outcome {
            DeleteIndexOutcome::Deleted => {
                writeln!(self.out, "{} {}", "✓ Deleted index:".green(), index)
            }
            DeleteIndexOutcome::NotFound => writeln!(
                self.out,
                "{}",
                "! Index does not exist. Proceeding to create a new one.".yellow()
            ),
        }
    }

    pub fn index_created(&mut self, index: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "✓ Created index:".green(), index)
    }

    pub fn file_not_found(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "✗ JSON file not found:".red(),
            path.display()
        )
    }

    pub fn no_products(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "! No products found in JSON:".yellow(),
            path.display()
        )
    }

    pub fn uploaded(&mut self, count: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} products uploaded successfully.",
            "✓".green(),
            count
        )
    }

    /// Print the total match count followed by each hit.
    ///
    /// When the service did not report a total, the number of hits is shown.
    pub fn results(&mut self, response: &SearchResponse) -> io::Result<()> {
        let total = response.total_count.unwrap_or(response.len() as u64);

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!("Found {} matching products:", total).bold()
        )?;
        writeln!(self.out)?;

        for hit in &response.hits {
            writeln!(self.out, "{} {}", "->".cyan(), hit.product.name)?;
            writeln!(self.out, "   {}", hit.product.description)?;
            writeln!(self.out, "   Score: {}", hit.score)?;
            writeln!(self.out, "-----")?;
        }

        self.out.flush()
    }
}
