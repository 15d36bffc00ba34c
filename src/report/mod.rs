//! Hand-off of finished chapters to whatever renders them.
//!
//! Formatting rows is left to the sink; the analysis only guarantees that chapters arrive
//! once each, in chapter order.

use crate::errors::ChapterRateResult;
use crate::stats::ChapterResult;

#[cfg_attr(test, mockall::automock)]
pub trait ChapterSink {
    fn emit(&mut self, result: &ChapterResult) -> ChapterRateResult<()>;
}

impl ChapterSink for Vec<ChapterResult> {
    fn emit(&mut self, result: &ChapterResult) -> ChapterRateResult<()> {
        self.push(result.clone());
        Ok(())
    }
}
