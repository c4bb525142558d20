//! Sequential batch compression with progress reporting.
//!
//! Items are compressed one at a time, in input order, so at most one
//! decoded raster is alive at once and progress events are strictly
//! increasing. A failure on one item never aborts the batch: the original
//! file is substituted and the batch continues, so the output always has
//! one result per input at the same index.

use log::{info, warn};
use serde::Serialize;

use crate::codec::{Codec, ImageCodec};
use crate::compress::{compress_with, compression_ratio, CompressionResult};
use crate::options::CompressionOptions;
use crate::source::SourceImage;

/// Progress notification for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgress {
    /// 1-based index of the item about to be processed, or `total` on completion.
    pub current_index: usize,
    pub total: usize,
    /// Name of the item about to be processed; empty on completion.
    pub current_item_name: String,
    pub is_complete: bool,
}

impl BatchProgress {
    fn item(index: usize, total: usize, name: &str) -> Self {
        Self {
            current_index: index + 1,
            total,
            current_item_name: name.to_string(),
            is_complete: false,
        }
    }

    fn complete(total: usize) -> Self {
        Self {
            current_index: total,
            total,
            current_item_name: String::new(),
            is_complete: true,
        }
    }
}

/// Compress every source with the default codec.
pub fn compress_images(
    sources: &[SourceImage],
    options: &CompressionOptions,
    on_progress: impl FnMut(&BatchProgress),
) -> Vec<CompressionResult> {
    compress_images_with(&ImageCodec, sources, options, on_progress)
}

/// Compress every source with `codec`, strictly sequentially.
///
/// `on_progress` is called once before each item and once more, with
/// `is_complete = true`, after the last one (also for an empty batch).
pub fn compress_images_with(
    codec: &impl Codec,
    sources: &[SourceImage],
    options: &CompressionOptions,
    mut on_progress: impl FnMut(&BatchProgress),
) -> Vec<CompressionResult> {
    let total = sources.len();
    let mut results = Vec::with_capacity(total);

    for (index, source) in sources.iter().enumerate() {
        on_progress(&BatchProgress::item(index, total, &source.name));

        let result = compress_with(codec, source, options).unwrap_or_else(|e| {
            warn!("{}: compression failed, using original: {}", source.name, e);
            CompressionResult::fallback(source, e.to_string())
        });
        results.push(result);
    }

    on_progress(&BatchProgress::complete(total));

    let summary = BatchSummary::from_results(&results);
    info!(
        "Compressed {} images ({} kept original), {} -> {} bytes",
        summary.count, summary.fallbacks, summary.original_size, summary.compressed_size
    );
    results
}

/// Totals over a finished batch, for the UI's summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub count: usize,
    /// Items where the original file was kept.
    pub fallbacks: usize,
    pub original_size: u64,
    pub compressed_size: u64,
    /// Overall saving across the batch, same formula as a single result.
    pub compression_ratio: i32,
}

impl BatchSummary {
    pub fn from_results(results: &[CompressionResult]) -> Self {
        results.iter().fold(Self::default(), |summary, r| {
            summary.with_item(r.original_size, r.compressed_size, r.used_original())
        })
    }

    /// Add one item to the totals.
    pub fn with_item(
        mut self,
        original_size: u64,
        compressed_size: u64,
        used_original: bool,
    ) -> Self {
        self.count += 1;
        if used_original {
            self.fallbacks += 1;
        }
        self.original_size += original_size;
        self.compressed_size += compressed_size;
        self.compression_ratio = compression_ratio(self.original_size, self.compressed_size);
        self
    }
}
