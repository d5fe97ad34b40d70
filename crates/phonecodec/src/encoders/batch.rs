//! # Batch Column Mapping

use crate::errors::CodecResult;

/// Map each string of a batch to a column.
///
/// With the ``rayon`` feature and `parallel` set, columns are computed in
/// parallel; the error reported is always the first one in batch order.
#[cfg_attr(not(feature = "rayon"), allow(unused_variables))]
pub(crate) fn map_batch<S, C, F>(
    strings: &[S],
    parallel: bool,
    f: F,
) -> CodecResult<Vec<C>>
where
    S: AsRef<str> + Sync,
    C: Send,
    F: Fn(&str) -> CodecResult<C> + Sync + Send,
{
    #[cfg(feature = "rayon")]
    if parallel {
        use rayon::prelude::*;

        let results: Vec<CodecResult<C>> = strings.par_iter().map(|s| f(s.as_ref())).collect();
        return results.into_iter().collect();
    }

    strings.iter().map(|s| f(s.as_ref())).collect()
}
