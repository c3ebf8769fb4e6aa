use crate::error::{DrawbiasError, Result};

/// Combine a model's per-number output with a player's genome and pick the
/// `k` best candidate numbers.
///
/// Candidate `n` (1-based) is scored as `model_output[n-1] * genome[(n-1) % W]`;
/// the modulo wrap lets one genome of any length influence every candidate.
/// Model output entries past `number_range` are model metadata, not candidate
/// scores, and are ignored. Ties are broken by ascending candidate number and
/// the result is sorted ascending, so the selection is fully deterministic.
pub fn select(
    model_output: &[f64],
    genome: &[f64],
    k: usize,
    number_range: u32,
) -> Result<Vec<u32>> {
    if model_output.is_empty() {
        return Err(DrawbiasError::EmptyModelOutput);
    }

    let candidates = model_output.len().min(number_range as usize);
    if k > candidates {
        return Err(DrawbiasError::InvalidRange {
            requested: k,
            available: candidates,
        });
    }

    let mut scored: Vec<(u32, f64)> = model_output[..candidates]
        .iter()
        .enumerate()
        .map(|(i, &p)| (i as u32 + 1, p * genome[i % genome.len()]))
        .collect();

    // total_cmp keeps the comparator transitive even if the model emits a
    // NaN, so the sort cannot panic and stays deterministic.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut selected: Vec<u32> = scored.iter().take(k).map(|(n, _)| *n).collect();
    selected.sort_unstable();
    Ok(selected)
}
