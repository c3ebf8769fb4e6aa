/// Genome representation for the evolutionary search
///
/// A genome is a fixed-length sequence of floating-point weights that
/// reinterprets a model's per-number output into a concrete selection:
/// candidate `n` is scored as `model_output[n-1] * genome[(n-1) % W]`.
/// The modulo wrap means the genome length is independent of the number
/// range; a short genome simply repeats its influence across candidates.
///
/// # Why a flat weight vector?
///
/// Genetic operators stay trivial on a linear structure:
/// - **Crossover**: per-index choice between two parents (uniform crossover)
/// - **Mutation**: per-index additive or multiplicative perturbation
/// - **No invalid states**: any weight vector yields a valid selection
///
/// Every player in a population shares the same length `W`; divergence is a
/// caller bug and is surfaced as `GenomeLengthMismatch` rather than allowed
/// to silently produce wrong-length predictions later.
pub type Genome = Vec<f64>;
