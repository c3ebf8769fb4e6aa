use super::genome::Genome;
use crate::engines::evaluation::Niche;
use rand::Rng;

/// Generate a random genome with weights in [0, 1)
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen::<f64>()).collect()
}

/// Uniform crossover: each weight taken independently from either parent
/// with 50% probability (no single cut point).
pub fn uniform_crossover<R: Rng>(a: &Genome, b: &Genome, rng: &mut R) -> Genome {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| if rng.gen::<bool>() { x } else { y })
        .collect()
}

/// Mutation rate for crossover offspring; grows with lineage depth.
pub fn crossover_mutation_rate(base_rate: f64, generation: u32) -> f64 {
    base_rate * (1.0 + generation as f64 / 100.0)
}

/// Mutation rate for mutated clones. Older parents mutate faster, pressuring
/// stagnant lineages.
pub fn clone_mutation_rate(base_rate: f64, generation: u32, age: u32) -> f64 {
    crossover_mutation_rate(base_rate, generation) * (1.0 + age as f64 / 20.0)
}

/// Additive perturbation used after crossover.
pub fn mutate_additive<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    for weight in genome.iter_mut() {
        if rng.gen::<f64>() < rate {
            *weight += (rng.gen::<f64>() - 0.5) * 0.1;
        }
    }
}

/// Multiplicative perturbation used for mutated clones.
pub fn mutate_multiplicative<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    for weight in genome.iter_mut() {
        if rng.gen::<f64>() < rate {
            *weight *= 1.0 + (rng.gen::<f64>() - 0.5) * 0.2;
        }
    }
}

/// Offspring niche: inherited from the fitter parent with `inherit_bias`
/// probability, otherwise rerolled uniformly. Biases specialization toward
/// successful lineages while keeping exploration open.
pub fn inherit_niche<R: Rng>(fitter: Niche, inherit_bias: f64, rng: &mut R) -> Niche {
    if rng.gen::<f64>() < inherit_bias {
        fitter
    } else {
        Niche::random(rng)
    }
}

/// Sticky niche reroll applied as part of mutation.
pub fn maybe_switch_niche<R: Rng>(niche: Niche, switch_rate: f64, rng: &mut R) -> Niche {
    if rng.gen::<f64>() < switch_rate {
        Niche::random(rng)
    } else {
        niche
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_crossover_mixes_parents() {
        let mut rng = StdRng::seed_from_u64(3);
        let a: Genome = vec![0.0; 64];
        let b: Genome = vec![1.0; 64];
        let child = uniform_crossover(&a, &b, &mut rng);
        assert_eq!(child.len(), 64);
        // With 64 coin flips both parents contribute almost surely.
        assert!(child.iter().any(|&w| w == 0.0));
        assert!(child.iter().any(|&w| w == 1.0));
        assert!(child.iter().all(|&w| w == 0.0 || w == 1.0));
    }

    #[test]
    fn test_mutation_rates_scale() {
        assert!((crossover_mutation_rate(0.1, 100) - 0.2).abs() < 1e-12);
        assert!((clone_mutation_rate(0.1, 0, 20) - 0.2).abs() < 1e-12);
        assert!(clone_mutation_rate(0.1, 50, 40) > crossover_mutation_rate(0.1, 50));
    }

    #[test]
    fn test_zero_rate_leaves_genome_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut genome: Genome = vec![0.25, 0.5, 0.75];
        mutate_additive(&mut genome, 0.0, &mut rng);
        mutate_multiplicative(&mut genome, 0.0, &mut rng);
        assert_eq!(genome, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_full_rate_perturbs_every_weight() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut genome: Genome = vec![1.0; 32];
        mutate_additive(&mut genome, 1.0, &mut rng);
        // Additive noise is within +/- 0.05 per weight.
        assert!(genome.iter().all(|&w| (w - 1.0).abs() <= 0.05));
        assert!(genome.iter().any(|&w| w != 1.0));
    }

    #[test]
    fn test_niche_inheritance_bias() {
        let mut rng = StdRng::seed_from_u64(11);
        let inherited = (0..1000)
            .filter(|_| inherit_niche(Niche::Sequential, 0.8, &mut rng) == Niche::Sequential)
            .count();
        // 80% direct inheritance plus a 1-in-4 chance on rerolls.
        assert!(inherited > 750 && inherited < 950);
    }
}
