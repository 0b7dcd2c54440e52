//! Uniform down-sampling of idiom sets.

use log::info;
use rand::Rng;
use rand::seq::index;

use crate::idiom::Idiom;

/// Select `n` idioms uniformly at random without replacement.
///
/// Sampling only happens when `n > 0` and `n` is smaller than the set; in
/// every other case the input is returned unchanged. The chosen idioms keep
/// their relative order from the input.
pub fn sample_idioms<R: Rng + ?Sized>(idioms: Vec<Idiom>, n: i64, rng: &mut R) -> Vec<Idiom> {
    let amount = match usize::try_from(n) {
        Ok(amount) if amount > 0 && amount < idioms.len() => amount,
        _ => return idioms,
    };

    let mut picked = vec![false; idioms.len()];
    for i in index::sample(rng, idioms.len(), amount) {
        picked[i] = true;
    }

    let sampled: Vec<Idiom> = idioms
        .into_iter()
        .zip(picked)
        .filter_map(|(idiom, keep)| keep.then_some(idiom))
        .collect();
    info!("A total of {} idioms are sampled", sampled.len());
    sampled
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn corpus(count: usize) -> Vec<Idiom> {
        let chars: Vec<char> = "一二三四五六七八九十百千万亿甲乙丙丁戊己庚辛壬癸".chars().collect();
        (0..count)
            .map(|i| {
                let text: String = [
                    chars[i % chars.len()],
                    chars[(i / chars.len()) % chars.len()],
                    '之',
                    chars[(i * 7) % chars.len()],
                ]
                .iter()
                .collect();
                Idiom::parse(&text).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_sample_exact_size() {
        let idioms = corpus(100);
        let mut rng = StdRng::seed_from_u64(42);

        let sampled = sample_idioms(idioms.clone(), 30, &mut rng);
        assert_eq!(sampled.len(), 30);

        let all: HashSet<&Idiom> = idioms.iter().collect();
        let unique: HashSet<&Idiom> = sampled.iter().collect();
        assert_eq!(unique.len(), 30);
        assert!(unique.iter().all(|i| all.contains(i)));
    }

    #[test]
    fn test_sample_preserves_input_order() {
        let idioms = corpus(50);
        let mut rng = StdRng::seed_from_u64(1);

        let sampled = sample_idioms(idioms.clone(), 10, &mut rng);
        let positions: Vec<usize> = sampled
            .iter()
            .map(|s| idioms.iter().position(|i| i == s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_disabled_or_too_large() {
        let idioms = corpus(20);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(sample_idioms(idioms.clone(), 0, &mut rng), idioms);
        assert_eq!(sample_idioms(idioms.clone(), -5, &mut rng), idioms);
        assert_eq!(sample_idioms(idioms.clone(), 20, &mut rng), idioms);
        assert_eq!(sample_idioms(idioms.clone(), 2000, &mut rng), idioms);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let idioms = corpus(200);

        let first = sample_idioms(idioms.clone(), 25, &mut StdRng::seed_from_u64(99));
        let second = sample_idioms(idioms, 25, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
