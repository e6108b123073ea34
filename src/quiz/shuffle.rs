// src/quiz/shuffle.rs

use rand::{Rng, seq::SliceRandom};

use crate::models::question::Question;

/// Shuffles question order, then each question's options independently.
///
/// `SliceRandom::shuffle` is an unbiased Fisher-Yates. The correct answer is kept
/// by value, so moving options around never changes which one is right.
pub fn shuffle_session<R: Rng + ?Sized>(questions: &mut [Question], rng: &mut R) {
    questions.shuffle(&mut *rng);
    for question in questions.iter_mut() {
        question.options.shuffle(&mut *rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::defaults::default_questions;
    use rand::{SeedableRng, rngs::StdRng};

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut v = items.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let baseline = default_questions();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let mut shuffled = baseline.clone();
            shuffle_session(&mut shuffled, &mut rng);

            let before: Vec<i64> = baseline.iter().map(|q| q.id).collect();
            let after: Vec<i64> = shuffled.iter().map(|q| q.id).collect();
            assert_eq!(sorted(&before), sorted(&after));

            for q in &shuffled {
                let source = baseline.iter().find(|o| o.id == q.id).unwrap();
                assert_eq!(sorted(&q.options), sorted(&source.options));
                assert_eq!(q.correct_answer, source.correct_answer);
                assert_eq!(q.prompt, source.prompt);
            }
        }
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        let baseline = default_questions();
        let mut rng = StdRng::seed_from_u64(42);
        let reordered = (0..50).any(|_| {
            let mut shuffled = baseline.clone();
            shuffle_session(&mut shuffled, &mut rng);
            shuffled.iter().map(|q| q.id).collect::<Vec<_>>() != vec![1, 2, 3, 4]
        });
        assert!(reordered);
    }

    #[test]
    fn test_every_position_is_reachable() {
        // Over many runs, question 1 should land in every slot.
        let baseline = default_questions();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let mut shuffled = baseline.clone();
            shuffle_session(&mut shuffled, &mut rng);
            let pos = shuffled.iter().position(|q| q.id == 1).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
