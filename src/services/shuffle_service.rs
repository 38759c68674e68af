use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{Question, QuestionSet};

/// Returns `question` with its options in a uniformly random order.
///
/// Only the order changes; the option strings and `answer` are untouched, so
/// the answer stays one of the options.
pub fn shuffle_options<R: Rng + ?Sized>(mut question: Question, rng: &mut R) -> Question {
    question.options.shuffle(rng);
    question
}

/// Shuffles the options of every question in place, once each.
pub fn shuffle_question_set<R: Rng + ?Sized>(question_set: &mut QuestionSet, rng: &mut R) {
    for question in question_set.questions.iter_mut() {
        question.options.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{history_question_set, question};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(options: &[String]) -> Vec<String> {
        let mut sorted = options.to_vec();
        sorted.sort();
        sorted
    }

    #[test]
    fn shuffle_preserves_option_multiset_and_answer() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = question(
            "Who was the first emperor of Rome?",
            &["Julius Caesar", "Nero", "Augustus", "Caligula"],
            "Augustus",
        );

        let shuffled = shuffle_options(original.clone(), &mut rng);

        assert_eq!(sorted(&shuffled.options), sorted(&original.options));
        assert_eq!(shuffled.answer, original.answer);
        assert!(shuffled.check_invariants().is_ok());
    }

    #[test]
    fn reshuffling_keeps_answer_membership() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut q = question("Pick B", &["A", "B", "C", "D", "E"], "B");

        for _ in 0..50 {
            q = shuffle_options(q, &mut rng);
            assert!(q.has_option(&q.answer));
            assert_eq!(q.options.len(), 5);
        }
    }

    #[test]
    fn seeded_rng_gives_reproducible_order() {
        let q = question("Pick B", &["A", "B", "C", "D", "E"], "B");

        let first = shuffle_options(q.clone(), &mut StdRng::seed_from_u64(1));
        let second = shuffle_options(q, &mut StdRng::seed_from_u64(1));

        assert_eq!(first.options, second.options);
    }

    #[test]
    fn shuffle_eventually_moves_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = question("Pick B", &["A", "B", "C", "D"], "B");

        let moved = (0..20)
            .map(|_| shuffle_options(original.clone(), &mut rng))
            .any(|q| q.options != original.options);

        assert!(moved);
    }

    #[test]
    fn shuffle_question_set_keeps_every_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = history_question_set();
        let mut shuffled = original.clone();

        shuffle_question_set(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        for (before, after) in original.iter().zip(shuffled.iter()) {
            assert_eq!(before.question, after.question);
            assert_eq!(before.answer, after.answer);
            assert_eq!(sorted(&before.options), sorted(&after.options));
            assert!(after.check_invariants().is_ok());
        }
    }
}
