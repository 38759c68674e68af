use crate::constants::prompts::{difficulty_guidelines, QUESTIONS_FIELD};
use crate::models::domain::Difficulty;

/// Builds the user prompt for one quiz request.
pub fn build_prompt(topic: &str, difficulty: Difficulty, num_questions: usize) -> String {
    format!(
        "Topic: {topic},\n\
         Number of questions: {num_questions},\n\
         Difficulty: {difficulty}.\n\n\
         Generate {num_questions} {tier} difficulty quiz questions on the topic \"{topic}\".\n\
         Guidelines: {guidelines}\n\
         Answer with a single valid JSON object whose \"{field}\" array contains exactly \
         {num_questions} question objects, each with the fields \
         topic, difficulty, question, options, answer and answer_explanation.",
        tier = difficulty.as_str().to_lowercase(),
        guidelines = difficulty_guidelines(difficulty),
        field = QUESTIONS_FIELD,
    )
}
