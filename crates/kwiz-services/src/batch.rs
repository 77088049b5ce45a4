//! Batch question-bank generation
//!
//! Fills the [`QuestionBank`] ahead of time: one task per category,
//! difficulty and age range. A task whose slot already holds enough
//! questions is skipped; a task whose generator fails is filled with
//! variations of the fallback set. Progress is reported as each task starts.

use crate::catalog::default_categories;
use crate::generator::{fallback_questions, QuestionGenerator};
use crate::question_bank::{QuestionBank, QuestionQuery, StoredQuestion};
use crate::safety;
use chrono::Utc;
use kwiz_domain::{AgeRange, Difficulty, Question, QuizCategory};
use strum::IntoEnumIterator;

/// Which slots to fill and how many questions each should hold
#[derive(Debug, Clone, PartialEq)]
pub struct BatchGenerationConfig {
    /// Questions requested for every difficulty and age range of a category
    pub questions_per_category: usize,
    pub categories: Vec<QuizCategory>,
    /// Empty means each category's own difficulty
    pub difficulties: Vec<Difficulty>,
    /// Empty means each category's own age range
    pub age_ranges: Vec<AgeRange>,
}

impl Default for BatchGenerationConfig {
    fn default() -> Self {
        Self {
            questions_per_category: 50,
            categories: default_categories(),
            difficulties: Difficulty::iter().collect(),
            age_ranges: vec![
                AgeRange::new(5, 8),
                AgeRange::new(9, 12),
                AgeRange::new(13, 16),
            ],
        }
    }
}

impl BatchGenerationConfig {
    /// One slot per catalog category, keyed exactly as quizzes look them up
    pub fn matching_catalog(categories: Vec<QuizCategory>, questions_per_category: usize) -> Self {
        Self {
            questions_per_category,
            categories,
            difficulties: Vec::new(),
            age_ranges: Vec::new(),
        }
    }

    /// Every category, difficulty and age range combination, in generation order
    pub fn slots(&self) -> Vec<QuizCategory> {
        let mut slots = Vec::new();
        for category in &self.categories {
            let difficulties = if self.difficulties.is_empty() {
                vec![category.difficulty]
            } else {
                self.difficulties.clone()
            };
            let age_ranges = if self.age_ranges.is_empty() {
                vec![category.age_range]
            } else {
                self.age_ranges.clone()
            };
            for difficulty in &difficulties {
                for age_range in &age_ranges {
                    slots.push(QuizCategory {
                        difficulty: *difficulty,
                        age_range: *age_range,
                        ..category.clone()
                    });
                }
            }
        }
        slots
    }
}

/// Snapshot of a running batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationProgress {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub current_task: String,
    pub is_complete: bool,
}

impl GenerationProgress {
    /// Completed share of the batch, 0.0 to 1.0
    pub fn percentage(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 / self.total_tasks as f64
    }
}

fn task_name(slot: &QuizCategory) -> String {
    format!(
        "{} - {} - Ages {}-{}",
        slot.name, slot.difficulty, slot.age_range.min, slot.age_range.max
    )
}

/// Generation topic with its subtopics, so one request covers the whole subject
fn slot_topic(slot: &QuizCategory) -> String {
    let topic = safety::topic_for_category(slot);
    let subtopics = safety::expand_topic(&slot.id);
    if subtopics == [slot.id.clone()] {
        topic
    } else {
        format!("{} ({})", topic, subtopics.join(", "))
    }
}

/// `count` questions cycling through the fallback set, each with its own id
fn fallback_variations(difficulty: Difficulty, count: usize) -> Vec<Question> {
    let base = fallback_questions(difficulty, usize::MAX);
    base.iter()
        .cycle()
        .take(if base.is_empty() { 0 } else { count })
        .enumerate()
        .map(|(i, question)| Question {
            id: format!("{}_var_{}", question.id, i),
            ..question.clone()
        })
        .collect()
}

async fn questions_for_slot<G: QuestionGenerator>(
    generator: &G,
    slot: &QuizCategory,
    count: usize,
) -> Vec<Question> {
    match generator
        .generate(&slot_topic(slot), slot.difficulty, slot.age_range, count)
        .await
    {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!(
                "Batch: generation failed for {}, using fallback: {}",
                task_name(slot),
                e
            );
            fallback_variations(slot.difficulty, count)
        }
    }
}

/// Fill the bank for every slot in `config`
///
/// `on_progress` sees the batch before each task and once more when it is
/// complete. Returns the final progress.
pub async fn generate_bank<G, F>(
    config: &BatchGenerationConfig,
    generator: &G,
    bank: &QuestionBank,
    mut on_progress: F,
) -> GenerationProgress
where
    G: QuestionGenerator,
    F: FnMut(&GenerationProgress),
{
    let slots = config.slots();
    let mut progress = GenerationProgress {
        total_tasks: slots.len(),
        completed_tasks: 0,
        current_task: "Starting generation...".to_string(),
        is_complete: false,
    };
    on_progress(&progress);

    let mut generated = 0;
    for slot in &slots {
        progress.current_task = task_name(slot);
        on_progress(&progress);

        let query = QuestionQuery::for_category(slot, config.questions_per_category);
        let missing = config
            .questions_per_category
            .saturating_sub(bank.count(&query));
        if missing == 0 {
            log::debug!("Batch: {} already filled", progress.current_task);
            progress.completed_tasks += 1;
            continue;
        }

        let now = Utc::now();
        let stored: Vec<StoredQuestion> = questions_for_slot(generator, slot, missing)
            .await
            .into_iter()
            .filter(|q| {
                q.is_well_formed()
                    && safety::moderate_content(&q.text, slot.age_range.min).is_approved
            })
            .map(|q| StoredQuestion::new(safety::prepare_question(q, slot), slot, now))
            .collect();

        log::info!(
            "Batch: stored {} questions for {}",
            stored.len(),
            progress.current_task
        );
        generated += stored.len();
        bank.store(stored);
        progress.completed_tasks += 1;
    }

    progress.current_task = "Generation complete!".to_string();
    progress.is_complete = true;
    on_progress(&progress);
    log::info!(
        "Batch: {} questions generated across {} tasks",
        generated,
        progress.total_tasks
    );
    progress
}
