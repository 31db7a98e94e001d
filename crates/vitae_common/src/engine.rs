//! Response selection.
//!
//! The engine owns the only RNG in the crate so tests can pin every draw
//! by seeding it. One call to [`ResponseEngine::respond`] is one turn:
//! classify, pick a body, tag it, update the context.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::classifier::{self, Classification};
use crate::context::ChatContext;
use crate::intent::Intent;
use crate::pools;

/// Default probability of steering a fallback turn back to the last topic
pub const DEFAULT_CONTINUATION_CHANCE: f64 = 0.35;

/// Rule-based conversational responder
pub struct ResponseEngine {
    rng: StdRng,
    continuation_chance: f64,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEngine {
    /// Engine with an unseeded RNG (production)
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a pinned RNG (tests, reproduction)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self { rng, continuation_chance: DEFAULT_CONTINUATION_CHANCE }
    }

    /// Override the continuation probability (clamped to [0, 1])
    pub fn set_continuation_chance(&mut self, chance: f64) {
        self.continuation_chance = chance.clamp(0.0, 1.0);
    }

    /// Run one full turn: classify the utterance, then select
    pub fn respond(&mut self, utterance: &str, ctx: &mut ChatContext) -> String {
        let classification = classifier::classify(utterance);
        self.select(&classification, ctx)
    }

    /// Select a response for an already-classified utterance and update
    /// the context. Never returns an empty string.
    pub fn select(&mut self, c: &Classification, ctx: &mut ChatContext) -> String {
        let body = self.pick_body(c, ctx);
        let minor: u32 = self.rng.gen_range(10..=99);
        let text = format!("{} v1.{}", body, minor);

        self.update_context(c, ctx);

        debug!(
            intent = %c.intent,
            mood = %ctx.mood,
            turn = ctx.message_count,
            "turn resolved"
        );
        text
    }

    fn pick_body(&mut self, c: &Classification, ctx: &ChatContext) -> String {
        // Entity knowledge overrides the generic intent pool
        if let Some(name) = c.company {
            if let Some(text) = pools::company_knowledge(name) {
                return text.to_string();
            }
        }
        if let Some(name) = c.technology {
            if let Some(text) = pools::technology_knowledge(name) {
                return text.to_string();
            }
        }

        // Fallback turns may steer back to the last discussed topic:
        // a uniform draw against a fixed threshold.
        if c.intent == Intent::Fallback {
            if let Some(topic) = ctx.last_topic.as_deref() {
                if self.rng.gen::<f64>() < self.continuation_chance {
                    let tpl = pools::CONTINUATIONS
                        .choose(&mut self.rng)
                        .copied()
                        .unwrap_or(pools::CONTINUATIONS[0]);
                    return tpl.replace("{topic}", topic);
                }
            }
        }

        let pool = pools::pool_for(c.intent, ctx.mood);
        pool.choose(&mut self.rng)
            .copied()
            .unwrap_or(pool[0])
            .to_string()
    }

    fn update_context(&mut self, c: &Classification, ctx: &mut ChatContext) {
        if let Some(topic) = c.intent.topic() {
            ctx.note_topic(topic);
        }
        if let Some(name) = c.company {
            ctx.note_company(name);
        }
        if let Some(name) = c.technology {
            ctx.note_technology(name);
        }
        if let Some(mood) = c.mood {
            ctx.mood = mood;
        }
        ctx.message_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use regex::Regex;

    fn version_tag_re() -> Regex {
        Regex::new(r"v1\.(1[0-9]|[2-9][0-9])").unwrap()
    }

    #[test]
    fn response_is_never_empty_and_tagged_once() {
        let re = version_tag_re();
        let mut engine = ResponseEngine::with_seed(7);
        let mut ctx = ChatContext::new();
        for input in [
            "привет",
            "навыки",
            "что такое яндекс",
            "x",
            "совершенно посторонний вопрос про погоду",
            "спасибо",
        ] {
            let reply = engine.respond(input, &mut ctx);
            assert!(!reply.is_empty());
            assert_eq!(re.find_iter(&reply).count(), 1, "{}", reply);
            // The tag sits at the tail
            let m = re.find(&reply).unwrap();
            assert_eq!(m.end(), reply.len(), "{}", reply);
        }
    }

    #[test]
    fn greeting_draws_from_friendly_pool_by_default() {
        let mut engine = ResponseEngine::with_seed(1);
        let mut ctx = ChatContext::new();
        let reply = engine.respond("привет", &mut ctx);
        let pool = pools::greeting_pool(Mood::Friendly);
        assert!(pool.iter().any(|s| reply.starts_with(s)), "{}", reply);
    }

    #[test]
    fn skills_reply_names_the_section_regardless_of_mood() {
        for mood in Mood::all() {
            let mut engine = ResponseEngine::with_seed(3);
            let mut ctx = ChatContext { mood: *mood, ..ChatContext::new() };
            let reply = engine.respond("расскажи про навыки", &mut ctx);
            assert!(reply.contains("Навыки"), "{} ({})", reply, mood);
        }
    }

    #[test]
    fn company_knowledge_overrides_generic_pool() {
        let mut engine = ResponseEngine::with_seed(5);
        let mut ctx = ChatContext::new();
        let reply = engine.respond("что такое яндекс", &mut ctx);
        assert!(reply.contains("Яндекс"), "{}", reply);
        assert_eq!(ctx.companies, vec!["Яндекс"]);
    }

    #[test]
    fn context_accumulates_monotonically() {
        let mut engine = ResponseEngine::with_seed(11);
        let mut ctx = ChatContext::new();
        let inputs = ["привет", "навыки", "react", "образование", "навыки", "спасибо"];
        let mut prev_topics = 0;
        for (i, input) in inputs.iter().enumerate() {
            engine.respond(input, &mut ctx);
            assert_eq!(ctx.message_count, (i + 1) as u64);
            assert!(ctx.topics.len() >= prev_topics);
            prev_topics = ctx.topics.len();
        }
        assert_eq!(ctx.topics, vec!["навыки", "технологии", "образование"]);
        assert_eq!(ctx.technologies, vec!["React"]);
    }

    #[test]
    fn mood_updates_only_on_trigger() {
        let mut engine = ResponseEngine::with_seed(13);
        let mut ctx = ChatContext::new();
        engine.respond("расскажи про опыт", &mut ctx);
        assert_eq!(ctx.mood, Mood::Friendly);
        engine.respond("круто, а что с проектами?", &mut ctx);
        assert_eq!(ctx.mood, Mood::Enthusiastic);
        engine.respond("и про образование", &mut ctx);
        assert_eq!(ctx.mood, Mood::Enthusiastic);
        engine.respond("давай по делу", &mut ctx);
        assert_eq!(ctx.mood, Mood::Professional);
    }

    #[test]
    fn continuation_references_last_topic_when_forced() {
        let mut engine = ResponseEngine::with_seed(17);
        engine.set_continuation_chance(1.0);
        let mut ctx = ChatContext::new();
        engine.respond("расскажи про навыки", &mut ctx);
        let reply = engine.respond("жзщшэюч длинная бессмыслица здесь", &mut ctx);
        assert!(reply.contains("навыки"), "{}", reply);
    }

    #[test]
    fn continuation_never_fires_when_disabled() {
        let mut engine = ResponseEngine::with_seed(17);
        engine.set_continuation_chance(0.0);
        let mut ctx = ChatContext::new();
        engine.respond("расскажи про навыки", &mut ctx);
        let reply = engine.respond("жзщшэюч длинная бессмыслица здесь", &mut ctx);
        let pool = pools::pool_for(Intent::Fallback, ctx.mood);
        assert!(pool.iter().any(|s| reply.starts_with(s)), "{}", reply);
    }

    #[test]
    fn seeded_engines_are_deterministic() {
        let inputs = ["привет", "навыки", "странный вопрос ни о чем", "спасибо"];
        let run = |seed| {
            let mut engine = ResponseEngine::with_seed(seed);
            let mut ctx = ChatContext::new();
            inputs.iter().map(|i| engine.respond(i, &mut ctx)).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }
}
