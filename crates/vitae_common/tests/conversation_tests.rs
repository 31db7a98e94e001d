//! End-to-end conversation flow over the public API: classify, respond,
//! accumulate context, append to the transcript.

use regex::Regex;
use vitae_common::{ChatContext, Mood, ResponseEngine, Transcript};

#[test]
fn scripted_session_accumulates_context() {
    let mut engine = ResponseEngine::with_seed(2024);
    let mut ctx = ChatContext::new();
    let mut transcript = Transcript::new();

    let inputs = [
        "привет",
        "расскажи про навыки",
        "ты работал в яндексе?",
        "знаешь react?",
        "круто! а образование?",
        "спасибо",
    ];

    for input in inputs {
        transcript.push_visitor(input);
        let reply = engine.respond(input, &mut ctx);
        transcript.push_assistant(reply);
    }

    // One visitor + one assistant message per turn, in order
    assert_eq!(transcript.len(), inputs.len() * 2);

    // Every assistant reply carries exactly one valid version tag
    let tag = Regex::new(r"v1\.(1[0-9]|[2-9][0-9])").unwrap();
    for msg in transcript.messages().iter().skip(1).step_by(2) {
        assert_eq!(tag.find_iter(&msg.text).count(), 1, "{}", msg.text);
    }

    // Message ids are unique across the session
    let mut ids: Vec<_> = transcript.messages().iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), transcript.len());

    // Context reflects the whole session
    assert_eq!(ctx.message_count, inputs.len() as u64);
    assert_eq!(ctx.topics, vec!["навыки", "компании", "технологии", "образование"]);
    assert_eq!(ctx.companies, vec!["Яндекс"]);
    assert_eq!(ctx.technologies, vec!["React"]);
    assert_eq!(ctx.last_topic.as_deref(), Some("образование"));
    // "круто" switched the mood and nothing switched it back
    assert_eq!(ctx.mood, Mood::Enthusiastic);
}

#[test]
fn unrelated_short_turns_produce_independent_messages() {
    let mut engine = ResponseEngine::with_seed(9);
    let mut ctx = ChatContext::new();
    let mut transcript = Transcript::new();

    for input in ["ок", "хм"] {
        transcript.push_visitor(input);
        let reply = engine.respond(input, &mut ctx);
        transcript.push_assistant(reply);
    }

    assert_eq!(transcript.len(), 4);
    assert_ne!(transcript.messages()[1].id, transcript.messages()[3].id);
    assert_eq!(ctx.message_count, 2);
    // No topics from short messages
    assert!(ctx.topics.is_empty());
}

#[test]
fn topics_never_shrink_across_a_long_session() {
    let mut engine = ResponseEngine::with_seed(31);
    let mut ctx = ChatContext::new();

    let inputs = [
        "навыки",
        "опыт",
        "образование",
        "навыки",
        "какая-то бессмыслица без темы",
        "контакты",
        "опыт",
    ];

    let mut prev = (0, 0, 0);
    for input in inputs {
        engine.respond(input, &mut ctx);
        let now = (ctx.topics.len(), ctx.companies.len(), ctx.technologies.len());
        assert!(now.0 >= prev.0 && now.1 >= prev.1 && now.2 >= prev.2);
        prev = now;
    }
    assert_eq!(
        ctx.topics,
        vec!["навыки", "опыт работы", "образование", "контакты"]
    );
}
