use insight::{
    construct_answer_prompt, construct_prompt, prompt::CORE_INSTRUCTION, ContextTag, DataSnapshot,
};
use serde_json::json;

fn known_tags() -> Vec<ContextTag> {
    vec![
        ContextTag::Dashboard,
        ContextTag::DashboardHyper,
        ContextTag::People,
        ContextTag::Finance,
        ContextTag::Tasks,
        ContextTag::Habits,
        ContextTag::Diary,
        ContextTag::Vision,
    ]
}

fn full_snapshot() -> DataSnapshot {
    DataSnapshot::from(json!({
        "settings": [{ "name": "Alex", "currency": "EUR" }],
        "diary": [{ "date": "2024-05-01", "mood": 4, "energy": 2, "entry": "Long day" }],
        "tasks": [{ "title": "Quarterly report", "priority": "high", "done": false }],
        "habits": [{ "name": "Meditate", "frequency": "daily" }],
        "habit_logs": [{ "habit": "Meditate", "date": "2024-05-01" }],
        "people": [{ "name": "Sam", "last_contact": "2024-03-10" }],
        "expenses": [{ "category": "Dining", "amount": 86.4 }],
        "budget": { "Dining": 60 },
        "vision": [{ "goal": "Run a marathon", "year": 2025 }]
    }))
}

#[test]
fn every_known_tag_has_core_and_context_instruction() {
    let data = full_snapshot();
    for tag in known_tags() {
        let prompt = construct_prompt(&tag, &data);
        assert!(prompt.starts_with(CORE_INSTRUCTION), "{tag}");
        assert!(prompt.contains(&*tag.brief().instruction), "{tag}");
    }
}

#[test]
fn core_instruction_mandates_two_sections_without_framing() {
    assert!(CORE_INSTRUCTION.contains("chief of staff"));
    assert!(CORE_INSTRUCTION.contains("### Analysis"));
    assert!(CORE_INSTRUCTION.contains("### Next Steps"));
    assert!(CORE_INSTRUCTION.contains("2-3"));
    assert!(CORE_INSTRUCTION.contains("Do not add a greeting"));
    assert!(
        CORE_INSTRUCTION.find("### Analysis").unwrap()
            < CORE_INSTRUCTION.find("### Next Steps").unwrap()
    );
}

#[test]
fn context_instructions_match_their_domain() {
    let cases = [
        (ContextTag::Dashboard, "mood and energy"),
        (ContextTag::DashboardHyper, "productivity"),
        (ContextTag::People, "relationships"),
        (ContextTag::Finance, "budget"),
        (ContextTag::Tasks, "urgency and importance"),
        (ContextTag::Habits, "streaks"),
        (ContextTag::Diary, "emotional wellbeing"),
        (ContextTag::Vision, "long-term goals"),
    ];
    for (tag, phrase) in cases {
        assert!(tag.brief().instruction.contains(phrase), "{tag}: {phrase}");
    }
}

#[test]
fn each_context_dumps_only_its_own_data() {
    let data = full_snapshot();
    let cases: [(ContextTag, &[&str], &[&str]); 7] = [
        (
            ContextTag::Dashboard,
            &["Alex", "Long day", "Quarterly report", "Meditate"],
            &["Sam", "Dining", "marathon"],
        ),
        (ContextTag::People, &["Sam"], &["Dining", "Quarterly report"]),
        (ContextTag::Finance, &["86.4", "\"Dining\": 60"], &["Sam", "Meditate"]),
        (ContextTag::Tasks, &["Quarterly report"], &["Dining", "Long day"]),
        (ContextTag::Habits, &["\"habit\": \"Meditate\""], &["Quarterly report"]),
        (ContextTag::Diary, &["Long day"], &["Quarterly report", "Sam"]),
        (ContextTag::Vision, &["Run a marathon"], &["Dining", "Sam"]),
    ];

    for (tag, present, absent) in cases {
        let prompt = construct_prompt(&tag, &data);
        for needle in present {
            assert!(prompt.contains(needle), "{tag} should contain {needle}");
        }
        for needle in absent {
            assert!(!prompt.contains(needle), "{tag} should not contain {needle}");
        }
    }
}

#[test]
fn unknown_tag_gets_general_analysis_of_whole_snapshot() {
    let data = DataSnapshot::from(json!({
        "workouts": [{ "exercise": "Squat", "weight": 100 }],
        "notes": [{ "title": "Ideas" }]
    }));
    let prompt = construct_prompt(&ContextTag::from("xyz"), &data);

    assert!(prompt.starts_with(CORE_INSTRUCTION));
    assert!(prompt.contains("Context: General Analysis of xyz"));
    assert!(prompt.contains(&serde_json::to_string_pretty(&data).unwrap()));
}

#[test]
fn construct_prompt_is_deterministic() {
    let data = full_snapshot();
    for tag in known_tags().into_iter().chain([ContextTag::from("gym")]) {
        assert_eq!(construct_prompt(&tag, &data), construct_prompt(&tag, &data.clone()));
    }
}

#[test]
fn empty_snapshot_renders_missing_fields_as_empty_objects() {
    let data = DataSnapshot::new();

    let finance = construct_prompt(&ContextTag::Finance, &data);
    assert!(finance.ends_with("expenses:\n{}\n\nbudget:\n{}"));

    let dashboard = construct_prompt(&ContextTag::Dashboard, &data);
    assert!(dashboard.ends_with("settings:\n{}\n\ndiary:\n{}\n\ntasks:\n{}\n\nhabits:\n{}"));

    let other = construct_prompt(&ContextTag::from("notes"), &data);
    assert!(other.ends_with("Data:\n{}"));

    for tag in known_tags() {
        let prompt = construct_prompt(&tag, &data);
        assert!(prompt.contains(":\n{}"), "{tag}");
    }
}

#[test]
fn answer_prompt_contains_finance_dump_and_question() {
    let data = DataSnapshot::new().with(
        "expenses",
        json!([
            { "category": "Groceries", "amount": 310 },
            { "category": "Travel", "amount": 120 }
        ]),
    );
    let prompt = construct_answer_prompt("What did I spend most on?", &ContextTag::Finance, &data);

    assert!(prompt.contains(&serde_json::to_string_pretty(data.get("expenses").unwrap()).unwrap()));
    assert!(prompt.contains("User Question: \"What did I spend most on?\""));
    assert!(prompt.contains("concisely"));
}
