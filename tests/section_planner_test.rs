use scriptorium::application::services::plan_sections;

const QUESTION: &str = "Discuss the impact of monetary policy on inflation.";

#[test]
fn given_4000_word_target_when_planning_then_yields_nine_sections_in_order() {
    let plan = plan_sections(QUESTION, 4000);

    let titles: Vec<&str> = plan.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Introduction",
            "Background and Context",
            "Main Arguments and Analysis",
            "Case Studies and Examples",
            "Critical Evaluation",
            "Additional Analysis 1",
            "Additional Analysis 2",
            "Additional Analysis 3",
            "Conclusion",
        ]
    );
}

#[test]
fn given_small_target_when_planning_then_single_body_section_is_main_content() {
    let plan = plan_sections(QUESTION, 1000);

    let titles: Vec<&str> = plan.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Introduction", "Main Content", "Conclusion"]);
}

#[test]
fn given_two_body_sections_when_planning_then_uses_analysis_and_evaluation_titles() {
    // 1500 total leaves 800 body words, which splits into two sections
    // at the 400-word minimum body target.
    let plan = plan_sections(QUESTION, 1500);

    let titles: Vec<&str> = plan.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Introduction",
            "Main Analysis",
            "Critical Evaluation",
            "Conclusion",
        ]
    );
}

#[test]
fn given_any_plan_when_inspecting_frame_sections_then_each_budgets_350_words() {
    let plan = plan_sections(QUESTION, 4000);

    assert_eq!(plan.first().unwrap().target_words, 350);
    assert_eq!(plan.last().unwrap().target_words, 350);
}

#[test]
fn given_body_sections_when_inspecting_budgets_then_words_split_evenly() {
    let plan = plan_sections(QUESTION, 4000);

    // 4000 - 700 frame words = 3300 body words over 7 sections.
    let body = &plan[1..plan.len() - 1];
    assert_eq!(body.len(), 7);
    for section in body {
        assert_eq!(section.target_words, 3300 / 7);
    }
}

#[test]
fn given_zero_target_when_planning_then_structure_still_complete() {
    let plan = plan_sections(QUESTION, 0);

    assert_eq!(plan.len(), 3);
    assert_eq!(plan[1].title, "Main Content");
    assert_eq!(plan[1].target_words, 0);
}

#[test]
fn given_any_section_when_inspecting_prompt_then_question_and_budget_are_embedded() {
    let plan = plan_sections(QUESTION, 2000);

    for section in &plan {
        assert!(section.prompt.contains(QUESTION));
        assert!(section.prompt.contains(&section.target_words.to_string()));
        assert!(section.prompt.contains("references"));
    }
}
