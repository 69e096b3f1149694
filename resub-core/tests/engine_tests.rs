// resub-core/tests/engine_tests.rs
//! End-to-end behavior of the substitution engine: option layering, word
//! isolation, case preservation, backreferences, bypass spans, and the
//! precompiled/callback rule forms.

use regex::Regex;
use resub_core::{
    substitute, Replacement, ResubError, Sub, SubOptions, SubstitutionConfig, SubstitutionEngine,
};

fn config(subs: Vec<Sub>) -> SubstitutionConfig {
    SubstitutionConfig {
        options: None,
        subs,
    }
}

fn run(text: &str, subs: Vec<Sub>) -> String {
    substitute(text, &config(subs)).unwrap()
}

#[test]
fn matches_are_case_insensitive_by_default() {
    let out = run("See Spot run.", vec![Sub::new("spot", "rex")]);
    assert_eq!(out, "See Rex run.");
}

#[test]
fn case_sensitive_override_leaves_other_casings_alone() {
    let config = SubstitutionConfig {
        options: Some(SubOptions {
            case_sensitive: Some(true),
            ..Default::default()
        }),
        subs: vec![Sub::new("Spot", "Rex")],
    };
    assert_eq!(substitute("see spot run", &config).unwrap(), "see spot run");
    assert_eq!(substitute("see Spot run", &config).unwrap(), "see Rex run");
}

#[test]
fn isolated_word_does_not_match_inside_longer_words() {
    let out = run("a cat in a category", vec![Sub::new("cat", "dog")]);
    assert_eq!(out, "a dog in a category");
}

#[test]
fn substring_matching_when_isolation_is_off() {
    let sub = Sub::new("cat", "dog").with_options(SubOptions {
        isolated_word: Some(false),
        match_case: Some(false),
        ..Default::default()
    });
    let out = run("category", vec![sub]);
    assert_eq!(out, "dogegory");
}

#[test]
fn replacement_mirrors_all_caps() {
    let out = run("THE LION ROARS", vec![Sub::new("lion", "tiger")]);
    assert_eq!(out, "THE TIGER ROARS");
}

#[test]
fn replacement_mirrors_leading_capital() {
    let out = run("Lion tamer", vec![Sub::new("lion", "tiger")]);
    assert_eq!(out, "Tiger tamer");
}

#[test]
fn replacement_mirrors_lower_case() {
    let out = run("a lion cub", vec![Sub::new("lion", "Tiger")]);
    assert_eq!(out, "a tiger cub");
}

#[test]
fn match_case_off_uses_the_template_as_written() {
    let sub = Sub::new("lion", "Tiger").with_options(SubOptions {
        match_case: Some(false),
        ..Default::default()
    });
    let out = run("LION lion Lion", vec![sub]);
    assert_eq!(out, "Tiger Tiger Tiger");
}

#[test]
fn backreference_expansion_grows_with_the_capture() {
    let subs = vec![Sub::new("bo(o+)", "ho$2")];
    assert_eq!(run("boo", subs.clone()), "hoo");
    assert_eq!(run("boooo", subs), "hoooo");
}

#[test]
fn chained_backreference_rules_over_one_text() {
    let subs = vec![
        Sub::new("ghost", "owl"),
        Sub::new("bo(o+)", "ho$2"),
        Sub::new("2Pac-(.+?)-([0-9]{4})", "2Pac - $2 ($3)"),
    ];
    let out = run("the ghost says boo to 2Pac-Changes-1998", subs);
    assert_eq!(out, "the owl says hoo to 2Pac - Changes (1998)");
}

#[test]
fn rules_chain_in_submission_order() {
    let subs = vec![Sub::new("a", "b"), Sub::new("b", "c")];
    assert_eq!(run("a", subs), "c");
}

#[test]
fn bypass_span_wins_over_substitution() {
    let out = run(
        "talking |shit| and shit",
        vec![Sub::new("shit", "poop")],
    );
    assert_eq!(out, "talking shit and poop");
}

#[test]
fn bypass_protects_every_word_inside_a_span() {
    let out = run(
        "|leave shit alone in here| but not shit outside",
        vec![Sub::new("shit", "poop")],
    );
    assert_eq!(out, "leave shit alone in here but not poop outside");
}

#[test]
fn bypass_spans_survive_multiple_rules() {
    let subs = vec![
        Sub::new("shit", "poop"),
        Sub::new("shitty", "gross"),
        Sub::new("badger", "snake"),
    ];
    let out = run("|shit| shitty badger |badger|", subs);
    assert_eq!(out, "shit gross snake badger");
}

#[test]
fn custom_bypass_delimiter() {
    let config = SubstitutionConfig {
        options: Some(SubOptions {
            bypass: Some("`".to_string()),
            ..Default::default()
        }),
        subs: vec![Sub::new("spot", "rex")],
    };
    let out = substitute("`spot` and spot", &config).unwrap();
    assert_eq!(out, "spot and rex");
}

#[test]
fn lone_trailing_delimiter_stays_literal() {
    let out = run("spot| spot", vec![Sub::new("spot", "rex")]);
    assert_eq!(out, "rex| rex");
}

#[test]
fn invalid_bypass_is_rejected_before_substitution() {
    let config = SubstitutionConfig {
        options: Some(SubOptions {
            bypass: Some("||".to_string()),
            ..Default::default()
        }),
        subs: vec![Sub::new("spot", "rex")],
    };
    let err = substitute("spot", &config).unwrap_err();
    assert!(matches!(err, ResubError::Config(_)));
    assert!(err.to_string().contains("one-character string"));
}

#[test]
fn invalid_search_fragment_is_a_pattern_error() {
    let err = substitute("text", &config(vec![Sub::new("(open", "x")])).unwrap_err();
    assert!(matches!(err, ResubError::Pattern(_, _)));
}

#[test]
fn rule_options_override_global_options() {
    // Globals turn everything off; the rule turns it back on.
    let config = SubstitutionConfig {
        options: Some(SubOptions {
            case_sensitive: Some(true),
            match_case: Some(false),
            isolated_word: Some(false),
            ..Default::default()
        }),
        subs: vec![Sub::new("spot", "rex").with_options(SubOptions {
            case_sensitive: Some(false),
            match_case: Some(true),
            isolated_word: Some(true),
            ..Default::default()
        })],
    };
    let out = substitute("Spot spotless", &config).unwrap();
    assert_eq!(out, "Rex spotless");
}

#[test]
fn precompiled_pattern_runs_verbatim_first_match_only() {
    let subs = vec![Sub::new(Regex::new(r"\t").unwrap(), "  ")];
    let out = run("a\tb\tc", subs);
    assert_eq!(out, "a  b\tc");
}

#[test]
fn precompiled_pattern_uses_native_template_semantics() {
    let subs = vec![Sub::new(
        Regex::new(r"([a-z])([A-Z])").unwrap(),
        "${1}_${2}",
    )];
    let out = run("camelCase", subs);
    assert_eq!(out, "camel_Case");
}

#[test]
fn callback_replacement_is_used_verbatim() {
    let sub = Sub {
        search: Regex::new(r"([a-z])([A-Z])").unwrap().into(),
        replace: Replacement::callback(|caps| {
            format!("{}_{}", &caps[1], caps[2].to_lowercase())
        }),
        options: None,
    };
    let out = run("camelCase", vec![sub]);
    assert_eq!(out, "camel_case");
}

#[test]
fn callback_on_a_literal_term_sees_the_term_as_group_one() {
    let sub = Sub {
        search: "ninja".into(),
        replace: Replacement::callback(|caps| caps[1].to_uppercase()),
        options: None,
    };
    let out = run("a ninja and |ninja| two", vec![sub]);
    assert_eq!(out, "a NINJA and ninja two");
}

#[test]
fn word_boundaries_at_text_edges_and_punctuation() {
    let subs = || vec![Sub::new("ninja", "blarg")];
    assert_eq!(run("ninja at the start", subs()), "blarg at the start");
    assert_eq!(run("at the end a ninja", subs()), "at the end a blarg");
    assert_eq!(run("hidden (ninja) here", subs()), "hidden (blarg) here");
    assert_eq!(run("the ninja's blade", subs()), "the blarg's blade");
    assert_eq!(run("ninja, attack!", subs()), "blarg, attack!");
    assert_eq!(run("many ninjas here", subs()), "many ninjas here");
}

#[test]
fn engine_can_be_shared_across_threads() {
    let engine = SubstitutionEngine::new(&config(vec![Sub::new("lion", "tiger")])).unwrap();
    let engine = &engine;
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["a lion", "the LION", "no match"]
            .into_iter()
            .map(|text| scope.spawn(move || engine.substitute(text)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(outputs, vec!["a tiger", "the TIGER", "no match"]);
}
