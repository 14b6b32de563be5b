use assert_cmd::Command;
use predicates::prelude::*;

fn reslib() -> Command {
    Command::cargo_bin("reslib").unwrap()
}

#[test]
fn bare_invocation_lists_the_whole_catalog() {
    reslib()
        .assert()
        .success()
        .stdout(predicates::str::contains("[WHITE PAPER]"))
        .stdout(predicates::str::contains("[INFOGRAPHIC]"))
        .stdout(predicates::str::contains("[VIDEO]"))
        .stdout(predicates::str::contains(
            "Understanding and Mitigating MCP Ecosystem Risks",
        ));
}

#[test]
fn type_filter_narrows_to_videos() {
    reslib()
        .arg("list")
        .args(["--type", "Videos"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Watch now"))
        .stdout(predicates::str::contains("[WHITE PAPER]").not());
}

#[test]
fn type_and_tag_filters_compose() {
    reslib()
        .arg("list")
        .args(["--type", "White Papers", "--tag", "Security"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Understanding and Mitigating MCP Ecosystem Risks",
        ))
        .stdout(predicates::str::contains("IDC MCP Security Paper").not());
}

#[test]
fn search_is_case_insensitive() {
    reslib()
        .arg("list")
        .args(["--search", "AGENTIC"])
        .assert()
        .success()
        .stdout(predicates::str::contains("The Future of Agentic Apps"))
        .stdout(predicates::str::contains("IDC MCP Security Paper"));
}

#[test]
fn unmatched_year_renders_the_empty_state() {
    reslib()
        .arg("list")
        .args(["--year", "2022"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No resources found."))
        .stdout(predicates::str::contains("Try adjusting your filters."));
}

#[test]
fn json_output_is_parseable_and_filtered() {
    let output = reslib()
        .arg("list")
        .args(["--type", "Infographics", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "Infographic");
    assert_eq!(items[0]["id"], "2");
}

#[test]
fn unknown_sort_key_falls_back_to_catalog_order() {
    let relevance = reslib().arg("list").output().unwrap().stdout;
    let bogus = reslib()
        .arg("list")
        .args(["--sort", "bogus"])
        .output()
        .unwrap()
        .stdout;
    assert_eq!(relevance, bogus);
}

#[test]
fn filters_command_shows_computed_counts() {
    reslib()
        .arg("filters")
        .assert()
        .success()
        .stdout(predicates::str::contains("White Papers (2)"))
        .stdout(predicates::str::contains("Docker MCP (4)"))
        .stdout(predicates::str::contains("Security (3)"))
        .stdout(predicates::str::contains("2024"));
}

#[test]
fn show_renders_a_single_card() {
    reslib()
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("IDC MCP Security Paper"))
        .stdout(predicates::str::contains("Read now"));
}

#[test]
fn show_with_unknown_id_fails() {
    reslib()
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Resource not found: 99"));
}
