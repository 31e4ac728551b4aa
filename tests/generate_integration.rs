//! End-to-end tests for `appagenda generate` and `appagenda validate`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MAIN_SCHEDULE: &str = r#"
days:
  - date: 2019-06-02
    contents:
      - session:
          type: tutorial
          title: Morning Tutorials
          items:
            - {type: tutorial, id: T1-tutorial, start: "9:00", end: "12:30", location: Room 1}
            - {type: tutorial, id: T2-tutorial, location: Room 2}
  - date: 2019-06-03
    contents:
      - session:
          type: plenary
          title: "Keynote 1: Arguing Machines"
          start: "9:00"
          end: "10:00"
          location: Grand Ballroom
      - session_group:
          start: "10:30"
          end: "12:00"
          sessions:
            - type: paper
              id: 1A
              title: Cognitive
              chair: Jane Doe
              location: Room 1
              items:
                - {type: paper, id: "12", start: "10:30", end: "10:45"}
                - {type: paper, id: "40-tacl", start: "10:45", end: "11:00"}
            - type: poster
              id: 1B
              title: Posters
              location: Hall
              items:
                - {type: poster, id: "7-demos"}
"#;

const METADATA: &str = r#"
- {id: T1-tutorial, event: main, title: Deep Learning Basics, authors: [Dan Wu]}
- {id: T2-tutorial, event: main, title: Parsing Tutorial, authors: [Eve Ng, Dan Wu]}
- {id: "12", event: main, title: Cognitive Parsing, authors: [Alice Smith, Bob Lee], abstract: We parse., video_url: "https://v/12"}
- {id: "40-tacl", event: main, title: TACL Journal Paper, authors: [Bob Lee]}
- {id: "7-demos", event: main, title: A Demo, authors: [Cara Diaz]}
"#;

const PLENARY: &str = "session\tabstract\tperson\tperson_affiliation\tperson_url\tpdf_url\tvideo_url\n\
Keynote 1\tMachines that argue.\tKate Smith\tUniv\t\t\t\n";

const ROSTER: &str = "Professional Name,Email,Affiliation\n\
Bob Lee,bob@x.org,Univ\n\
Zoe Park,zoe@y.org,Lab\n\
Zoe Park,zoe@y.org,Lab\n";

const CONFIG: &str = r#"
events:
  - {name: main, schedule: main.yaml}
metadata_files: [metadata.yaml]
plenary_info_file: plenary.tsv
attendees_file: attendees.csv
extra_rows:
  - {date: 2019-06-03, start: "12:00", end: "13:30", title: Lunch on your own}
"#;

fn write_fixture(dir: &Path) {
    fs::write(dir.join("main.yaml"), MAIN_SCHEDULE).unwrap();
    fs::write(dir.join("metadata.yaml"), METADATA).unwrap();
    fs::write(dir.join("plenary.tsv"), PLENARY).unwrap();
    fs::write(dir.join("attendees.csv"), ROSTER).unwrap();
    fs::write(dir.join("appagenda.yaml"), CONFIG).unwrap();
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_generate_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("appagenda").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["generate", "appagenda.yaml", "--video-links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 9 agenda row(s)"));

    let rows = read_csv(&temp_dir.path().join("agenda.csv"));
    assert!(rows.iter().all(|r| r.len() == 10));

    let summary: Vec<(&str, &str, &str, &str, &str)> = rows
        .iter()
        .map(|r| {
            (
                r[0].as_str(),
                r[1].as_str(),
                r[2].as_str(),
                r[4].as_str(),
                r[9].as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("06/02/2019", "9:00", "12:30", "Deep Learning Basics", "Session"),
            ("06/02/2019", "9:00", "12:30", "Parsing Tutorial", "Session"),
            ("06/03/2019", "9:00", "10:00", "Keynote 1: Arguing Machines", "Session"),
            ("06/03/2019", "10:30", "12:00", "1A: Cognitive", "Session"),
            ("06/03/2019", "10:30", "10:45", "Cognitive Parsing", "Sub"),
            ("06/03/2019", "10:45", "11:00", "TACL Journal Paper", "Sub"),
            ("06/03/2019", "10:30", "12:00", "1B: Posters", "Session"),
            ("06/03/2019", "10:30", "12:00", "A Demo", "Sub"),
            ("06/03/2019", "12:00", "13:30", "Lunch on your own", "Session"),
        ]
    );

    // tracks, location, description and authors columns
    assert_eq!(rows[0][3], "Tutorial");
    assert_eq!(rows[1][5], "Room 2");
    assert_eq!(rows[2][6], "<p>Machines that argue.</p>");
    assert_eq!(rows[2][7], "Kate Smith");
    assert_eq!(rows[3][3], "Research; TACL");
    assert_eq!(rows[3][6], "Chair: Jane Doe");
    assert_eq!(
        rows[4][6],
        "<p>We parse.</p> [<a href=\"https://v/12\">VIDEO</a>]"
    );
    assert_eq!(rows[4][7], "Alice Smith; Bob Lee");
    assert_eq!(rows[6][3], "Research; Demos");
    assert_eq!(rows[7][3], "Demos");
    assert_eq!(rows[8][3], "");

    let speakers = read_csv(&temp_dir.path().join("speakers.csv"));
    assert_eq!(
        speakers,
        vec![
            vec!["Alice Smith", "", ""],
            vec!["Bob Lee", "bob@x.org", "Univ"],
            vec!["Cara Diaz", "", ""],
            vec!["Dan Wu", "", ""],
            vec!["Eve Ng", "", ""],
            vec!["Kate Smith", "", ""],
        ]
    );

    let non_speakers = read_csv(&temp_dir.path().join("non_speakers.csv"));
    assert_eq!(non_speakers, vec![vec!["Zoe Park", "zoe@y.org", "Lab"]]);
}

#[test]
fn test_generate_custom_output_paths() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    fs::create_dir(temp_dir.path().join("out")).unwrap();

    let mut cmd = Command::cargo_bin("appagenda").unwrap();
    cmd.current_dir(&temp_dir)
        .args([
            "generate",
            "appagenda.yaml",
            "--agenda-out",
            "out/a.csv",
            "--speakers-out",
            "out/s.csv",
            "--attendees-out",
            "out/n.csv",
        ])
        .assert()
        .success();

    for name in ["a.csv", "s.csv", "n.csv"] {
        assert!(temp_dir.path().join("out").join(name).exists(), "{name}");
    }
    assert!(!temp_dir.path().join("agenda.csv").exists());
}

#[test]
fn test_generate_reports_invalid_rows_but_still_writes() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    // an item whose metadata is missing produces a row without a title
    fs::write(
        temp_dir.path().join("main.yaml"),
        MAIN_SCHEDULE.replace("id: \"12\"", "id: \"999\""),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("appagenda").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["generate", "appagenda.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing required fields: [30]"));

    let rows = read_csv(&temp_dir.path().join("agenda.csv"));
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[4][4], "");
}

#[test]
fn test_validate_command_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());

    let mut cmd = Command::cargo_bin("appagenda").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["validate", "appagenda.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 9 row(s) have the required fields"));

    assert!(!temp_dir.path().join("agenda.csv").exists());
}

#[test]
fn test_generate_without_roster() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    fs::write(
        temp_dir.path().join("appagenda.yaml"),
        CONFIG.replace("attendees_file: attendees.csv\n", ""),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("appagenda").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["generate", "appagenda.yaml"])
        .assert()
        .success();

    let speakers = read_csv(&temp_dir.path().join("speakers.csv"));
    assert_eq!(speakers.len(), 6);
    assert!(speakers.iter().all(|r| r[1].is_empty() && r[2].is_empty()));
    assert!(read_csv(&temp_dir.path().join("non_speakers.csv")).is_empty());
}
