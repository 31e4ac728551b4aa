//! Agenda generation pipeline
//!
//! Loads every input named by the run configuration, flattens each event's
//! schedule, appends the fixed rows, validates, applies name patches, classifies
//! attendees and writes the three output tables. Invalid rows are reported only
//! after the agenda has been written, since validation is advisory.

use crate::config::GenerateConfig;
use crate::core::agenda::{invalid_rows, AgendaFlattener, RenderOptions, Row};
use crate::core::attendees::{apply_name_patches, classify_attendees, AttendeePartition};
use crate::error::Result;
use crate::metadata::MetadataStore;
use crate::plenary::PlenaryInfo;
use crate::roster::load_roster;
use crate::schedule::load_schedule;
use crate::sink::{write_agenda_file, write_attendees_file};
use std::path::PathBuf;
use tracing::{error, info};

/// Output locations and per-run overrides
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub agenda_out: PathBuf,
    pub speakers_out: PathBuf,
    pub non_speakers_out: PathBuf,
    /// Force PDF links on regardless of the configuration
    pub pdf_links: bool,
    /// Force video links on regardless of the configuration
    pub video_links: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            agenda_out: PathBuf::from("agenda.csv"),
            speakers_out: PathBuf::from("speakers.csv"),
            non_speakers_out: PathBuf::from("non_speakers.csv"),
            pdf_links: false,
            video_links: false,
        }
    }
}

/// Summary of a generation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReport {
    pub rows: usize,
    /// Sink positions of rows missing required fields
    pub invalid_rows: Vec<usize>,
    pub speakers: usize,
    pub non_speakers: usize,
}

/// Rows for every configured event followed by the fixed extra rows
pub fn build_rows(config: &GenerateConfig, options: RenderOptions) -> Result<Vec<Row>> {
    let metadata = MetadataStore::from_files(&config.metadata_files)?;
    info!("Loaded {} metadata record(s)", metadata.len());

    let plenary = match &config.plenary_info_file {
        Some(path) => {
            info!("Parsing plenary info file {}", path.display());
            PlenaryInfo::from_file(path)?
        }
        None => PlenaryInfo::new(),
    };

    let tracks = config.track_config();
    let flattener = AgendaFlattener::new(&metadata, &plenary, &tracks).with_options(options);

    let mut rows = Vec::new();
    for event in &config.events {
        let tree = load_schedule(&event.schedule)
            .map_err(|e| e.with_context(format!("event '{}'", event.name)))?;
        let event_rows = flattener.flatten(&tree, &event.name);
        info!("Event '{}': {} row(s)", event.name, event_rows.len());
        rows.extend(event_rows);
    }

    rows.extend(config.extra_rows.iter().map(|fixed| fixed.to_row()));
    Ok(rows)
}

/// Render options from the configuration, with CLI overrides applied
pub fn render_options(config: &GenerateConfig, options: &GenerateOptions) -> RenderOptions {
    RenderOptions {
        pdf_links: config.pdf_links || options.pdf_links,
        video_links: config.video_links || options.video_links,
    }
}

/// Run the full pipeline and write all outputs
pub fn run_generate(config: &GenerateConfig, options: &GenerateOptions) -> Result<GenerateReport> {
    info!("Parsing schedules and converting to rows ...");
    let rows = build_rows(config, render_options(config, options))?;

    info!("Validating rows ...");
    let invalid = invalid_rows(&rows, config.first_data_row);

    let rows = apply_name_patches(rows, &config.name_patches);

    info!("Classifying attendees into speakers and non-speakers ...");
    let roster = match &config.attendees_file {
        Some(path) => Some(load_roster(path)?),
        None => None,
    };
    let AttendeePartition {
        speakers,
        non_speakers,
    } = classify_attendees(&rows, roster.as_deref());

    write_agenda_file(&options.agenda_out, &rows)?;
    write_attendees_file(&options.speakers_out, &speakers)?;

    if !invalid.is_empty() {
        error!(
            "The following rows in {} are missing required fields: {:?}",
            options.agenda_out.display(),
            invalid
        );
    }

    write_attendees_file(&options.non_speakers_out, &non_speakers)?;

    Ok(GenerateReport {
        rows: rows.len(),
        invalid_rows: invalid,
        speakers: speakers.len(),
        non_speakers: non_speakers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &TempDir) -> PathBuf {
        let root = dir.path();
        fs::write(
            root.join("main.yaml"),
            r#"
days:
  - date: 2019-06-04
    contents:
      - session:
          type: plenary
          title: "Keynote 1: Arguing Machines"
          start: "9:00"
          end: "10:00"
      - session:
          type: best_paper
          title: Best Papers
          items:
            - {type: paper, id: "1", start: "10:30", end: "10:50"}
            - {type: paper, id: "2-tacl", start: "10:50", end: "11:10"}
"#,
        )
        .unwrap();
        fs::write(
            root.join("ws1.yaml"),
            r#"
days:
  - date: 2019-06-06
    contents:
      - session:
          type: paper
          title: Workshop Session
          items:
            - {type: paper, id: "1"}
"#,
        )
        .unwrap();
        fs::write(
            root.join("metadata.yaml"),
            r#"
- {id: "1", event: main, title: BERT Post-Training, authors: [Hu Xu, Bing Liu]}
- {id: "2-tacl", event: main, title: TACL Paper, authors: [Bob Lee], pdf_url: "https://p/2"}
- {id: "1", event: ws1, title: Workshop Paper, authors: [Bob Lee]}
"#,
        )
        .unwrap();
        fs::write(
            root.join("plenary.tsv"),
            "session\tabstract\tperson\tperson_affiliation\tperson_url\tpdf_url\tvideo_url\n\
             Keynote 1\tArgue.\tKate Smith\tUniv\t\t\t\n",
        )
        .unwrap();
        fs::write(
            root.join("attendees.csv"),
            "Professional Name,Email,Affiliation\n\
             Bob Lee,bob@x.org,Univ\n\
             Bing Liu,bing@fb.com,Facebook\n\
             Zoe Park,zoe@y.org,Lab\n",
        )
        .unwrap();

        let config = root.join("appagenda.yaml");
        fs::write(
            &config,
            r#"
events:
  - {name: main, schedule: main.yaml}
  - {name: ws1, schedule: ws1.yaml}
metadata_files: [metadata.yaml]
plenary_info_file: plenary.tsv
attendees_file: attendees.csv
name_patches:
  - {title: BERT Post-Training, find: Bing Liu, replace: "Bing Liu*"}
extra_rows:
  - {date: 2019-06-06, start: "12:30", end: "14:00", title: Lunch on your own}
"#,
        )
        .unwrap();
        config
    }

    fn options_in(dir: &TempDir) -> GenerateOptions {
        GenerateOptions {
            agenda_out: dir.path().join("agenda.csv"),
            speakers_out: dir.path().join("speakers.csv"),
            non_speakers_out: dir.path().join("non_speakers.csv"),
            pdf_links: true,
            video_links: false,
        }
    }

    #[test]
    fn test_build_rows_concatenates_events_then_extras() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::new(write_inputs(&dir)).load().unwrap();

        let rows = build_rows(&config, RenderOptions::default()).unwrap();
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Keynote 1: Arguing Machines",
                "Best Papers",
                "BERT Post-Training",
                "TACL Paper",
                "Workshop Session",
                "Workshop Paper",
                "Lunch on your own",
            ]
        );
        assert_eq!(rows[0].authors, "Kate Smith");
        assert_eq!(rows[1].start_time, "10:30");
        assert_eq!(rows[1].end_time, "11:10");
        assert_eq!(rows[1].tracks, "Research; TACL");
        assert_eq!(rows[4].tracks, "ws1");
    }

    #[test]
    fn test_run_generate_writes_outputs() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::new(write_inputs(&dir)).load().unwrap();
        let options = options_in(&dir);

        let report = run_generate(&config, &options).unwrap();
        assert_eq!(report.rows, 7);
        // workshop session and its item have no times
        assert_eq!(report.invalid_rows, vec![30, 31]);

        let agenda = fs::read_to_string(&options.agenda_out).unwrap();
        assert!(agenda.contains("Hu Xu; Bing Liu*"));
        assert!(agenda.contains("[<a href=\"\"https://p/2\"\">PDF</a>]"));

        let speakers = fs::read_to_string(&options.speakers_out).unwrap();
        assert_eq!(
            speakers,
            "Professional Name,Email,Affiliation\n\
             Bing Liu*,,\n\
             Bob Lee,bob@x.org,Univ\n\
             Hu Xu,,\n\
             Kate Smith,,\n"
        );
        let non_speakers = fs::read_to_string(&options.non_speakers_out).unwrap();
        assert_eq!(
            non_speakers,
            "Professional Name,Email,Affiliation\n\
             Bing Liu,bing@fb.com,Facebook\n\
             Zoe Park,zoe@y.org,Lab\n"
        );
        assert_eq!(report.speakers, 4);
        assert_eq!(report.non_speakers, 2);
    }

    #[test]
    fn test_missing_schedule_names_event() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::parse(
            "events: [{name: ws9, schedule: nope.yaml}]",
            dir.path(),
        )
        .unwrap();
        let err = build_rows(&config, RenderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("event 'ws9'"));
    }

    #[test]
    fn test_cli_flags_only_enable_links() {
        let config = ConfigLoader::parse(
            "events: [{name: main, schedule: m.yaml}]\nvideo_links: true\n",
            std::path::Path::new("."),
        )
        .unwrap();
        let options = GenerateOptions {
            pdf_links: true,
            ..Default::default()
        };
        assert_eq!(
            render_options(&config, &options),
            RenderOptions {
                pdf_links: true,
                video_links: true,
            }
        );
    }
}
