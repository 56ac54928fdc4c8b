//! tests/api/job.rs
use crate::helpers::{settings_for, store_in_tempdir, text_row};
use claims::{assert_matches, assert_some_eq};
use rowtally::error::JobError;
use rowtally::job::{CountJob, JobOptions, SinkTarget};
use rowtally::row::{Row, Scan};
use rowtally::sinks::{COUNT_FAMILY, COUNT_QUALIFIER};

fn table_job(input: &str, output: &str) -> JobOptions {
    JobOptions {
        input_table: input.to_string(),
        output: output.to_string(),
        extractor: "word-match".to_string(),
        sink: SinkTarget::Table,
    }
}

#[tokio::test]
async fn should_count_articles_into_the_destination_table() {
    let (dir, store) = store_in_tempdir();
    store
        .put_rows(
            "articles",
            &[
                text_row("doc-1", "Der Hund und die Katze"),
                text_row("doc-2", "das Haus"),
                text_row("doc-3", "die Sonne und die Wolke"),
            ],
        )
        .expect("Failed to seed input table");
    store
        .create_table("counts")
        .expect("Failed to create destination table");

    let report = CountJob::run(&table_job("articles", "counts"), &settings_for(dir.path(), 4))
        .await
        .expect("Failed to run job");

    assert_eq!(report.counters.rows, 3);
    assert_eq!(report.counters.valid, 3);
    assert_eq!(report.counters.error, 0);
    assert_eq!(report.distinct_keys, 3);

    let rows = store
        .scan("counts", &Scan::new())
        .expect("Failed to scan destination table");
    let value_of = |key: &str| {
        rows.iter()
            .find(|row| row.key() == key)
            .and_then(|row| row.value(COUNT_FAMILY, COUNT_QUALIFIER))
    };
    assert_some_eq!(value_of("DER"), b"1".as_slice());
    assert_some_eq!(value_of("DIE"), b"3".as_slice());
    assert_some_eq!(value_of("DAS"), b"1".as_slice());
}

#[tokio::test]
async fn should_count_key_prefixes_into_a_text_file() {
    let (dir, store) = store_in_tempdir();
    store
        .put_rows(
            "inventory",
            &[
                Row::new("apple123"),
                Row::new("avocado7"),
                Row::new("Banana7"),
            ],
        )
        .expect("Failed to seed input table");

    let output_path = dir.path().join("out").join("part-r-00000");
    let options = JobOptions {
        input_table: "inventory".to_string(),
        output: output_path.to_string_lossy().into_owned(),
        extractor: "key-prefix".to_string(),
        sink: SinkTarget::Text,
    };

    let report = CountJob::run(&options, &settings_for(dir.path(), 2))
        .await
        .expect("Failed to run job");

    assert_eq!(report.counters.rows, 3);
    assert_eq!(report.counters.valid, 3);

    let contents = std::fs::read_to_string(&output_path).expect("Failed to read output file");
    assert_eq!(contents, "B\t1\na\t2\n");
}

#[tokio::test]
async fn error_rows_do_not_abort_the_job() {
    let (dir, store) = store_in_tempdir();
    store
        .put_rows(
            "articles",
            &[
                text_row("doc-1", "der Hund"),
                Row::new("doc-2").with_cell("meta", "lang", "de"),
                text_row("doc-3", "die Katze"),
            ],
        )
        .expect("Failed to seed input table");
    store
        .create_table("counts")
        .expect("Failed to create destination table");

    let report = CountJob::run(&table_job("articles", "counts"), &settings_for(dir.path(), 1))
        .await
        .expect("Failed to run job");

    assert_eq!(report.counters.rows, 3);
    assert_eq!(report.counters.valid, 2);
    assert_eq!(report.counters.error, 1);
    assert!(report.counters.is_consistent());

    let rows = store
        .scan("counts", &Scan::new())
        .expect("Failed to scan destination table");
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn unknown_extractors_are_a_configuration_error() {
    let (dir, store) = store_in_tempdir();
    store
        .put_rows("articles", &[text_row("doc-1", "der Hund")])
        .expect("Failed to seed input table");
    store
        .create_table("counts")
        .expect("Failed to create destination table");

    let mut options = table_job("articles", "counts");
    options.extractor = "letter-count".to_string();

    let err = CountJob::run(&options, &settings_for(dir.path(), 1))
        .await
        .expect_err("An unknown extractor must fail the job");
    assert_matches!(err, JobError::Configuration(_));
}

#[tokio::test]
async fn a_missing_input_table_is_a_configuration_error() {
    let (dir, _store) = store_in_tempdir();

    let err = CountJob::run(&table_job("articles", "counts"), &settings_for(dir.path(), 1))
        .await
        .expect_err("A missing input table must fail the job");
    assert_matches!(err, JobError::Configuration(_));
}

#[tokio::test]
async fn a_missing_destination_table_is_a_configuration_error() {
    let (dir, store) = store_in_tempdir();
    store
        .put_rows("articles", &[text_row("doc-1", "der Hund")])
        .expect("Failed to seed input table");

    let err = CountJob::run(&table_job("articles", "counts"), &settings_for(dir.path(), 1))
        .await
        .expect_err("A missing destination table must fail the job");
    assert_matches!(err, JobError::Configuration(_));
}
