//! Tests for the public API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::{Entry, LineRecord};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const LONG_SENTENCE: &str = "Am muncit ani la rând fără să văd vreun rezultat, iar în fiecare \
                                 seară mă întrebam de ce viața mea nu se schimbă deloc, oricât \
                                 m-aș strădui să fac totul cum trebuie pentru familia mea.";

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window().min(), 118);
        assert_eq!(config.window().max(), 125);
        assert!(config.labels().is_label("HOOKS:"));
        assert!(config.labels().is_label("EMOTIONAL PROOF1"));
        assert_eq!(config.splitter().min_remainder, 50);
        assert_eq!(config.propagator().min_prefix, 40);
        assert_eq!(config.propagator().key_length, 5);
        assert_eq!(config.fitter_max_passes(), 10);
        assert!(config.propagate());
        assert!(!config.strip_header_sections());
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .window(20, 25)
            .labels(["A:", "B:"])
            .connectives(["DAR"])
            .min_remainder(10)
            .min_prefix(5)
            .key_length(3)
            .fallback_fraction(0.5)
            .fitter_max_passes(2)
            .propagate(false)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.window().to_string(), "20-25");
        assert!(config.labels().is_label("A: intro"));
        assert!(!config.labels().is_label("HOOKS:"));
        assert_eq!(config.splitter().connectives, vec!["dar"]);
        assert_eq!(config.splitter().fallback_fraction, 0.5);
        assert_eq!(config.fitter_max_passes(), 2);
        assert!(!config.propagate());
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_rejects_inverted_window() {
        let err = Config::builder().window(130, 120).build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("must not exceed maximum"));
    }

    #[test]
    fn test_config_rejects_zero_minimum() {
        assert!(Config::builder().window(0, 10).build().is_err());
    }

    #[test]
    fn test_config_rejects_empty_vocabulary() {
        let err = Config::builder()
            .labels(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("label vocabulary"));

        // Explicitly unlabeled input is fine.
        let config = Config::builder().without_labels().build().unwrap();
        assert!(config.labels().is_empty());
    }

    #[test]
    fn test_config_rejects_bad_tunables() {
        assert!(Config::builder().fallback_fraction(0.0).build().is_err());
        assert!(Config::builder().fallback_fraction(1.5).build().is_err());
        assert!(Config::builder().fitter_max_passes(0).build().is_err());
        assert!(Config::builder().key_length(0).build().is_err());
        assert!(Config::builder().label_patterns(["(unclosed"]).build().is_err());
    }

    #[test]
    fn test_label_patterns_extend_default_names() {
        let config = Config::builder()
            .label_patterns([r"^MIRROR\d{1,3}$"])
            .build()
            .unwrap();
        assert!(config.labels().is_label("MIRROR7"));
        assert!(config.labels().is_label("H1:"));
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml_str(
            r#"
            seed = 7

            [window]
            min = 60
            max = 70

            [labels]
            names = ["INTRO", "OUTRO"]
            patterns = ['^PART\d+$']

            [splitter]
            connectives = ["and", "but"]
            min_remainder = 20

            [propagator]
            enabled = false
            min_prefix = 15

            [input]
            strip_header_sections = true
            "#,
        )
        .unwrap();

        assert_eq!(config.window().min(), 60);
        assert_eq!(config.seed(), Some(7));
        assert!(config.labels().is_label("PART3"));
        assert!(config.labels().is_label("OUTRO"));
        assert_eq!(config.splitter().connectives, vec!["and", "but"]);
        assert!(!config.propagate());
        assert_eq!(config.propagator().min_prefix, 15);
        assert!(config.strip_header_sections());
    }

    #[test]
    fn test_config_toml_errors() {
        assert!(matches!(
            Config::from_toml_str("[window]\nmin = 'many'"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[windoww]\nmin = 1"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[window]\nmin = 10\nmax = 5"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_file_config_overrides_layer() {
        let file = ConfigFile::from_toml_str("[window]\nmin = 60\nmax = 70").unwrap();
        let config = file.into_builder().max_chars(80).build().unwrap();
        assert_eq!(config.window().min(), 60);
        assert_eq!(config.window().max(), 80);
    }

    #[test]
    fn test_processing_pipeline() {
        let processor = ScriptProcessor::new();
        let text = format!("HOOKS:\nH1:\n{LONG_SENTENCE}\nCTA1\nScurt final.");
        let output = processor.process(Input::from_text(text)).unwrap();

        let entries = output.document.entries();
        assert_eq!(entries[0], Entry::Label { text: "HOOKS:".into() });
        assert_eq!(entries[1], Entry::Label { text: "H1:".into() });
        assert!(entries[2].as_line().is_some());
        assert!(entries[3].as_line().is_some());
        assert_eq!(entries[4], Entry::Label { text: "CTA1".into() });
        assert!(entries[5].as_line().unwrap().text().starts_with("Scurt final."));
        assert_eq!(entries.len(), 6);

        assert_eq!(output.metadata.stats.labels, 3);
        assert_eq!(output.metadata.stats.lines, 3);
        assert_eq!(output.metadata.stats.blocks, 2);
        assert_eq!(output.report.split_sentences, 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = Config::builder().seed(99).build().unwrap();
        let processor = ScriptProcessor::with_config(config);

        let first = processor.process(Input::from_text(LONG_SENTENCE)).unwrap();
        let second = processor.process(Input::from_text(LONG_SENTENCE)).unwrap();
        assert_eq!(first.document, second.document);
        assert_eq!(first.metadata.seed, 99);
    }

    #[test]
    fn test_injected_rng() {
        let processor = ScriptProcessor::new();
        let mut a = SmallRng::seed_from_u64(5);
        let mut b = SmallRng::seed_from_u64(5);
        let first = processor
            .process_with_rng(Input::from_text("Un text scurt."), &mut a)
            .unwrap();
        let second = processor
            .process_with_rng(Input::from_text("Un text scurt."), &mut b)
            .unwrap();
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn test_under_length_is_reported_not_fatal() {
        let config = Config::builder().window(10, 12).build().unwrap();
        let processor = ScriptProcessor::with_config(config);
        let output = processor.process(Input::from_text("Salut.")).unwrap();

        assert_eq!(
            output.document.lines().collect::<Vec<_>>(),
            vec![&LineRecord::plain("Salut.")]
        );
        assert_eq!(output.report.under_length_count(), 1);
        assert_eq!(output.report.out_of_window(), vec![(0, 6)]);
        assert!(!output.report.is_clean());
    }

    #[test]
    fn test_empty_input_produces_empty_document() {
        let output = ScriptProcessor::new()
            .process(Input::from_text("\n  \n"))
            .unwrap();
        assert!(output.document.is_empty());
        assert!(output.report.is_clean());
        assert_eq!(output.metadata.stats.avg_line_length, 0.0);
    }

    #[test]
    fn test_process_block_and_propagate() {
        let processor = ScriptProcessor::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut report = crate::ProcessingReport::new(processor.config().window());
        let lines = processor.process_block(LONG_SENTENCE, &mut rng, &mut report);
        assert_eq!(lines.len(), 2);

        let mut document = crate::Document::new();
        document.extend_lines(lines);
        let added = processor.propagate_overlap(&mut document, &mut report);
        assert!(added <= 1);
        assert_eq!(report.propagated_highlights, added);
    }
}
