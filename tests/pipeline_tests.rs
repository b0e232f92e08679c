use tahlil::config::subsystems::{AnalysisConfig, ParserConfig};
use tahlil::{
    ArabicParser, Error, FallbackPolicy, NormalizationPolicy, Pipeline, StemVariant,
    TahlilConfig, TextParser,
};

const SAMPLE: &str = "تلتزم الشركة بحماية بيانات العملاء وفق السياسات واللوائح المعمول بها. \
يجب على الجهة المسؤولة تطبيق ضوابط أمن المعلومات والالتزام بأفضل الممارسات. \
تواصل معنا على privacy@example.com بتاريخ 2025-09-09. عدد الموظفين 120.";

const REPEATED: &str = "حماية البيانات الشخصية واجب. حماية البيانات مسؤولية الجميع. \
نلتزم بحماية البيانات دائما.";

fn pipeline(variant: StemVariant) -> Pipeline {
    let mut config = TahlilConfig::default();
    config.analysis.stem_variant = variant;
    Pipeline::from_config(&config).unwrap()
}

fn words<T: AsRef<str>>(items: &[T]) -> Vec<&str> {
    items.iter().map(|t| t.as_ref()).collect()
}

#[test]
fn test_stopwords_and_short_tokens_are_removed() {
    let pipeline = pipeline(StemVariant::None);
    let text = "هذا النص يحتوي على أرقام مثل 123 وتاريخ 2023-01-01";

    let kept = pipeline.clean_tokens(text).unwrap();
    assert_eq!(words(&kept), vec!["النص", "يحتوي", "ارقام", "مثل", "وتاريخ"]);

    let report = pipeline.analyze(text).unwrap();
    assert_eq!(report.counts.tokens_before_filter, 7);
    assert_eq!(report.counts.tokens_after_filter, 5);
    assert_eq!(report.counts.stem_count, 5);
    assert_eq!(report.extracted.dates, vec!["2023-01-01"]);
    assert_eq!(report.extracted.numbers, vec!["123"]);
    assert!(report.extracted.emails.is_empty());
    assert!(report.stem_examples.is_empty());
}

#[test]
fn test_sample_paragraph_with_root_stemmer() {
    let report = pipeline(StemVariant::Aggressive).analyze(SAMPLE).unwrap();

    assert_eq!(report.counts.tokens_before_filter, 27);
    assert_eq!(report.counts.tokens_after_filter, 24);
    assert_eq!(report.counts.stem_count, 24);
    assert_eq!(report.stem_variant, StemVariant::Aggressive);

    // تلتزم and والالتزام share a root
    assert_eq!(report.top_tokens[0].token, "لزم");
    assert_eq!(report.top_tokens[0].count, 2);
    assert_eq!(report.top_tokens[1].token, "شرك");
    assert_eq!(report.top_tokens.len(), 20);

    assert_eq!(report.extracted.emails, vec!["privacy@example.com"]);
    assert_eq!(report.extracted.dates, vec!["2025-09-09"]);
    assert_eq!(report.extracted.numbers, vec!["120"]);

    let examples: Vec<(&str, &str)> = report
        .stem_examples
        .iter()
        .map(|e| (e.original.as_str(), e.stemmed.as_str()))
        .collect();
    assert_eq!(
        examples,
        vec![
            ("تلتزم", "لزم"),
            ("الشركه", "شرك"),
            // no template fits, so the default fallback leaves it whole
            ("بحمايه", "بحمايه"),
            ("بيانات", "بين"),
            ("العملاء", "عملاء"),
        ]
    );

    // every pair occurs once, below the default min_freq of 2
    assert!(report.collocations.is_empty());
}

#[test]
fn test_collocations_over_surface_forms_and_roots() {
    let report = pipeline(StemVariant::None).analyze(REPEATED).unwrap();
    assert_eq!(report.collocations.len(), 1);
    let top = &report.collocations[0];
    assert_eq!((top.first.as_str(), top.second.as_str()), ("حمايه", "البيانات"));
    assert_eq!(top.count, 2);
    // P(pair) = 2/11, P(حمايه) = 2/12, P(البيانات) = 3/12
    let expected = ((2.0_f64 / 11.0) / ((2.0 / 12.0) * (3.0 / 12.0))).log2();
    assert!((top.pmi - expected).abs() < 1e-9);

    let rooted = pipeline(StemVariant::Aggressive).analyze(REPEATED).unwrap();
    let top = &rooted.collocations[0];
    assert_eq!((top.first.as_str(), top.second.as_str()), ("حمي", "بين"));
    assert_eq!(rooted.top_tokens[0].token, "بين");
    assert_eq!(rooted.top_tokens[0].count, 3);
}

#[test]
fn test_lower_min_freq_is_a_superset() {
    let mut strict = AnalysisConfig::default();
    strict.min_bigram_freq = 2;
    strict.stem_variant = StemVariant::None;
    let mut loose = strict.clone();
    loose.min_bigram_freq = 1;
    loose.max_collocations = 100;

    let parser = ArabicParser::new_with_defaults().unwrap();
    let strict = Pipeline::new(parser.clone(), strict).unwrap().analyze(REPEATED).unwrap();
    let loose = Pipeline::new(parser, loose).unwrap().analyze(REPEATED).unwrap();

    assert!(loose.collocations.len() > strict.collocations.len());
    for s in &strict.collocations {
        assert!(loose
            .collocations
            .iter()
            .any(|l| l.first == s.first && l.second == s.second));
    }
}

#[test]
fn test_collocations_are_capped() {
    let mut config = TahlilConfig::default();
    config.analysis.stem_variant = StemVariant::None;
    config.analysis.min_bigram_freq = 1;
    config.analysis.max_collocations = 3;
    let report = Pipeline::from_config(&config).unwrap().analyze(REPEATED).unwrap();
    assert_eq!(report.collocations.len(), 3);
}

#[test]
fn test_keep_ta_marbuta_with_extra_stopwords() {
    let mut config = TahlilConfig::default();
    config.parser.keep_ta_marbuta = true;
    config.parser.extra_stopwords = vec!["حماية".to_string(), "الشخصيه".to_string()];
    config.analysis.stem_variant = StemVariant::None;
    let pipeline = Pipeline::from_config(&config).unwrap();

    let kept = pipeline.clean_tokens(REPEATED).unwrap();
    // "حماية" is caught in its ta-marbuta form; "الشخصيه" (haa) never matches
    // "الشخصية" under this policy
    assert_eq!(
        words(&kept),
        vec![
            "البيانات", "الشخصية", "واجب", "البيانات", "مسوولية",
            "الجميع", "نلتزم", "بحماية", "البيانات", "دايما",
        ]
    );
    assert_eq!(pipeline.parser().policy(), NormalizationPolicy::new(true));
}

#[test]
fn test_policies_coexist_and_do_not_mix() {
    let fold = ArabicParser::new(&ParserConfig::default()).unwrap();
    let keep = ArabicParser::new(&ParserConfig {
        keep_ta_marbuta: true,
        ..ParserConfig::default()
    })
    .unwrap();

    let folded = fold.tokenize_text("مدرسة جميلة");
    assert_eq!(words(&folded), vec!["مدرسه", "جميله"]);
    assert_eq!(words(&keep.tokenize_text("مدرسة جميلة")), vec!["مدرسة", "جميلة"]);

    let err = keep.remove_stopwords(folded).unwrap_err();
    assert!(matches!(Error::from(err), Error::PolicyMismatch(_)));
}

#[test]
fn test_empty_and_whitespace_input() {
    for variant in [StemVariant::Aggressive, StemVariant::Light, StemVariant::None] {
        for text in ["", "   \n\t  "] {
            let report = pipeline(variant).analyze(text).unwrap();
            assert_eq!(report.counts.tokens_before_filter, 0);
            assert_eq!(report.counts.tokens_after_filter, 0);
            assert!(report.top_tokens.is_empty());
            assert!(report.collocations.is_empty());
            assert!(report.stem_examples.is_empty());
            assert!(report.extracted.numbers.is_empty());
        }
    }
}

#[test]
fn test_invalid_settings_are_rejected_before_running() {
    let parser = ArabicParser::new_with_defaults().unwrap();
    let tweaks: [fn(&mut AnalysisConfig); 3] = [
        |c| c.top_k = 0,
        |c| c.min_bigram_freq = 0,
        |c| c.max_collocations = 0,
    ];
    for tweak in tweaks {
        let mut settings = AnalysisConfig::default();
        tweak(&mut settings);
        assert!(matches!(
            Pipeline::new(parser.clone(), settings),
            Err(Error::Config(_))
        ));
    }

    let mut config = TahlilConfig::default();
    config.parser.min_token_len = 0;
    assert!(matches!(Pipeline::from_config(&config), Err(Error::Config(_))));
}

#[test]
fn test_batch_matches_sequential_runs() {
    let mut config = TahlilConfig::default();
    config.analysis.stem_fallback = FallbackPolicy::Truncate;
    let pipeline = Pipeline::from_config(&config).unwrap();

    let texts = [SAMPLE, REPEATED, "", "التاريخ 2024-05-01 والعدد 42"];
    let batch = pipeline.analyze_batch(&texts);
    assert_eq!(batch.len(), texts.len());
    for (text, result) in texts.iter().zip(batch) {
        assert_eq!(result.unwrap(), pipeline.analyze(text).unwrap());
    }
}

#[test]
fn test_report_serializes_to_json() {
    let report = pipeline(StemVariant::Light).analyze(REPEATED).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stem_variant"], "light");
    assert_eq!(json["counts"]["tokens_before_filter"], 12);
    assert!(json["collocations"].is_array());
}
